use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Immutable description of the test currently being executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestInfo {
    id: Uuid,
    test_name: String,
    test_case_name: String,
    started_at: DateTime<Utc>,
}

impl TestInfo {
    pub fn new(test_name: impl Into<String>, test_case_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            test_name: test_name.into(),
            test_case_name: test_case_name.into(),
            started_at: Utc::now(),
        }
    }

    /// Unique id of this run
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Name of the test case (or rule owner) the test belongs to
    pub fn test_case_name(&self) -> &str {
        &self.test_case_name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Milliseconds elapsed since the test started
    pub fn elapsed_ms(&self) -> u64 {
        (Utc::now() - self.started_at).num_milliseconds().max(0) as u64
    }
}

impl std::fmt::Display for TestInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.test_name == self.test_case_name {
            f.write_str(&self.test_name)
        } else {
            write!(f, "{}.{}", self.test_case_name, self.test_name)
        }
    }
}
