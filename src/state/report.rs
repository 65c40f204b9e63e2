// Per-test report produced by the section runner

use serde::Serialize;
use std::fmt;

use crate::state::TestStatus;
use crate::testcases::TestInfo;

/// One of the three ordered sections of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Before,
    Main,
    After,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Before => "before",
            Section::Main => "main",
            Section::After => "after",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a section ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SectionOutcome {
    Passed,
    Failed(String),
    /// Not executed because an earlier section failed
    Skipped,
}

impl SectionOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SectionOutcome::Failed(_))
    }
}

/// A section body failure with its cause
#[derive(Debug)]
pub struct SectionFailure {
    pub section: Section,
    pub error: anyhow::Error,
}

impl fmt::Display for SectionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} section failed: {:#}", self.section, self.error)
    }
}

/// Summary of one test run
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    pub test_info: TestInfo,
    pub status: TestStatus,
    pub before: SectionOutcome,
    pub main: SectionOutcome,
    pub after: SectionOutcome,
    pub duration_ms: u64,
    /// Number of interceptor callbacks that failed during the run
    pub interceptor_failures: usize,
}

impl TestReport {
    pub fn outcome(&self, section: Section) -> &SectionOutcome {
        match section {
            Section::Before => &self.before,
            Section::Main => &self.main,
            Section::After => &self.after,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == TestStatus::Pass
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
