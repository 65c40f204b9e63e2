// Execution metrics

use chrono::Utc;
use serde::Serialize;

/// Execution metrics
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionMetrics {
    pub total_duration_ms: u64,
    pub start_time: i64,
    pub end_time: i64,
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self {
            total_duration_ms: 0,
            start_time: Utc::now().timestamp_millis(),
            end_time: 0,
        }
    }
}

impl ExecutionMetrics {
    /// Update execution time
    pub fn update_time(&mut self) {
        self.end_time = Utc::now().timestamp_millis();
        self.total_duration_ms = (self.end_time - self.start_time).max(0) as u64;
    }
}
