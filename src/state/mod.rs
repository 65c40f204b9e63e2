// State module - Test state management
// Results, reports and collected failures of test runs

pub mod failure;
pub mod metrics;
pub mod report;
pub mod result;

pub use failure::{CollectedFailure, FailureSink};
pub use metrics::ExecutionMetrics;
pub use report::{Section, SectionFailure, SectionOutcome, TestReport};
pub use result::TestResult;

use serde::Serialize;

/// Test results storage
#[derive(Debug, Clone, Serialize)]
pub struct TestResults {
    total: usize,
    passed: usize,
    failed: usize,
    results: Vec<TestResult>,
    pub metrics: ExecutionMetrics,
}

impl Default for TestResults {
    fn default() -> Self {
        Self::new()
    }
}

impl TestResults {
    /// Create new test results
    pub fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
            metrics: ExecutionMetrics::default(),
        }
    }

    /// Add a test result
    pub fn add(&mut self, result: TestResult) {
        self.total += 1;

        match result.status {
            TestStatus::Pass => self.passed += 1,
            TestStatus::Fail => self.failed += 1,
        }

        self.results.push(result);
        self.metrics.update_time();
    }

    /// Get total tests
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get passed tests
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Get failed tests
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Get all results
    pub fn all(&self) -> &[TestResult] {
        &self.results
    }
}

/// Test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestStatus {
    Pass,
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_counts() {
        let mut results = TestResults::new();
        results.add(TestResult::pass("a", 10));
        results.add(TestResult::fail("b", "boom".to_string(), 20));
        results.add(TestResult::pass("c", 30));

        assert_eq!(results.total(), 3);
        assert_eq!(results.passed(), 2);
        assert_eq!(results.failed(), 1);
        assert_eq!(results.all()[1].name, "b");
        assert_eq!(results.all()[1].status, TestStatus::Fail);
    }

    #[test]
    fn test_empty_results_serialize() {
        let results = TestResults::default();
        assert_eq!(results.total(), 0);

        let value = serde_json::to_value(&results).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["failed"], 0);
        assert!(value.get("skipped").is_none());
    }
}
