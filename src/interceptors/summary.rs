// Summary watcher - collects one result per finished test

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use super::TestRunWatcherInterceptor;
use crate::state::{Section, TestResult, TestResults};
use crate::testcases::TestInfo;

/// Records a [`TestResult`] for every test it observes.
///
/// Register one instance with [`crate::ConfiguratorBuilder::shared_watcher_interceptor`]
/// and keep the handle to read or export the results afterwards.
#[derive(Default)]
pub struct SummaryWatcherInterceptor {
    results: Mutex<TestResults>,
    // First section failure of each running test
    failures: Mutex<HashMap<Uuid, String>>,
}

impl SummaryWatcherInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected results
    pub fn results(&self) -> TestResults {
        lock(&self.results).clone()
    }

    /// Write the collected results as pretty JSON
    pub fn write_json(&self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path).with_context(|| {
            format!(
                "Failed to create JSON summary file: {}",
                output_path.display()
            )
        })?;

        serde_json::to_writer_pretty(file, &*lock(&self.results))
            .context("Failed to serialize test results to JSON")?;

        Ok(())
    }

    fn remember_failure(&self, test_info: &TestInfo, section: Section, error: &anyhow::Error) {
        lock(&self.failures)
            .entry(test_info.id())
            .or_insert_with(|| format!("{} section failed: {:#}", section, error));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TestRunWatcherInterceptor for SummaryWatcherInterceptor {
    fn name(&self) -> &str {
        "SummaryWatcherInterceptor"
    }

    fn on_before_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.remember_failure(test_info, Section::Before, error);
        Ok(())
    }

    fn on_main_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.remember_failure(test_info, Section::Main, error);
        Ok(())
    }

    fn on_after_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.remember_failure(test_info, Section::After, error);
        Ok(())
    }

    fn on_test_finished(&self, test_info: &TestInfo, success: bool) -> Result<()> {
        let failure = lock(&self.failures).remove(&test_info.id());
        let name = test_info.to_string();
        let duration_ms = test_info.elapsed_ms();

        let result = if success {
            TestResult::pass(name, duration_ms)
        } else {
            TestResult::fail(
                name,
                failure.unwrap_or_else(|| "test failed".to_string()),
                duration_ms,
            )
        };
        lock(&self.results).add(result);
        Ok(())
    }
}
