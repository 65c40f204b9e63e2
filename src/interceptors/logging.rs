use anyhow::Result;
use tracing::{error, info};

use super::TestRunWatcherInterceptor;
use crate::testcases::TestInfo;

/// Logs every lifecycle event of a test run
pub struct LoggingWatcherInterceptor {
    tag: String,
}

impl LoggingWatcherInterceptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl TestRunWatcherInterceptor for LoggingWatcherInterceptor {
    fn name(&self) -> &str {
        "LoggingWatcherInterceptor"
    }

    fn on_test_started(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] TEST STARTED: {} ({})", self.tag, test_info, test_info.id());
        Ok(())
    }

    fn on_before_section_started(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] BEFORE TEST SECTION: {}", self.tag, test_info);
        Ok(())
    }

    fn on_before_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] BEFORE TEST SECTION SUCCEEDED: {}", self.tag, test_info);
        Ok(())
    }

    fn on_before_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        error!(
            "[{}] BEFORE TEST SECTION FAILED: {}: {:#}",
            self.tag, test_info, error
        );
        Ok(())
    }

    fn on_main_section_started(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] MAIN TEST SECTION: {}", self.tag, test_info);
        Ok(())
    }

    fn on_main_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] MAIN TEST SECTION SUCCEEDED: {}", self.tag, test_info);
        Ok(())
    }

    fn on_main_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        error!(
            "[{}] MAIN TEST SECTION FAILED: {}: {:#}",
            self.tag, test_info, error
        );
        Ok(())
    }

    fn on_after_section_started(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] AFTER TEST SECTION: {}", self.tag, test_info);
        Ok(())
    }

    fn on_after_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        info!("[{}] AFTER TEST SECTION SUCCEEDED: {}", self.tag, test_info);
        Ok(())
    }

    fn on_after_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        error!(
            "[{}] AFTER TEST SECTION FAILED: {}: {:#}",
            self.tag, test_info, error
        );
        Ok(())
    }

    fn on_test_finished(&self, test_info: &TestInfo, success: bool) -> Result<()> {
        if success {
            info!(
                "[{}] TEST PASSED: {} in {}ms",
                self.tag,
                test_info,
                test_info.elapsed_ms()
            );
        } else {
            error!(
                "[{}] TEST FAILED: {} in {}ms",
                self.tag,
                test_info,
                test_info.elapsed_ms()
            );
        }
        Ok(())
    }
}
