use anyhow::Result;
use std::sync::Arc;

use super::TestRunWatcherInterceptor;
use crate::device::Screenshots;
use crate::state::Section;
use crate::testcases::TestInfo;

/// Captures a screenshot whenever a section fails.
///
/// Screenshot errors are logged and never reported as interceptor failures.
pub struct ScreenshotWatcherInterceptor {
    screenshots: Arc<dyn Screenshots>,
}

impl ScreenshotWatcherInterceptor {
    pub fn new(screenshots: Arc<dyn Screenshots>) -> Self {
        Self { screenshots }
    }

    fn capture(&self, test_info: &TestInfo, section: Section) {
        let tag = format!("{}_{}_failure", test_info.test_name(), section);
        self.screenshots.make_screenshot_if_possible(&tag);
    }
}

impl TestRunWatcherInterceptor for ScreenshotWatcherInterceptor {
    fn name(&self) -> &str {
        "ScreenshotWatcherInterceptor"
    }

    fn on_before_section_finished_failed(
        &self,
        test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.capture(test_info, Section::Before);
        Ok(())
    }

    fn on_main_section_finished_failed(
        &self,
        test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.capture(test_info, Section::Main);
        Ok(())
    }

    fn on_after_section_finished_failed(
        &self,
        test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        self.capture(test_info, Section::After);
        Ok(())
    }
}
