// Interceptors - observers of the test run lifecycle

pub mod composite;
pub mod logging;
pub mod screenshot;
pub mod summary;

pub use composite::TestRunCompositeWatcherInterceptor;
pub use logging::LoggingWatcherInterceptor;
pub use screenshot::ScreenshotWatcherInterceptor;
pub use summary::SummaryWatcherInterceptor;

use anyhow::Result;
use std::fmt;

use crate::testcases::TestInfo;

/// Watches the lifecycle of a single test run.
///
/// Every callback has a no-op default so implementors only override the events
/// they care about. A returned error (or a panic) is collected by
/// [`TestRunCompositeWatcherInterceptor`] and never interrupts the test run.
pub trait TestRunWatcherInterceptor: Send + Sync {
    /// Name used when reporting failures of this interceptor
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once before anything else in the test
    fn on_test_started(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_before_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_before_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_before_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        Ok(())
    }

    fn on_main_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_main_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_main_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        Ok(())
    }

    fn on_after_section_started(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_after_section_finished_success(&self, _test_info: &TestInfo) -> Result<()> {
        Ok(())
    }

    fn on_after_section_finished_failed(
        &self,
        _test_info: &TestInfo,
        _error: &anyhow::Error,
    ) -> Result<()> {
        Ok(())
    }

    /// Called once after the after section, `success` is false if any section failed
    fn on_test_finished(&self, _test_info: &TestInfo, _success: bool) -> Result<()> {
        Ok(())
    }
}

/// Lifecycle event a watcher callback was invoked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatcherEvent {
    TestStarted,
    BeforeSectionStarted,
    BeforeSectionFinishedSuccess,
    BeforeSectionFinishedFailed,
    MainSectionStarted,
    MainSectionFinishedSuccess,
    MainSectionFinishedFailed,
    AfterSectionStarted,
    AfterSectionFinishedSuccess,
    AfterSectionFinishedFailed,
    TestFinished,
}

impl WatcherEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatcherEvent::TestStarted => "onTestStarted",
            WatcherEvent::BeforeSectionStarted => "onBeforeSectionStarted",
            WatcherEvent::BeforeSectionFinishedSuccess => "onBeforeSectionFinishedSuccess",
            WatcherEvent::BeforeSectionFinishedFailed => "onBeforeSectionFinishedFailed",
            WatcherEvent::MainSectionStarted => "onMainSectionStarted",
            WatcherEvent::MainSectionFinishedSuccess => "onMainSectionFinishedSuccess",
            WatcherEvent::MainSectionFinishedFailed => "onMainSectionFinishedFailed",
            WatcherEvent::AfterSectionStarted => "onAfterSectionStarted",
            WatcherEvent::AfterSectionFinishedSuccess => "onAfterSectionFinishedSuccess",
            WatcherEvent::AfterSectionFinishedFailed => "onAfterSectionFinishedFailed",
            WatcherEvent::TestFinished => "onTestFinished",
        }
    }
}

impl fmt::Display for WatcherEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
