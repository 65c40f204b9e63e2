// Composite watcher - fans every lifecycle callback out to the registered interceptors

use anyhow::Result;
use std::sync::Arc;

use super::{TestRunWatcherInterceptor, WatcherEvent};
use crate::state::{CollectedFailure, FailureSink};
use crate::testcases::TestInfo;
use crate::utils::for_each_safely;

/// Composes a list of [`TestRunWatcherInterceptor`]s into the single interceptor
/// the section runner talks to.
///
/// Each callback reaches every interceptor in registration order. A failing
/// interceptor is recorded in `exceptions` and the remaining interceptors are
/// still called, so callbacks on the composite itself always return `Ok`.
pub struct TestRunCompositeWatcherInterceptor {
    watcher_interceptors: Vec<Arc<dyn TestRunWatcherInterceptor>>,
    exceptions: FailureSink,
}

impl TestRunCompositeWatcherInterceptor {
    pub fn new(
        watcher_interceptors: Vec<Arc<dyn TestRunWatcherInterceptor>>,
        exceptions: FailureSink,
    ) -> Self {
        Self {
            watcher_interceptors,
            exceptions,
        }
    }

    /// Number of registered interceptors
    pub fn len(&self) -> usize {
        self.watcher_interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watcher_interceptors.is_empty()
    }

    /// Sink receiving interceptor failures
    pub fn exceptions(&self) -> &FailureSink {
        &self.exceptions
    }

    fn dispatch<F>(&self, event: WatcherEvent, call: F)
    where
        F: Fn(&dyn TestRunWatcherInterceptor) -> Result<()>,
    {
        for_each_safely(
            &self.watcher_interceptors,
            |index, interceptor, error| {
                tracing::warn!(
                    "Interceptor {} failed on {}: {:#}",
                    interceptor.name(),
                    event,
                    error
                );
                self.exceptions.push(CollectedFailure {
                    interceptor_index: index,
                    interceptor: interceptor.name().to_string(),
                    event,
                    error,
                });
            },
            |interceptor| call(interceptor.as_ref()),
        );
    }
}

impl TestRunWatcherInterceptor for TestRunCompositeWatcherInterceptor {
    fn name(&self) -> &str {
        "TestRunCompositeWatcherInterceptor"
    }

    fn on_test_started(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::TestStarted, |it| it.on_test_started(test_info));
        Ok(())
    }

    fn on_before_section_started(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::BeforeSectionStarted, |it| {
            it.on_before_section_started(test_info)
        });
        Ok(())
    }

    fn on_before_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::BeforeSectionFinishedSuccess, |it| {
            it.on_before_section_finished_success(test_info)
        });
        Ok(())
    }

    fn on_before_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.dispatch(WatcherEvent::BeforeSectionFinishedFailed, |it| {
            it.on_before_section_finished_failed(test_info, error)
        });
        Ok(())
    }

    fn on_main_section_started(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::MainSectionStarted, |it| {
            it.on_main_section_started(test_info)
        });
        Ok(())
    }

    fn on_main_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::MainSectionFinishedSuccess, |it| {
            it.on_main_section_finished_success(test_info)
        });
        Ok(())
    }

    fn on_main_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.dispatch(WatcherEvent::MainSectionFinishedFailed, |it| {
            it.on_main_section_finished_failed(test_info, error)
        });
        Ok(())
    }

    fn on_after_section_started(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::AfterSectionStarted, |it| {
            it.on_after_section_started(test_info)
        });
        Ok(())
    }

    fn on_after_section_finished_success(&self, test_info: &TestInfo) -> Result<()> {
        self.dispatch(WatcherEvent::AfterSectionFinishedSuccess, |it| {
            it.on_after_section_finished_success(test_info)
        });
        Ok(())
    }

    fn on_after_section_finished_failed(
        &self,
        test_info: &TestInfo,
        error: &anyhow::Error,
    ) -> Result<()> {
        self.dispatch(WatcherEvent::AfterSectionFinishedFailed, |it| {
            it.on_after_section_finished_failed(test_info, error)
        });
        Ok(())
    }

    fn on_test_finished(&self, test_info: &TestInfo, success: bool) -> Result<()> {
        self.dispatch(WatcherEvent::TestFinished, |it| {
            it.on_test_finished(test_info, success)
        });
        Ok(())
    }
}
