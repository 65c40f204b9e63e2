// Section runner - drives one test through its before, main and after sections

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{TestBody, TestContext, TestInfo, TestRunError};
use crate::configurator::Configurator;
use crate::interceptors::{TestRunCompositeWatcherInterceptor, TestRunWatcherInterceptor};
use crate::state::{FailureSink, Section, SectionFailure, SectionOutcome, TestReport, TestStatus};
use crate::utils::call_safely;

/// Position of a run in the section lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    BeforeRunning,
    BeforeDone,
    BeforeFailed,
    MainRunning,
    MainDone,
    MainFailed,
    AfterRunning,
    Finished,
}

/// Runs a [`TestBody`] and notifies the configured watcher interceptors
/// around every section.
///
/// The after section always runs. A failed before section skips the main
/// section. Section failures are reported only once the after section and
/// `on_test_finished` are done.
pub struct TestRunner {
    configurator: Arc<Configurator>,
    exceptions: FailureSink,
    state: RunState,
}

impl TestRunner {
    pub fn new(configurator: Arc<Configurator>) -> Self {
        Self {
            configurator,
            exceptions: FailureSink::new(),
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Interceptor failures collected so far
    pub fn exceptions(&self) -> &FailureSink {
        &self.exceptions
    }

    pub fn run<I, D>(&mut self, body: TestBody<I, D>) -> Result<TestReport, TestRunError> {
        let TestBody {
            test_name,
            test_case_name,
            before_actions,
            after_actions,
            init_block,
            data_producer,
            main_steps,
        } = body;

        let test_info = TestInfo::new(test_name, test_case_name);
        let composite = TestRunCompositeWatcherInterceptor::new(
            self.configurator.watcher_interceptors().to_vec(),
            self.exceptions.clone(),
        );
        let context = TestContext::new(test_info.clone(), self.configurator.clone());
        let mut failures: Vec<SectionFailure> = Vec::new();

        // The composite pushes interceptor failures into `exceptions` and always returns Ok
        let _ = composite.on_test_started(&test_info);

        // Before
        self.transition(RunState::BeforeRunning);
        let _ = composite.on_before_section_started(&test_info);
        let before = match call_safely(|| before_actions(&context)) {
            Ok(()) => {
                let _ = composite.on_before_section_finished_success(&test_info);
                self.transition(RunState::BeforeDone);
                SectionOutcome::Passed
            }
            Err(error) => {
                let _ = composite.on_before_section_finished_failed(&test_info, &error);
                self.transition(RunState::BeforeFailed);
                Self::record(&mut failures, Section::Before, error)
            }
        };

        // Main
        let main = if before.is_failed() {
            debug!("{}: main section skipped, before section failed", test_info);
            SectionOutcome::Skipped
        } else {
            self.transition(RunState::MainRunning);
            let _ = composite.on_main_section_started(&test_info);
            match call_safely(|| main_steps(&context, data_producer(init_block))) {
                Ok(()) => {
                    let _ = composite.on_main_section_finished_success(&test_info);
                    self.transition(RunState::MainDone);
                    SectionOutcome::Passed
                }
                Err(error) => {
                    let _ = composite.on_main_section_finished_failed(&test_info, &error);
                    self.transition(RunState::MainFailed);
                    Self::record(&mut failures, Section::Main, error)
                }
            }
        };

        // After
        self.transition(RunState::AfterRunning);
        let _ = composite.on_after_section_started(&test_info);
        let after = match call_safely(|| after_actions(&context)) {
            Ok(()) => {
                let _ = composite.on_after_section_finished_success(&test_info);
                SectionOutcome::Passed
            }
            Err(error) => {
                let _ = composite.on_after_section_finished_failed(&test_info, &error);
                Self::record(&mut failures, Section::After, error)
            }
        };

        let success = failures.is_empty();
        let _ = composite.on_test_finished(&test_info, success);
        self.transition(RunState::Finished);

        let interceptor_failures = self.exceptions.take();
        let report = TestReport {
            duration_ms: test_info.elapsed_ms(),
            test_info,
            status: if success && interceptor_failures.is_empty() {
                TestStatus::Pass
            } else {
                TestStatus::Fail
            },
            before,
            main,
            after,
            interceptor_failures: interceptor_failures.len(),
        };

        if report.status == TestStatus::Pass {
            Ok(report)
        } else {
            Err(TestRunError::Failed {
                report,
                section_failures: failures,
                interceptor_failures,
            })
        }
    }

    fn record(
        failures: &mut Vec<SectionFailure>,
        section: Section,
        error: anyhow::Error,
    ) -> SectionOutcome {
        warn!("{} section failed: {:#}", section, error);
        let outcome = SectionOutcome::Failed(format!("{:#}", error));
        failures.push(SectionFailure { section, error });
        outcome
    }

    fn transition(&mut self, next: RunState) {
        debug!("Section state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
