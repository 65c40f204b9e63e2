// Test cases - section DSL, runner and entry points

pub mod body;
pub mod case;
pub mod context;
pub mod guard;
pub mod info;
pub mod rule;
pub mod runner;
pub mod sections;

pub use body::{DataProducer, InitBlock, MainSteps, SectionActions, TestBody, data_producer, no_data};
pub use case::TestCase;
pub use context::TestContext;
pub use info::TestInfo;
pub use rule::TestCaseRule;
pub use runner::{RunState, TestRunner};
pub use sections::{AfterTestSection, BeforeTestSection, MainTestSection};

use crate::configurator::ConfigError;
use crate::state::{CollectedFailure, SectionFailure, TestReport};

/// Why a test run did not pass
#[derive(Debug, thiserror::Error)]
pub enum TestRunError {
    /// The test case was used in a way the framework forbids; no section ran
    #[error("test case misuse: {0}")]
    Misuse(#[from] ConfigError),

    /// At least one section body or interceptor callback failed
    #[error("test {} failed:\n{}", .report.test_info, describe_failures(.section_failures, .interceptor_failures))]
    Failed {
        report: TestReport,
        section_failures: Vec<SectionFailure>,
        interceptor_failures: Vec<CollectedFailure>,
    },
}

impl TestRunError {
    pub fn report(&self) -> Option<&TestReport> {
        match self {
            TestRunError::Failed { report, .. } => Some(report),
            TestRunError::Misuse(_) => None,
        }
    }

    pub fn section_failures(&self) -> &[SectionFailure] {
        match self {
            TestRunError::Failed {
                section_failures, ..
            } => section_failures,
            TestRunError::Misuse(_) => &[],
        }
    }

    pub fn interceptor_failures(&self) -> &[CollectedFailure] {
        match self {
            TestRunError::Failed {
                interceptor_failures,
                ..
            } => interceptor_failures,
            TestRunError::Misuse(_) => &[],
        }
    }
}

fn describe_failures(
    section_failures: &[SectionFailure],
    interceptor_failures: &[CollectedFailure],
) -> String {
    section_failures
        .iter()
        .map(|f| format!("  - {}", f))
        .chain(interceptor_failures.iter().map(|f| format!("  - {}", f)))
        .collect::<Vec<_>>()
        .join("\n")
}
