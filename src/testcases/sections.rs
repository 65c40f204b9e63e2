// Fluent section builders: before -> after -> (init) -> run

use anyhow::Result;
use std::sync::Arc;

use super::guard::ActiveTestCase;
use super::runner::TestRunner;
use super::{DataProducer, InitBlock, SectionActions, TestBody, TestContext, TestRunError};
use crate::configurator::Configurator;
use crate::state::TestReport;

/// Everything known about a test before its sections are described
pub(crate) struct TestLaunch<I, D> {
    pub configurator: Arc<Configurator>,
    pub test_name: String,
    pub test_case_name: String,
    pub data_producer: DataProducer<I, D>,
}

/// Entry of the builder chain, takes the before section actions
pub struct BeforeTestSection<I, D> {
    launch: TestLaunch<I, D>,
}

impl<I, D> BeforeTestSection<I, D> {
    pub(crate) fn new(launch: TestLaunch<I, D>) -> Self {
        Self { launch }
    }

    pub fn before_test<F>(self, actions: F) -> AfterTestSection<I, D>
    where
        F: FnOnce(&TestContext) -> Result<()> + 'static,
    {
        AfterTestSection {
            launch: self.launch,
            before_actions: Box::new(actions),
        }
    }
}

/// Takes the after section actions, which run even when earlier sections fail
pub struct AfterTestSection<I, D> {
    launch: TestLaunch<I, D>,
    before_actions: SectionActions,
}

impl<I, D> AfterTestSection<I, D> {
    pub fn after<F>(self, actions: F) -> MainTestSection<I, D>
    where
        F: FnOnce(&TestContext) -> Result<()> + 'static,
    {
        MainTestSection {
            launch: self.launch,
            before_actions: self.before_actions,
            after_actions: Box::new(actions),
            init_block: None,
        }
    }
}

/// Optionally configures the initial data, then runs the main section steps
pub struct MainTestSection<I, D> {
    launch: TestLaunch<I, D>,
    before_actions: SectionActions,
    after_actions: SectionActions,
    init_block: Option<InitBlock<I>>,
}

impl<I, D> MainTestSection<I, D> {
    /// Block applied to the initial data before the data producer transforms it.
    /// Calling `init` again replaces the previous block.
    pub fn init<F>(mut self, block: F) -> Self
    where
        F: FnOnce(&mut I) + 'static,
    {
        self.init_block = Some(Box::new(block));
        self
    }

    /// Execute the test. Returns the report, or every failure once all
    /// sections have run.
    pub fn run<F>(self, steps: F) -> Result<TestReport, TestRunError>
    where
        F: FnOnce(&TestContext, D) -> Result<()> + 'static,
    {
        let TestLaunch {
            configurator,
            test_name,
            test_case_name,
            data_producer,
        } = self.launch;

        let _active = ActiveTestCase::enter(&test_case_name)?;

        let body = TestBody {
            test_name,
            test_case_name,
            before_actions: self.before_actions,
            after_actions: self.after_actions,
            init_block: self.init_block,
            data_producer,
            main_steps: Box::new(steps),
        };

        TestRunner::new(configurator).run(body)
    }
}
