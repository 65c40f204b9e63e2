use anyhow::{Context, Result};
use std::cell::Cell;
use std::sync::Arc;

use crate::configurator::Configurator;
use crate::device::Device;
use crate::testcases::TestInfo;

/// Handed to every section body: the running test, the committed
/// configuration and the device facades.
pub struct TestContext {
    test_info: TestInfo,
    configurator: Arc<Configurator>,
    steps: Cell<usize>,
}

impl TestContext {
    pub fn new(test_info: TestInfo, configurator: Arc<Configurator>) -> Self {
        Self {
            test_info,
            configurator,
            steps: Cell::new(0),
        }
    }

    pub fn test_info(&self) -> &TestInfo {
        &self.test_info
    }

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    pub fn device(&self) -> &Device {
        self.configurator.device()
    }

    /// Run a named, numbered step. Errors are annotated with the step name.
    pub fn step<T, F>(&self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let number = self.steps.get() + 1;
        self.steps.set(number);

        tracing::info!("{}: step {} \"{}\" started", self.test_info, number, name);
        let result = f().with_context(|| format!("step {} \"{}\" failed", number, name));
        if result.is_ok() {
            tracing::info!("{}: step {} \"{}\" succeeded", self.test_info, number, name);
        }
        result
    }

    /// Number of steps started so far
    pub fn steps_started(&self) -> usize {
        self.steps.get()
    }
}
