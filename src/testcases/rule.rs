use anyhow::Result;
use std::sync::Arc;

use super::sections::{AfterTestSection, BeforeTestSection, TestLaunch};
use super::{DataProducer, TestContext};
use crate::configurator::{ConfigError, Configurator, ConfiguratorBuilder};

/// Reusable test case rule: commits the configuration once and starts any
/// number of tests sharing it.
///
/// A rule is `Send + Sync` when its data producer is, so one rule can serve
/// tests running on several threads. Every test still gets its own
/// [`crate::TestInfo`], runner and failure sink.
pub struct TestCaseRule<I, D> {
    test_class_name: String,
    configurator: Arc<Configurator>,
    data_producer: DataProducer<I, D>,
}

impl<I, D> TestCaseRule<I, D> {
    pub fn new(
        mut builder: ConfiguratorBuilder,
        data_producer: DataProducer<I, D>,
        test_class_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            test_class_name: test_class_name.into(),
            configurator: builder.commit()?,
            data_producer,
        })
    }

    pub fn test_class_name(&self) -> &str {
        &self.test_class_name
    }

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    /// Start a test named after the rule's test class
    pub fn before<F>(&self, actions: F) -> AfterTestSection<I, D>
    where
        F: FnOnce(&TestContext) -> Result<()> + 'static,
    {
        self.before_named(self.test_class_name.clone(), actions)
    }

    /// Start a test with an explicit name
    pub fn before_named<F>(&self, test_name: impl Into<String>, actions: F) -> AfterTestSection<I, D>
    where
        F: FnOnce(&TestContext) -> Result<()> + 'static,
    {
        BeforeTestSection::new(TestLaunch {
            configurator: Arc::clone(&self.configurator),
            test_name: test_name.into(),
            test_case_name: self.test_class_name.clone(),
            data_producer: Arc::clone(&self.data_producer),
        })
        .before_test(actions)
    }
}
