use anyhow::Result;
use std::sync::Arc;

use super::guard;
use super::sections::{AfterTestSection, BeforeTestSection, TestLaunch};
use super::{DataProducer, TestContext};
use crate::configurator::{ConfigError, Configurator, ConfiguratorBuilder};

/// A single parametrized test case.
///
/// The configurator builder is committed when the case is created, which is
/// the only point where a case can tune its configuration. A case describes
/// exactly one before/after/main triple: [`TestCase::before`] consumes it.
///
/// Creating or running a test case from inside a running test case is a
/// misuse and fails with [`ConfigError::NestedTestCase`].
///
/// ```no_run
/// use droidtestify::testcases::{TestCase, data_producer};
/// use droidtestify::ConfiguratorBuilder;
///
/// #[derive(Default)]
/// struct Account { login: String }
///
/// let case = TestCase::new(
///     "LoginTest",
///     ConfiguratorBuilder::new(),
///     data_producer(|account: Account| account.login),
/// )?;
///
/// case.before(|ctx| ctx.device().location().enable_gps().map_err(Into::into))
///     .after(|ctx| ctx.device().location().disable_gps().map_err(Into::into))
///     .init(|account| account.login = "admin".to_string())
///     .run(|ctx, login| {
///         ctx.step("open login screen", || Ok(()))?;
///         assert_eq!(login, "admin");
///         Ok(())
///     })?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct TestCase<I, D> {
    name: String,
    configurator: Arc<Configurator>,
    data_producer: DataProducer<I, D>,
}

impl<I, D> TestCase<I, D> {
    pub fn new(
        name: impl Into<String>,
        mut builder: ConfiguratorBuilder,
        data_producer: DataProducer<I, D>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        guard::ensure_idle(&name)?;
        let configurator = builder.commit()?;

        Ok(Self {
            name,
            configurator,
            data_producer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configurator(&self) -> &Configurator {
        &self.configurator
    }

    /// Start describing the test with its before section actions
    pub fn before<F>(self, actions: F) -> AfterTestSection<I, D>
    where
        F: FnOnce(&TestContext) -> Result<()> + 'static,
    {
        BeforeTestSection::new(TestLaunch {
            configurator: self.configurator,
            test_name: self.name.clone(),
            test_case_name: self.name,
            data_producer: self.data_producer,
        })
        .before_test(actions)
    }
}
