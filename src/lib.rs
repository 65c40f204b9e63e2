pub mod cli;
pub mod config;
pub mod configurator;
pub mod device;
pub mod interceptors;
pub mod logging;
pub mod state;
pub mod testcases;
pub mod utils;

pub use configurator::{ConfigError, Configurator, ConfiguratorBuilder};
pub use interceptors::{TestRunCompositeWatcherInterceptor, TestRunWatcherInterceptor};
pub use testcases::{TestCase, TestCaseRule, TestContext, TestInfo, TestRunError};
