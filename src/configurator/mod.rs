// Configurator - framework-wide settings committed once per test case

use std::sync::Arc;

use crate::config::Config;
use crate::device::Device;
use crate::interceptors::{
    LoggingWatcherInterceptor, ScreenshotWatcherInterceptor, TestRunWatcherInterceptor,
};

/// Misuse of the configuration lifecycle
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("configurator has already been committed")]
    AlreadyCommitted,

    #[error(
        "test case `{inner}` was started while test case `{outer}` is still running, nested test cases are not supported"
    )]
    NestedTestCase { outer: String, inner: String },
}

/// Committed, read-only configuration shared by every section of a test
pub struct Configurator {
    watcher_interceptors: Vec<Arc<dyn TestRunWatcherInterceptor>>,
    device: Device,
    logger_tag: String,
}

impl Configurator {
    /// Interceptors in registration order
    pub fn watcher_interceptors(&self) -> &[Arc<dyn TestRunWatcherInterceptor>] {
        &self.watcher_interceptors
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn logger_tag(&self) -> &str {
        &self.logger_tag
    }
}

impl std::fmt::Debug for Configurator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configurator")
            .field(
                "watcher_interceptors",
                &self
                    .watcher_interceptors
                    .iter()
                    .map(|i| i.name())
                    .collect::<Vec<_>>(),
            )
            .field("logger_tag", &self.logger_tag)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Configurator`]. [`ConfiguratorBuilder::commit`] may be called
/// only once.
pub struct ConfiguratorBuilder {
    watcher_interceptors: Vec<Arc<dyn TestRunWatcherInterceptor>>,
    device: Option<Device>,
    logger_tag: String,
    committed: bool,
}

impl Default for ConfiguratorBuilder {
    /// Standard setup from the configuration file found by [`Config::load`]
    fn default() -> Self {
        Self::from_config(&Config::load().unwrap_or_default())
    }
}

impl ConfiguratorBuilder {
    /// Empty builder: no interceptors, adb device with default settings
    pub fn new() -> Self {
        Self {
            watcher_interceptors: Vec::new(),
            device: None,
            logger_tag: crate::config::default_logger_tag(),
            committed: false,
        }
    }

    /// Standard setup: adb device, logging watcher, and the screenshot
    /// watcher when screenshots are enabled
    pub fn from_config(config: &Config) -> Self {
        let device = Device::from_config(config);
        let mut builder = Self::new()
            .logger_tag(config.general.logger_tag.clone())
            .watcher_interceptor(LoggingWatcherInterceptor::new(
                config.general.logger_tag.clone(),
            ));

        if config.screenshots.enabled {
            builder = builder.watcher_interceptor(ScreenshotWatcherInterceptor::new(
                device.screenshots_arc(),
            ));
        }

        builder.device(device)
    }

    /// Register an interceptor after the ones already registered
    pub fn watcher_interceptor(self, interceptor: impl TestRunWatcherInterceptor + 'static) -> Self {
        self.shared_watcher_interceptor(Arc::new(interceptor))
    }

    /// Register an interceptor the caller keeps a handle to
    pub fn shared_watcher_interceptor(
        mut self,
        interceptor: Arc<dyn TestRunWatcherInterceptor>,
    ) -> Self {
        self.watcher_interceptors.push(interceptor);
        self
    }

    pub fn clear_watcher_interceptors(mut self) -> Self {
        self.watcher_interceptors.clear();
        self
    }

    pub fn device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    pub fn logger_tag(mut self, tag: impl Into<String>) -> Self {
        self.logger_tag = tag.into();
        self
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Finish building. A second call fails with [`ConfigError::AlreadyCommitted`].
    pub fn commit(&mut self) -> Result<Arc<Configurator>, ConfigError> {
        if self.committed {
            return Err(ConfigError::AlreadyCommitted);
        }
        self.committed = true;

        let device = match self.device.take() {
            Some(device) => device,
            None => Device::from_config(&Config::default()),
        };
        let configurator = Configurator {
            watcher_interceptors: std::mem::take(&mut self.watcher_interceptors),
            device,
            logger_tag: std::mem::take(&mut self.logger_tag),
        };
        tracing::debug!("Configurator committed: {:?}", configurator);

        Ok(Arc::new(configurator))
    }
}
