// Device facades used by section bodies and interceptors

pub mod adb;
pub mod location;
pub mod screenshots;

pub use adb::{Adb, CommandOutput, CommandRunner, SystemCommandRunner};
pub use location::{AdbLocation, Location};
pub use screenshots::{AdbScreenshots, Screenshots, sanitize_tag};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

/// Failure of a device operation
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("invalid coordinates: latitude {lat}, longitude {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("screenshot `{tag}` is empty")]
    EmptyScreenshot { tag: String },

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Facades of the device under test
#[derive(Clone)]
pub struct Device {
    location: Arc<dyn Location>,
    screenshots: Arc<dyn Screenshots>,
}

impl Device {
    pub fn new(location: Arc<dyn Location>, screenshots: Arc<dyn Screenshots>) -> Self {
        Self {
            location,
            screenshots,
        }
    }

    /// adb-backed device described by `config`
    pub fn from_config(config: &Config) -> Self {
        let adb = Adb::new(
            Arc::new(SystemCommandRunner),
            config.device.adb_path.clone(),
            config.device.resolved_serial(),
        );
        Self::adb(adb, config.screenshots.directory.clone())
    }

    /// Device driven through `adb`, screenshots stored in `screenshots_dir`
    pub fn adb(adb: Adb, screenshots_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(AdbLocation::new(adb.clone())),
            Arc::new(AdbScreenshots::new(adb, screenshots_dir)),
        )
    }

    pub fn location(&self) -> &dyn Location {
        self.location.as_ref()
    }

    pub fn screenshots(&self) -> &dyn Screenshots {
        self.screenshots.as_ref()
    }

    pub fn screenshots_arc(&self) -> Arc<dyn Screenshots> {
        Arc::clone(&self.screenshots)
    }
}
