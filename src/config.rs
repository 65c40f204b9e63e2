// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub screenshots: ScreenshotsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Tag prefixed to framework log lines
    #[serde(default = "default_logger_tag")]
    pub logger_tag: String,

    /// Enable debug logging
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            logger_tag: default_logger_tag(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// adb executable
    #[serde(default = "default_adb_path")]
    pub adb_path: String,

    /// Device serial passed as `adb -s`, the only attached device is used when unset
    #[serde(default)]
    pub serial: Option<String>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            adb_path: default_adb_path(),
            serial: None,
        }
    }
}

impl DeviceConfig {
    /// Serial from the environment, falling back to the configured one
    pub fn resolved_serial(&self) -> Option<String> {
        std::env::var(ENV_DROIDTESTIFY_SERIAL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.serial.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotsConfig {
    /// Take a screenshot whenever a section fails
    #[serde(default = "default_screenshots_enabled")]
    pub enabled: bool,

    /// Directory screenshots are written to
    #[serde(default = "default_screenshots_directory")]
    pub directory: PathBuf,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        Self {
            enabled: default_screenshots_enabled(),
            directory: default_screenshots_directory(),
        }
    }
}

// Default values
pub const ENV_DROIDTESTIFY_SERIAL: &str = "DROIDTESTIFY_SERIAL";

pub fn default_logger_tag() -> String {
    String::from("DROIDTESTIFY")
}

pub fn default_adb_path() -> String {
    String::from("adb")
}

fn default_screenshots_enabled() -> bool {
    true
}

pub fn default_screenshots_directory() -> PathBuf {
    PathBuf::from("screenshots")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .droidtestifyrc (current directory)
        // 2. ~/.droidtestifyrc (home directory)
        // 3. .droidtestifyrc.toml (current directory)
        // 4. ~/.droidtestifyrc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;

        let paths = [
            cwd.join(".droidtestifyrc"),
            home.join(".droidtestifyrc"),
            cwd.join(".droidtestifyrc.toml"),
            home.join(".droidtestifyrc.toml"),
        ];

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let config = Self::parse(&content);
        if config.is_none() {
            tracing::warn!("Ignoring invalid configuration file {}", path.display());
        }
        config
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}
