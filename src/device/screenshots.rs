use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use super::{Adb, DeviceError};

static UNSAFE_TAG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\-]+").expect("invalid screenshot tag regex"));

/// Replace every run of characters unsafe in file names with `_`
pub fn sanitize_tag(tag: &str) -> String {
    let sanitized = UNSAFE_TAG_CHARS.replace_all(tag.trim(), "_");
    if sanitized.is_empty() {
        "screenshot".to_string()
    } else {
        sanitized.into_owned()
    }
}

/// Screenshot capture on the device
pub trait Screenshots: Send + Sync {
    /// Capture a screenshot tagged `tag` and return where it was stored
    fn take_screenshot(&self, tag: &str) -> Result<PathBuf, DeviceError>;

    /// Capture a screenshot, logging instead of failing when it is not possible
    fn make_screenshot_if_possible(&self, tag: &str) -> Option<PathBuf> {
        match self.take_screenshot(tag) {
            Ok(path) => {
                tracing::info!("Screenshot saved to {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::error!("An error while making screenshot occurred: {}", e);
                None
            }
        }
    }
}

/// [`Screenshots`] via `adb exec-out screencap -p`
#[derive(Clone)]
pub struct AdbScreenshots {
    adb: Adb,
    directory: PathBuf,
}

impl AdbScreenshots {
    pub fn new(adb: Adb, directory: impl Into<PathBuf>) -> Self {
        Self {
            adb,
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Screenshots for AdbScreenshots {
    fn take_screenshot(&self, tag: &str) -> Result<PathBuf, DeviceError> {
        let png = self.adb.exec_out(&["screencap", "-p"])?;
        if png.is_empty() {
            return Err(DeviceError::EmptyScreenshot {
                tag: tag.to_string(),
            });
        }

        let path = self.directory.join(format!("{}.png", sanitize_tag(tag)));
        std::fs::create_dir_all(&self.directory).map_err(|source| DeviceError::Io {
            path: self.directory.clone(),
            source,
        })?;
        std::fs::write(&path, png).map_err(|source| DeviceError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
