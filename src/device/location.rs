use super::{Adb, DeviceError};

/// Control over the device's location services
pub trait Location: Send + Sync {
    /// Enables GPS on the device
    fn enable_gps(&self) -> Result<(), DeviceError>;

    /// Disables GPS on the device
    fn disable_gps(&self) -> Result<(), DeviceError>;

    /// Sets the current location. Requires an emulator.
    fn set_location(&self, lat: f64, lon: f64) -> Result<(), DeviceError>;
}

// Settings.Secure.LOCATION_MODE values
const LOCATION_MODE_OFF: &str = "0";
const LOCATION_MODE_HIGH_ACCURACY: &str = "3";

/// [`Location`] through adb
#[derive(Clone)]
pub struct AdbLocation {
    adb: Adb,
}

impl AdbLocation {
    pub fn new(adb: Adb) -> Self {
        Self { adb }
    }

    fn set_location_mode(&self, mode: &str) -> Result<(), DeviceError> {
        self.adb
            .shell(&["settings", "put", "secure", "location_mode", mode])
            .map(|_| ())
    }
}

impl Location for AdbLocation {
    fn enable_gps(&self) -> Result<(), DeviceError> {
        tracing::info!("Enabling GPS");
        self.set_location_mode(LOCATION_MODE_HIGH_ACCURACY)
    }

    fn disable_gps(&self) -> Result<(), DeviceError> {
        tracing::info!("Disabling GPS");
        self.set_location_mode(LOCATION_MODE_OFF)
    }

    fn set_location(&self, lat: f64, lon: f64) -> Result<(), DeviceError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(DeviceError::InvalidCoordinates { lat, lon });
        }

        tracing::info!("Setting location to {}, {}", lat, lon);
        // geo fix takes longitude first
        self.adb
            .emu(&["geo", "fix", &lon.to_string(), &lat.to_string()])
            .map(|_| ())
    }
}
