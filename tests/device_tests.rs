use droidtestify::config::Config;
use droidtestify::device::{
    Adb, AdbLocation, AdbScreenshots, CommandOutput, CommandRunner, Device, DeviceError, Location,
    Screenshots,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Records adb invocations and answers with a canned output
struct ScriptedRunner {
    calls: Mutex<Vec<String>>,
    output: CommandOutput,
}

impl ScriptedRunner {
    fn new(status: i32, stdout: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            output: CommandOutput {
                status,
                stdout: stdout.to_vec(),
                stderr: b"error: no devices/emulators found".to_vec(),
            },
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DeviceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", program, args.join(" ")));
        Ok(self.output.clone())
    }
}

#[test]
fn test_gps_toggling() {
    let runner = ScriptedRunner::new(0, b"");
    let location = AdbLocation::new(Adb::new(runner.clone(), "adb", Some("emulator-5554".into())));

    location.enable_gps().unwrap();
    location.disable_gps().unwrap();

    assert_eq!(
        runner.calls(),
        vec![
            "adb -s emulator-5554 shell settings put secure location_mode 3",
            "adb -s emulator-5554 shell settings put secure location_mode 0",
        ]
    );
}

#[test]
fn test_set_location_uses_longitude_first() {
    let runner = ScriptedRunner::new(0, b"OK");
    let location = AdbLocation::new(Adb::new(runner.clone(), "adb", None));

    location.set_location(55.75, 37.62).unwrap();

    assert_eq!(runner.calls(), vec!["adb emu geo fix 37.62 55.75"]);
}

#[test]
fn test_set_location_rejects_invalid_coordinates() {
    let runner = ScriptedRunner::new(0, b"");
    let location = AdbLocation::new(Adb::new(runner.clone(), "adb", None));

    assert!(matches!(
        location.set_location(91.0, 0.0),
        Err(DeviceError::InvalidCoordinates { .. })
    ));
    assert!(matches!(
        location.set_location(0.0, -180.5),
        Err(DeviceError::InvalidCoordinates { .. })
    ));
    assert!(runner.calls().is_empty());
}

#[test]
fn test_adb_failure_surfaces() {
    let runner = ScriptedRunner::new(1, b"");
    let location = AdbLocation::new(Adb::new(runner, "adb", None));

    let err = location.enable_gps().unwrap_err();
    assert!(err.to_string().contains("no devices/emulators found"));
}

#[test]
fn test_screenshot_written_to_directory() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let target = dir.path().join("shots");
    let runner = ScriptedRunner::new(0, b"\x89PNG fake image");
    let screenshots = AdbScreenshots::new(Adb::new(runner.clone(), "adb", None), &target);

    let path = screenshots.take_screenshot("Login Test/main failure").unwrap();

    assert_eq!(path, target.join("Login_Test_main_failure.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG fake image".to_vec());
    assert_eq!(runner.calls(), vec!["adb exec-out screencap -p"]);
}

#[test]
fn test_empty_screenshot_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let runner = ScriptedRunner::new(0, b"");
    let screenshots = AdbScreenshots::new(Adb::new(runner, "adb", None), dir.path());

    assert!(matches!(
        screenshots.take_screenshot("empty"),
        Err(DeviceError::EmptyScreenshot { .. })
    ));
    assert!(screenshots.make_screenshot_if_possible("empty").is_none());
}

#[test]
fn test_device_from_config() {
    let mut config = Config::default();
    config.device.adb_path = "droidtestify-missing-adb".to_string();

    let device = Device::from_config(&config);
    let err = device.location().enable_gps().unwrap_err();
    assert!(matches!(err, DeviceError::Launch { .. }));
    assert!(device.screenshots().make_screenshot_if_possible("tag").is_none());
}
