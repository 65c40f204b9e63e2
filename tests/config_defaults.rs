use droidtestify::config::Config;
use std::path::PathBuf;

#[test]
fn test_default_config_values() {
    let config = Config::default();

    assert_eq!(config.general.logger_tag, "DROIDTESTIFY");
    assert!(!config.general.verbose);
    assert_eq!(config.device.adb_path, "adb");
    assert!(config.device.serial.is_none());
    assert!(config.screenshots.enabled);
    assert_eq!(config.screenshots.directory, PathBuf::from("screenshots"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::parse("").expect("Failed to parse empty config");
    assert_eq!(config.general.logger_tag, "DROIDTESTIFY");
    assert_eq!(config.device.adb_path, "adb");
}
