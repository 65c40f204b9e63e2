// CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Desired GPS state
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GpsState {
    Enable,
    Disable,
}

/// Android UI test orchestration toolkit
#[derive(Parser, Debug)]
#[command(name = "droidtestify")]
#[command(author = "droidtestify contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive the device facades used by droidtestify test cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Device serial, overrides the configuration file and DROIDTESTIFY_SERIAL
    #[arg(short = 's', long, global = true, value_name = "SERIAL")]
    pub serial: Option<String>,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enable or disable GPS on the device
    Gps {
        #[arg(value_enum)]
        state: GpsState,
    },

    /// Set the emulator location
    Location {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Capture a screenshot into the configured directory
    Screenshot {
        /// Screenshot tag, used as the file name
        tag: String,

        /// Output directory, overrides the configuration file
        #[arg(short = 'o', long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_negative() {
        let cli = Cli::try_parse_from(["droidtestify", "location", "-33.86", "151.21"]).unwrap();
        match cli.command {
            Some(Commands::Location { lat, lon }) => {
                assert_eq!(lat, -33.86);
                assert_eq!(lon, 151.21);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_gps() {
        let cli = Cli::try_parse_from(["droidtestify", "-v", "gps", "disable"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Gps {
                state: GpsState::Disable
            })
        ));
    }

    #[test]
    fn test_parse_screenshot_with_serial() {
        let cli = Cli::try_parse_from([
            "droidtestify",
            "screenshot",
            "home",
            "--serial",
            "emulator-5554",
            "-o",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.serial.as_deref(), Some("emulator-5554"));
        match cli.command {
            Some(Commands::Screenshot { tag, output }) => {
                assert_eq!(tag, "home");
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_gps_state() {
        assert!(Cli::try_parse_from(["droidtestify", "gps", "toggle"]).is_err());
    }
}
