// Main entry point for droidtestify

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use droidtestify::cli::{Cli, Commands, GpsState};
use droidtestify::config;
use droidtestify::device::{Adb, Device, SystemCommandRunner};
use droidtestify::logging;

use std::sync::Arc;

fn main() -> Result<()> {
    // Load configuration from file (if exists)
    let loaded = config::Config::load();

    let cli = Cli::parse();

    let verbose = cli.verbose || loaded.as_ref().is_some_and(|c| c.general.verbose);
    logging::init(verbose);

    if cli.verbose {
        info!("Starting droidtestify v{}", env!("CARGO_PKG_VERSION"));
    }

    if cli.config {
        print_config(&cli, loaded.as_ref());
        return Ok(());
    }

    if let Some(config_file) = &cli.init_config {
        let toml_content = config::Config::default().to_toml();
        std::fs::write(config_file, toml_content)
            .with_context(|| format!("Failed to write {}", config_file.display()))?;
        println!("Configuration file created: {}", config_file.display());
        println!("\nYou can now edit the file to customize your settings.");
        return Ok(());
    }

    if let Some(shell_type) = &cli.completion {
        return handle_completion(shell_type);
    }

    let mut config = loaded.unwrap_or_default();
    let serial = cli.serial.clone().or_else(|| config.device.resolved_serial());

    match &cli.command {
        Some(Commands::Gps { state }) => {
            let device = open_device(&config, serial);
            match state {
                GpsState::Enable => {
                    device.location().enable_gps()?;
                    println!("GPS enabled");
                }
                GpsState::Disable => {
                    device.location().disable_gps()?;
                    println!("GPS disabled");
                }
            }
            Ok(())
        }
        Some(Commands::Location { lat, lon }) => {
            let device = open_device(&config, serial);
            device.location().set_location(*lat, *lon)?;
            println!("Location set to {}, {}", lat, lon);
            Ok(())
        }
        Some(Commands::Screenshot { tag, output }) => {
            if let Some(output) = output {
                config.screenshots.directory = output.clone();
            }
            let device = open_device(&config, serial);
            let path = device.screenshots().take_screenshot(tag)?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            warn!("No command provided. Use 'droidtestify --help' for usage.");
            Ok(())
        }
    }
}

fn open_device(config: &config::Config, serial: Option<String>) -> Device {
    let adb = Adb::new(
        Arc::new(SystemCommandRunner),
        config.device.adb_path.clone(),
        serial,
    );
    Device::adb(adb, config.screenshots.directory.clone())
}

fn print_config(cli: &Cli, loaded: Option<&config::Config>) {
    println!("Current configuration:");

    match loaded {
        Some(cfg) => {
            println!("\n  Configuration file loaded:");
            println!("    Logger tag: {}", cfg.general.logger_tag);
            println!("    Verbose: {}", cfg.general.verbose);
            println!("    adb: {}", cfg.device.adb_path);
            if let Some(serial) = &cfg.device.serial {
                println!("    Serial: {}", serial);
            }
            println!(
                "    Screenshots: {} ({})",
                if cfg.screenshots.enabled {
                    "enabled"
                } else {
                    "disabled"
                },
                cfg.screenshots.directory.display()
            );
        }
        None => {
            println!("\n  No configuration file loaded");
            println!("  Create one with: droidtestify --init-config .droidtestifyrc.toml");
        }
    }

    println!("\n  Environment variables:");
    match std::env::var(config::ENV_DROIDTESTIFY_SERIAL) {
        Ok(serial) => println!("    {}: {}", config::ENV_DROIDTESTIFY_SERIAL, serial),
        Err(_) => println!("    {}: not set", config::ENV_DROIDTESTIFY_SERIAL),
    }
    if let Some(serial) = &cli.serial {
        println!("\n  Command-line serial: {}", serial);
    }

    println!("\nConfiguration precedence:");
    println!("  1. Command-line arguments (highest)");
    println!("  2. Environment variables");
    println!("  3. Configuration file");
    println!("  4. Built-in defaults (lowest)");
}

fn handle_completion(shell_type: &str) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{Shell, generate};

    let shell = match shell_type {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        _ => {
            eprintln!("Error: Unsupported shell type '{}'", shell_type);
            eprintln!("Supported shells: bash, zsh, fish, elvish, powershell");
            return Err(anyhow::anyhow!("Unsupported shell type"));
        }
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, &bin_name, &mut std::io::stdout());

    Ok(())
}
