// adb invocation

use std::process::Command;
use std::sync::Arc;

use super::DeviceError;

/// Captured result of an external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs external programs. Swapped out in tests.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DeviceError>;
}

/// [`CommandRunner`] over `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DeviceError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| DeviceError::Launch {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// adb client bound to one device
#[derive(Clone)]
pub struct Adb {
    runner: Arc<dyn CommandRunner>,
    adb_path: String,
    serial: Option<String>,
}

impl Adb {
    pub fn new(runner: Arc<dyn CommandRunner>, adb_path: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            runner,
            adb_path: adb_path.into(),
            serial,
        }
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// `adb [-s serial] shell <args>`
    pub fn shell(&self, args: &[&str]) -> Result<CommandOutput, DeviceError> {
        self.execute("shell", args)
    }

    /// `adb [-s serial] emu <args>`, emulator console commands
    pub fn emu(&self, args: &[&str]) -> Result<CommandOutput, DeviceError> {
        self.execute("emu", args)
    }

    /// `adb [-s serial] exec-out <args>`, binary-safe stdout
    pub fn exec_out(&self, args: &[&str]) -> Result<Vec<u8>, DeviceError> {
        self.execute("exec-out", args).map(|output| output.stdout)
    }

    fn execute(&self, subcommand: &str, args: &[&str]) -> Result<CommandOutput, DeviceError> {
        let mut full_args = Vec::with_capacity(args.len() + 3);
        if let Some(serial) = &self.serial {
            full_args.push("-s".to_string());
            full_args.push(serial.clone());
        }
        full_args.push(subcommand.to_string());
        full_args.extend(args.iter().map(|a| a.to_string()));

        let command = format!("{} {}", self.adb_path, full_args.join(" "));
        tracing::debug!("Running {}", command);

        let output = self.runner.run(&self.adb_path, &full_args)?;
        if output.status != 0 {
            return Err(DeviceError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}
