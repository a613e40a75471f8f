//! Shell command execution.
//!
//! [`CommandExecutor`] is the seam: [`ShellExecutor`] runs through the host
//! interpreter, tests substitute a fake. [`run_command`] is the single-attempt
//! wrapper that never fails past its boundary.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::events::{Event, EventSink};

/// Captured result of one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Something that can run a shell command line.
pub trait CommandExecutor {
    /// Run `command` in `cwd` (or the current directory) and capture its output.
    ///
    /// Errors only when the process could not be launched.
    fn execute(&self, command: &str, cwd: Option<&Path>) -> io::Result<CommandOutput>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &str, cwd: Option<&Path>) -> io::Result<CommandOutput> {
        let mut cmd = shell_command(command);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// Run a command once and report the outcome. Returns true on exit code zero.
pub fn run_command(
    executor: &dyn CommandExecutor,
    sink: &mut dyn EventSink,
    command: &str,
    cwd: Option<&Path>,
) -> bool {
    tracing::debug!(command, cwd = ?cwd, "running command");

    match executor.execute(command, cwd) {
        Ok(output) if output.success() => {
            sink.emit(Event::CommandSucceeded {
                command: command.to_string(),
            });
            true
        }
        Ok(output) => {
            tracing::warn!(command, status = ?output.status, "command failed");
            sink.emit(Event::CommandFailed {
                command: command.to_string(),
                exit_code: output.status,
                stderr: output.stderr,
            });
            false
        }
        Err(e) => {
            tracing::warn!(command, error = %e, "command could not be launched");
            sink.emit(Event::CommandLaunchFailed {
                command: command.to_string(),
                message: e.to_string(),
            });
            false
        }
    }
}
