use crate::error::{PkgdeckError, Result};
use crate::ui;
use crate::utils::{platform, sanitize};
use std::process::{Output, Stdio};

/// Exit code reported when the process could not be launched at all,
/// or ended without an exit code (killed by a signal).
pub const LAUNCH_FAILURE_CODE: i32 = -1;

/// Captured result of one package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn launch_failure() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: LAUNCH_FAILURE_CODE,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn is_launch_failure(&self) -> bool {
        self.exit_code == LAUNCH_FAILURE_CODE
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(LAUNCH_FAILURE_CODE),
        }
    }
}

/// Executes a complete command line and captures its output.
///
/// Implementations never fail: a non-zero exit is returned as-is and a launch
/// failure becomes [`CommandOutput::launch_failure`]. Callers are responsible
/// for quoting user text with [`sanitize::shell_escape`] before building the line.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command_line: &str) -> CommandOutput;
}

/// Runs command lines through the host shell (`sh -c` / `cmd /C`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn try_run(&self, command_line: &str) -> Result<Output> {
        let mut cmd = platform::build_shell_command(command_line);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        cmd.output().map_err(|e| PkgdeckError::SystemCommandFailed {
            command: sanitize::sanitize_for_display(command_line),
            reason: e.to_string(),
        })
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> CommandOutput {
        ui::verbose(&format!("$ {}", sanitize::sanitize_for_display(command_line)));

        match self.try_run(command_line) {
            Ok(output) => {
                let output = CommandOutput::from(output);
                if !output.success() {
                    ui::verbose(&format!("exit code {}", output.exit_code));
                }
                output
            }
            Err(e) => {
                ui::verbose(&e.to_string());
                CommandOutput::launch_failure()
            }
        }
    }
}
