use crate::backends::command_exec::{CommandOutput, CommandRunner, ShellRunner};
use crate::backends::parsers;
use crate::core::types::PackageRecord;
use crate::error::Result;
use crate::traits::PackageOperations;
use crate::ui;
use crate::utils::sanitize;

/// Binary invoked when the settings do not name another one.
pub const DEFAULT_BINARY: &str = "winget";

const INSTALL_FLAGS: &str =
    "--exact --silent --accept-package-agreements --accept-source-agreements";
const UNINSTALL_FLAGS: &str = "--exact --silent";

/// Intent-level operations on top of the winget CLI.
///
/// Install state is re-read from the CLI on every mutating call; nothing is cached,
/// the tool's state can change outside this process between two calls.
pub struct WingetManager<R: CommandRunner = ShellRunner> {
    runner: R,
    binary: String,
}

impl WingetManager<ShellRunner> {
    pub fn new(binary: &str) -> Self {
        Self::with_runner(ShellRunner::new(), binary)
    }
}

impl Default for WingetManager<ShellRunner> {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl<R: CommandRunner> WingetManager<R> {
    /// `binary` is a trusted command prefix from the settings (it may carry
    /// extra arguments) and is placed into the command line unquoted.
    pub fn with_runner(runner: R, binary: &str) -> Self {
        Self {
            runner,
            binary: binary.trim().to_string(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Whether the program named by the binary prefix can be found on PATH.
    pub fn is_available(&self) -> bool {
        shlex::split(&self.binary)
            .and_then(|parts| parts.into_iter().next())
            .is_some_and(|program| which::which(program).is_ok())
    }

    fn run(&self, args: &str) -> CommandOutput {
        self.runner.run(&format!("{} {}", self.binary, args))
    }

    /// Live search. Empty on an empty query or on any failure.
    pub fn search(&self, query: &str) -> Vec<PackageRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let output = self.run(&format!("search {}", sanitize::shell_escape(query)));
        parsers::parse_columns(&output.stdout)
    }

    /// Everything the package manager reports as installed.
    pub fn list_installed(&self) -> Vec<PackageRecord> {
        let output = self.run("list");
        parsers::parse_columns(&output.stdout)
    }

    /// Heuristic: the identifier appears (case-insensitively) anywhere in the
    /// output of an exact-match list query. An identifier that is a substring of
    /// another installed identifier can give a false positive.
    pub fn is_installed(&self, identifier: &str) -> bool {
        let output = self.run(&format!(
            "list --id {} --exact",
            sanitize::shell_escape(identifier)
        ));
        output
            .stdout
            .to_lowercase()
            .contains(&identifier.to_lowercase())
    }

    fn install(&self, identifier: &str) -> CommandOutput {
        self.run(&format!(
            "install --id {} {}",
            sanitize::shell_escape(identifier),
            INSTALL_FLAGS
        ))
    }

    fn upgrade(&self, identifier: &str) -> CommandOutput {
        self.run(&format!(
            "upgrade --id {} {}",
            sanitize::shell_escape(identifier),
            INSTALL_FLAGS
        ))
    }
}

impl<R: CommandRunner> PackageOperations for WingetManager<R> {
    fn install_or_upgrade(&self, identifier: &str) -> Result<CommandOutput> {
        sanitize::validate_identifier(identifier)?;

        if self.is_installed(identifier) {
            ui::verbose(&format!("{} is installed, upgrading", identifier));
            Ok(self.upgrade(identifier))
        } else {
            Ok(self.install(identifier))
        }
    }

    fn uninstall(&self, identifier: &str) -> Result<CommandOutput> {
        sanitize::validate_identifier(identifier)?;

        Ok(self.run(&format!(
            "uninstall --id {} {}",
            sanitize::shell_escape(identifier),
            UNINSTALL_FLAGS
        )))
    }
}
