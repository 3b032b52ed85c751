//! # Package-manager backend
//!
//! Everything that touches the external package-manager CLI lives here.
//!
//! ## Module Structure
//!
//! ### [`command_exec`] - Command Runner
//!
//! `CommandRunner` executes one complete command line through the host shell and
//! returns stdout, stderr and the exit code. It never fails: a process that cannot
//! be launched is reported as empty output with `LAUNCH_FAILURE_CODE`.
//!
//! ### [`parsers`] - Output Parsers
//!
//! Turns column-aligned CLI text (`Name  Id  Version ...`) into `PackageRecord`s.
//! Lines that do not have the expected shape are skipped.
//!
//! ### [`winget`] - Package Operations Facade
//!
//! `WingetManager` builds search, list, install-or-upgrade and uninstall on top of
//! the runner and the parser. All user text is shell-quoted before it reaches
//! the command line.

pub mod command_exec;
pub mod parsers;
pub mod winget;

pub use command_exec::{CommandOutput, CommandRunner, LAUNCH_FAILURE_CODE, ShellRunner};
pub use winget::{DEFAULT_BINARY, WingetManager};
