//! Core traits for dependency injection and testability
//!
//! The task queue only ever talks to [`PackageOperations`], and the winget
//! facade only ever talks to a [`CommandRunner`]. Tests swap either side for
//! an in-memory fake.

use crate::backends::command_exec::CommandOutput;
use crate::error::Result;

pub use crate::backends::command_exec::CommandRunner;

/// Mutating package operations executed by the background worker.
///
/// `Ok` carries the raw command result whatever its exit code; `Err` is reserved
/// for an operation that could not be attempted (`PkgdeckError::OperationFailed`).
pub trait PackageOperations: Send + Sync {
    /// Upgrade when the package is already installed, install otherwise.
    fn install_or_upgrade(&self, identifier: &str) -> Result<CommandOutput>;

    fn uninstall(&self, identifier: &str) -> Result<CommandOutput>;
}

impl<T: PackageOperations + ?Sized> PackageOperations for std::sync::Arc<T> {
    fn install_or_upgrade(&self, identifier: &str) -> Result<CommandOutput> {
        (**self).install_or_upgrade(identifier)
    }

    fn uninstall(&self, identifier: &str) -> Result<CommandOutput> {
        (**self).uninstall(identifier)
    }
}
