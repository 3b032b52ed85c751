//! Input sanitization utilities for security
//!
//! Every piece of user-supplied text (search terms, package identifiers) goes
//! through [`shell_escape`] before it is spliced into a shell command line.

use crate::error::{PkgdeckError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Characters that never need quoting in a POSIX shell word.
static SHELL_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@+=:,./_-]+$").expect("Invalid regex pattern"));

const MAX_IDENTIFIER_LEN: usize = 256;

/// Quote `input` so the host shell passes it through as a single literal argument.
///
/// Unix: POSIX single-quote style (`it's` becomes `'it'"'"'s'`).
/// Windows (`cmd /C`): double-quote wrapping; `"` and `%` are dropped because
/// `cmd` cannot escape them inside a quoted argument.
pub fn shell_escape(input: &str) -> String {
    let input: String = input.chars().filter(|c| *c != '\0').collect();

    if SHELL_SAFE.is_match(&input) {
        return input;
    }

    #[cfg(windows)]
    {
        let cleaned: String = input.chars().filter(|c| *c != '"' && *c != '%').collect();
        return format!("\"{}\"", cleaned);
    }

    #[cfg(not(windows))]
    {
        return format!("'{}'", input.replace('\'', "'\"'\"'"));
    }
}

/// Validate a package identifier before a mutating call.
///
/// Shell injection is handled by [`shell_escape`]; this only rejects values no
/// package manager would accept as an identifier.
pub fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(PkgdeckError::operation_failed(
            identifier,
            "Package identifier cannot be empty",
        ));
    }

    if identifier.chars().count() > MAX_IDENTIFIER_LEN {
        let prefix: String = identifier.chars().take(50).collect();
        return Err(PkgdeckError::operation_failed(
            identifier,
            format!(
                "Package identifier too long (max {} chars): {}...",
                MAX_IDENTIFIER_LEN, prefix
            ),
        ));
    }

    if identifier.chars().any(char::is_control) {
        return Err(PkgdeckError::operation_failed(
            identifier,
            "Package identifier contains control characters",
        ));
    }

    Ok(())
}

/// Shorten a command line for log output. This does NOT make it safe to execute.
pub fn sanitize_for_display(input: &str) -> String {
    if input.chars().count() > 200 {
        let head: String = input.chars().take(200).collect();
        format!("{}...", head)
    } else {
        input.to_string()
    }
}
