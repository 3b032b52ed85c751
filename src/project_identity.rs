//! Central project identity contract.
//!
//! Single source of truth for the binary name, config directory names and
//! environment variable prefix.

pub const DISPLAY_NAME: &str = "Pkgdeck";
pub const BINARY_NAME: &str = "pkgdeck";
pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "pkgdeck";
pub const CONFIG_DIR_NAME: &str = "pkgdeck";
pub const ENV_PREFIX: &str = "PKGDECK";
pub const SETTINGS_FILE_BASENAME: &str = "settings.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

/// `pkgdeck <args>`, for hints printed to the user.
pub fn cli_with(args: &str) -> String {
    format!("{} {}", BINARY_NAME, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_uses_prefix() {
        assert_eq!(env_key("CONFIG_DIR"), "PKGDECK_CONFIG_DIR");
    }

    #[test]
    fn cli_with_prefixes_binary() {
        assert_eq!(cli_with("install Git.Git"), "pkgdeck install Git.Git");
    }
}
