use crate::error::{PkgdeckError, Result};
use crate::project_identity;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config directory (used by tests and portable setups).
pub const CONFIG_DIR_ENV: &str = "PKGDECK_CONFIG_DIR";

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let proj = ProjectDirs::from(
        project_identity::QUALIFIER,
        project_identity::ORGANIZATION,
        project_identity::CONFIG_DIR_NAME,
    )
    .ok_or_else(|| PkgdeckError::Other("Could not determine config directory".to_string()))?;
    Ok(proj.config_dir().to_path_buf())
}

pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::SETTINGS_FILE_BASENAME))
}

/// Resolve a path from the settings file: relative paths are taken from `base`.
pub fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
