//! Settings Module
//!
//! `settings.kdl` in the config directory: package-manager binary, color mode,
//! progress bar and an optional user catalog file.

use crate::backends::DEFAULT_BINARY;
use crate::error::{PkgdeckError, Result};
use crate::utils::paths;
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::{Path, PathBuf};

const VALID_KEYS: [&str; 4] = ["binary", "color", "progress", "catalog"];
const COLOR_MODES: [&str; 3] = ["auto", "always", "never"];
const PROGRESS_MODES: [&str; 2] = ["on", "off"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Command prefix used to invoke the package manager.
    pub binary: String,
    /// `auto`, `always` or `never`.
    pub color: String,
    /// Redraw a progress bar under the log lines.
    pub progress: bool,
    /// Extra catalog entries, already resolved against the config directory.
    pub catalog: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            color: "auto".to_string(),
            progress: true,
            catalog: None,
        }
    }
}

impl Settings {
    /// Load `settings.kdl` from the config directory, or defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::settings_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PkgdeckError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, base)
    }

    /// Parse settings text; relative `catalog` paths are resolved against `base`.
    ///
    /// Keys may appear at the top level or inside a `settings { ... }` block.
    pub fn parse(content: &str, base: &Path) -> Result<Self> {
        let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
            PkgdeckError::ConfigError(format!("Invalid settings file: {}", e))
        })?;

        let mut settings = Self::default();

        for node in doc.nodes() {
            if node.name().value() == "settings" {
                if let Some(children) = node.children() {
                    for child in children.nodes() {
                        settings.apply_node(child, base)?;
                    }
                }
                continue;
            }
            settings.apply_node(node, base)?;
        }

        Ok(settings)
    }

    fn apply_node(&mut self, node: &KdlNode, base: &Path) -> Result<()> {
        let key = node.name().value();
        validate_key(key)?;

        let value = node
            .entries()
            .first()
            .and_then(|entry| entry.value().as_string())
            .ok_or_else(|| {
                PkgdeckError::ConfigError(format!("Setting '{}' expects a string value", key))
            })?;
        validate_value(key, value)?;

        match key {
            "binary" => self.binary = value.trim().to_string(),
            "color" => self.color = value.to_string(),
            "progress" => self.progress = value == "on",
            "catalog" => self.catalog = Some(paths::resolve_relative(base, Path::new(value))),
            _ => {}
        }

        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    if !VALID_KEYS.contains(&key) {
        return Err(PkgdeckError::ConfigError(format!(
            "Unknown setting: '{}'. Valid settings: {}",
            key,
            VALID_KEYS.join(", ")
        )));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<()> {
    let valid: &[&str] = match key {
        "color" => &COLOR_MODES,
        "progress" => &PROGRESS_MODES,
        _ => {
            if value.trim().is_empty() {
                return Err(PkgdeckError::ConfigError(format!(
                    "Setting '{}' cannot be empty",
                    key
                )));
            }
            return Ok(());
        }
    };

    if !valid.contains(&value) {
        return Err(PkgdeckError::ConfigError(format!(
            "Invalid value for '{}': '{}'. Valid: {}",
            key,
            value,
            valid.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests;
