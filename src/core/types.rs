use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag carried by every record that came from a live package-manager query
/// rather than from the curated catalog.
pub const SEARCH_CATEGORY: &str = "Winget";

/// One package as shown to the user.
///
/// The identifier is the key every operation uses; the name is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Id")]
    pub identifier: String,
    #[serde(rename = "Category")]
    pub category: String,
}

impl PackageRecord {
    pub fn new(name: &str, identifier: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
            category: category.to_string(),
        }
    }

    /// Record produced by parsing live CLI output.
    pub fn from_query(name: &str, identifier: &str) -> Self {
        Self::new(name, identifier, SEARCH_CATEGORY)
    }

    /// Case-insensitive match of `needle` against name or identifier.
    /// An empty needle matches everything.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.identifier.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Install when absent, upgrade when present.
    Install,
    Uninstall,
}

impl ActionKind {
    /// Verb shown in progress messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Install => "Installing/Updating",
            Self::Uninstall => "Uninstalling",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One user-confirmed bulk operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub action: ActionKind,
    pub identifiers: Vec<String>,
}

impl Batch {
    pub fn new(action: ActionKind, identifiers: Vec<String>) -> Self {
        Self {
            action,
            identifiers,
        }
    }

    pub fn install<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ActionKind::Install,
            identifiers.into_iter().map(Into::into).collect(),
        )
    }

    pub fn uninstall<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            ActionKind::Uninstall,
            identifiers.into_iter().map(Into::into).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Transient progress notification; delivered to listeners, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub message: String,
    pub percent: u8,
}

impl ProgressEvent {
    pub fn new(message: impl Into<String>, percent: u8) -> Self {
        Self {
            message: message.into(),
            percent: percent.min(100),
        }
    }
}

/// Terminal outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Summary {
    Done,
    Cancelled,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => write!(f, "Done"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerState {
    Idle,
    Running,
    Cancelling,
    Finished,
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Cancelling => write!(f, "cancelling"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
