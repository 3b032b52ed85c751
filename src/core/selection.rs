use crate::core::types::{ActionKind, Batch};

/// Identifiers the user currently wants acted upon.
///
/// Keeps insertion order so the resulting batch runs in the order items were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    identifiers: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the identifier was already selected.
    pub fn select(&mut self, identifier: &str) -> bool {
        if self.is_selected(identifier) {
            return false;
        }
        self.identifiers.push(identifier.to_string());
        true
    }

    pub fn deselect(&mut self, identifier: &str) -> bool {
        let before = self.identifiers.len();
        self.identifiers.retain(|id| id != identifier);
        self.identifiers.len() != before
    }

    /// Flip selection state; returns the new state.
    pub fn toggle(&mut self, identifier: &str) -> bool {
        if self.deselect(identifier) {
            false
        } else {
            self.select(identifier)
        }
    }

    pub fn is_selected(&self, identifier: &str) -> bool {
        self.identifiers.iter().any(|id| id == identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn clear(&mut self) {
        self.identifiers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    /// Build a batch from the current selection, or `None` when nothing is selected.
    pub fn to_batch(&self, action: ActionKind) -> Option<Batch> {
        if self.is_empty() {
            return None;
        }
        Some(Batch::new(action, self.identifiers.clone()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.select(id.as_ref());
        }
        set
    }
}
