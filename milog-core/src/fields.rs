//! Ordered field storage for report sections.
//!
//! MediaInfo text sections are open-ended key/value dumps whose field
//! set drifts across tool versions, so sections are kept as ordered
//! string maps rather than fixed structs; only the fields a given
//! derivation rule reads get typed accessors elsewhere.

use serde::{Deserialize, Serialize};

/// Insertion-ordered map from field name to field value.
///
/// Keys are unique within one section; inserting an existing key
/// overwrites the value while the key keeps its original position.
/// Sections are small (a few dozen fields), so lookups are linear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a field, trimming both name and value.
    pub fn insert(&mut self, name: &str, value: &str) {
        let name = name.trim();
        let value = value.trim();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
