//! Token manifest: the JSON key-shortcut file uploaded alongside a theme.
//!
//! A manifest maps canonical variable names to the library keys the host
//! needs for imports, letting the caller skip enumerating a whole library
//! collection.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use swatch_core::ResolveError;

use crate::candidates::candidate_names;

/// One manifest record for a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Library key used to import the variable.
    pub key: String,
    /// Host-side variable id, when the manifest was exported from a file
    /// that already materialized the variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the collection the variable lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
}

/// An uploaded token manifest, preserving the file's entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenManifest {
    entries: IndexMap<String, ManifestEntry>,
}

impl TokenManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a manifest from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, ResolveError> {
        let entries: IndexMap<String, ManifestEntry> =
            serde_json::from_str(text).map_err(|e| ResolveError::InvalidManifest {
                reason: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Insert an entry under a canonical variable name.
    pub fn insert(&mut self, name: &str, entry: ManifestEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.get(name)
    }

    /// Look up the library key for a reference, walking the candidate-name
    /// fallback chain.
    pub fn find_key(&self, name: &str) -> Option<&str> {
        candidate_names(name)
            .iter()
            .find_map(|candidate| self.entries.get(candidate))
            .map(|entry| entry.key.as_str())
    }

    /// Iterate entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ManifestEntry)> {
        self.entries.iter()
    }

    /// Number of entries in the manifest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
