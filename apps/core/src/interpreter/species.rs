//! Species resolution against the species dictionary.
//!
//! Lookup order: exact key, then scientific name, then symmetric substring
//! over each entry's key and synonyms in table order.

use std::collections::HashMap;
use tracing::debug;

use super::normalize::{normalize_key, MatchForms};
use crate::error::AppError;
use crate::models::SpeciesEntry;
use crate::reference::builtin_tables;

/// Ordered, immutable species table with lookup indexes.
#[derive(Debug, Clone)]
pub struct SpeciesDictionary {
    entries: Vec<SpeciesEntry>,
    by_key: HashMap<String, usize>,
    by_scientific_name: HashMap<String, usize>,
    forms: MatchForms,
}

impl SpeciesDictionary {
    /// Builds the dictionary, rejecting duplicate keys and common names.
    pub fn new(entries: Vec<SpeciesEntry>) -> Result<Self, AppError> {
        let mut by_key = HashMap::with_capacity(entries.len());
        let mut common_names = HashMap::with_capacity(entries.len());
        let mut by_scientific_name = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            let key = normalize_key(&entry.key);
            if key != entry.key {
                return Err(AppError::Validation(format!(
                    "species key '{}' is not normalized (expected '{}')",
                    entry.key, key
                )));
            }
            if by_key.insert(key, idx).is_some() {
                return Err(AppError::DuplicateKey {
                    table: "species",
                    key: entry.key.clone(),
                });
            }
            if common_names.insert(entry.common_name.clone(), idx).is_some() {
                return Err(AppError::DuplicateKey {
                    table: "species common name",
                    key: entry.common_name.clone(),
                });
            }
            // Later entries overwrite earlier ones sharing a scientific name.
            by_scientific_name.insert(normalize_key(&entry.scientific_name), idx);
        }

        let forms = MatchForms::new(entries.iter().map(|e| (e.key.as_str(), &e.synonyms)));

        Ok(Self {
            entries,
            by_key,
            by_scientific_name,
            forms,
        })
    }

    /// Finds the best-matching species for free text. `None` is a normal outcome.
    pub fn find(&self, text: &str) -> Option<&SpeciesEntry> {
        let needle = normalize_key(text);
        if needle.is_empty() {
            return None;
        }

        if let Some(&idx) = self.by_key.get(&needle) {
            debug!(needle = %needle, key = %self.entries[idx].key, "species matched by key");
            return Some(&self.entries[idx]);
        }

        if let Some(&idx) = self.by_scientific_name.get(&needle) {
            debug!(needle = %needle, key = %self.entries[idx].key, "species matched by scientific name");
            return Some(&self.entries[idx]);
        }

        let idx = self.forms.first_match(&needle)?;
        debug!(needle = %needle, key = %self.entries[idx].key, "species matched by synonym");
        Some(&self.entries[idx])
    }

    /// Entry by exact table key.
    pub fn get(&self, key: &str) -> Option<&SpeciesEntry> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[SpeciesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds a species in the built-in dictionary.
pub fn find_species(text: &str) -> Option<&'static SpeciesEntry> {
    builtin_tables().species().find(text)
}
