//! Region resolution against the marine gazetteer.

use std::collections::HashMap;
use tracing::debug;

use super::normalize::{normalize_key, MatchForms};
use crate::error::AppError;
use crate::models::RegionEntry;
use crate::reference::builtin_tables;

/// Ordered, immutable gazetteer keyed by canonical name.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<RegionEntry>,
    by_canonical_name: HashMap<String, usize>,
    forms: MatchForms,
}

impl Gazetteer {
    /// Builds the gazetteer. Canonical names must be unique and already normalized.
    pub fn new(entries: Vec<RegionEntry>) -> Result<Self, AppError> {
        let mut by_canonical_name = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            let canonical = normalize_key(&entry.canonical_name);
            if canonical != entry.canonical_name {
                return Err(AppError::Validation(format!(
                    "region canonical name '{}' is not normalized (expected '{}')",
                    entry.canonical_name, canonical
                )));
            }
            if by_canonical_name.insert(canonical, idx).is_some() {
                return Err(AppError::DuplicateKey {
                    table: "region",
                    key: entry.canonical_name.clone(),
                });
            }
        }

        let forms = MatchForms::new(
            entries
                .iter()
                .map(|e| (e.canonical_name.as_str(), &e.synonyms)),
        );

        Ok(Self {
            entries,
            by_canonical_name,
            forms,
        })
    }

    /// Finds the best-matching region for free text: direct canonical key first,
    /// then symmetric substring over keys and synonyms in table order.
    pub fn find(&self, text: &str) -> Option<&RegionEntry> {
        let needle = normalize_key(text);
        if needle.is_empty() {
            return None;
        }

        if let Some(entry) = self.get(&needle) {
            debug!(needle = %needle, region = %entry.canonical_name, "region matched by key");
            return Some(entry);
        }

        let idx = self.forms.first_match(&needle)?;
        let entry = &self.entries[idx];
        debug!(needle = %needle, region = %entry.canonical_name, "region matched by synonym");
        Some(entry)
    }

    /// Entry by exact canonical name.
    pub fn get(&self, canonical_name: &str) -> Option<&RegionEntry> {
        self.by_canonical_name
            .get(canonical_name)
            .map(|&idx| &self.entries[idx])
    }

    pub fn contains_key(&self, canonical_name: &str) -> bool {
        self.by_canonical_name.contains_key(canonical_name)
    }

    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Finds a region in the built-in gazetteer.
pub fn find_marine_region(text: &str) -> Option<&'static RegionEntry> {
    builtin_tables().gazetteer().find(text)
}
