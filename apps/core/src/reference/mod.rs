//! # Reference Module
//!
//! Static reference data shared by every resolution call.
//!
//! ## Components
//! - `species`: built-in species dictionary rows
//! - `gazetteer`: built-in marine region rows
//! - `loader`: JSON override files and validation
//!
//! Tables are ordered; iteration order decides ties between synonyms.

pub mod gazetteer;
pub mod loader;
pub mod species;

use std::sync::{Arc, LazyLock};
use tracing::{info, warn};
use validator::Validate;

use crate::error::AppError;
use crate::interpreter::region::Gazetteer;
use crate::interpreter::species::SpeciesDictionary;
use crate::models::{RegionEntry, SpeciesEntry};

pub use loader::ReferenceFile;

// NOTE: expect() is acceptable here: the built-in rows are literals covered by tests
static BUILTIN: LazyLock<Arc<ReferenceData>> = LazyLock::new(|| {
    Arc::new(
        ReferenceData::new(species::builtin_species(), gazetteer::builtin_regions())
            .expect("Invalid built-in reference tables"),
    )
});

/// Built-in tables, constructed on first use.
pub(crate) fn builtin_tables() -> &'static ReferenceData {
    &BUILTIN
}

/// Immutable species dictionary and gazetteer, safe to share across threads.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    species: SpeciesDictionary,
    gazetteer: Gazetteer,
}

impl ReferenceData {
    /// Validates every row and builds the lookup tables.
    pub fn new(species: Vec<SpeciesEntry>, regions: Vec<RegionEntry>) -> Result<Self, AppError> {
        for entry in &species {
            entry.validate().map_err(|e| {
                AppError::Validation(format!("species '{}': {}", entry.key, e))
            })?;
        }
        for entry in &regions {
            entry.validate().map_err(|e| {
                AppError::Validation(format!("region '{}': {}", entry.canonical_name, e))
            })?;
        }

        let data = Self {
            species: SpeciesDictionary::new(species)?,
            gazetteer: Gazetteer::new(regions)?,
        };

        for (species_key, region_key) in data.dangling_region_refs() {
            warn!(
                species = %species_key,
                region = %region_key,
                "species lists a primary region missing from the gazetteer"
            );
        }

        info!(
            species = data.species.len(),
            regions = data.gazetteer.len(),
            "reference tables loaded"
        );

        Ok(data)
    }

    /// Shared handle to the built-in tables.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    pub fn species(&self) -> &SpeciesDictionary {
        &self.species
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// `(species key, region key)` pairs whose region is not in the gazetteer.
    pub fn dangling_region_refs(&self) -> Vec<(&str, &str)> {
        self.species
            .entries()
            .iter()
            .flat_map(|entry| {
                entry
                    .primary_regions
                    .iter()
                    .filter(move |region| !self.gazetteer.contains_key(region))
                    .map(move |region| (entry.key.as_str(), region.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_build() {
        let data = ReferenceData::builtin();
        assert_eq!(data.species().len(), 12);
        assert_eq!(data.gazetteer().len(), 9);
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = ReferenceData::builtin();
        let b = ReferenceData::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_primary_regions_exist() {
        assert!(builtin_tables().dangling_region_refs().is_empty());
    }

    #[test]
    fn test_reference_data_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReferenceData>();
    }

    #[test]
    fn test_row_without_synonyms_rejected() {
        let mut rows = species::builtin_species();
        rows[0].synonyms.clear();
        let result = ReferenceData::new(rows, gazetteer::builtin_regions());
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("hilsa")));
    }

    #[test]
    fn test_dangling_region_reported() {
        let mut rows = species::builtin_species();
        rows[0].primary_regions.push("caspian".to_string());
        let data = ReferenceData::new(rows, gazetteer::builtin_regions()).unwrap();
        assert_eq!(data.dangling_region_refs(), vec![("hilsa", "caspian")]);
    }
}
