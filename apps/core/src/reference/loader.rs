//! Reference data override files.
//!
//! A reference file is a JSON document with two ordered arrays:
//!
//! ```json
//! { "species": [ { "key": "hilsa", "commonName": "Hilsa", ... } ],
//!   "regions": [ { "name": "Bay of Bengal", "canonicalName": "bayofbengal", ... } ] }
//! ```
//!
//! Array order is match order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use super::ReferenceData;
use crate::error::AppError;
use crate::models::{RegionEntry, SpeciesEntry};

/// On-disk shape of the reference tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceFile {
    pub species: Vec<SpeciesEntry>,
    pub regions: Vec<RegionEntry>,
}

impl ReferenceFile {
    /// Snapshot of the tables currently held by `data`.
    pub fn from_reference(data: &ReferenceData) -> Self {
        Self {
            species: data.species().entries().to_vec(),
            regions: data.gazetteer().entries().to_vec(),
        }
    }
}

impl ReferenceData {
    /// Parses and validates reference tables from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let file: ReferenceFile = serde_json::from_str(json)?;
        Self::new(file.species, file.regions)
    }

    /// Reads, parses and validates reference tables from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected reference file");
        })
    }

    /// Loads the override at `path` if one is given, else the built-in tables.
    pub fn load(path: Option<&Path>) -> Result<Arc<Self>, AppError> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "loading reference tables from file");
                Ok(Arc::new(Self::from_path(path)?))
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Pretty JSON export, a valid starting point for an override file.
    pub fn to_json_string(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&ReferenceFile::from_reference(self))?)
    }
}
