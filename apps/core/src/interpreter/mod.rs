//! # Interpreter Module
//!
//! Deterministic, rule-based interpretation of free-text marine queries.
//! Runs BEFORE any external model call to decide what to ask and where to
//! point the map.
//!
//! ## Components
//! - `normalize`: text normalization and ordered match forms
//! - `species`: species resolution against the dictionary
//! - `region`: region resolution against the gazetteer
//! - `parser`: query classification (species / ocean / composite)
//! - `coordinates`: region text to map view ladder
//! - `insight`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod coordinates;
pub mod insight;
pub mod normalize;
pub mod parser;
pub mod region;
pub mod species;

// Re-export main types for convenience
pub use analyzer::MarineAnalyzer;
pub use coordinates::{resolve_region_coordinates, CoordinateResolver};
pub use insight::{fallback_prediction, InsightPacket, PredictionSnapshot, Strategy};
pub use parser::{parse_marine_query, QueryParser};
pub use region::{find_marine_region, Gazetteer};
pub use species::{find_species, SpeciesDictionary};
