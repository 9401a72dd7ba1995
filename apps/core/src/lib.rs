//! Marine Insight Core
//!
//! Rule-based interpretation of free-text marine queries: which species,
//! which body of water, what kind of question, and where to point the map.
//!
//! ```ignore
//! use marine_insight::MarineAnalyzer;
//!
//! let packet = MarineAnalyzer::new().analyze("hilsa in bay of bengal");
//! assert_eq!(packet.coordinates.zoom, 5);
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod knowledge;
pub mod logging;
pub mod models;
pub mod reference;

#[cfg(test)]
mod tests;

pub use config::{AppConfig, LogFormat};
pub use error::AppError;
pub use interpreter::{
    fallback_prediction, find_marine_region, find_species, parse_marine_query,
    resolve_region_coordinates, InsightPacket, MarineAnalyzer, Strategy,
};
pub use knowledge::{format_knowledge_entry, ocean_topic_info, search_marine_knowledge};
pub use models::{Coordinates, OceanMetrics, ParsedQuery, QueryType, RegionEntry, SpeciesEntry};
pub use reference::{ReferenceData, ReferenceFile};
