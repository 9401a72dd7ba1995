use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// A species entry in the reference dictionary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesEntry {
    /// Normalized table key (lowercase letters only), e.g. `bluefintuna`.
    #[validate(length(min = 1))]
    pub key: String,
    /// Display name, unique across the dictionary.
    #[validate(length(min = 1))]
    pub common_name: String,
    /// Binomial Latin name.
    #[validate(length(min = 1))]
    pub scientific_name: String,
    /// Alternate textual forms, used for matching only.
    #[validate(length(min = 1))]
    pub synonyms: Vec<String>,
    /// Region keys where the species is typically found. Informational.
    #[serde(default)]
    pub primary_regions: Vec<String>,
    #[serde(default)]
    pub habitat: String,
}

/// A marine region entry in the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegionEntry {
    /// Human-readable display name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Normalized unique key (lowercase letters only).
    #[validate(length(min = 1))]
    pub canonical_name: String,
    #[validate(length(min = 1))]
    pub synonyms: Vec<String>,
    #[validate(nested)]
    pub coordinates: Coordinates,
    #[validate(nested)]
    pub ocean_metrics: OceanMetrics,
}

/// Map display parameters: a center point, a zoom level and a bounding box.
///
/// `bbox` is `[min_lat, min_lng, max_lat, max_lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_bbox"))]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    pub zoom: u8,
    pub bbox: [f64; 4],
}

impl Coordinates {
    /// Whole-ocean overview used whenever no region information resolves.
    pub const GLOBAL_VIEW: Coordinates = Coordinates::new(0.0, 0.0, 2, [-60.0, -180.0, 60.0, 180.0]);

    pub const fn new(lat: f64, lng: f64, zoom: u8, bbox: [f64; 4]) -> Self {
        Self {
            lat,
            lng,
            zoom,
            bbox,
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.bbox[0]
    }

    pub fn min_lng(&self) -> f64 {
        self.bbox[1]
    }

    pub fn max_lat(&self) -> f64 {
        self.bbox[2]
    }

    pub fn max_lng(&self) -> f64 {
        self.bbox[3]
    }

    /// True when the bounding box corners are ordered and inside the globe.
    pub fn is_well_formed(&self) -> bool {
        self.min_lat() <= self.max_lat()
            && self.min_lng() <= self.max_lng()
            && (-90.0..=90.0).contains(&self.min_lat())
            && (-90.0..=90.0).contains(&self.max_lat())
            && (-180.0..=180.0).contains(&self.min_lng())
            && (-180.0..=180.0).contains(&self.max_lng())
    }
}

fn validate_bbox(coordinates: &Coordinates) -> Result<(), ValidationError> {
    if coordinates.bbox.iter().any(|v| !v.is_finite()) {
        return Err(ValidationError::new("bbox_not_finite"));
    }
    if !coordinates.is_well_formed() {
        return Err(ValidationError::new("bbox_out_of_order"));
    }
    Ok(())
}

/// Descriptive environmental snapshot of a region. Not used for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OceanMetrics {
    #[serde(rename = "salinityPSU")]
    #[validate(range(min = 0.0))]
    pub salinity_psu: f64,
    #[serde(rename = "pH")]
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,
    pub temperature_c: f64,
    #[serde(default)]
    pub popular_fishes: Vec<String>,
}

/// What a user query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// A species lookup. Also the fallback for unrecognized queries.
    Species,
    /// A region/ocean lookup without a species.
    Ocean,
    /// Both a species and a region.
    Composite,
}

impl QueryType {
    /// Classifies a query from the outcome of species and region resolution.
    pub fn classify(species_found: bool, region_found: bool) -> Self {
        match (species_found, region_found) {
            (true, true) => QueryType::Composite,
            (false, true) => QueryType::Ocean,
            (true, false) | (false, false) => QueryType::Species,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Species => "species",
            QueryType::Ocean => "ocean",
            QueryType::Composite => "composite",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of interpreting one free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub query_type: QueryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Canonical region key, or a raw text fragment around a region keyword.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_raw: Option<String>,
    /// The verbatim input.
    pub original_query: String,
}
