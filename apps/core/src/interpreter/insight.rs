//! Insight Packet - Output structure for query analysis.
//!
//! Everything a downstream consumer needs to decide which external model
//! calls to make and where to point the map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::KnowledgeEntry;
use crate::models::{Coordinates, OceanMetrics, ParsedQuery, QueryType};

/// Suggested downstream work for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Ask the prediction model about the species
    SpeciesPrediction,
    /// Ask for a species-in-region trend summary
    TrendAnalysis,
    /// Show the region's ocean metrics panel
    OceanMetrics,
    /// Answer from the offline knowledge base
    KnowledgeLookup,
}

/// Prediction values served when the external model is unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSnapshot {
    pub stock_status: String,
    pub fish_population: String,
    pub climate_change: String,
    pub genetic_diversity: String,
    pub confidence: String,
    pub prediction_summary: String,
}

impl PredictionSnapshot {
    pub fn fallback() -> Self {
        Self {
            stock_status: "Stable".to_string(),
            fish_population: "+5.2%".to_string(),
            climate_change: "-2.1%".to_string(),
            genetic_diversity: "Medium".to_string(),
            confidence: "85%".to_string(),
            prediction_summary: "Fallback prediction based on general marine trends.".to_string(),
        }
    }
}

/// Prediction to show when the external model call fails.
pub fn fallback_prediction() -> PredictionSnapshot {
    PredictionSnapshot::fallback()
}

/// Complete analysis of one query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPacket {
    /// Unique id for log correlation
    pub request_id: Uuid,

    /// Classification and extracted entities
    pub parsed: ParsedQuery,

    /// Map view for the query; always populated
    pub coordinates: Coordinates,

    /// Canonical gazetteer key when the region text resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_canonical: Option<String>,

    /// Region snapshot, only for ocean and composite queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocean_metrics: Option<OceanMetrics>,

    /// Offline knowledge entry matching the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<KnowledgeEntry>,

    /// Offline ocean-topic note matching the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocean_topic: Option<String>,

    pub suggested_strategies: Vec<Strategy>,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub timestamp: DateTime<Utc>,
}

impl InsightPacket {
    /// Create a packet with only the parse result and map view filled in
    pub fn new(parsed: ParsedQuery, coordinates: Coordinates) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            parsed,
            coordinates,
            region_canonical: None,
            ocean_metrics: None,
            knowledge: None,
            ocean_topic: None,
            suggested_strategies: vec![],
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn query_type(&self) -> QueryType {
        self.parsed.query_type
    }

    pub fn wants(&self, strategy: Strategy) -> bool {
        self.suggested_strategies.contains(&strategy)
    }

    /// Whether a consumer should call the external prediction model
    pub fn needs_prediction(&self) -> bool {
        self.wants(Strategy::SpeciesPrediction)
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Type: {}, Species: {}, Region: {}, Zoom: {}, Strategies: {}, Knowledge: {}",
            self.parsed.query_type,
            self.parsed.species.as_deref().unwrap_or("-"),
            self.region_canonical
                .as_deref()
                .or(self.parsed.region_raw.as_deref())
                .unwrap_or("-"),
            self.coordinates.zoom,
            self.suggested_strategies.len(),
            if self.knowledge.is_some() || self.ocean_topic.is_some() {
                "yes"
            } else {
                "no"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(query_type: QueryType) -> ParsedQuery {
        ParsedQuery {
            query_type,
            species: Some("Cod".to_string()),
            scientific_name: Some("Gadus morhua".to_string()),
            region_raw: None,
            original_query: "cod".to_string(),
        }
    }

    #[test]
    fn test_packet_creation() {
        let packet = InsightPacket::new(parsed(QueryType::Species), Coordinates::GLOBAL_VIEW);

        assert_eq!(packet.query_type(), QueryType::Species);
        assert!(packet.suggested_strategies.is_empty());
        assert!(packet.region_canonical.is_none());
        assert!(!packet.needs_prediction());
    }

    #[test]
    fn test_summary() {
        let mut packet = InsightPacket::new(parsed(QueryType::Species), Coordinates::GLOBAL_VIEW);
        packet.suggested_strategies.push(Strategy::SpeciesPrediction);
        let summary = packet.summary();

        assert!(summary.contains("Type: species"));
        assert!(summary.contains("Species: Cod"));
        assert!(summary.contains("Region: -"));
        assert!(summary.contains("Knowledge: no"));
    }

    #[test]
    fn test_strategy_wire_names() {
        let json = serde_json::to_string(&Strategy::SpeciesPrediction).unwrap();
        assert_eq!(json, "\"species_prediction\"");
    }

    #[test]
    fn test_fallback_prediction_values() {
        let fallback = fallback_prediction();
        assert_eq!(fallback.stock_status, "Stable");
        assert_eq!(fallback.fish_population, "+5.2%");
        assert_eq!(fallback.confidence, "85%");
    }

    #[test]
    fn test_packet_json_shape() {
        let packet = InsightPacket::new(parsed(QueryType::Species), Coordinates::GLOBAL_VIEW);
        let value = serde_json::to_value(&packet).unwrap();

        assert_eq!(value["parsed"]["queryType"], "species");
        assert_eq!(value["coordinates"]["zoom"], 2);
        assert!(value.get("regionCanonical").is_none());
        assert!(value.get("requestId").is_some());
    }
}
