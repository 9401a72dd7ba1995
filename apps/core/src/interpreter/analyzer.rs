//! Marine Analyzer - Main orchestrator for query interpretation.
//!
//! Runs the parser and coordinate ladder, then enriches the result with
//! region metrics, offline knowledge and suggested downstream strategies.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::coordinates::CoordinateResolver;
use super::insight::{InsightPacket, Strategy};
use super::parser::QueryParser;
use crate::knowledge::{ocean_topic_info, search_marine_knowledge};
use crate::models::QueryType;
use crate::reference::ReferenceData;

/// Main analyzer; cheap to clone and safe to share across threads
#[derive(Debug, Clone)]
pub struct MarineAnalyzer {
    reference: Arc<ReferenceData>,
}

impl Default for MarineAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarineAnalyzer {
    /// Create an analyzer over the built-in reference tables
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::builtin())
    }

    pub fn with_reference(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Suggest strategies based on query type and offline hits
    fn suggest_strategies(&self, packet: &InsightPacket) -> Vec<Strategy> {
        let mut strategies = Vec::new();

        match packet.query_type() {
            QueryType::Species => {
                strategies.push(Strategy::SpeciesPrediction);
            }
            QueryType::Composite => {
                strategies.push(Strategy::SpeciesPrediction);
                strategies.push(Strategy::TrendAnalysis);
                strategies.push(Strategy::OceanMetrics);
            }
            QueryType::Ocean => {
                strategies.push(Strategy::OceanMetrics);
            }
        }

        if packet.knowledge.is_some() || packet.ocean_topic.is_some() {
            strategies.push(Strategy::KnowledgeLookup);
        }

        strategies
    }

    /// Analyze a query and produce an insight packet
    pub fn analyze(&self, query: &str) -> InsightPacket {
        let start = Instant::now();

        // 1. Classify and extract entities
        let parsed = QueryParser::new(&self.reference).parse(query);

        // 2. Resolve the map view
        let gazetteer = self.reference.gazetteer();
        let coordinates = CoordinateResolver::new(gazetteer).resolve(parsed.region_raw.as_deref());

        let region = parsed.region_raw.as_deref().and_then(|raw| gazetteer.find(raw));
        let mut packet = InsightPacket::new(parsed, coordinates);

        // 3. Region details; metrics only when the query is about the region
        if let Some(region) = region {
            packet.region_canonical = Some(region.canonical_name.clone());
            if matches!(packet.query_type(), QueryType::Ocean | QueryType::Composite) {
                packet.ocean_metrics = Some(region.ocean_metrics.clone());
            }
        }

        // 4. Offline knowledge
        packet.knowledge = search_marine_knowledge(query).cloned();
        packet.ocean_topic = ocean_topic_info(query).map(str::to_string);

        // 5. Suggest strategies (needs type and knowledge first)
        packet.suggested_strategies = self.suggest_strategies(&packet);

        // 6. Set timing
        packet.processing_time_ms = start.elapsed().as_millis() as u64;
        packet.timestamp = Utc::now();

        info!(request_id = %packet.request_id, "{}", packet.summary());

        packet
    }

    /// Analyze many queries in order
    pub fn analyze_all<'q, I>(&self, queries: I) -> Vec<InsightPacket>
    where
        I: IntoIterator<Item = &'q str>,
    {
        queries.into_iter().map(|q| self.analyze(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    #[test]
    fn test_composite_analysis() {
        let analyzer = MarineAnalyzer::new();
        let packet = analyzer.analyze("hilsa in bay of bengal");

        assert_eq!(packet.query_type(), QueryType::Composite);
        assert_eq!(packet.region_canonical.as_deref(), Some("bayofbengal"));
        assert_eq!(packet.coordinates.zoom, 5);
        assert!(packet.ocean_metrics.is_some());
        assert_eq!(packet.knowledge.as_ref().unwrap().key, "hilsa");
        assert_eq!(
            packet.suggested_strategies,
            vec![
                Strategy::SpeciesPrediction,
                Strategy::TrendAnalysis,
                Strategy::OceanMetrics,
                Strategy::KnowledgeLookup
            ]
        );
    }

    #[test]
    fn test_ocean_analysis() {
        let analyzer = MarineAnalyzer::new();
        let packet = analyzer.analyze("pacific ocean conditions");

        assert_eq!(packet.query_type(), QueryType::Ocean);
        assert_eq!(packet.region_canonical.as_deref(), Some("pacific"));
        assert_eq!(packet.ocean_metrics.as_ref().unwrap().salinity_psu, 34.6);
        assert!(!packet.needs_prediction());
        assert_eq!(packet.suggested_strategies, vec![Strategy::OceanMetrics]);
    }

    #[test]
    fn test_species_analysis_has_no_metrics() {
        let analyzer = MarineAnalyzer::new();
        let packet = analyzer.analyze("Tuna near the Gulf Stream");

        assert_eq!(packet.query_type(), QueryType::Species);
        assert!(packet.region_canonical.is_none());
        assert!(packet.ocean_metrics.is_none());
        assert_eq!(packet.coordinates, Coordinates::GLOBAL_VIEW);
        assert!(packet.needs_prediction());
    }

    #[test]
    fn test_unknown_query_still_gets_a_map_view() {
        let analyzer = MarineAnalyzer::new();
        let packet = analyzer.analyze("xyzzy unknown term");

        assert_eq!(packet.query_type(), QueryType::Species);
        assert_eq!(packet.coordinates, Coordinates::GLOBAL_VIEW);
        assert!(packet.knowledge.is_none());
        assert_eq!(packet.suggested_strategies, vec![Strategy::SpeciesPrediction]);
    }

    #[test]
    fn test_ocean_topic_adds_knowledge_lookup() {
        let analyzer = MarineAnalyzer::new();
        let packet = analyzer.analyze("ocean acidification");

        assert!(packet.ocean_topic.is_some());
        assert!(packet.wants(Strategy::KnowledgeLookup));
    }

    #[test]
    fn test_analyze_all_keeps_order() {
        let analyzer = MarineAnalyzer::new();
        let packets = analyzer.analyze_all(["cod", "north sea"]);

        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].parsed.species.as_deref(), Some("Cod"));
        assert_eq!(packets[1].region_canonical.as_deref(), Some("northsea"));
    }

    #[test]
    fn test_packets_get_distinct_request_ids() {
        let analyzer = MarineAnalyzer::new();
        let a = analyzer.analyze("cod");
        let b = analyzer.analyze("cod");

        assert_ne!(a.request_id, b.request_id);
        assert_eq!(a.parsed, b.parsed);
        assert_eq!(a.coordinates, b.coordinates);
    }
}
