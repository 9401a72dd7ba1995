//! Marine query classification.
//!
//! Runs both resolvers over the query, classifies it as species / ocean /
//! composite and extracts a raw region fragment when the gazetteer has no hit
//! but the text mentions a body of water.

use tracing::debug;

use super::normalize::normalize_query;
use super::region::Gazetteer;
use super::species::SpeciesDictionary;
use crate::models::{ParsedQuery, QueryType};
use crate::reference::{builtin_tables, ReferenceData};

/// Words that indicate a body of water, scanned in this order.
pub const REGION_KEYWORDS: &[&str] = &["bay", "gulf", "sea", "ocean", "strait", "channel"];

/// Classifies free-text queries against a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct QueryParser<'a> {
    species: &'a SpeciesDictionary,
    gazetteer: &'a Gazetteer,
}

impl<'a> QueryParser<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            species: reference.species(),
            gazetteer: reference.gazetteer(),
        }
    }

    /// Parses a query. Never fails; an unrecognized query is a species query
    /// with no species.
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let normalized = normalize_query(query);

        let species_match = self.species.find(&normalized);
        let region_match = self.gazetteer.find(&normalized);

        let query_type = QueryType::classify(species_match.is_some(), region_match.is_some());

        let region_raw = match region_match {
            Some(region) => Some(region.canonical_name.clone()),
            None => extract_region_fragment(&normalized),
        };

        let parsed = ParsedQuery {
            query_type,
            species: species_match.map(|s| s.common_name.clone()),
            scientific_name: species_match.map(|s| s.scientific_name.clone()),
            region_raw,
            original_query: query.to_string(),
        };

        debug!(
            query_type = %parsed.query_type,
            species = parsed.species.as_deref().unwrap_or("-"),
            region_raw = parsed.region_raw.as_deref().unwrap_or("-"),
            "parsed marine query"
        );

        parsed
    }
}

/// Finds the first token containing a region keyword (keyword order first,
/// then token order) and returns it with one neighbouring token on each side.
///
/// The fragment is not checked against any place list; `"the gulf stream"`
/// and `"rising sea levels"` are both valid outputs.
pub fn extract_region_fragment(normalized: &str) -> Option<String> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    REGION_KEYWORDS.iter().find_map(|keyword| {
        let idx = tokens.iter().position(|token| token.contains(keyword))?;
        let start = idx.saturating_sub(1);
        let end = (idx + 2).min(tokens.len());
        Some(tokens[start..end].join(" "))
    })
}

/// Parses a query against the built-in reference tables.
pub fn parse_marine_query(query: &str) -> ParsedQuery {
    QueryParser::new(builtin_tables()).parse(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_query() {
        let parsed = parse_marine_query("hilsa in bay of bengal");
        assert_eq!(parsed.query_type, QueryType::Composite);
        assert_eq!(parsed.species.as_deref(), Some("Hilsa"));
        assert_eq!(parsed.scientific_name.as_deref(), Some("Tenualosa ilisha"));
        assert_eq!(parsed.region_raw.as_deref(), Some("bayofbengal"));
    }

    #[test]
    fn test_ocean_only_query() {
        let parsed = parse_marine_query("pacific ocean conditions");
        assert_eq!(parsed.query_type, QueryType::Ocean);
        assert!(parsed.species.is_none());
        assert!(parsed.scientific_name.is_none());
        assert_eq!(parsed.region_raw.as_deref(), Some("pacific"));
    }

    #[test]
    fn test_species_only_query() {
        let parsed = parse_marine_query("Salmo salar");
        assert_eq!(parsed.query_type, QueryType::Species);
        assert_eq!(parsed.species.as_deref(), Some("Salmon"));
        assert!(parsed.region_raw.is_none());
    }

    #[test]
    fn test_default_fallback_is_species() {
        let parsed = parse_marine_query("xyzzy unknown term");
        assert_eq!(parsed.query_type, QueryType::Species);
        assert!(parsed.species.is_none());
        assert!(parsed.region_raw.is_none());
    }

    #[test]
    fn test_original_query_is_verbatim() {
        let parsed = parse_marine_query("  Hilsa IN the Bay of Bengal?  ");
        assert_eq!(parsed.original_query, "  Hilsa IN the Bay of Bengal?  ");
    }

    #[test]
    fn test_keyword_window_when_gazetteer_misses() {
        let parsed = parse_marine_query("Tuna near the Gulf Stream");
        assert_eq!(parsed.query_type, QueryType::Species);
        assert_eq!(parsed.species.as_deref(), Some("Tuna"));
        assert_eq!(parsed.region_raw.as_deref(), Some("the gulf stream"));
    }

    #[test]
    fn test_extract_region_fragment_window_bounds() {
        assert_eq!(extract_region_fragment("bay watch").as_deref(), Some("bay watch"));
        assert_eq!(extract_region_fragment("the bay").as_deref(), Some("the bay"));
        assert_eq!(extract_region_fragment("bay").as_deref(), Some("bay"));
        assert_eq!(
            extract_region_fragment("fishing in the strait of hormuz").as_deref(),
            Some("the strait of")
        );
        assert!(extract_region_fragment("open water").is_none());
        assert!(extract_region_fragment("").is_none());
    }

    #[test]
    fn test_extract_region_fragment_keyword_order() {
        // "gulf" precedes "sea" in the keyword list even though "sea" appears
        // earlier in the text.
        assert_eq!(
            extract_region_fragment("sea birds over a gulf coast").as_deref(),
            Some("a gulf coast")
        );
    }

    #[test]
    fn test_extract_region_fragment_is_permissive() {
        // "research" contains "sea"; the fragment is kept as-is.
        assert_eq!(
            extract_region_fragment("latest research results").as_deref(),
            Some("latest research results")
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        for query in ["hilsa in bay of bengal", "pacific ocean conditions", "xyzzy", ""] {
            assert_eq!(parse_marine_query(query), parse_marine_query(query));
        }
    }

    #[test]
    fn test_empty_query() {
        let parsed = parse_marine_query("");
        assert_eq!(parsed.query_type, QueryType::Species);
        assert!(parsed.species.is_none());
        assert!(parsed.region_raw.is_none());
        assert_eq!(parsed.original_query, "");
    }
}
