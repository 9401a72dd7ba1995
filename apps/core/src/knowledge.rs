//! Offline marine knowledge base.
//!
//! Encyclopedic entries for well-known marine organisms and short notes on
//! ocean topics, answerable without any external model.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::LazyLock;

/// One encyclopedic entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub key: String,
    pub common_name: String,
    pub scientific_name: String,
    pub family: String,
    pub habitat: String,
    pub significance: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_importance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conservation_status: Option<String>,
    pub related_topics: Vec<String>,
}

impl KnowledgeEntry {
    /// Lowercased text searched by the second lookup pass.
    fn searchable_text(&self) -> String {
        let significance = self.significance.join(" ");
        let topics = self.related_topics.join(" ");
        [
            self.common_name.as_str(),
            significance.as_str(),
            topics.as_str(),
            self.habitat.as_str(),
            self.cultural_importance.as_deref().unwrap_or(""),
            self.distribution.as_deref().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase()
    }
}

struct EntryBuilder(KnowledgeEntry);

impl EntryBuilder {
    fn new(key: &str, common_name: &str, scientific_name: &str, family: &str, habitat: &str) -> Self {
        Self(KnowledgeEntry {
            key: key.to_string(),
            common_name: common_name.to_string(),
            scientific_name: scientific_name.to_string(),
            family: family.to_string(),
            habitat: habitat.to_string(),
            significance: Vec::new(),
            physical_description: None,
            distribution: None,
            cultural_importance: None,
            nutritional_value: None,
            conservation_status: None,
            related_topics: Vec::new(),
        })
    }

    fn significance(mut self, points: &[&str]) -> Self {
        self.0.significance = points.iter().map(|s| s.to_string()).collect();
        self
    }

    fn physical_description(mut self, text: &str) -> Self {
        self.0.physical_description = Some(text.to_string());
        self
    }

    fn distribution(mut self, text: &str) -> Self {
        self.0.distribution = Some(text.to_string());
        self
    }

    fn cultural_importance(mut self, text: &str) -> Self {
        self.0.cultural_importance = Some(text.to_string());
        self
    }

    fn conservation_status(mut self, text: &str) -> Self {
        self.0.conservation_status = Some(text.to_string());
        self
    }

    fn related_topics(mut self, topics: &[&str]) -> KnowledgeEntry {
        self.0.related_topics = topics.iter().map(|s| s.to_string()).collect();
        self.0
    }
}

static KNOWLEDGE_BASE: LazyLock<Vec<KnowledgeEntry>> = LazyLock::new(|| {
    vec![
        EntryBuilder::new(
            "hilsa",
            "Hilsa (also called Ilish, Pulasa, or Palva depending on region)",
            "Tenualosa ilisha",
            "Clupeidae (same family as herrings and sardines)",
            "Anadromous: lives in the sea but migrates to rivers (like the Ganges, Padma, Meghna, Godavari) for spawning",
        )
        .significance(&[
            "One of the most famous and highly valued fish in South Asia, especially in India (West Bengal), Bangladesh (where it's the national fish), and parts of Myanmar",
            "Culinary delicacy, especially during monsoon season",
            "Cultural importance in Bengal and Bangladesh: dishes like Ilish bhapa, Ilish paturi, and Ilish macher jhol are iconic",
            "Rich in Omega-3 fatty acids, though very bony, which makes eating it a skilled art",
        ])
        .distribution("Found in the Indo-Pacific region, primarily in the Bay of Bengal and Arabian Sea")
        .conservation_status("Near threatened due to overfishing and habitat degradation")
        .related_topics(&["Bengali cuisine", "Anadromous fish", "Bay of Bengal", "Monsoon fishing", "South Asian culture"]),
        EntryBuilder::new(
            "tuna",
            "Tuna",
            "Thunnus species",
            "Scombridae (mackerels and tunas)",
            "Pelagic waters of all major oceans, highly migratory",
        )
        .significance(&[
            "One of the most commercially important fish globally",
            "Key species for sushi and sashimi cuisine",
            "Critical to marine food webs as both predator and prey",
            "Source of high-quality protein and omega-3 fatty acids",
        ])
        .physical_description("Large, torpedo-shaped body built for speed and endurance, with retractable fins")
        .distribution("Found in warm waters of Atlantic, Pacific, and Indian Oceans")
        .conservation_status("Varies by species: some like Bluefin tuna are critically endangered")
        .related_topics(&["Commercial fishing", "Sushi", "Ocean conservation", "Pelagic ecosystem", "Migratory fish"]),
        EntryBuilder::new(
            "salmon",
            "Salmon",
            "Salmo and Oncorhynchus species",
            "Salmonidae",
            "Anadromous: born in fresh water, mature in ocean, return to spawn",
        )
        .significance(&[
            "Iconic species of Pacific Northwest and North Atlantic",
            "Cultural cornerstone for Indigenous communities",
            "Major commercial and recreational fishery",
            "Keystone species in both marine and freshwater ecosystems",
        ])
        .physical_description("Streamlined body that changes color during spawning runs")
        .distribution("North Pacific and North Atlantic oceans and their tributary rivers")
        .cultural_importance("Sacred to many Indigenous peoples; featured in art, stories, and ceremonies")
        .related_topics(&["Pacific Northwest", "Indigenous culture", "Spawning migration", "Ecosystem restoration"]),
        EntryBuilder::new(
            "cod",
            "Atlantic Cod",
            "Gadus morhua",
            "Gadidae",
            "Cold waters of North Atlantic, from shallow coastal areas to continental shelf",
        )
        .significance(&[
            "Historically one of the most important commercial fish",
            "Drove European exploration and settlement of North America",
            "Traditional staple food preserved as salt cod",
            "Collapse of cod fisheries became symbol of overfishing",
        ])
        .distribution("North Atlantic from Greenland to North Carolina and Europe")
        .conservation_status("Some populations severely depleted, slowly recovering")
        .cultural_importance("Central to maritime cultures of Atlantic Canada, New England, and Northern Europe")
        .related_topics(&["Overfishing", "Maritime history", "Fisheries collapse", "Ocean conservation"]),
        EntryBuilder::new(
            "shark",
            "Sharks",
            "Various species in class Chondrichthyes",
            "Multiple families including Carcharhinidae, Lamnidae",
            "All oceans from surface to deep sea, some in fresh water",
        )
        .significance(&[
            "Apex predators maintaining ocean ecosystem balance",
            "Evolved over 400 million years with unique adaptations",
            "Critical for marine food web stability",
            "Many species threatened by finning and bycatch",
        ])
        .physical_description("Cartilaginous skeleton, multiple gill slits, specialized teeth that continuously replace")
        .conservation_status("Many species endangered due to overfishing and habitat loss")
        .cultural_importance("Featured in mythology and modern media, often misunderstood")
        .related_topics(&["Apex predators", "Cartilaginous fish", "Shark finning", "Marine conservation", "Ocean ecosystem"]),
        EntryBuilder::new(
            "whale",
            "Whales",
            "Various cetacean species",
            "Multiple families including Balaenidae, Physeteridae",
            "All oceans, from polar to tropical waters",
        )
        .significance(&[
            "Largest animals ever to exist on Earth",
            "Critical for ocean nutrient cycling through whale pump",
            "Complex social behaviors and communication",
            "Indicator species for ocean health",
        ])
        .physical_description("Marine mammals with streamlined bodies, blowholes, and specialized feeding adaptations")
        .conservation_status("Recovery varies by species; some still endangered")
        .cultural_importance("Featured in literature, art, and Indigenous traditions worldwide")
        .related_topics(&["Marine mammals", "Whale watching", "Ocean conservation", "Cetacean intelligence", "Whaling history"]),
        EntryBuilder::new(
            "coral",
            "Coral",
            "Various anthozoan species",
            "Multiple families in class Anthozoa",
            "Tropical and subtropical shallow marine waters",
        )
        .significance(&[
            "Build coral reefs, the most biodiverse marine ecosystems",
            "Provide coastal protection from storms and erosion",
            "Support 25% of marine species despite covering <1% of ocean",
            "Generate billions in tourism and fishing revenue",
        ])
        .physical_description("Colonial marine animals with calcium carbonate skeletons")
        .conservation_status("Critically threatened by climate change, bleaching, and acidification")
        .cultural_importance("Sacred to many Pacific Island cultures; basis of many coastal economies")
        .related_topics(&["Coral reefs", "Climate change", "Ocean acidification", "Marine biodiversity", "Coral bleaching"]),
        EntryBuilder::new(
            "plankton",
            "Plankton",
            "Various microscopic organisms",
            "Diverse groups including phytoplankton and zooplankton",
            "Throughout ocean water column, from surface to deep waters",
        )
        .significance(&[
            "Base of marine food webs supporting all ocean life",
            "Phytoplankton produce over 50% of Earth's oxygen",
            "Critical for global carbon cycle and climate regulation",
            "Indicators of ocean health and climate change",
        ])
        .physical_description("Microscopic organisms including plants, animals, and bacteria")
        .distribution("Found in all ocean waters, with seasonal and regional variations")
        .related_topics(&["Marine food web", "Ocean productivity", "Climate change", "Carbon cycle", "Marine ecology"]),
    ]
});

/// Ocean topics and their notes, matched in this order.
const OCEAN_TOPICS: &[(&str, &str)] = &[
    (
        "ocean temperature",
        "Ocean temperatures vary globally and with depth. Surface temperatures range from -2°C in polar regions to over 30°C in tropical areas. Ocean warming due to climate change is causing sea level rise, coral bleaching, and shifts in marine ecosystems. The ocean has absorbed over 90% of excess heat from global warming.",
    ),
    (
        "sea level rise",
        "Global sea levels are rising at approximately 3.3 mm per year due to thermal expansion of seawater and melting ice. This threatens coastal communities, infrastructure, and ecosystems. Small island nations face particular risks of displacement.",
    ),
    (
        "ocean acidification",
        "The ocean has absorbed about 30% of human-produced CO2, making it more acidic. This 'other CO2 problem' threatens shell-forming organisms like corals, oysters, and some plankton, potentially disrupting entire food webs.",
    ),
    (
        "marine biodiversity",
        "Oceans contain 80% of Earth's biodiversity. From microscopic plankton to blue whales, marine ecosystems support complex food webs. However, overfishing, pollution, and climate change threaten this diversity.",
    ),
    (
        "ocean currents",
        "Ocean currents are driven by wind, temperature, and salinity differences. They transport heat, nutrients, and marine life globally. Major currents like the Gulf Stream significantly influence regional climates.",
    ),
    (
        "deep sea",
        "The deep sea (below 200m) represents 95% of living space on Earth but remains largely unexplored. It hosts unique ecosystems around hydrothermal vents, cold seeps, and abyssal plains, with many species yet undiscovered.",
    ),
];

/// All entries in lookup order.
pub fn knowledge_entries() -> &'static [KnowledgeEntry] {
    &KNOWLEDGE_BASE
}

/// Finds a knowledge entry for a query.
///
/// First pass: the query mentions an entry's key, common name or scientific
/// name. Second pass: the query text appears in an entry's descriptive text.
pub fn search_marine_knowledge(query: &str) -> Option<&'static KnowledgeEntry> {
    let term = query.to_lowercase().trim().to_string();
    if term.is_empty() {
        return None;
    }

    let by_name = KNOWLEDGE_BASE.iter().find(|entry| {
        term.contains(&entry.key)
            || term.contains(&entry.common_name.to_lowercase())
            || term.contains(&entry.scientific_name.to_lowercase())
    });
    if by_name.is_some() {
        return by_name;
    }

    KNOWLEDGE_BASE
        .iter()
        .find(|entry| entry.searchable_text().contains(&term))
}

/// Renders an entry as a markdown breakdown.
pub fn format_knowledge_entry(entry: &KnowledgeEntry) -> String {
    let mut out = String::new();
    let lead = entry.significance.first().map(String::as_str).unwrap_or("");

    // Writing to a String cannot fail.
    let _ = write!(out, "{} is {}\n\n", entry.common_name, lead);
    out.push_str("Here's a detailed breakdown:\n\n");
    let _ = write!(out, "**Common name:** {}\n\n", entry.common_name);
    let _ = write!(out, "**Scientific name:** {}\n\n", entry.scientific_name);
    let _ = write!(out, "**Family:** {}\n\n", entry.family);
    let _ = write!(out, "**Habitat:** {}\n\n", entry.habitat);

    if let Some(description) = &entry.physical_description {
        let _ = write!(out, "**Physical Description:** {}\n\n", description);
    }
    if let Some(distribution) = &entry.distribution {
        let _ = write!(out, "**Distribution:** {}\n\n", distribution);
    }

    out.push_str("**Significance:**\n");
    for point in &entry.significance {
        let _ = writeln!(out, "• {}", point);
    }

    if let Some(cultural) = &entry.cultural_importance {
        let _ = write!(out, "\n**Cultural Importance:** {}\n", cultural);
    }
    if let Some(nutrition) = &entry.nutritional_value {
        let _ = write!(out, "\n**Nutritional Value:** {}\n", nutrition);
    }
    if let Some(status) = &entry.conservation_status {
        let _ = write!(out, "\n**Conservation Status:** {}\n", status);
    }

    out
}

/// Short note on an ocean topic the query mentions (or is a fragment of).
pub fn ocean_topic_info(query: &str) -> Option<&'static str> {
    let term = query.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    OCEAN_TOPICS
        .iter()
        .find(|(topic, _)| term.contains(topic) || topic.contains(term))
        .map(|(_, info)| *info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pass_finds_key_in_query() {
        let entry = search_marine_knowledge("Tell me about hilsa migration").unwrap();
        assert_eq!(entry.key, "hilsa");
    }

    #[test]
    fn test_name_pass_matches_scientific_name() {
        let entry = search_marine_knowledge("GADUS MORHUA stocks").unwrap();
        assert_eq!(entry.key, "cod");
    }

    #[test]
    fn test_text_pass_matches_description() {
        let entry = search_marine_knowledge("nutrient cycling").unwrap();
        assert_eq!(entry.key, "whale");

        let entry = search_marine_knowledge("Pacific Northwest").unwrap();
        assert_eq!(entry.key, "salmon");
    }

    #[test]
    fn test_no_knowledge_match() {
        assert!(search_marine_knowledge("xyzzy unknown term").is_none());
        assert!(search_marine_knowledge("   ").is_none());
    }

    #[test]
    fn test_format_contains_sections() {
        let entry = search_marine_knowledge("coral").unwrap();
        let text = format_knowledge_entry(entry);

        assert!(text.starts_with("Coral is Build coral reefs"));
        assert!(text.contains("**Scientific name:** Various anthozoan species"));
        assert!(text.contains("**Physical Description:**"));
        assert!(text.contains("• Generate billions in tourism and fishing revenue"));
        assert!(text.contains("**Conservation Status:**"));
        assert!(!text.contains("**Nutritional Value:**"));
    }

    #[test]
    fn test_format_skips_missing_optional_sections() {
        let plankton = knowledge_entries().iter().find(|e| e.key == "plankton").unwrap();
        let text = format_knowledge_entry(plankton);
        assert!(!text.contains("**Cultural Importance:**"));
        assert!(!text.contains("**Conservation Status:**"));
        assert!(text.contains("**Distribution:**"));
    }

    #[test]
    fn test_ocean_topic_lookup() {
        assert!(ocean_topic_info("Effects of ocean acidification on reefs")
            .unwrap()
            .contains("30% of human-produced CO2"));
        // A fragment of a topic name matches too.
        assert!(ocean_topic_info("sea level").unwrap().starts_with("Global sea levels"));
        assert!(ocean_topic_info("").is_none());
        assert!(ocean_topic_info("hilsa recipes").is_none());
    }

    #[test]
    fn test_topic_order_decides_fragment_ties() {
        // "ocean" is a fragment of several topics; the first listed wins.
        assert!(ocean_topic_info("ocean").unwrap().starts_with("Ocean temperatures"));
    }
}
