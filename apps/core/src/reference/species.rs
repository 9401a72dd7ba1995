//! Built-in species dictionary.
//!
//! Entry order is significant: synonym matching is first-match-wins in the
//! order listed here.

use crate::models::SpeciesEntry;

fn species(
    key: &str,
    common_name: &str,
    scientific_name: &str,
    synonyms: &[&str],
    primary_regions: &[&str],
    habitat: &str,
) -> SpeciesEntry {
    SpeciesEntry {
        key: key.to_string(),
        common_name: common_name.to_string(),
        scientific_name: scientific_name.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        primary_regions: primary_regions.iter().map(|s| s.to_string()).collect(),
        habitat: habitat.to_string(),
    }
}

pub(crate) fn builtin_species() -> Vec<SpeciesEntry> {
    vec![
        // Popular commercial fish
        species(
            "hilsa",
            "Hilsa",
            "Tenualosa ilisha",
            &["hilsa fish", "ilish", "hilsha", "tenualosa ilisha"],
            &["bayofbengal", "arabiansea", "indian"],
            "Coastal and estuarine waters",
        ),
        species(
            "tuna",
            "Tuna",
            "Thunnus spp.",
            &["bluefin tuna", "yellowfin tuna", "skipjack tuna", "thunnus"],
            &["pacific", "atlantic", "indian", "mediterranean"],
            "Open ocean pelagic",
        ),
        species(
            "bluefintuna",
            "Bluefin Tuna",
            "Thunnus thynnus",
            &["bluefin", "northern bluefin tuna", "thunnus thynnus"],
            &["atlantic", "mediterranean", "pacific"],
            "Open ocean pelagic",
        ),
        species(
            "salmon",
            "Salmon",
            "Salmo salar",
            &["atlantic salmon", "pacific salmon", "salmo salar", "oncorhynchus"],
            &["pacific", "atlantic", "northsea"],
            "Anadromous - rivers and ocean",
        ),
        species(
            "cod",
            "Cod",
            "Gadus morhua",
            &["atlantic cod", "gadus morhua", "codfish"],
            &["atlantic", "northsea", "pacific"],
            "Cold water demersal",
        ),
        species(
            "herring",
            "Herring",
            "Clupea harengus",
            &["atlantic herring", "clupea harengus", "herring fish"],
            &["atlantic", "northsea", "pacific"],
            "Pelagic schooling fish",
        ),
        species(
            "sardine",
            "Sardine",
            "Sardina pilchardus",
            &["european sardine", "sardina pilchardus", "pilchard"],
            &["atlantic", "mediterranean", "pacific"],
            "Coastal pelagic",
        ),
        species(
            "mackerel",
            "Mackerel",
            "Scomber scombrus",
            &["atlantic mackerel", "scomber scombrus", "indian mackerel"],
            &["atlantic", "indian", "bayofbengal", "arabiansea"],
            "Pelagic migratory",
        ),
        species(
            "pomfret",
            "Pomfret",
            "Pampus argenteus",
            &["silver pomfret", "pampus argenteus", "white pomfret"],
            &["indian", "bayofbengal", "arabiansea"],
            "Coastal waters",
        ),
        species(
            "kingfish",
            "Kingfish",
            "Scomberomorus commerson",
            &["king mackerel", "scomberomorus commerson", "spanish mackerel"],
            &["indian", "arabiansea", "gulfofmexico"],
            "Coastal pelagic",
        ),
        species(
            "rohu",
            "Rohu",
            "Labeo rohita",
            &["labeo rohita", "rui fish", "rohita"],
            &["bayofbengal", "indian"],
            "Freshwater and brackish",
        ),
        species(
            "catla",
            "Catla",
            "Catla catla",
            &["catla catla", "katla fish", "catla fish"],
            &["bayofbengal", "indian"],
            "Freshwater rivers and lakes",
        ),
    ]
}
