//! Built-in marine gazetteer: major oceans, seas and gulfs with map
//! parameters and an environmental snapshot.

use crate::models::{Coordinates, OceanMetrics, RegionEntry};

fn region(
    name: &str,
    canonical_name: &str,
    synonyms: &[&str],
    coordinates: Coordinates,
    metrics: (f64, f64, f64),
    popular_fishes: &[&str],
) -> RegionEntry {
    let (salinity_psu, ph, temperature_c) = metrics;
    RegionEntry {
        name: name.to_string(),
        canonical_name: canonical_name.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        coordinates,
        ocean_metrics: OceanMetrics {
            salinity_psu,
            ph,
            temperature_c,
            popular_fishes: popular_fishes.iter().map(|s| s.to_string()).collect(),
        },
    }
}

pub(crate) fn builtin_regions() -> Vec<RegionEntry> {
    vec![
        // Major oceans
        region(
            "Pacific Ocean",
            "pacific",
            &["pacific ocean", "pacific", "north pacific", "south pacific"],
            Coordinates::new(0.0, -140.0, 3, [-60.0, -180.0, 60.0, -70.0]),
            (34.6, 8.1, 19.4),
            &["Pacific Salmon", "Tuna", "Mahi Mahi", "Pacific Cod", "Yellowfin Tuna"],
        ),
        region(
            "Atlantic Ocean",
            "atlantic",
            &["atlantic ocean", "atlantic", "north atlantic", "south atlantic"],
            Coordinates::new(14.0, -30.0, 3, [-70.0, -80.0, 70.0, 20.0]),
            (35.4, 8.1, 16.9),
            &["Atlantic Cod", "Bluefin Tuna", "Herring", "Mackerel", "Haddock"],
        ),
        region(
            "Indian Ocean",
            "indian",
            &["indian ocean", "indian"],
            Coordinates::new(-20.0, 80.0, 3, [-50.0, 20.0, 30.0, 150.0]),
            (34.8, 8.0, 22.0),
            &["Yellowfin Tuna", "Skipjack Tuna", "Barramundi", "Kingfish", "Coral Trout"],
        ),
        // Seas, bays and gulfs
        region(
            "Mediterranean Sea",
            "mediterranean",
            &["mediterranean sea", "mediterranean", "med sea"],
            Coordinates::new(35.0, 18.0, 5, [30.0, -6.0, 46.0, 42.0]),
            (38.5, 8.2, 21.0),
            &["Bluefin Tuna", "Sea Bass", "Sardine", "Anchovy", "Red Mullet"],
        ),
        region(
            "Bay of Bengal",
            "bayofbengal",
            &["bay of bengal", "bengal bay", "bengal", "bay bengal"],
            Coordinates::new(15.0, 88.0, 5, [5.0, 80.0, 25.0, 100.0]),
            (32.5, 7.9, 28.0),
            &["Hilsa", "Indian Mackerel", "Pomfret", "Rohu", "Catla"],
        ),
        region(
            "Arabian Sea",
            "arabiansea",
            &["arabian sea", "arabian", "sea of arabia"],
            Coordinates::new(16.0, 65.0, 5, [0.0, 50.0, 30.0, 80.0]),
            (36.5, 8.0, 27.0),
            &["Kingfish", "Pomfret", "Sardine", "Tuna", "Mackerel"],
        ),
        region(
            "North Sea",
            "northsea",
            &["north sea", "northern sea"],
            Coordinates::new(56.0, 3.0, 6, [51.0, -4.0, 62.0, 12.0]),
            (34.0, 8.2, 9.0),
            &["Cod", "Haddock", "Herring", "Plaice", "Sole"],
        ),
        region(
            "Gulf of India",
            "gulfofindia",
            &["gulf of india", "indian gulf"],
            Coordinates::new(10.0, 76.0, 6, [8.0, 74.0, 12.0, 78.0]),
            (35.0, 8.0, 28.0),
            &["Kingfish", "Mackerel", "Sardine", "Tuna", "Snapper"],
        ),
        region(
            "Gulf of Mexico",
            "gulfofmexico",
            &["gulf of mexico", "mexican gulf", "gulf mexico"],
            Coordinates::new(25.0, -90.0, 6, [18.0, -98.0, 31.0, -80.0]),
            (36.0, 8.1, 24.0),
            &["Red Snapper", "Mahi Mahi", "Grouper", "Amberjack", "King Mackerel"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_every_region_validates() {
        for entry in builtin_regions() {
            assert!(entry.validate().is_ok(), "invalid region {}", entry.canonical_name);
        }
    }

    #[test]
    fn test_centers_sit_inside_their_boxes() {
        for entry in builtin_regions() {
            let c = entry.coordinates;
            assert!(
                (c.min_lat()..=c.max_lat()).contains(&c.lat)
                    && (c.min_lng()..=c.max_lng()).contains(&c.lng),
                "center outside bbox for {}",
                entry.canonical_name
            );
        }
    }
}
