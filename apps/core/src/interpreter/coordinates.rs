//! Region text to map display parameters.
//!
//! Resolution ladder, first rule that applies wins:
//! 1. no text: global view
//! 2. gazetteer hit: the entry's stored coordinates
//! 3. ordered ocean/sea substring heuristics
//! 4. global view

use tracing::debug;

use super::region::Gazetteer;
use crate::models::Coordinates;
use crate::reference::builtin_tables;

/// Hand-picked views for text the gazetteer could not resolve, in priority order.
pub const REGION_HEURISTICS: &[(&str, Coordinates)] = &[
    ("pacific", Coordinates::new(0.0, -140.0, 3, [-60.0, -180.0, 60.0, -70.0])),
    ("atlantic", Coordinates::new(14.0, -30.0, 3, [-70.0, -80.0, 70.0, 20.0])),
    ("indian", Coordinates::new(-20.0, 80.0, 3, [-50.0, 20.0, 30.0, 150.0])),
    ("mediterranean", Coordinates::new(35.0, 18.0, 5, [30.0, -6.0, 46.0, 42.0])),
    ("bengal", Coordinates::new(15.0, 88.0, 5, [5.0, 80.0, 25.0, 100.0])),
];

/// Resolves raw region text to a total, always well-formed map view.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateResolver<'a> {
    gazetteer: &'a Gazetteer,
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn resolve(&self, region_raw: Option<&str>) -> Coordinates {
        let Some(raw) = region_raw.filter(|raw| !raw.trim().is_empty()) else {
            return Coordinates::GLOBAL_VIEW;
        };

        if let Some(region) = self.gazetteer.find(raw) {
            return region.coordinates;
        }

        let lowered = raw.to_lowercase();
        if let Some((needle, coordinates)) = REGION_HEURISTICS
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
        {
            debug!(region_raw = %raw, heuristic = %needle, "region resolved by heuristic");
            return *coordinates;
        }

        debug!(region_raw = %raw, "region unresolved, using global view");
        Coordinates::GLOBAL_VIEW
    }
}

/// Resolves raw region text against the built-in gazetteer.
pub fn resolve_region_coordinates(region_raw: Option<&str>) -> Coordinates {
    CoordinateResolver::new(builtin_tables().gazetteer()).resolve(region_raw)
}
