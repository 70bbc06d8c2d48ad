//! Public waste bin sites around central Copenhagen.
//!
//! Coordinates are approximate street positions near well-known places.

use bin_route_planner::model::{CandidateBin, Coordinate};

/// A named bin site with coordinates.
#[derive(Debug, Clone)]
pub struct BinSite {
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl BinSite {
    pub const fn new(id: &'static str, name: &'static str, lat: f64, lon: f64) -> Self {
        Self { id, name, lat, lon }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn with_fill(&self, fill: f64) -> CandidateBin {
        CandidateBin::new(self.id, self.coords(), fill)
    }
}

// ============================================================================
// Depots
// ============================================================================

/// Municipal recycling centre in Sydhavn.
pub const SYDHAVN_DEPOT: Coordinate = Coordinate::new(55.6470, 12.5330);

/// Recycling centre on Amager.
pub const AMAGER_DEPOT: Coordinate = Coordinate::new(55.6550, 12.6120);

// ============================================================================
// Bin sites
// ============================================================================

pub const INNER_CITY: &[BinSite] = &[
    BinSite::new("CPH-001", "Raadhuspladsen", 55.6759, 12.5691),
    BinSite::new("CPH-002", "Nyhavn", 55.6798, 12.5911),
    BinSite::new("CPH-003", "Kongens Nytorv", 55.6805, 12.5860),
    BinSite::new("CPH-004", "Torvehallerne", 55.6839, 12.5697),
    BinSite::new("CPH-005", "Rundetaarn", 55.6813, 12.5757),
    BinSite::new("CPH-006", "Christiansborg", 55.6761, 12.5801),
    BinSite::new("CPH-007", "Tivoli Main Gate", 55.6737, 12.5681),
    BinSite::new("CPH-008", "Amalienborg", 55.6840, 12.5931),
];

pub const OUTER_DISTRICTS: &[BinSite] = &[
    BinSite::new("CPH-101", "Frederiksberg Have", 55.6746, 12.5225),
    BinSite::new("CPH-102", "Noerrebro Station", 55.7007, 12.5376),
    BinSite::new("CPH-103", "Oesterbro Faelledparken", 55.6997, 12.5712),
    BinSite::new("CPH-104", "Islands Brygge", 55.6640, 12.5780),
    BinSite::new("CPH-105", "Valby Langgade", 55.6648, 12.5010),
    BinSite::new("CPH-106", "Oerestad", 55.6290, 12.5790),
];

/// All sites with fill levels cycling through urgent and non-urgent values.
pub fn mixed_fleet() -> Vec<CandidateBin> {
    const FILLS: [f64; 5] = [92.0, 45.0, 81.0, 79.9, 100.0];
    INNER_CITY
        .iter()
        .chain(OUTER_DISTRICTS)
        .zip(FILLS.iter().cycle())
        .map(|(site, fill)| site.with_fill(*fill))
        .collect()
}
