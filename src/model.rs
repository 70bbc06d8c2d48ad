//! Plain data types passed across the planner boundary.

use serde::{Deserialize, Serialize};

use crate::traits::Collectable;

pub const DEPOT_START_LABEL: &str = "Depot (Start)";
pub const DEPOT_END_LABEL: &str = "Depot (End)";

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// A bin offered to the planner for one planning call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateBin {
    pub bin_id: String,
    pub location: Coordinate,
    pub predicted_fill_percent: f64,
}

impl CandidateBin {
    pub fn new(bin_id: impl Into<String>, location: impl Into<Coordinate>, predicted_fill_percent: f64) -> Self {
        Self {
            bin_id: bin_id.into(),
            location: location.into(),
            predicted_fill_percent,
        }
    }
}

impl Collectable for CandidateBin {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.bin_id
    }

    fn location(&self) -> Coordinate {
        self.location
    }

    fn predicted_fill_percent(&self) -> f64 {
        self.predicted_fill_percent
    }
}

/// One entry of a planned route.
///
/// Depot stops carry neither a bin id nor a fill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<BinId = String> {
    pub order_index: usize,
    pub label: String,
    pub bin_id: Option<BinId>,
    pub location: Coordinate,
    pub distance_from_prev_km: f64,
    pub est_travel_time_min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_fill_percent: Option<f64>,
}

impl<BinId> Stop<BinId> {
    pub fn is_depot(&self) -> bool {
        self.bin_id.is_none()
    }
}

/// Ordered stops of a single tour.
///
/// Either empty, or bracketed by depot stops with every interior stop a
/// distinct bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route<BinId = String> {
    stops: Vec<Stop<BinId>>,
}

impl<BinId> Default for Route<BinId> {
    fn default() -> Self {
        Self { stops: Vec::new() }
    }
}

impl<BinId> Route<BinId> {
    /// Wraps already ordered stops. The depot bracketing is not checked.
    pub fn from_stops(stops: Vec<Stop<BinId>>) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &[Stop<BinId>] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Stop<BinId>> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Bin stops only, depot stops excluded.
    pub fn bin_stops(&self) -> impl Iterator<Item = &Stop<BinId>> {
        self.stops.iter().filter(|stop| !stop.is_depot())
    }
}

/// Totals derived from a [`Route`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteStats {
    pub total_stops: usize,
    pub total_distance_km: f64,
    pub total_time_min: f64,
    pub total_time_hours: f64,
}
