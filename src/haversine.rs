//! Haversine distance and travel-time estimation.
//!
//! Uses great-circle distance and an assumed average speed. Ignores the
//! road network entirely.

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;
use crate::traits::DistanceEstimator;

/// Average collection vehicle speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can push `a` just outside [0, 1] near identical or antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Travel time in minutes for `distance_km` at `speed_kmh`.
pub fn travel_time_min(distance_km: f64, speed_kmh: f64) -> f64 {
    (distance_km / speed_kmh) * 60.0
}

/// Haversine-based distance estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HaversineEstimator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }
}

impl DistanceEstimator for HaversineEstimator {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_km(from, to)
    }

    fn travel_time_min(&self, distance_km: f64) -> f64 {
        travel_time_min(distance_km, self.speed_kmh)
    }
}
