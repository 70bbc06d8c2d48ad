//! Route statistics and display rounding.

use crate::model::{Route, RouteStats, Stop};

/// Totals for a route.
///
/// Sums use full precision. Round with [`RouteStats::rounded`] only when
/// presenting the result.
pub fn compute_stats<BinId>(route: &Route<BinId>) -> RouteStats {
    // the two depot stops are not collections
    let total_stops = route.len().saturating_sub(2);
    let total_distance_km = route.stops().iter().map(|stop| stop.distance_from_prev_km).sum();
    let total_time_min: f64 = route.stops().iter().map(|stop| stop.est_travel_time_min).sum();

    RouteStats {
        total_stops,
        total_distance_km,
        total_time_min,
        total_time_hours: total_time_min / 60.0,
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl RouteStats {
    /// Copy rounded for display: distance and hours to 2 places, minutes to 1.
    pub fn rounded(&self) -> Self {
        Self {
            total_stops: self.total_stops,
            total_distance_km: round_to(self.total_distance_km, 2),
            total_time_min: round_to(self.total_time_min, 1),
            total_time_hours: round_to(self.total_time_hours, 2),
        }
    }
}

impl<BinId: Clone> Stop<BinId> {
    /// Copy rounded for display: distance to 2 places, time to 1.
    pub fn rounded(&self) -> Self {
        Self {
            distance_from_prev_km: round_to(self.distance_from_prev_km, 2),
            est_travel_time_min: round_to(self.est_travel_time_min, 1),
            ..self.clone()
        }
    }
}
