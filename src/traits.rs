//! Core domain traits for the collection planner.
//!
//! Kept deliberately small so callers can plan over their own bin records
//! without converting them into [`CandidateBin`](crate::model::CandidateBin).

use std::fmt::Display;
use std::hash::Hash;

use crate::model::Coordinate;

/// Identifier for a bin. Displayed in stop labels.
pub trait Id: Clone + Eq + Hash + Display {}

impl<T> Id for T where T: Clone + Eq + Hash + Display {}

/// A bin that may be scheduled for emptying.
pub trait Collectable {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Bin location.
    fn location(&self) -> Coordinate;

    /// Predicted fill level, expected in [0, 100] but not enforced.
    fn predicted_fill_percent(&self) -> f64;
}

/// Estimates leg length and travel time between two coordinates.
pub trait DistanceEstimator {
    /// Distance in kilometers.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Travel time in minutes for a leg of `distance_km`.
    fn travel_time_min(&self, distance_km: f64) -> f64;
}
