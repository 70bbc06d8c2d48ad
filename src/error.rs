//! Errors raised at the planner boundary.
//!
//! Planning itself is infallible. These cover configuration and the
//! validation of incoming prediction records.

use crate::model::Coordinate;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
/// Invalid planner configuration.
pub enum ConfigError {
    #[error("average speed must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
    #[error("urgency threshold must be finite, got {0}")]
    InvalidThreshold(f64),
    #[error("depot coordinate must be finite, got ({}, {})", .0.lat, .0.lon)]
    InvalidDepot(Coordinate),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Reasons a prediction record cannot become a planning candidate.
pub enum RecordError {
    #[error("missing bin id")]
    MissingBinId,
    #[error("missing latitude")]
    MissingLatitude,
    #[error("missing longitude")]
    MissingLongitude,
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,
    #[error("missing predicted fill percentage")]
    MissingFill,
    #[error("predicted fill percentage is not finite")]
    NonFiniteFill,
}
