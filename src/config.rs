//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::haversine::DEFAULT_SPEED_KMH;
use crate::model::Coordinate;

/// Urgency threshold used for the test prediction dataset.
pub const DEFAULT_URGENCY_THRESHOLD: f64 = 80.0;

/// Urgency threshold used for live prototype bins.
pub const PROTOTYPE_URGENCY_THRESHOLD: f64 = 70.0;

/// Origin of the fill predictions being planned over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Test,
    Prototype,
}

impl DataSource {
    pub fn default_threshold(self) -> f64 {
        match self {
            DataSource::Test => DEFAULT_URGENCY_THRESHOLD,
            DataSource::Prototype => PROTOTYPE_URGENCY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Where every tour starts and ends.
    pub depot: Coordinate,
    /// Minimum predicted fill percentage for a bin to be visited.
    pub urgency_threshold: f64,
    /// Average vehicle speed used for travel-time estimates.
    pub average_speed_kmh: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            depot: Coordinate::default(),
            urgency_threshold: DEFAULT_URGENCY_THRESHOLD,
            average_speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl PlannerConfig {
    /// Defaults with the threshold preset for `source`.
    pub fn for_source(source: DataSource) -> Self {
        Self {
            urgency_threshold: source.default_threshold(),
            ..Self::default()
        }
    }

    pub fn with_depot(mut self, depot: impl Into<Coordinate>) -> Self {
        self.depot = depot.into();
        self
    }

    pub fn with_urgency_threshold(mut self, threshold: f64) -> Self {
        self.urgency_threshold = threshold;
        self
    }

    pub fn with_average_speed(mut self, speed_kmh: f64) -> Self {
        self.average_speed_kmh = speed_kmh;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.average_speed_kmh));
        }
        if !self.urgency_threshold.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.urgency_threshold));
        }
        if !self.depot.is_finite() {
            return Err(ConfigError::InvalidDepot(self.depot));
        }
        Ok(())
    }
}
