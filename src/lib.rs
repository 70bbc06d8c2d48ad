//! bin-route-planner
//!
//! Turns per-bin fill predictions into a single depot-to-depot collection
//! tour with distance and travel-time estimates.

pub mod config;
pub mod error;
pub mod haversine;
pub mod intake;
pub mod model;
pub mod solver;
pub mod stats;
pub mod traits;

pub use config::{DataSource, PlannerConfig};
pub use error::{ConfigError, RecordError};
pub use haversine::HaversineEstimator;
pub use model::{CandidateBin, Coordinate, Route, RouteStats, Stop};
pub use solver::{PlanRequest, PlannedRoute, RoutePlanner, plan_batch, plan_route};
pub use stats::compute_stats;
