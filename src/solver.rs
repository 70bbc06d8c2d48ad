//! Collection route solver (greedy nearest-neighbour).
//!
//! Builds a single depot-to-depot tour over the bins whose predicted fill
//! meets the urgency threshold. Not an optimal TSP tour.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::config::PlannerConfig;
use crate::error::ConfigError;
use crate::haversine::HaversineEstimator;
use crate::model::{Coordinate, DEPOT_END_LABEL, DEPOT_START_LABEL, Route, RouteStats, Stop};
use crate::stats::compute_stats;
use crate::traits::{Collectable, DistanceEstimator};

/// Plan a collection tour starting and ending at `depot`.
///
/// Only candidates with `predicted_fill_percent >= urgency_threshold` are
/// visited. When none qualify the route is empty: no depot round-trip is
/// produced, so callers must read "no stops" as "nothing to collect".
///
/// Equidistant candidates resolve to the one appearing first in
/// `candidates`. Reordering the input may therefore change the tour.
#[instrument(level = "debug", skip_all, fields(candidates = candidates.len(), threshold = urgency_threshold))]
pub fn plan_route<C, E>(
    depot: Coordinate,
    candidates: &[C],
    urgency_threshold: f64,
    estimator: &E,
) -> Route<C::Id>
where
    C: Collectable,
    E: DistanceEstimator,
{
    let pending: Vec<&C> = candidates
        .iter()
        .filter(|candidate| candidate.predicted_fill_percent() >= urgency_threshold)
        .collect();

    debug!(
        selected = pending.len(),
        skipped = candidates.len() - pending.len(),
        "filtered candidates by urgency"
    );

    if pending.is_empty() {
        return Route::default();
    }

    let mut stops = Vec::with_capacity(pending.len() + 2);
    stops.push(Stop {
        order_index: 0,
        label: DEPOT_START_LABEL.to_string(),
        bin_id: None,
        location: depot,
        distance_from_prev_km: 0.0,
        est_travel_time_min: 0.0,
        predicted_fill_percent: None,
    });

    let mut visited = vec![false; pending.len()];
    let mut current = depot;

    while let Some((index, distance)) = nearest_unvisited(current, &pending, &visited, estimator) {
        let bin = pending[index];
        let location = bin.location();
        let travel_time = estimator.travel_time_min(distance);

        trace!(bin = %bin.id(), distance_km = distance, "next stop");

        stops.push(Stop {
            order_index: stops.len(),
            label: format!("Bin {}", bin.id()),
            bin_id: Some(bin.id().clone()),
            location,
            distance_from_prev_km: distance,
            est_travel_time_min: travel_time,
            predicted_fill_percent: Some(bin.predicted_fill_percent()),
        });

        visited[index] = true;
        current = location;
    }

    let distance = estimator.distance_km(current, depot);
    stops.push(Stop {
        order_index: stops.len(),
        label: DEPOT_END_LABEL.to_string(),
        bin_id: None,
        location: depot,
        distance_from_prev_km: distance,
        est_travel_time_min: estimator.travel_time_min(distance),
        predicted_fill_percent: None,
    });

    Route::from_stops(stops)
}

/// Index and distance of the closest unvisited candidate.
///
/// A later candidate only wins with a strictly smaller distance, so ties keep
/// the earliest. The first unvisited candidate is taken even if its distance
/// is not comparable, which keeps the loop finite on non-finite input.
fn nearest_unvisited<C, E>(
    current: Coordinate,
    pending: &[&C],
    visited: &[bool],
    estimator: &E,
) -> Option<(usize, f64)>
where
    C: Collectable,
    E: DistanceEstimator,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in pending.iter().enumerate() {
        if visited[index] {
            continue;
        }

        let distance = estimator.distance_km(current, candidate.location());
        match best {
            Some((_, best_distance)) if distance >= best_distance || distance.is_nan() => {}
            _ => best = Some((index, distance)),
        }
    }

    best
}

/// Planner bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    config: PlannerConfig,
    estimator: HaversineEstimator,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let estimator = HaversineEstimator::new(config.average_speed_kmh);
        Ok(Self { config, estimator })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn estimator(&self) -> &HaversineEstimator {
        &self.estimator
    }

    /// Plan with the configured depot and threshold.
    pub fn plan<C: Collectable>(&self, candidates: &[C]) -> Route<C::Id> {
        self.plan_with_threshold(candidates, self.config.urgency_threshold)
    }

    /// Plan with the configured depot and an explicit threshold.
    pub fn plan_with_threshold<C: Collectable>(&self, candidates: &[C], urgency_threshold: f64) -> Route<C::Id> {
        plan_route(self.config.depot, candidates, urgency_threshold, &self.estimator)
    }

    /// Plan a batch request, applying its overrides.
    pub fn plan_request<C: Collectable>(&self, request: &PlanRequest<C>) -> PlannedRoute<C::Id> {
        let depot = request.depot.unwrap_or(self.config.depot);
        let threshold = request.urgency_threshold.unwrap_or(self.config.urgency_threshold);
        let route = plan_route(depot, &request.candidates, threshold, &self.estimator);
        let stats = compute_stats(&route);

        PlannedRoute {
            name: request.name.clone(),
            route,
            stats,
        }
    }
}

/// One independent planning job, e.g. one fleet or data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest<C> {
    pub name: String,
    /// Overrides the configured depot.
    #[serde(default)]
    pub depot: Option<Coordinate>,
    /// Overrides the configured urgency threshold.
    #[serde(default)]
    pub urgency_threshold: Option<f64>,
    pub candidates: Vec<C>,
}

impl<C> PlanRequest<C> {
    pub fn new(name: impl Into<String>, candidates: Vec<C>) -> Self {
        Self {
            name: name.into(),
            depot: None,
            urgency_threshold: None,
            candidates,
        }
    }

    pub fn depot(mut self, depot: impl Into<Coordinate>) -> Self {
        self.depot = Some(depot.into());
        self
    }

    pub fn urgency_threshold(mut self, threshold: f64) -> Self {
        self.urgency_threshold = Some(threshold);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute<BinId = String> {
    pub name: String,
    pub route: Route<BinId>,
    pub stats: RouteStats,
}

/// Plan independent requests in parallel on the rayon pool.
///
/// Results keep the order of `requests`.
pub fn plan_batch<C>(planner: &RoutePlanner, requests: &[PlanRequest<C>]) -> Vec<PlannedRoute<C::Id>>
where
    C: Collectable + Sync,
    C::Id: Send,
{
    debug!(requests = requests.len(), "planning batch");
    requests
        .par_iter()
        .map(|request| planner.plan_request(request))
        .collect()
}
