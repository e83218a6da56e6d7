//! `GreedyPlanner` implementation.

use log::debug;
use waymark_core::{RouteError, RouteMode, RoutePlanner, RouteRequest, RouteSummary, Waypoint};

use crate::{PlannerConfig, TwoOpt, nearest_neighbour_tour};

/// Nearest-neighbour planner with optional 2-opt refinement.
///
/// The planner holds only immutable configuration, so one instance can serve
/// any number of sessions.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{RouteMode, RoutePlanner, RouteRequest, Waypoint};
/// use waymark_solver::GreedyPlanner;
///
/// # fn main() -> Result<(), waymark_core::RouteError> {
/// let at = |id: &str, x: f64, y: f64| Waypoint::new(id, Coord { x, y });
/// let request = RouteRequest {
///     start: at("entrance", 0.0, 0.0),
///     stops: vec![at("c", 0.0, 10.0), at("b", 10.0, 10.0), at("a", 10.0, 0.0)],
///     mode: RouteMode::NearestNeighbourTwoOpt,
/// };
///
/// let summary = GreedyPlanner::new().plan(&request)?;
/// assert_eq!(summary.total_distance(), 30.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: PlannerConfig,
}

impl GreedyPlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl RoutePlanner for GreedyPlanner {
    fn plan(&self, request: &RouteRequest) -> Result<RouteSummary, RouteError> {
        let constructed = nearest_neighbour_tour(&request.start, &request.stops)?;
        let tour = if request.mode.optimises() {
            let outcome = TwoOpt::new(self.config.max_passes).run(&constructed);
            debug!(
                "2-opt shortened tour from {:.1} to {:.1} in {} passes",
                constructed.length(),
                outcome.tour.length(),
                outcome.passes
            );
            outcome.tour
        } else {
            constructed
        };
        Ok(RouteSummary::from_tour(tour, self.config.walking_pace))
    }
}

/// Plan a route with the default [`GreedyPlanner`].
///
/// `selected` should be in catalog order, e.g. from
/// [`SelectionSet::resolve`](waymark_core::SelectionSet::resolve).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{RouteError, RouteMode, Waypoint};
/// use waymark_solver::compute_route;
///
/// let start = Waypoint::new("entrance", Coord { x: 0.0, y: 0.0 });
/// let err = compute_route(&start, &[], RouteMode::NearestNeighbour).unwrap_err();
/// assert_eq!(err, RouteError::EmptySelection);
/// ```
pub fn compute_route(
    start: &Waypoint,
    selected: &[Waypoint],
    mode: RouteMode,
) -> Result<RouteSummary, RouteError> {
    let request = RouteRequest {
        start: start.clone(),
        stops: selected.to_vec(),
        mode,
    };
    GreedyPlanner::new().plan(&request)
}

#[cfg(test)]
mod tests;
