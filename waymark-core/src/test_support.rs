//! Test-only helpers shared by unit and behaviour tests.

use geo::Coord;

use crate::{
    RouteError, RoutePlanner, RouteRequest, RouteSummary, Tour, WalkingPace, Waypoint,
};

/// Construct an unnamed waypoint at `(x, y)`.
///
/// # Examples
/// ```
/// use waymark_core::test_support::waypoint;
///
/// let stop = waypoint("gap", 1.0, 2.0);
/// assert_eq!(stop.id(), "gap");
/// ```
#[must_use]
pub fn waypoint(id: &str, x: f64, y: f64) -> Waypoint {
    Waypoint::new(id, Coord { x, y })
}

/// Planner that visits stops in the order they were supplied.
///
/// Useful as a baseline when exercising [`RoutePlanner`] consumers.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderPlanner;

impl RoutePlanner for InputOrderPlanner {
    fn plan(&self, request: &RouteRequest) -> Result<RouteSummary, RouteError> {
        if request.stops.is_empty() {
            return Err(RouteError::EmptySelection);
        }
        let tour = Tour::new(request.start.clone(), request.stops.clone())?;
        Ok(RouteSummary::from_tour(tour, WalkingPace::default()))
    }
}
