//! Tests for the `RoutePlanner` trait using a stub implementation.

use geo::Coord;
use rstest::rstest;
use waymark_core::{
    RouteError, RouteMode, RoutePlanner, RouteRequest, RouteSummary, Tour, WalkingPace, Waypoint,
};

struct ReversePlanner;

impl RoutePlanner for ReversePlanner {
    fn plan(&self, request: &RouteRequest) -> Result<RouteSummary, RouteError> {
        // The mode is ignored by this stub.
        let _ = request.mode;
        if request.stops.is_empty() {
            return Err(RouteError::EmptySelection);
        }
        let stops = request.stops.iter().rev().cloned().collect();
        let tour = Tour::new(request.start.clone(), stops)?;
        Ok(RouteSummary::from_tour(tour, WalkingPace::default()))
    }
}

fn stop(id: &str, x: f64) -> Waypoint {
    Waypoint::new(id, Coord { x, y: 0.0 })
}

#[rstest]
#[case(vec![stop("a", 1.0), stop("b", 2.0)], true)]
#[case(Vec::new(), false)]
fn planner_returns_expected(#[case] stops: Vec<Waypoint>, #[case] should_succeed: bool) {
    let request = RouteRequest {
        start: stop("entrance", 0.0),
        stops,
        mode: RouteMode::NearestNeighbour,
    };
    let result = ReversePlanner.plan(&request);
    assert_eq!(result.is_ok(), should_succeed);
}

#[rstest]
fn duplicate_stops_surface_as_invalid_tour() {
    let request = RouteRequest {
        start: stop("entrance", 0.0),
        stops: vec![stop("a", 1.0), stop("a", 2.0)],
        mode: RouteMode::NearestNeighbourTwoOpt,
    };
    let err = ReversePlanner.plan(&request).expect_err("duplicate id");
    assert!(matches!(err, RouteError::InvalidTour(_)));
}
