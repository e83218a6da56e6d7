//! Tests for the `GreedyPlanner`.

use std::num::NonZeroUsize;

use super::*;
use rstest::rstest;
use waymark_core::WalkingPace;

use crate::test_support::{line_stops, origin, square_corners, waypoint};

const EPSILON: f64 = 1.0e-9;

fn ids(summary: &RouteSummary) -> Vec<&str> {
    summary.tour().points().map(Waypoint::id).collect()
}

#[rstest]
#[case(RouteMode::NearestNeighbour)]
#[case(RouteMode::NearestNeighbourTwoOpt)]
fn square_route_is_already_optimal(#[case] mode: RouteMode) {
    let summary = compute_route(&origin(), &square_corners(), mode).expect("route");
    assert_eq!(ids(&summary), ["entrance", "a", "b", "c"]);
    assert!((summary.total_distance() - 30.0).abs() < EPSILON);
    assert_eq!(summary.legs().len(), 3);
}

#[rstest]
#[case(RouteMode::NearestNeighbour)]
#[case(RouteMode::NearestNeighbourTwoOpt)]
fn empty_selection_short_circuits(#[case] mode: RouteMode) {
    let err = compute_route(&origin(), &[], mode).expect_err("empty selection");
    assert_eq!(err, RouteError::EmptySelection);
}

#[rstest]
fn two_opt_never_lengthens_constructed_tour() {
    let start = origin();
    let stops = [
        waypoint("a", 1.0, 0.0),
        waypoint("b", 5.0, 0.0),
        waypoint("c", 1.0, 1.0),
    ];
    let greedy = compute_route(&start, &stops, RouteMode::NearestNeighbour).expect("route");
    let refined =
        compute_route(&start, &stops, RouteMode::NearestNeighbourTwoOpt).expect("route");

    assert_eq!(ids(&greedy), ["entrance", "a", "c", "b"]);
    assert!(refined.total_distance() <= greedy.total_distance() + EPSILON);
    assert_eq!(refined.tour().start().id(), "entrance");
}

#[rstest]
fn configured_pace_drives_time_estimate() {
    let config = PlannerConfig {
        walking_pace: WalkingPace::new(10.0).expect("valid pace"),
        ..PlannerConfig::default()
    };
    let planner = GreedyPlanner::with_config(config);
    let request = RouteRequest {
        start: origin(),
        stops: square_corners(),
        mode: RouteMode::NearestNeighbour,
    };
    let summary = planner.plan(&request).expect("route");
    assert!((summary.estimated_minutes() - 3.0).abs() < EPSILON);
}

#[rstest]
fn pass_cap_limits_refinement() {
    let config = PlannerConfig {
        max_passes: NonZeroUsize::MIN,
        ..PlannerConfig::default()
    };
    let planner = GreedyPlanner::with_config(config);
    let stops = vec![
        waypoint("a", 1.0, 0.0),
        waypoint("b", 2.0, 3.0),
        waypoint("c", 3.0, 0.0),
        waypoint("d", 4.0, 3.0),
    ];
    let request = RouteRequest {
        start: origin(),
        stops,
        mode: RouteMode::NearestNeighbourTwoOpt,
    };
    let summary = planner.plan(&request).expect("route");
    let constructed = nearest_neighbour_tour(&request.start, &request.stops)
        .expect("valid tour")
        .length();
    assert!(summary.total_distance() <= constructed + EPSILON);
    assert_eq!(summary.tour().len(), 5);
}

#[rstest]
fn line_is_walked_in_order_regardless_of_input_order() {
    let stops = line_stops(&[4, 2, 1, 3]);
    let summary = compute_route(&origin(), &stops, RouteMode::NearestNeighbourTwoOpt)
        .expect("route");
    assert_eq!(ids(&summary), ["entrance", "p1", "p2", "p3", "p4"]);
    assert!((summary.total_distance() - 4.0).abs() < EPSILON);
}
