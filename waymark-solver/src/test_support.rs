//! Test-only utilities for `waymark-solver`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use waymark_core::Waypoint;

pub use waymark_core::test_support::waypoint;

/// The entrance used by the square layout fixtures.
#[must_use]
pub fn origin() -> Waypoint {
    waypoint("entrance", 0.0, 0.0)
}

/// Three stops on the corners of a 10-unit square anchored at the origin.
///
/// Visiting them in order from [`origin`] walks 30 units, which is optimal.
///
/// # Examples
/// ```rust
/// use waymark_solver::test_support::square_corners;
///
/// let corners = square_corners();
/// assert_eq!(corners.len(), 3);
/// assert_eq!(corners[0].id(), "a");
/// ```
#[must_use]
pub fn square_corners() -> Vec<Waypoint> {
    vec![
        waypoint("a", 10.0, 0.0),
        waypoint("b", 10.0, 10.0),
        waypoint("c", 0.0, 10.0),
    ]
}

/// Stops along a line at `x = 1..=n`, listed in the given visiting order.
///
/// # Examples
/// ```rust
/// use waymark_solver::test_support::line_stops;
///
/// let stops = line_stops(&[3, 1, 2]);
/// let ids: Vec<_> = stops.iter().map(|s| s.id().to_owned()).collect();
/// assert_eq!(ids, ["p3", "p1", "p2"]);
/// ```
#[must_use]
pub fn line_stops(order: &[u32]) -> Vec<Waypoint> {
    order
        .iter()
        .map(|&position| waypoint(&format!("p{position}"), f64::from(position), 0.0))
        .collect()
}
