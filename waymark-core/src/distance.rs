//! Straight-line distance between waypoints.
//!
//! Venue coordinates are treated as points in the Euclidean plane. Corridors
//! and obstacles play no part in the metric, so distances are lower bounds on
//! the real walking distance.

use geo::{Distance, Euclidean, Point};

use crate::Waypoint;

/// Euclidean distance between two waypoints.
///
/// Pure, symmetric and zero for identical locations.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Waypoint, distance};
///
/// let a = Waypoint::new("a", Coord { x: 0.0, y: 0.0 });
/// let b = Waypoint::new("b", Coord { x: 3.0, y: 4.0 });
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
#[must_use]
pub fn distance(p: &Waypoint, q: &Waypoint) -> f64 {
    Euclidean.distance(Point::from(p.location()), Point::from(q.location()))
}

/// Total length of the open path visiting `points` in order.
///
/// Paths with fewer than two points have zero length.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Waypoint, path_length};
///
/// let path = [
///     Waypoint::new("a", Coord { x: 0.0, y: 0.0 }),
///     Waypoint::new("b", Coord { x: 10.0, y: 0.0 }),
///     Waypoint::new("c", Coord { x: 10.0, y: 10.0 }),
/// ];
/// assert_eq!(path_length(&path), 20.0);
/// ```
#[must_use]
pub fn path_length(points: &[Waypoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| match pair {
            [from, to] => distance(from, to),
            _ => 0.0,
        })
        .sum()
}
