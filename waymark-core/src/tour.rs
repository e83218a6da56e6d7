//! Validated visiting orders.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Waypoint, path_length};

/// Errors returned when a [`Tour`] would break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// No start waypoint was supplied.
    #[error("tour must begin at a start waypoint")]
    Empty,
    /// The same waypoint identity appears twice.
    #[error("waypoint {id:?} appears more than once in the tour")]
    DuplicateWaypoint {
        /// Identifier that was repeated.
        id: String,
    },
    /// A reordering added, dropped or replaced stops.
    #[error("reordered stops are not a permutation of the tour's stops")]
    NotAPermutation,
}

/// An ordered visiting sequence that begins at a fixed start.
///
/// The start never moves and the remaining waypoints are distinct from each
/// other and from the start.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Tour, Waypoint};
///
/// # fn main() -> Result<(), waymark_core::TourError> {
/// let start = Waypoint::new("entrance", Coord { x: 0.0, y: 0.0 });
/// let stop = Waypoint::new("gap", Coord { x: 3.0, y: 4.0 });
/// let tour = Tour::new(start, vec![stop])?;
///
/// assert_eq!(tour.len(), 2);
/// assert_eq!(tour.start().id(), "entrance");
/// assert_eq!(tour.length(), 5.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tour {
    start: Waypoint,
    stops: Vec<Waypoint>,
}

impl Tour {
    /// Validate and construct a tour visiting `stops` in order after `start`.
    pub fn new(start: Waypoint, stops: Vec<Waypoint>) -> Result<Self, TourError> {
        let mut seen = HashSet::with_capacity(stops.len() + 1);
        for waypoint in std::iter::once(&start).chain(&stops) {
            if !seen.insert(waypoint.id()) {
                return Err(TourError::DuplicateWaypoint {
                    id: waypoint.id().to_owned(),
                });
            }
        }
        Ok(Self { start, stops })
    }

    /// Build a tour from a full path whose first element is the start.
    pub fn from_path(path: Vec<Waypoint>) -> Result<Self, TourError> {
        let mut points = path.into_iter();
        let start = points.next().ok_or(TourError::Empty)?;
        Self::new(start, points.collect())
    }

    /// A tour holding only the start.
    #[must_use]
    pub const fn start_only(start: Waypoint) -> Self {
        Self {
            start,
            stops: Vec::new(),
        }
    }

    /// The same tour with its stops visited in a different order.
    ///
    /// `stops` must hold exactly the current stops, compared by identity.
    pub fn reordered(&self, stops: Vec<Waypoint>) -> Result<Self, TourError> {
        if stops.len() != self.stops.len() {
            return Err(TourError::NotAPermutation);
        }
        let current: HashSet<&str> = self.stops.iter().map(Waypoint::id).collect();
        if stops.iter().any(|stop| !current.contains(stop.id())) {
            return Err(TourError::NotAPermutation);
        }
        Self::new(self.start.clone(), stops)
    }

    /// Where the visitor begins.
    #[must_use]
    pub const fn start(&self) -> &Waypoint {
        &self.start
    }

    /// Stops in visiting order, excluding the start.
    #[must_use]
    pub fn stops(&self) -> &[Waypoint] {
        &self.stops
    }

    /// Every waypoint in visiting order, starting with the start.
    pub fn points(&self) -> impl Iterator<Item = &Waypoint> {
        std::iter::once(&self.start).chain(&self.stops)
    }

    /// Owned copy of the full path.
    #[must_use]
    pub fn to_path(&self) -> Vec<Waypoint> {
        self.points().cloned().collect()
    }

    /// Number of waypoints including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len() + 1
    }

    /// Always `false`: a tour holds at least its start.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether the tour visits no stops.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total walking distance along the tour.
    #[must_use]
    pub fn length(&self) -> f64 {
        path_length(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::waypoint;
    use rstest::rstest;

    #[rstest]
    fn rejects_stop_sharing_start_id() {
        let start = waypoint("a", 0.0, 0.0);
        let err = Tour::new(start.clone(), vec![start]).expect_err("duplicate id");
        assert_eq!(err, TourError::DuplicateWaypoint { id: "a".into() });
    }

    #[rstest]
    fn from_path_requires_start() {
        assert_eq!(Tour::from_path(Vec::new()), Err(TourError::Empty));
    }

    #[rstest]
    fn reordered_keeps_start_and_checks_membership() {
        let tour = Tour::new(
            waypoint("s", 0.0, 0.0),
            vec![waypoint("a", 1.0, 0.0), waypoint("b", 2.0, 0.0)],
        )
        .expect("valid tour");

        let swapped = tour
            .reordered(vec![waypoint("b", 2.0, 0.0), waypoint("a", 1.0, 0.0)])
            .expect("permutation");
        assert_eq!(swapped.start().id(), "s");
        let ids: Vec<_> = swapped.points().map(Waypoint::id).collect();
        assert_eq!(ids, ["s", "b", "a"]);

        let err = tour
            .reordered(vec![waypoint("a", 1.0, 0.0), waypoint("c", 2.0, 0.0)])
            .expect_err("foreign stop");
        assert_eq!(err, TourError::NotAPermutation);
    }

    #[rstest]
    fn start_only_tour_has_zero_length() {
        let tour = Tour::start_only(waypoint("s", 4.0, 4.0));
        assert!(tour.is_degenerate());
        assert_eq!(tour.len(), 1);
        assert!(tour.length().abs() < f64::EPSILON);
    }
}
