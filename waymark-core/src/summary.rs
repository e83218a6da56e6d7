//! Per-leg and aggregate metrics for a finished tour.

use crate::{Tour, WalkingPace, Waypoint, distance};

/// One consecutive edge of a tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Leg {
    /// Waypoint the leg departs from.
    pub from: Waypoint,
    /// Waypoint the leg arrives at.
    pub to: Waypoint,
    /// Straight-line length of the leg in venue units.
    pub distance: f64,
}

/// Read-only view of a tour with its legs and totals.
///
/// Summaries are derived in full from a [`Tour`]; nothing is updated
/// incrementally. A start-only tour produces no legs and zero totals.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{RouteSummary, Tour, WalkingPace, Waypoint};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tour = Tour::new(
///     Waypoint::new("entrance", Coord { x: 0.0, y: 0.0 }),
///     vec![
///         Waypoint::new("a", Coord { x: 300.0, y: 0.0 }),
///         Waypoint::new("b", Coord { x: 300.0, y: 300.0 }),
///     ],
/// )?;
/// let summary = RouteSummary::from_tour(tour, WalkingPace::new(150.0)?);
///
/// assert_eq!(summary.legs().len(), 2);
/// assert_eq!(summary.total_distance(), 600.0);
/// assert_eq!(summary.estimated_minutes(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteSummary {
    tour: Tour,
    legs: Vec<Leg>,
    total_distance: f64,
    estimated_minutes: f64,
}

impl RouteSummary {
    /// Derive legs and totals from `tour` at the given walking pace.
    #[must_use]
    pub fn from_tour(tour: Tour, pace: WalkingPace) -> Self {
        let legs: Vec<Leg> = tour
            .points()
            .zip(tour.stops())
            .map(|(from, to)| Leg {
                from: from.clone(),
                to: to.clone(),
                distance: distance(from, to),
            })
            .collect();
        let total_distance: f64 = legs.iter().map(|leg| leg.distance).sum();
        Self {
            tour,
            legs,
            total_distance,
            estimated_minutes: pace.minutes_for(total_distance),
        }
    }

    /// The tour the summary describes.
    #[must_use]
    pub const fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Consume the summary, keeping only the tour.
    #[must_use]
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Legs in visiting order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Sum of all leg distances.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Walking time for the whole tour.
    #[must_use]
    pub const fn estimated_minutes(&self) -> f64 {
        self.estimated_minutes
    }

    /// Walking time rounded to whole minutes for display.
    #[must_use]
    pub fn rounded_minutes(&self) -> f64 {
        self.estimated_minutes.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::waypoint;
    use rstest::rstest;

    const EPSILON: f64 = 1.0e-9;

    #[rstest]
    fn start_only_tour_has_no_legs() {
        let summary = RouteSummary::from_tour(
            Tour::start_only(waypoint("entrance", 5.0, 5.0)),
            WalkingPace::default(),
        );
        assert!(summary.legs().is_empty());
        assert!(summary.total_distance().abs() < EPSILON);
        assert!(summary.estimated_minutes().abs() < EPSILON);
    }

    #[rstest]
    fn legs_follow_tour_order() {
        let tour = Tour::new(
            waypoint("s", 0.0, 0.0),
            vec![
                waypoint("a", 10.0, 0.0),
                waypoint("b", 10.0, 10.0),
                waypoint("c", 0.0, 10.0),
            ],
        )
        .expect("valid tour");
        let summary = RouteSummary::from_tour(tour, WalkingPace::default());

        let hops: Vec<_> = summary
            .legs()
            .iter()
            .map(|leg| (leg.from.id(), leg.to.id()))
            .collect();
        assert_eq!(hops, [("s", "a"), ("a", "b"), ("b", "c")]);
        assert!((summary.total_distance() - 30.0).abs() < EPSILON);
        assert!((summary.estimated_minutes() - 30.0 / 225.0).abs() < EPSILON);
        assert!(summary.rounded_minutes().abs() < EPSILON);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_tour_and_totals() {
        let tour = Tour::new(waypoint("s", 0.0, 0.0), vec![waypoint("a", 0.0, 450.0)])
            .expect("valid tour");
        let summary = RouteSummary::from_tour(tour, WalkingPace::default());
        let json = serde_json::to_value(&summary).expect("serialisable summary");
        assert_eq!(json["total_distance"], 450.0);
        assert_eq!(json["estimated_minutes"], 2.0);
        assert_eq!(json["legs"][0]["to"]["id"], "a");
        assert_eq!(json["tour"]["start"]["id"], "s");
    }
}
