//! Nearest-neighbour tour construction.

use log::debug;
use waymark_core::{RouteError, Tour, Waypoint, distance};

/// Build a tour by repeatedly walking to the closest unvisited stop.
///
/// Starting from `start`, each step appends the member of the remaining
/// stops nearest to the last visited waypoint. Ties go to the stop that
/// appears first in `selected`, so results depend only on input order, never
/// on ids or names. Runs in `O(n²)` for `n` selected stops.
///
/// Returns [`RouteError::EmptySelection`] when `selected` is empty and
/// [`RouteError::InvalidTour`] when identifiers repeat.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Waypoint;
/// use waymark_solver::nearest_neighbour_tour;
///
/// # fn main() -> Result<(), waymark_core::RouteError> {
/// let start = Waypoint::new("entrance", Coord { x: 0.0, y: 0.0 });
/// let stops = vec![
///     Waypoint::new("far", Coord { x: 9.0, y: 0.0 }),
///     Waypoint::new("near", Coord { x: 1.0, y: 0.0 }),
/// ];
/// let tour = nearest_neighbour_tour(&start, &stops)?;
///
/// let order: Vec<_> = tour.points().map(Waypoint::id).collect();
/// assert_eq!(order, ["entrance", "near", "far"]);
/// # Ok(())
/// # }
/// ```
pub fn nearest_neighbour_tour(start: &Waypoint, selected: &[Waypoint]) -> Result<Tour, RouteError> {
    if selected.is_empty() {
        return Err(RouteError::EmptySelection);
    }

    let mut remaining: Vec<&Waypoint> = selected.iter().collect();
    let mut visited = Vec::with_capacity(selected.len());
    let mut current = start;

    while let Some(index) = nearest_index(current, &remaining) {
        let next = remaining.remove(index);
        visited.push(next.clone());
        current = next;
    }

    debug!(
        "nearest-neighbour tour from {:?} visits {} stops",
        start.id(),
        visited.len()
    );
    Tour::new(start.clone(), visited).map_err(RouteError::from)
}

/// Position of the candidate closest to `from`; the earliest wins ties.
fn nearest_index(from: &Waypoint, candidates: &[&Waypoint]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, candidate)| {
            let d = distance(from, candidate);
            match best {
                Some((_, best_distance)) if best_distance <= d => best,
                _ => Some((index, d)),
            }
        })
        .map(|(index, _)| index)
}
