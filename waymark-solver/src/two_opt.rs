//! 2-opt local search with a pinned start.
//!
//! Each pass scans every segment `[i, k]` with `1 <= i < k <= n - 2` and
//! reverses it when that strictly shortens the two edges around it. After an
//! accepted reversal the scan carries on forward from the next pair rather
//! than restarting; passes repeat until one changes nothing or the pass cap is
//! reached.

use std::num::NonZeroUsize;

use log::{debug, error, warn};
use waymark_core::{Tour, Waypoint, distance};

use crate::DEFAULT_MAX_PASSES;

/// Result of running [`TwoOpt::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// The improved tour.
    pub tour: Tour,
    /// Full passes performed, including the final pass that found nothing.
    pub passes: usize,
    /// Segment reversals applied across all passes.
    pub reversals: usize,
    /// Whether a pass without improvement was reached before the cap.
    pub converged: bool,
}

/// 2-opt optimiser that never moves the tour's start.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Tour, Waypoint};
/// use waymark_solver::TwoOpt;
///
/// # fn main() -> Result<(), waymark_core::TourError> {
/// let at = |id: &str, x: f64| Waypoint::new(id, Coord { x, y: 0.0 });
/// let tour = Tour::new(at("start", 0.0), vec![at("b", 2.0), at("a", 1.0), at("c", 3.0)])?;
///
/// let improved = TwoOpt::default().optimise(&tour);
/// let order: Vec<_> = improved.points().map(Waypoint::id).collect();
/// assert_eq!(order, ["start", "a", "b", "c"]);
/// assert!(improved.length() < tour.length());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoOpt {
    max_passes: NonZeroUsize,
}

impl Default for TwoOpt {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PASSES)
    }
}

impl TwoOpt {
    /// Construct an optimiser that stops after at most `max_passes` passes.
    #[must_use]
    pub const fn new(max_passes: NonZeroUsize) -> Self {
        Self { max_passes }
    }

    /// Improve `tour` and return the resulting tour.
    #[must_use]
    pub fn optimise(&self, tour: &Tour) -> Tour {
        self.run(tour).tour
    }

    /// Improve `tour`, reporting how the search went.
    ///
    /// The input is never modified; the search works on a private copy of
    /// the path.
    #[must_use]
    pub fn run(&self, tour: &Tour) -> TwoOptOutcome {
        let mut path = tour.to_path();
        let mut passes = 0;
        let mut reversals = 0;
        let mut converged = false;

        while passes < self.max_passes.get() {
            passes += 1;
            let applied = improve_pass(&mut path);
            debug!("2-opt pass {passes} applied {applied} reversals");
            if applied == 0 {
                converged = true;
                break;
            }
            reversals += applied;
        }

        if !converged {
            warn!(
                "2-opt stopped after {passes} passes without reaching a local optimum; \
                 returning best tour found"
            );
        }

        let stops = path.split_off(1);
        let improved = match tour.reordered(stops) {
            Ok(improved) => improved,
            Err(err) => {
                error!("2-opt produced an invalid tour ({err}); keeping the input order");
                tour.clone()
            }
        };

        TwoOptOutcome {
            tour: improved,
            passes,
            reversals,
            converged,
        }
    }
}

/// One forward scan over all segment reversals; returns how many were applied.
fn improve_pass(path: &mut [Waypoint]) -> usize {
    let n = path.len();
    let mut applied = 0;
    for i in 1..n.saturating_sub(2) {
        for k in (i + 1)..(n - 1) {
            if reversal_shortens(path, i, k)
                && let Some(segment) = path.get_mut(i..=k)
            {
                segment.reverse();
                applied += 1;
            }
        }
    }
    applied
}

/// Whether reversing `path[i..=k]` strictly shortens the tour.
///
/// Only the two edges at the segment boundary change length: the inner edges
/// are walked in the opposite direction at the same cost.
#[expect(
    clippy::float_arithmetic,
    reason = "2-opt compares sums of floating-point edge lengths"
)]
fn reversal_shortens(path: &[Waypoint], i: usize, k: usize) -> bool {
    let (Some(before), Some(first), Some(last), Some(after)) = (
        i.checked_sub(1).and_then(|prev| path.get(prev)),
        path.get(i),
        path.get(k),
        path.get(k + 1),
    ) else {
        return false;
    };
    let current = distance(before, first) + distance(last, after);
    let reversed = distance(before, last) + distance(first, after);
    reversed < current
}
