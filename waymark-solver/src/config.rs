//! Planner configuration.

use std::num::NonZeroUsize;

use waymark_core::WalkingPace;

/// Upper bound on full 2-opt passes when none is configured.
///
/// Realistic selections (tens of stops) settle in a handful of passes; the
/// cap only matters for pathological inputs.
pub const DEFAULT_MAX_PASSES: NonZeroUsize = match NonZeroUsize::new(1000) {
    Some(passes) => passes,
    None => NonZeroUsize::MIN,
};

/// Configuration for [`GreedyPlanner`](crate::GreedyPlanner).
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use waymark_core::WalkingPace;
/// use waymark_solver::PlannerConfig;
///
/// # fn main() -> Result<(), waymark_core::PaceError> {
/// let config = PlannerConfig {
///     walking_pace: WalkingPace::new(264.0)?,
///     max_passes: NonZeroUsize::new(50).unwrap_or(NonZeroUsize::MIN),
/// };
/// assert_eq!(config.max_passes.get(), 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerConfig {
    /// Pace used to turn total distance into minutes.
    pub walking_pace: WalkingPace,
    /// Maximum number of full 2-opt passes before returning the best tour.
    pub max_passes: NonZeroUsize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_pace: WalkingPace::default(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}
