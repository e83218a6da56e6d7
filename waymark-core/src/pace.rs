//! Walking pace used to turn distances into time estimates.

use thiserror::Error;

/// Venue units a visitor covers per minute by default.
///
/// Venue maps are drawn in feet; 225 ft/min is a relaxed browsing pace a
/// little under 3 mph.
pub const DEFAULT_UNITS_PER_MINUTE: f64 = 225.0;

/// Errors returned by [`WalkingPace::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PaceError {
    /// The pace was zero, negative, NaN or infinite.
    #[error("walking pace must be a finite, positive number of units per minute (got {0})")]
    NotPositive(f64),
}

/// Distance-to-time conversion factor in venue units per minute.
///
/// # Examples
/// ```
/// use waymark_core::WalkingPace;
///
/// # fn main() -> Result<(), waymark_core::PaceError> {
/// let pace = WalkingPace::new(200.0)?;
/// assert_eq!(pace.minutes_for(1000.0), 5.0);
/// assert!(WalkingPace::new(0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct WalkingPace(f64);

impl WalkingPace {
    /// Validate and construct a pace.
    pub fn new(units_per_minute: f64) -> Result<Self, PaceError> {
        if units_per_minute.is_finite() && units_per_minute > 0.0 {
            Ok(Self(units_per_minute))
        } else {
            Err(PaceError::NotPositive(units_per_minute))
        }
    }

    /// Units covered per minute.
    #[must_use]
    pub const fn units_per_minute(self) -> f64 {
        self.0
    }

    /// Minutes needed to walk `distance` units.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "time estimates divide distance by pace"
    )]
    pub fn minutes_for(self, distance: f64) -> f64 {
        distance / self.0
    }
}

impl Default for WalkingPace {
    fn default() -> Self {
        Self(DEFAULT_UNITS_PER_MINUTE)
    }
}

impl TryFrom<f64> for WalkingPace {
    type Error = PaceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WalkingPace> for f64 {
    fn from(pace: WalkingPace) -> Self {
        pace.0
    }
}
