//! Route modes, requests and the planner trait.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{RouteSummary, TourError, Waypoint};

/// How a route is computed.
///
/// The caller picks the mode; planners never decide it themselves.
///
/// # Examples
/// ```rust
/// use waymark_core::RouteMode;
///
/// let mode: RouteMode = "nearest-neighbor+2opt".parse().unwrap();
/// assert_eq!(mode, RouteMode::NearestNeighbourTwoOpt);
/// assert_eq!(RouteMode::NearestNeighbour.to_string(), "nearest-neighbor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteMode {
    /// Greedy nearest-neighbour construction only.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "nearest-neighbor", alias = "nn"))]
    NearestNeighbour,
    /// Nearest-neighbour construction refined by 2-opt local search.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "nearest-neighbor+2opt", alias = "twoopt")
    )]
    NearestNeighbourTwoOpt,
}

impl RouteMode {
    /// Canonical name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NearestNeighbour => "nearest-neighbor",
            Self::NearestNeighbourTwoOpt => "nearest-neighbor+2opt",
        }
    }

    /// Whether 2-opt refinement runs after construction.
    #[must_use]
    pub const fn optimises(self) -> bool {
        matches!(self, Self::NearestNeighbourTwoOpt)
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`RouteMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route mode {0:?} (expected nearest-neighbor or nearest-neighbor+2opt)")]
pub struct ParseRouteModeError(String);

impl FromStr for RouteMode {
    type Err = ParseRouteModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest-neighbor" | "nearest-neighbour" | "nn" => Ok(Self::NearestNeighbour),
            "nearest-neighbor+2opt" | "nearest-neighbour+2opt" | "twoopt" | "2opt" => {
                Ok(Self::NearestNeighbourTwoOpt)
            }
            _ => Err(ParseRouteModeError(s.to_owned())),
        }
    }
}

/// Inputs for a single route computation.
///
/// The request owns copies of the start and the selected stops, so planners
/// never hold on to caller state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Where the visitor begins.
    pub start: Waypoint,
    /// Selected stops in catalog order.
    pub stops: Vec<Waypoint>,
    /// Construction-only or construction plus 2-opt.
    pub mode: RouteMode,
}

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The selection was empty; there is nothing to route.
    #[error("no stops selected")]
    EmptySelection,
    /// The stops could not form a valid tour, e.g. a repeated identifier.
    #[error(transparent)]
    InvalidTour(#[from] TourError),
}

/// Compute a visiting order and its summary.
///
/// Implementations must return [`RouteError::EmptySelection`] for an empty
/// request rather than panicking, and must keep the start first.
/// Planners must be `Send + Sync` so sessions can share one instance.
pub trait RoutePlanner: Send + Sync {
    /// Plan a route for `request`.
    fn plan(&self, request: &RouteRequest) -> Result<RouteSummary, RouteError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InputOrderPlanner, waypoint};
    use rstest::rstest;

    #[rstest]
    #[case("nearest-neighbor", RouteMode::NearestNeighbour)]
    #[case("nn", RouteMode::NearestNeighbour)]
    #[case("Nearest-Neighbor+2opt", RouteMode::NearestNeighbourTwoOpt)]
    #[case("twoopt", RouteMode::NearestNeighbourTwoOpt)]
    fn parses_mode_names(#[case] raw: &str, #[case] expected: RouteMode) {
        assert_eq!(raw.parse::<RouteMode>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_mode() {
        let err = "annealing".parse::<RouteMode>().expect_err("unknown mode");
        assert!(err.to_string().contains("annealing"));
    }

    #[rstest]
    fn planner_reports_empty_selection() {
        let request = RouteRequest {
            start: waypoint("entrance", 0.0, 0.0),
            stops: Vec::new(),
            mode: RouteMode::NearestNeighbour,
        };
        let err = InputOrderPlanner.plan(&request).expect_err("empty selection");
        assert_eq!(err, RouteError::EmptySelection);
        assert_eq!(err.to_string(), "no stops selected");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn mode_round_trips_through_canonical_names() {
        let json = serde_json::to_string(&RouteMode::NearestNeighbourTwoOpt).expect("serialise");
        assert_eq!(json, "\"nearest-neighbor+2opt\"");
        let parsed: RouteMode = serde_json::from_str("\"nn\"").expect("alias");
        assert_eq!(parsed, RouteMode::NearestNeighbour);
    }
}
