//! Core domain types for the Waymark route-planning engine.
//!
//! The crate models the pieces a venue visitor's route is built from:
//! [`Waypoint`] coordinates, the caller-owned [`SelectionSet`], validated
//! [`Tour`] orderings and the derived [`RouteSummary`]. Route construction
//! and optimisation live behind the [`RoutePlanner`] trait so planners can be
//! swapped without touching callers.
//!
//! Everything here is synchronous and free of shared state: each route is a
//! pure function of the start, the selected stops and the [`RouteMode`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod pace;
pub mod planner;
pub mod selection;
pub mod summary;
pub mod tour;
pub mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distance::{distance, path_length};
pub use pace::{DEFAULT_UNITS_PER_MINUTE, PaceError, WalkingPace};
pub use planner::{ParseRouteModeError, RouteError, RouteMode, RoutePlanner, RouteRequest};
pub use selection::{SelectionSet, Toggle};
pub use summary::{Leg, RouteSummary};
pub use tour::{Tour, TourError};
pub use waypoint::Waypoint;
