//! Facade crate for the Waymark route-planning engine.
//!
//! This crate re-exports the core domain types and exposes the greedy planner
//! and venue catalogs behind feature flags.

#![forbid(unsafe_code)]

pub use waymark_core::{
    Leg, PaceError, RouteError, RouteMode, RoutePlanner, RouteRequest, RouteSummary,
    SelectionSet, Toggle, Tour, TourError, WalkingPace, Waypoint,
};

#[cfg(feature = "solver")]
pub use waymark_solver::{GreedyPlanner, PlannerConfig, TwoOpt, compute_route};

#[cfg(feature = "venue")]
pub use waymark_data::{Coupon, Start, Store, Venue, VenueError};
