//! Greedy route planner for Waymark.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`RoutePlanner`](waymark_core::RoutePlanner) trait. Routes are built with
//! nearest-neighbour construction from the visitor's start and, when the
//! caller asks for it, refined by 2-opt local search that keeps the start
//! pinned in place.
//!
//! Both stages are deterministic: distance ties resolve by input order and
//! 2-opt scans its candidate moves in a fixed order. Results are local optima,
//! not guaranteed shortest tours.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod construct;
mod planner;
mod two_opt;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{DEFAULT_MAX_PASSES, PlannerConfig};
pub use construct::nearest_neighbour_tour;
pub use planner::{GreedyPlanner, compute_route};
pub use two_opt::{TwoOpt, TwoOptOutcome};
