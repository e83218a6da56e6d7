//! Venue catalogs for the Waymark engine.
//!
//! Responsibilities:
//! - Decode venue documents (stores, coupons and entrances) from JSON.
//! - Validate identifiers and coordinates before anything is planned.
//! - Bridge catalog entries to [`waymark_core::Waypoint`] tour nodes.
//!
//! Boundaries:
//! - Route construction and optimisation live in `waymark-solver`.
//! - Corridor geometry is carried by venue documents for drawing only and is
//!   ignored here; routes use straight-line distances.

#![forbid(unsafe_code)]

mod fs;
mod venue;

pub use venue::{Coupon, DEFAULT_START_ID, Start, Store, Venue, VenueError};
