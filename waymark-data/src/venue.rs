//! Venue documents: stores, their coupons and the entrances routes start from.

use std::collections::BTreeSet;
use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use waymark_core::{SelectionSet, Waypoint};

use crate::fs::open_utf8_file;

/// Start used when the caller does not pick one.
pub const DEFAULT_START_ID: &str = "Entrance A";

/// A promotion offered by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Headline shown in coupon listings.
    pub title: String,
    /// Longer description of the offer.
    #[serde(default)]
    pub desc: String,
    /// Code to quote at the till.
    #[serde(default)]
    pub code: String,
    /// Expiry date as written by the venue.
    #[serde(default)]
    pub expires: String,
}

/// A selectable store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Catalog-unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Wing or area of the venue.
    #[serde(default)]
    pub zone: String,
    /// Kind of shop, e.g. "Apparel".
    #[serde(default)]
    pub category: String,
    /// Horizontal venue coordinate.
    pub x: f64,
    /// Vertical venue coordinate.
    pub y: f64,
    /// Current promotions.
    #[serde(default)]
    pub coupons: Vec<Coupon>,
}

impl Store {
    /// The store as a named tour node.
    #[must_use]
    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.id.as_str(), Coord { x: self.x, y: self.y })
            .with_name(self.name.as_str())
    }

    fn matches(&self, needle: &str) -> bool {
        format!("{} {}", self.name, self.zone)
            .to_lowercase()
            .contains(needle)
    }
}

/// An entrance a route may begin from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Start {
    /// Catalog-unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Horizontal venue coordinate.
    pub x: f64,
    /// Vertical venue coordinate.
    pub y: f64,
}

impl Start {
    /// The entrance as a named tour node.
    #[must_use]
    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.id.as_str(), Coord { x: self.x, y: self.y })
            .with_name(self.name.as_str())
    }
}

/// Errors raised while loading a venue.
#[derive(Debug, Error)]
pub enum VenueError {
    /// The venue file could not be opened.
    #[error("failed to read venue file {path:?}: {source}")]
    Read {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The document is not a valid venue JSON document.
    #[error("failed to parse venue JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two stores share an identifier.
    #[error("store id {id:?} appears more than once")]
    DuplicateStore {
        /// The repeated identifier.
        id: String,
    },
    /// Two starts share an identifier.
    #[error("start id {id:?} appears more than once")]
    DuplicateStart {
        /// The repeated identifier.
        id: String,
    },
    /// A start reuses a store identifier, so tours through both would be
    /// ambiguous.
    #[error("start id {id:?} is also used by a store")]
    StartShadowsStore {
        /// The shared identifier.
        id: String,
    },
    /// A store or start has a NaN or infinite coordinate.
    #[error("{kind} {id:?} has non-finite coordinates")]
    NonFiniteLocation {
        /// Either `"store"` or `"start"`.
        kind: &'static str,
        /// Identifier of the offending entry.
        id: String,
    },
}

#[derive(Deserialize)]
struct VenueDocument {
    #[serde(default)]
    stores: Vec<Store>,
    #[serde(default)]
    starts: Vec<Start>,
}

/// A validated venue catalog.
///
/// # Examples
/// ```
/// use waymark_data::Venue;
///
/// # fn main() -> Result<(), waymark_data::VenueError> {
/// let venue = Venue::from_json_str(
///     r#"{
///         "stores": [
///             {"id": "nike", "name": "Nike Factory", "zone": "Oasis", "x": 600, "y": 120},
///             {"id": "gap", "name": "Gap Outlet", "zone": "Fashion Ave", "x": 200, "y": 300}
///         ],
///         "starts": [{"id": "Entrance A", "name": "Entrance A (Fashion Ave)", "x": 80, "y": 340}],
///         "corridors": []
///     }"#,
/// )?;
///
/// let hits: Vec<_> = venue.search("fashion").map(|store| store.id.as_str()).collect();
/// assert_eq!(hits, ["gap"]);
/// assert_eq!(venue.default_start().map(|start| start.id.as_str()), Some("Entrance A"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    stores: Vec<Store>,
    starts: Vec<Start>,
}

impl Venue {
    /// Build a venue from parts, validating identifiers and coordinates.
    pub fn new(stores: Vec<Store>, starts: Vec<Start>) -> Result<Self, VenueError> {
        let mut store_ids = BTreeSet::new();
        for store in &stores {
            require_finite("store", &store.id, store.x, store.y)?;
            if !store_ids.insert(store.id.as_str()) {
                return Err(VenueError::DuplicateStore {
                    id: store.id.clone(),
                });
            }
        }

        let mut start_ids = BTreeSet::new();
        for start in &starts {
            require_finite("start", &start.id, start.x, start.y)?;
            if store_ids.contains(start.id.as_str()) {
                return Err(VenueError::StartShadowsStore {
                    id: start.id.clone(),
                });
            }
            if !start_ids.insert(start.id.as_str()) {
                return Err(VenueError::DuplicateStart {
                    id: start.id.clone(),
                });
            }
        }

        Ok(Self { stores, starts })
    }

    /// Decode and validate a venue JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, VenueError> {
        let document: VenueDocument = serde_json::from_str(json)?;
        Self::new(document.stores, document.starts)
    }

    /// Read, decode and validate the venue JSON document at `path`.
    pub fn load(path: &Utf8Path) -> Result<Self, VenueError> {
        let file = open_utf8_file(path).map_err(|source| VenueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: VenueDocument = serde_json::from_reader(BufReader::new(file))?;
        let venue = Self::new(document.stores, document.starts)?;
        debug!(
            "loaded venue {path} with {} stores and {} starts",
            venue.stores.len(),
            venue.starts.len()
        );
        Ok(venue)
    }

    /// Stores in catalog order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Entrances in catalog order.
    #[must_use]
    pub fn starts(&self) -> &[Start] {
        &self.starts
    }

    /// Look up a store by identifier.
    #[must_use]
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Look up an entrance by identifier.
    #[must_use]
    pub fn start(&self, id: &str) -> Option<&Start> {
        self.starts.iter().find(|start| start.id == id)
    }

    /// [`DEFAULT_START_ID`] when the venue has it, otherwise the first start.
    #[must_use]
    pub fn default_start(&self) -> Option<&Start> {
        self.start(DEFAULT_START_ID).or_else(|| self.starts.first())
    }

    /// Stores whose `"{name} {zone}"` contains `query`, ignoring case.
    ///
    /// A blank query matches every store. Results keep catalog order.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Store> + use<'a> {
        let needle = query.trim().to_lowercase();
        self.stores
            .iter()
            .filter(move |store| needle.is_empty() || store.matches(&needle))
    }

    /// An empty selection over this venue's store identifiers.
    #[must_use]
    pub fn selection(&self) -> SelectionSet {
        SelectionSet::new(self.stores.iter().map(|store| store.id.as_str()))
    }

    /// The selected stores as tour nodes, in catalog order.
    #[must_use]
    pub fn selected_waypoints(&self, selection: &SelectionSet) -> Vec<Waypoint> {
        let waypoints: Vec<Waypoint> = self.stores.iter().map(Store::waypoint).collect();
        selection.resolve(&waypoints)
    }

    /// Coupons for `store_id`, or `None` when no such store exists.
    #[must_use]
    pub fn coupons(&self, store_id: &str) -> Option<&[Coupon]> {
        self.store(store_id).map(|store| store.coupons.as_slice())
    }
}

fn require_finite(kind: &'static str, id: &str, x: f64, y: f64) -> Result<(), VenueError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(VenueError::NonFiniteLocation {
            kind,
            id: id.to_owned(),
        })
    }
}
