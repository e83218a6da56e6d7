//! Caller-owned set of stops chosen for a route.
//!
//! A [`SelectionSet`] is bound to the stop identifiers of a catalog when it is
//! created. Toggling an identifier the catalog does not know is absorbed
//! without touching the set: the UI only offers real stops, so a stray id is
//! not worth surfacing as an error.

use std::collections::BTreeSet;

use log::debug;

use crate::Waypoint;

/// What a call to [`SelectionSet::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The stop was not selected and now is.
    Added,
    /// The stop was selected and no longer is.
    Removed,
    /// The id does not name a known stop; nothing changed.
    Ignored,
}

/// Stops currently chosen for a route.
///
/// # Examples
/// ```
/// use waymark_core::{SelectionSet, Toggle};
///
/// let mut selection = SelectionSet::new(["gap", "nike", "lego"]);
/// assert_eq!(selection.toggle("nike"), Toggle::Added);
/// assert_eq!(selection.toggle("unknown"), Toggle::Ignored);
/// assert_eq!(selection.len(), 1);
///
/// selection.clear();
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    known: BTreeSet<String>,
    selected: BTreeSet<String>,
}

impl SelectionSet {
    /// Create an empty selection over the given stop identifiers.
    pub fn new<I, S>(known_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known_ids.into_iter().map(Into::into).collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Add `stop_id` if absent, remove it if present.
    ///
    /// Unknown identifiers leave the selection unchanged and report
    /// [`Toggle::Ignored`].
    pub fn toggle(&mut self, stop_id: &str) -> Toggle {
        if !self.known.contains(stop_id) {
            debug!("ignoring toggle for unknown stop {stop_id:?}");
            return Toggle::Ignored;
        }
        if self.selected.remove(stop_id) {
            Toggle::Removed
        } else {
            self.selected.insert(stop_id.to_owned());
            Toggle::Added
        }
    }

    /// Deselect every stop.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Snapshot of the selected identifiers.
    #[must_use]
    pub fn members(&self) -> BTreeSet<String> {
        self.selected.clone()
    }

    /// Whether `stop_id` is currently selected.
    #[must_use]
    pub fn contains(&self, stop_id: &str) -> bool {
        self.selected.contains(stop_id)
    }

    /// Number of selected stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Pick the selected stops out of `stops`, preserving their order.
    ///
    /// Route construction breaks distance ties by input order, so callers
    /// resolve against the catalog to keep results stable between runs.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waymark_core::{SelectionSet, Waypoint};
    ///
    /// let stops = vec![
    ///     Waypoint::new("a", Coord { x: 0.0, y: 0.0 }),
    ///     Waypoint::new("b", Coord { x: 1.0, y: 0.0 }),
    ///     Waypoint::new("c", Coord { x: 2.0, y: 0.0 }),
    /// ];
    /// let mut selection = SelectionSet::new(stops.iter().map(Waypoint::id));
    /// selection.toggle("c");
    /// selection.toggle("a");
    ///
    /// let chosen: Vec<_> = selection.resolve(&stops).into_iter().map(|w| w.id().to_owned()).collect();
    /// assert_eq!(chosen, ["a", "c"]);
    /// ```
    pub fn resolve<'a, I>(&self, stops: I) -> Vec<Waypoint>
    where
        I: IntoIterator<Item = &'a Waypoint>,
    {
        stops
            .into_iter()
            .filter(|stop| self.selected.contains(stop.id()))
            .cloned()
            .collect()
    }
}
