//! Planar venue locations used as tour nodes.

use geo::Coord;

/// A named location inside a venue.
///
/// Stops (selectable stores) and start anchors (entrances) share this shape
/// and are interchangeable as tour nodes. Coordinates are venue-local plane
/// units; the engine never interprets them geographically.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::Waypoint;
///
/// let entrance = Waypoint::new("entrance-a", Coord { x: 80.0, y: 340.0 })
///     .with_name("Entrance A (Fashion Ave)");
///
/// assert_eq!(entrance.id(), "entrance-a");
/// assert_eq!(entrance.display_name(), "Entrance A (Fashion Ave)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    id: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    name: Option<String>,
    location: Coord<f64>,
}

impl Waypoint {
    /// Construct an unnamed waypoint.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waymark_core::Waypoint;
    ///
    /// let stop = Waypoint::new("s1", Coord { x: 1.0, y: 2.0 });
    /// assert_eq!(stop.display_name(), "s1");
    /// ```
    pub fn new(id: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: None,
            location,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name shown to visitors, falling back to the identifier.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Position in venue plane coordinates.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }
}
