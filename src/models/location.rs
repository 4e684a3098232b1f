//! Location identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, named location (a city, a depot, a drop point).
///
/// Locations are ordered by name, which is what makes destination sets and
/// tie-breaking in the optimizers reproducible.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::Location;
///
/// let hanoi = Location::from("Hanoi");
/// assert_eq!(hanoi.as_str(), "Hanoi");
/// assert!(Location::from("Da Nang") < hanoi);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
