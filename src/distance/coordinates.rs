//! Straight-line distances between named points.

use std::collections::BTreeMap;

use super::DistanceModel;
use crate::error::{Error, Result};
use crate::models::Location;

/// Named 2-D points with Euclidean distance between them.
///
/// Unknown locations are unreachable; a known location is at distance zero
/// from itself.
///
/// # Examples
///
/// ```
/// use parcel_routing::distance::{Coordinates, DistanceModel};
/// use parcel_routing::models::Location;
///
/// let mut points = Coordinates::new();
/// points.insert("Depot", 0.0, 0.0).unwrap();
/// points.insert("Shop", 3.0, 4.0).unwrap();
///
/// let d = points.distance(&Location::from("Depot"), &Location::from("Shop"));
/// assert_eq!(d, Some(5.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Coordinates {
    points: BTreeMap<Location, (f64, f64)>,
}

impl Coordinates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places (or moves) a location at `(x, y)`.
    pub fn insert(&mut self, location: impl Into<Location>, x: f64, y: f64) -> Result<()> {
        let location = location.into();
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::invalid_config(format!(
                "coordinates of {location} must be finite, got ({x}, {y})"
            )));
        }
        self.points.insert(location, (x, y));
        Ok(())
    }

    /// Coordinates of a location, if known.
    pub fn get(&self, location: &Location) -> Option<(f64, f64)> {
        self.points.get(location).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl DistanceModel for Coordinates {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        let (x1, y1) = self.get(from)?;
        let (x2, y2) = self.get(to)?;
        // Points far enough apart overflow to infinity; report them unreachable.
        Some((x2 - x1).hypot(y2 - y1)).filter(|d| d.is_finite())
    }
}
