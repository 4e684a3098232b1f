//! Sparse, directed distance table.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::DistanceModel;
use crate::error::{Error, Result};
use crate::models::Location;

/// A single directed table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Location,
    pub to: Location,
    pub distance: f64,
}

/// A hand-authored table of directed travel costs.
///
/// Any pair without an entry, including a location paired with itself, is
/// unreachable.
///
/// # Examples
///
/// ```
/// use parcel_routing::distance::{DistanceModel, DistanceTable};
/// use parcel_routing::models::Location;
///
/// let mut table = DistanceTable::new();
/// table.insert("Hanoi", "Hai Phong", 121.0).unwrap();
/// table.insert("Hai Phong", "Hanoi", 125.0).unwrap();
///
/// let hanoi = Location::from("Hanoi");
/// let hai_phong = Location::from("Hai Phong");
/// assert_eq!(table.distance(&hanoi, &hai_phong), Some(121.0));
/// assert_eq!(table.distance(&hai_phong, &hanoi), Some(125.0));
/// assert_eq!(table.distance(&hanoi, &hanoi), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    rows: HashMap<Location, HashMap<Location, f64>>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a list of directed entries.
    ///
    /// With `symmetric`, every entry is also inserted in the reverse
    /// direction; a later entry overwrites an earlier one for the same pair.
    pub fn from_edges(edges: &[Edge], symmetric: bool) -> Result<Self> {
        let mut table = Self::new();
        for edge in edges {
            if symmetric {
                table.insert_symmetric(edge.from.clone(), edge.to.clone(), edge.distance)?;
            } else {
                table.insert(edge.from.clone(), edge.to.clone(), edge.distance)?;
            }
        }
        Ok(table)
    }

    /// Sets the directed cost from `from` to `to`.
    ///
    /// Fails with [`Error::InvalidDistance`] unless `distance` is finite and
    /// non-negative. Unreachable pairs are expressed by leaving them out.
    pub fn insert(
        &mut self,
        from: impl Into<Location>,
        to: impl Into<Location>,
        distance: f64,
    ) -> Result<()> {
        let from = from.into();
        let to = to.into();
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::InvalidDistance { from, to, distance });
        }
        self.rows.entry(from).or_default().insert(to, distance);
        Ok(())
    }

    /// Sets the same cost in both directions.
    pub fn insert_symmetric(
        &mut self,
        a: impl Into<Location>,
        b: impl Into<Location>,
        distance: f64,
    ) -> Result<()> {
        let a = a.into();
        let b = b.into();
        self.insert(a.clone(), b.clone(), distance)?;
        self.insert(b, a, distance)
    }

    /// Number of directed entries.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every location mentioned as an origin or a destination.
    pub fn locations(&self) -> BTreeSet<&Location> {
        self.rows
            .iter()
            .flat_map(|(from, row)| std::iter::once(from).chain(row.keys()))
            .collect()
    }
}

impl DistanceModel for DistanceTable {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        self.rows.get(from)?.get(to).copied()
    }
}
