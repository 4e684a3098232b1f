//! Dense distance matrix.

use super::DistanceModel;
use crate::models::Location;

/// A dense n×n cost matrix stored in row-major order.
///
/// Unreachable pairs hold `f64::INFINITY`. The solvers snapshot a
/// [`DistanceModel`] into a matrix once per call so that the inner loops
/// index by position instead of hashing names.
///
/// # Examples
///
/// ```
/// use parcel_routing::distance::{DistanceMatrix, DistanceTable};
/// use parcel_routing::models::Location;
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric("D", "A", 4.0).unwrap();
///
/// let locations = vec![Location::from("D"), Location::from("A")];
/// let dm = DistanceMatrix::from_model(&locations, &table);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), 4.0);
/// assert!(!dm.is_reachable(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with every pair unreachable.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Snapshots `model` over `locations`; index `i` is `locations[i]`.
    pub fn from_model<M: DistanceModel + ?Sized>(locations: &[Location], model: &M) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                dm.set(i, j, model.cost(from, to));
            }
        }
        dm
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub(crate) fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the directed pair has a finite cost.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }
}
