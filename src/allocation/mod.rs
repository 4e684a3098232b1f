//! Parcel-to-vehicle allocation.
//!
//! - [`best_fit_decreasing`] — Best-Fit-Decreasing bin packing, O(n log n + n·m)

mod best_fit;

pub use best_fit::best_fit_decreasing;

use crate::error::{Error, Result};
use crate::models::{Parcel, Vehicle};

/// A parcel the allocator could not place, with the reason.
#[derive(Debug)]
pub struct Rejection {
    pub parcel: Parcel,
    pub error: Error,
}

/// Result of an allocation pass: the vehicles opened, in creation order,
/// and any rejected parcels.
#[derive(Debug)]
pub struct Allocation {
    vehicles: Vec<Vehicle>,
    rejected: Vec<Rejection>,
}

impl Allocation {
    /// Vehicles in creation order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Parcels that were not placed in any vehicle.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of parcels placed across all vehicles.
    pub fn num_parcels(&self) -> usize {
        self.vehicles.iter().map(Vehicle::len).sum()
    }

    /// Returns `true` if every input parcel was placed.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Splits into vehicles and rejections.
    pub fn into_parts(self) -> (Vec<Vehicle>, Vec<Rejection>) {
        (self.vehicles, self.rejected)
    }

    /// All-or-nothing view: the vehicles, or the first rejection's error.
    pub fn into_vehicles(self) -> Result<Vec<Vehicle>> {
        match self.rejected.into_iter().next() {
            Some(rejection) => Err(rejection.error),
            None => Ok(self.vehicles),
        }
    }
}
