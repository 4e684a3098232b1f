//! Capacity-limited vehicles and their loads.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{Location, Parcel, Route};
use crate::error::{Error, Result};

/// A vehicle with a fixed capacity and the parcels loaded onto it.
///
/// Remaining capacity never drops below zero: [`Vehicle::place`] refuses a
/// parcel that does not fit and leaves the vehicle unchanged. The
/// destination set is always exactly the set of destinations of the loaded
/// parcels.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Parcel, Vehicle};
///
/// let mut v = Vehicle::new(0, 500.0).unwrap();
/// v.place(Parcel::new("P1", 300.0, "Dalat", "An").unwrap()).unwrap();
/// assert_eq!(v.remaining(), 200.0);
/// assert_eq!(v.destinations().len(), 1);
///
/// let heavy = Parcel::new("P2", 250.0, "HCMC", "Binh").unwrap();
/// assert!(!v.fits(heavy.weight()));
/// assert!(v.place(heavy).is_err());
/// assert_eq!(v.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    id: usize,
    capacity: f64,
    load: f64,
    parcels: Vec<Parcel>,
    destinations: BTreeSet<Location>,
    route: Option<Route>,
}

impl Vehicle {
    /// Creates an empty vehicle.
    ///
    /// Fails with [`Error::InvalidCapacity`] unless `capacity` is positive
    /// and finite.
    pub fn new(id: usize, capacity: f64) -> Result<Self> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            id,
            capacity,
            load: 0.0,
            parcels: Vec::new(),
            destinations: BTreeSet::new(),
            route: None,
        })
    }

    /// Returns `true` if loading a parcel of this weight keeps the summed
    /// load within capacity.
    pub fn fits(&self, weight: f64) -> bool {
        self.load + weight <= self.capacity
    }

    /// Loads a parcel, updating remaining capacity and destinations.
    ///
    /// Fails with [`Error::ParcelExceedsCapacity`] (carrying the remaining
    /// capacity) if the parcel does not fit.
    pub fn place(&mut self, parcel: Parcel) -> Result<()> {
        if !self.fits(parcel.weight()) {
            return Err(Error::ParcelExceedsCapacity {
                id: parcel.id().to_string(),
                weight: parcel.weight(),
                capacity: self.remaining(),
            });
        }
        // Summed in insertion order, so `load` equals the parcels' weight sum.
        self.load += parcel.weight();
        self.destinations.insert(parcel.destination().clone());
        self.parcels.push(parcel);
        Ok(())
    }

    /// Creation index within an allocation.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Spare capacity, never negative.
    pub fn remaining(&self) -> f64 {
        (self.capacity - self.load).max(0.0)
    }

    /// Total weight loaded.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Fraction of capacity in use, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        self.load() / self.capacity
    }

    /// Loaded parcels in insertion order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Distinct destinations of the loaded parcels, sorted by name.
    pub fn destinations(&self) -> &BTreeSet<Location> {
        &self.destinations
    }

    /// Number of loaded parcels.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// The computed tour, once routing has run.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = Some(route);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stops: Vec<&str> = self.destinations.iter().map(Location::as_str).collect();
        write!(
            f,
            "Vehicle {} (capacity: {}kg, remaining: {}kg, stops: {}, parcels: {})",
            self.id,
            self.capacity,
            self.remaining(),
            stops.join(", "),
            self.parcels.len()
        )
    }
}
