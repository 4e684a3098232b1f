//! The outcome of one allocation-and-routing run.

use super::RoutingFailure;
use crate::allocation::Rejection;
use crate::models::Vehicle;

/// Vehicles with their routes, plus every parcel and vehicle that failed.
#[derive(Debug)]
pub struct DispatchPlan {
    vehicles: Vec<Vehicle>,
    rejected: Vec<Rejection>,
    failures: Vec<RoutingFailure>,
}

impl DispatchPlan {
    pub(crate) fn new(
        vehicles: Vec<Vehicle>,
        rejected: Vec<Rejection>,
        failures: Vec<RoutingFailure>,
    ) -> Self {
        Self {
            vehicles,
            rejected,
            failures,
        }
    }

    /// Vehicles in creation order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a vehicle by id.
    pub fn vehicle(&self, id: usize) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// Parcels the allocator could not place.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    /// Vehicles whose route could not be computed.
    pub fn failures(&self) -> &[RoutingFailure] {
        &self.failures
    }

    /// The routing failure for a vehicle, if it failed.
    pub fn failure(&self, vehicle_id: usize) -> Option<&RoutingFailure> {
        self.failures.iter().find(|f| f.vehicle_id == vehicle_id)
    }

    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Vehicles that received a route.
    pub fn routed(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter().filter(|v| v.route().is_some())
    }

    /// Sum of route costs over routed vehicles.
    pub fn total_cost(&self) -> f64 {
        self.routed()
            .filter_map(Vehicle::route)
            .map(|route| route.cost())
            .sum()
    }

    /// Returns `true` if every parcel was placed and every vehicle routed.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty() && self.failures.is_empty()
    }
}
