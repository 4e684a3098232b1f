//! Routing every vehicle of an allocation.

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::DistanceModel;
use crate::error::{Error, Result};
use crate::evaluation::RouteEvaluator;
use crate::models::{Location, Route, Vehicle};
use crate::routing::RouteOptimizer;

/// A vehicle whose tour could not be computed.
#[derive(Debug)]
pub struct RoutingFailure {
    pub vehicle_id: usize,
    pub error: Error,
}

/// Computes a tour for every vehicle and stores it on the vehicle.
///
/// Vehicles are routed independently: a vehicle that fails (for example
/// with [`Error::NoFeasibleRoute`]) is reported in the returned list and
/// keeps no route, while the others are still routed. With the `parallel`
/// feature the vehicles are solved concurrently.
///
/// # Examples
///
/// ```
/// use parcel_routing::allocation::best_fit_decreasing;
/// use parcel_routing::dispatch::route_vehicles;
/// use parcel_routing::distance::DistanceTable;
/// use parcel_routing::models::{Location, Parcel};
/// use parcel_routing::routing::Strategy;
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric("Hanoi", "Hai Phong", 121.0).unwrap();
///
/// let parcels = vec![Parcel::new("P1", 10.0, "Hai Phong", "An").unwrap()];
/// let mut vehicles = best_fit_decreasing(&parcels, 500.0)
///     .unwrap()
///     .into_vehicles()
///     .unwrap();
///
/// let failures = route_vehicles(&mut vehicles, &Location::from("Hanoi"), &Strategy::Auto, &table);
/// assert!(failures.is_empty());
/// assert_eq!(vehicles[0].route().unwrap().cost(), 242.0);
/// ```
pub fn route_vehicles<O: RouteOptimizer + ?Sized>(
    vehicles: &mut [Vehicle],
    depot: &Location,
    optimizer: &O,
    distances: &dyn DistanceModel,
) -> Vec<RoutingFailure> {
    #[cfg(feature = "parallel")]
    let results: Vec<Result<Route>> = vehicles
        .par_iter()
        .map(|vehicle| solve(vehicle, depot, optimizer, distances))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<Route>> = vehicles
        .iter()
        .map(|vehicle| solve(vehicle, depot, optimizer, distances))
        .collect();

    let mut failures = Vec::new();
    for (vehicle, result) in vehicles.iter_mut().zip(results) {
        match result {
            Ok(route) => {
                debug_assert!(RouteEvaluator::new(distances)
                    .check_route(&route, vehicle.destinations())
                    .is_empty());
                vehicle.set_route(route);
            }
            Err(error) => {
                warn!("routing: vehicle {} failed: {error}", vehicle.id());
                failures.push(RoutingFailure {
                    vehicle_id: vehicle.id(),
                    error,
                });
            }
        }
    }
    failures
}

fn solve<O: RouteOptimizer + ?Sized>(
    vehicle: &Vehicle,
    depot: &Location,
    optimizer: &O,
    distances: &dyn DistanceModel,
) -> Result<Route> {
    let route = optimizer.optimize(vehicle.destinations(), depot, distances)?;
    debug!(
        "routing: vehicle={} solver={} stops={} cost={}",
        vehicle.id(),
        optimizer.name(),
        route.len(),
        route.cost()
    );
    Ok(route)
}
