//! Allocation-then-routing session.

use log::info;

use super::{manifest, route_vehicles, DispatchPlan};
use crate::allocation::best_fit_decreasing;
use crate::config::DispatchConfig;
use crate::distance::{DistanceModel, Distances};
use crate::error::Result;
use crate::models::Parcel;

/// Runs the full pipeline for a configuration and keeps the latest plan.
///
/// Every [`run`](Dispatcher::run) recomputes the plan from scratch: parcels
/// are allocated with Best-Fit-Decreasing and each resulting vehicle is
/// routed with the configured strategy.
///
/// # Examples
///
/// ```
/// use parcel_routing::config::DispatchConfig;
/// use parcel_routing::dispatch::Dispatcher;
/// use parcel_routing::models::Parcel;
///
/// let mut dispatcher = Dispatcher::from_json(r#"{
///     "capacity": 500,
///     "depot": "Hanoi",
///     "distances": {
///         "kind": "table",
///         "symmetric": true,
///         "edges": [{"from": "Hanoi", "to": "Hai Phong", "distance": 121}]
///     }
/// }"#).unwrap();
///
/// let parcels = vec![
///     Parcel::new("P000001", 120.0, "Hai Phong", "Nguyen Van A").unwrap(),
///     Parcel::new("P000002", 80.0, "Hai Phong", "Tran Thi B").unwrap(),
/// ];
/// let plan = dispatcher.run(&parcels).unwrap();
/// assert_eq!(plan.num_vehicles(), 1);
/// assert_eq!(plan.total_cost(), 242.0);
///
/// dispatcher.clear();
/// assert!(dispatcher.plan().is_none());
/// ```
#[derive(Debug)]
pub struct Dispatcher<D = Distances> {
    config: DispatchConfig,
    distances: D,
    plan: Option<DispatchPlan>,
}

impl Dispatcher<Distances> {
    /// Validates the configuration and builds its distance model.
    pub fn from_config(config: DispatchConfig) -> Result<Self> {
        let distances = config.distances.build()?;
        Self::with_distances(config, distances)
    }

    /// Parses a JSON configuration, see [`DispatchConfig::from_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(DispatchConfig::from_json(json)?)
    }
}

impl<D: DistanceModel> Dispatcher<D> {
    /// Uses `distances` in place of the configuration's distance source.
    pub fn with_distances(config: DispatchConfig, distances: D) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            distances,
            plan: None,
        })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn distances(&self) -> &D {
        &self.distances
    }

    /// Allocates `parcels` and routes every vehicle, replacing any previous
    /// plan.
    ///
    /// Parcels that cannot be placed and vehicles that cannot be routed are
    /// recorded in the plan; only an invalid configuration fails the run.
    pub fn run(&mut self, parcels: &[Parcel]) -> Result<&DispatchPlan> {
        let depot = &self.config.depot;
        let allocation = best_fit_decreasing(parcels, self.config.capacity)?;
        let (mut vehicles, rejected) = allocation.into_parts();
        let failures = route_vehicles(
            &mut vehicles,
            depot,
            &self.config.solver(),
            &self.distances,
        );

        let plan = DispatchPlan::new(vehicles, rejected, failures);
        info!(
            "dispatch: parcels={} vehicles={} rejected={} unrouted={} total_cost={}",
            parcels.len(),
            plan.num_vehicles(),
            plan.rejected().len(),
            plan.failures().len(),
            plan.total_cost()
        );
        Ok(self.plan.insert(plan))
    }

    /// The plan of the last run, if any.
    pub fn plan(&self) -> Option<&DispatchPlan> {
        self.plan.as_ref()
    }

    /// Discards the current plan.
    pub fn clear(&mut self) {
        self.plan = None;
    }

    /// A vehicle's parcels in the configured manifest order.
    ///
    /// Returns `None` without a plan or for an unknown vehicle.
    pub fn manifest(&self, vehicle_id: usize) -> Option<Vec<&Parcel>> {
        let vehicle = self.plan.as_ref()?.vehicle(vehicle_id)?;
        Some(manifest(
            vehicle,
            self.config.manifest_order,
            &self.config.depot,
            &self.distances,
        ))
    }
}
