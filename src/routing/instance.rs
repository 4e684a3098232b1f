//! Indexed tour instance shared by the exact solvers.

use std::collections::BTreeSet;

use crate::distance::{DistanceMatrix, DistanceModel};
use crate::error::{Error, Result};
use crate::models::{Location, Route};

/// A depot plus destinations, indexed for the solvers.
///
/// Node 0 is the depot and node `i` (1..=k) is `stops[i - 1]`. Destinations
/// equal to the depot are dropped; stops keep the set's sorted order.
pub(crate) struct TourInstance {
    depot: Location,
    stops: Vec<Location>,
    matrix: DistanceMatrix,
}

impl TourInstance {
    pub(crate) fn new(
        destinations: &BTreeSet<Location>,
        depot: &Location,
        distances: &dyn DistanceModel,
    ) -> Self {
        let stops: Vec<Location> = destinations
            .iter()
            .filter(|&location| location != depot)
            .cloned()
            .collect();
        let mut nodes = Vec::with_capacity(stops.len() + 1);
        nodes.push(depot.clone());
        nodes.extend(stops.iter().cloned());
        let matrix = DistanceMatrix::from_model(&nodes, distances);
        Self {
            depot: depot.clone(),
            stops,
            matrix,
        }
    }

    /// Number of destinations (excluding the depot).
    pub(crate) fn len(&self) -> usize {
        self.stops.len()
    }

    pub(crate) fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Fails with [`Error::TooManyDestinations`] above `limit`.
    pub(crate) fn check_limit(&self, limit: usize) -> Result<()> {
        if self.len() > limit {
            return Err(Error::TooManyDestinations {
                count: self.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Closed-tour cost for a visiting order of node indices (1..=k).
    ///
    /// `+∞` if any leg is unreachable.
    pub(crate) fn tour_cost(&self, order: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
            return 0.0;
        };
        let mut cost = self.matrix.get(0, first);
        for leg in order.windows(2) {
            cost += self.matrix.get(leg[0], leg[1]);
        }
        cost + self.matrix.get(last, 0)
    }

    /// Converts a visiting order of node indices into a route.
    pub(crate) fn route(&self, order: &[usize], cost: f64) -> Route {
        let stops = order
            .iter()
            .map(|&node| self.stops[node - 1].clone())
            .collect();
        Route::new(self.depot.clone(), stops, cost)
    }

    pub(crate) fn trivial_route(&self) -> Route {
        Route::trivial(self.depot.clone())
    }

    /// The error for an instance whose every tour has an unreachable leg.
    pub(crate) fn infeasible(&self) -> Error {
        Error::NoFeasibleRoute {
            depot: self.depot.clone(),
            destinations: self.stops.clone(),
        }
    }
}
