//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Enumerates every visiting order of the destinations in lexicographic
//! order, starting from the sorted order, and keeps the cheapest closed
//! tour. Only a strictly cheaper tour replaces the incumbent, so among
//! equally cheap tours the first one generated wins.
//!
//! # Complexity
//!
//! O(k!·k) time, O(k) space, where k = number of destinations.

use std::collections::BTreeSet;

use log::debug;

use super::instance::TourInstance;
use super::RouteOptimizer;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::models::{Location, Route};

/// Exact solver that tries every permutation of the destinations.
///
/// Intended for small destination sets; refuses more than
/// [`max_destinations`](Self::with_max_destinations) destinations.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use parcel_routing::distance::DistanceTable;
/// use parcel_routing::models::Location;
/// use parcel_routing::routing::{BruteForce, RouteOptimizer};
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric("D", "A", 1.0).unwrap();
/// table.insert_symmetric("D", "B", 1.0).unwrap();
/// table.insert_symmetric("A", "B", 1.0).unwrap();
///
/// let destinations: BTreeSet<Location> = ["A", "B"].into_iter().map(Location::from).collect();
/// let route = BruteForce::new()
///     .optimize(&destinations, &Location::from("D"), &table)
///     .unwrap();
/// assert_eq!(route.cost(), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BruteForce {
    max_destinations: usize,
}

impl BruteForce {
    /// Default destination limit (10! ≈ 3.6 million tours).
    pub const DEFAULT_MAX_DESTINATIONS: usize = 10;

    pub fn new() -> Self {
        Self {
            max_destinations: Self::DEFAULT_MAX_DESTINATIONS,
        }
    }

    /// Sets the largest destination count this solver will accept.
    pub fn with_max_destinations(mut self, max: usize) -> Self {
        self.max_destinations = max;
        self
    }

    pub fn max_destinations(&self) -> usize {
        self.max_destinations
    }
}

impl Default for BruteForce {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteOptimizer for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn optimize(
        &self,
        destinations: &BTreeSet<Location>,
        depot: &Location,
        distances: &dyn DistanceModel,
    ) -> Result<Route> {
        let instance = TourInstance::new(destinations, depot, distances);
        let k = instance.len();
        if k == 0 {
            return Ok(instance.trivial_route());
        }
        instance.check_limit(self.max_destinations)?;

        let mut order: Vec<usize> = (1..=k).collect();
        let mut best_order = order.clone();
        let mut best_cost = f64::INFINITY;
        let mut tours = 0usize;

        loop {
            tours += 1;
            let cost = instance.tour_cost(&order);
            if cost < best_cost {
                best_cost = cost;
                best_order.clone_from(&order);
            }
            if !next_permutation(&mut order) {
                break;
            }
        }

        debug!("brute_force: k={k} tours={tours} best={best_cost}");

        if !best_cost.is_finite() {
            return Err(instance.infeasible());
        }
        Ok(instance.route(&best_order, best_cost))
    }
}

/// Advances `items` to the next lexicographic permutation.
///
/// Returns `false` (leaving `items` unchanged) once the last permutation
/// has been reached.
fn next_permutation(items: &mut [usize]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i`.
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
