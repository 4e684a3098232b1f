//! Held-Karp subset dynamic programming.
//!
//! # Algorithm
//!
//! Node 0 is the depot and nodes 1..=k are destinations. `dp[mask][v]` is
//! the cheapest path that leaves the depot, visits exactly the nodes in
//! `mask` (which always contains the depot bit) and ends at `v`. Starting
//! from `dp[{depot}][depot] = 0`, every reachable state is extended by one
//! unvisited node:
//!
//! ```text
//! dp[mask | v][v] = min(dp[mask | v][v], dp[mask][u] + d(u, v))
//! ```
//!
//! recording `u` as the predecessor of `v`. The tour closes at the `v`
//! minimising `dp[full][v] + d(v, depot)`, and the visiting order is read
//! back through the predecessors.
//!
//! # Complexity
//!
//! O(k²·2^k) time, O(k·2^k) space, where k = number of destinations.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of the SIAM* 10(1), 196-210.

use std::collections::BTreeSet;

use log::debug;

use super::instance::TourInstance;
use super::RouteOptimizer;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::models::{Location, Route};

const NO_PARENT: u8 = u8::MAX;

/// Exact solver using Held-Karp dynamic programming over visited subsets.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use parcel_routing::distance::Coordinates;
/// use parcel_routing::models::Location;
/// use parcel_routing::routing::{HeldKarp, RouteOptimizer};
///
/// let mut points = Coordinates::new();
/// points.insert("D", 0.0, 0.0).unwrap();
/// points.insert("A", 0.0, 1.0).unwrap();
/// points.insert("B", 1.0, 1.0).unwrap();
/// points.insert("C", 1.0, 0.0).unwrap();
///
/// let destinations: BTreeSet<Location> =
///     ["A", "B", "C"].into_iter().map(Location::from).collect();
/// let route = HeldKarp::new()
///     .optimize(&destinations, &Location::from("D"), &points)
///     .unwrap();
/// assert!((route.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeldKarp {
    max_destinations: usize,
}

impl HeldKarp {
    /// Default destination limit (about 44 million DP states).
    pub const DEFAULT_MAX_DESTINATIONS: usize = 20;

    /// Hard ceiling; larger limits are clamped to it.
    pub const MAX_SUPPORTED_DESTINATIONS: usize = 24;

    pub fn new() -> Self {
        Self {
            max_destinations: Self::DEFAULT_MAX_DESTINATIONS,
        }
    }

    /// Sets the largest destination count this solver will accept, up to
    /// [`MAX_SUPPORTED_DESTINATIONS`](Self::MAX_SUPPORTED_DESTINATIONS).
    pub fn with_max_destinations(mut self, max: usize) -> Self {
        self.max_destinations = max.min(Self::MAX_SUPPORTED_DESTINATIONS);
        self
    }

    pub fn max_destinations(&self) -> usize {
        self.max_destinations
    }
}

impl Default for HeldKarp {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteOptimizer for HeldKarp {
    fn name(&self) -> &'static str {
        "held_karp"
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

        let dm = instance.matrix();
        let n = k + 1;
        let full = (1usize << n) - 1;
        let states = (full + 1) * n;
        let mut dp = vec![f64::INFINITY; states];
        let mut parent = vec![NO_PARENT; states];
        dp[n] = 0.0; // mask = {depot}, ending at the depot

        // Odd masks are exactly those containing the depot bit.
        for mask in (1..=full).step_by(2) {
            for u in 0..n {
                if mask & (1 << u) == 0 {
                    continue;
                }
                let base = dp[mask * n + u];
                if !base.is_finite() {
                    continue;
                }
                for v in 1..n {
                    if mask & (1 << v) != 0 {
                        continue;
                    }
                    let next = (mask | (1 << v)) * n + v;
                    let candidate = base + dm.get(u, v);
                    if candidate < dp[next] {
                        dp[next] = candidate;
                        parent[next] = u as u8;
                    }
                }
            }
        }

        let mut best_cost = f64::INFINITY;
        let mut last = 0;
        for v in 1..n {
            let cost = dp[full * n + v] + dm.get(v, 0);
            if cost < best_cost {
                best_cost = cost;
                last = v;
            }
        }

        debug!("held_karp: k={k} states={states} best={best_cost}");

        if !best_cost.is_finite() {
            return Err(instance.infeasible());
        }

        let mut order = Vec::with_capacity(k);
        let mut mask = full;
        let mut current = last;
        while current != 0 {
            order.push(current);
            let previous = parent[mask * n + current];
            mask ^= 1 << current;
            current = usize::from(previous);
        }
        order.reverse();

        Ok(instance.route(&order, best_cost))
    }
}
