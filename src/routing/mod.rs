//! Exact closed-tour solvers.
//!
//! - [`BruteForce`] — exhaustive permutation search, O(k!·k)
//! - [`HeldKarp`] — subset dynamic programming (Held & Karp, 1962), O(k²·2^k)
//! - [`Strategy`] — configurable choice between the two
//! - [`Solver`] — a strategy plus a destination limit
//!
//! Every solver returns a closed tour that leaves the depot, visits each
//! destination exactly once and returns, with the minimum total directed
//! cost. Both solvers return the same cost for the same input.

mod brute_force;
mod held_karp;
mod instance;

pub use brute_force::BruteForce;
pub use held_karp::HeldKarp;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceModel;
use crate::error::Result;
use crate::models::{Location, Route};

/// Computes a minimum-cost closed tour through a destination set.
///
/// Implementations must:
/// - return a trivial zero-cost route for an empty destination set;
/// - skip a destination equal to the depot;
/// - fail with [`Error::NoFeasibleRoute`](crate::Error::NoFeasibleRoute)
///   rather than return an infinite-cost route.
pub trait RouteOptimizer: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Computes the tour from scratch.
    fn optimize(
        &self,
        destinations: &BTreeSet<Location>,
        depot: &Location,
        distances: &dyn DistanceModel,
    ) -> Result<Route>;
}

/// Which exact solver to run.
///
/// `Auto` uses brute force up to [`Strategy::AUTO_BRUTE_FORCE_LIMIT`]
/// destinations and Held-Karp above that.
///
/// # Examples
///
/// ```
/// use parcel_routing::routing::Strategy;
///
/// assert_eq!(Strategy::Auto.resolve(5), Strategy::BruteForce);
/// assert_eq!(Strategy::Auto.resolve(12), Strategy::HeldKarp);
/// assert_eq!(Strategy::HeldKarp.resolve(2), Strategy::HeldKarp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BruteForce,
    HeldKarp,
    #[default]
    Auto,
}

impl Strategy {
    /// Largest destination count `Auto` hands to brute force.
    pub const AUTO_BRUTE_FORCE_LIMIT: usize = 8;

    /// The concrete solver used for `count` destinations.
    pub fn resolve(self, count: usize) -> Strategy {
        match self {
            Self::Auto if count <= Self::AUTO_BRUTE_FORCE_LIMIT => Self::BruteForce,
            Self::Auto => Self::HeldKarp,
            concrete => concrete,
        }
    }
}

impl RouteOptimizer for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::HeldKarp => "held_karp",
            Self::Auto => "auto",
        }
    }

    fn optimize(
        &self,
        destinations: &BTreeSet<Location>,
        depot: &Location,
        distances: &dyn DistanceModel,
    ) -> Result<Route> {
        Solver::new(*self).optimize(destinations, depot, distances)
    }
}

/// A [`Strategy`] with an optional destination limit applied to whichever
/// solver it resolves to.
///
/// Without a limit each solver keeps its own default
/// ([`BruteForce::DEFAULT_MAX_DESTINATIONS`],
/// [`HeldKarp::DEFAULT_MAX_DESTINATIONS`]).
///
/// # Examples
///
/// ```
/// use parcel_routing::routing::{Solver, Strategy};
///
/// let solver = Solver::new(Strategy::Auto).with_max_destinations(22);
/// assert_eq!(solver.held_karp().max_destinations(), 22);
/// assert_eq!(solver.brute_force().max_destinations(), 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Solver {
    strategy: Strategy,
    max_destinations: Option<usize>,
}

impl Solver {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_destinations: None,
        }
    }

    /// Sets the largest destination count either solver will accept.
    pub fn with_max_destinations(mut self, max: usize) -> Self {
        self.max_destinations = Some(max);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The brute-force solver with this limit applied.
    pub fn brute_force(&self) -> BruteForce {
        match self.max_destinations {
            Some(max) => BruteForce::new().with_max_destinations(max),
            None => BruteForce::new(),
        }
    }

    /// The Held-Karp solver with this limit applied.
    pub fn held_karp(&self) -> HeldKarp {
        match self.max_destinations {
            Some(max) => HeldKarp::new().with_max_destinations(max),
            None => HeldKarp::new(),
        }
    }
}

impl RouteOptimizer for Solver {
    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn optimize(
        &self,
        destinations: &BTreeSet<Location>,
        depot: &Location,
        distances: &dyn DistanceModel,
    ) -> Result<Route> {
        let count = destinations.iter().filter(|&d| d != depot).count();
        match self.strategy.resolve(count) {
            Strategy::BruteForce => self.brute_force().optimize(destinations, depot, distances),
            _ => self.held_karp().optimize(destinations, depot, distances),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::error::Error;

    fn ring_table(names: &[&str]) -> DistanceTable {
        let mut t = DistanceTable::new();
        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                if i != j {
                    let gap = i.abs_diff(j).min(names.len() - i.abs_diff(j));
                    t.insert(*a, *b, gap as f64).expect("valid");
                }
            }
        }
        t
    }

    #[test]
    fn test_strategy_resolve() {
        assert_eq!(Strategy::Auto.resolve(0), Strategy::BruteForce);
        assert_eq!(Strategy::Auto.resolve(8), Strategy::BruteForce);
        assert_eq!(Strategy::Auto.resolve(9), Strategy::HeldKarp);
        assert_eq!(Strategy::BruteForce.resolve(20), Strategy::BruteForce);
    }

    #[test]
    fn test_strategy_default_is_auto() {
        assert_eq!(Strategy::default(), Strategy::Auto);
    }

    #[test]
    fn test_strategy_serde() {
        let s: Strategy = serde_json::from_str("\"held_karp\"").expect("valid");
        assert_eq!(s, Strategy::HeldKarp);
        assert_eq!(
            serde_json::to_string(&Strategy::BruteForce).expect("serialize"),
            "\"brute_force\""
        );
    }

    #[test]
    fn test_strategies_agree_on_ring() {
        let names = ["D", "A", "B", "C", "E", "F"];
        let t = ring_table(&names);
        let destinations: BTreeSet<Location> =
            names[1..].iter().map(|&n| Location::from(n)).collect();
        let depot = Location::from("D");
        let bf = Strategy::BruteForce
            .optimize(&destinations, &depot, &t)
            .expect("feasible");
        let hk = Strategy::HeldKarp
            .optimize(&destinations, &depot, &t)
            .expect("feasible");
        let auto = Strategy::Auto
            .optimize(&destinations, &depot, &t)
            .expect("feasible");
        assert_eq!(bf.cost(), 6.0);
        assert_eq!(hk.cost(), 6.0);
        assert_eq!(auto.cost(), 6.0);
    }

    fn ring_stops(count: usize) -> (Vec<String>, DistanceTable) {
        let names: Vec<String> = (0..=count).map(|i| format!("S{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let table = ring_table(&refs);
        (names, table)
    }

    #[test]
    fn test_solver_limit_is_applied() {
        let (names, t) = ring_stops(6);
        let destinations: BTreeSet<Location> =
            names[1..].iter().map(|n| Location::from(n.as_str())).collect();
        let depot = Location::from(names[0].as_str());

        let err = Solver::new(Strategy::Auto)
            .with_max_destinations(5)
            .optimize(&destinations, &depot, &t)
            .expect_err("over limit");
        assert!(matches!(
            err,
            Error::TooManyDestinations { count: 6, limit: 5 }
        ));

        let route = Solver::new(Strategy::HeldKarp)
            .with_max_destinations(6)
            .optimize(&destinations, &depot, &t)
            .expect("within limit");
        assert_eq!(route.cost(), 7.0);
    }

    #[test]
    fn test_held_karp_default_covers_seventeen_stops() {
        let (names, t) = ring_stops(17);
        let destinations: BTreeSet<Location> =
            names[1..].iter().map(|n| Location::from(n.as_str())).collect();
        let depot = Location::from(names[0].as_str());
        let route = Strategy::Auto
            .optimize(&destinations, &depot, &t)
            .expect("within default limit");
        assert_eq!(route.len(), 17);
        assert_eq!(route.cost(), 18.0);
    }

    #[test]
    fn test_solver_defaults() {
        let solver = Solver::new(Strategy::BruteForce);
        assert_eq!(solver.strategy(), Strategy::BruteForce);
        assert_eq!(
            solver.brute_force().max_destinations(),
            BruteForce::DEFAULT_MAX_DESTINATIONS
        );
        assert_eq!(
            solver.held_karp().max_destinations(),
            HeldKarp::DEFAULT_MAX_DESTINATIONS
        );
        assert_eq!(solver.name(), "brute_force");
    }

    #[test]
    fn test_optimizer_trait_object() {
        let solvers: Vec<Box<dyn RouteOptimizer>> =
            vec![Box::new(BruteForce::new()), Box::new(HeldKarp::new())];
        let names: Vec<&str> = solvers.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["brute_force", "held_karp"]);
    }
}
