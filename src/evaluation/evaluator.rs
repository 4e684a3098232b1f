//! Route evaluator that recomputes tour costs and checks tour validity.

use std::collections::{BTreeSet, HashSet};

use crate::distance::DistanceModel;
use crate::models::{Location, Route, Vehicle};

/// A kind of defect found in a route or a loaded vehicle.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A requested destination is not visited.
    MissingDestination { location: Location },
    /// A location is visited more than once.
    DuplicateStop { location: Location },
    /// A stop that was not requested (the depot included).
    UnexpectedStop { location: Location },
    /// A leg of the tour has no finite cost.
    UnreachableLeg { from: Location, to: Location },
    /// The reported cost differs from the recomputed one.
    CostMismatch { reported: f64, actual: f64 },
    /// The vehicle carries more than its capacity.
    CapacityExceeded {
        vehicle_id: usize,
        load: f64,
        capacity: f64,
    },
    /// The vehicle's destination set differs from its parcels' destinations.
    DestinationsOutOfSync { vehicle_id: usize },
}

/// A defect in a route or vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks routes and vehicles against a distance model, independently of
/// the solver that produced them.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use parcel_routing::distance::DistanceTable;
/// use parcel_routing::evaluation::RouteEvaluator;
/// use parcel_routing::models::{Location, Route};
///
/// let mut table = DistanceTable::new();
/// table.insert_symmetric("D", "A", 2.0).unwrap();
///
/// let route = Route::new(Location::from("D"), vec![Location::from("A")], 4.0);
/// let destinations: BTreeSet<Location> = [Location::from("A")].into();
///
/// let evaluator = RouteEvaluator::new(&table);
/// assert_eq!(evaluator.route_cost(&route), Some(4.0));
/// assert!(evaluator.check_route(&route, &destinations).is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    distances: &'a dyn DistanceModel,
    tolerance: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Default relative tolerance for cost comparisons.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    /// Creates a new evaluator over the given distance model.
    pub fn new(distances: &'a dyn DistanceModel) -> Self {
        Self {
            distances,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the relative tolerance used for [`ViolationType::CostMismatch`].
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Closed-tour cost of visiting `stops` in order from `depot`.
    ///
    /// Returns `None` if any leg is unreachable; `Some(0.0)` with no stops.
    pub fn tour_cost(&self, depot: &Location, stops: &[Location]) -> Option<f64> {
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Some(0.0);
        };
        let mut total = self.distances.distance(depot, first)?;
        for leg in stops.windows(2) {
            total += self.distances.distance(&leg[0], &leg[1])?;
        }
        Some(total + self.distances.distance(last, depot)?)
    }

    /// Recomputed closed-tour cost of a route.
    pub fn route_cost(&self, route: &Route) -> Option<f64> {
        self.tour_cost(route.depot(), route.stops())
    }

    /// Checks that `route` visits every destination exactly once, uses only
    /// reachable legs, and reports the cost it actually has.
    pub fn check_route(&self, route: &Route, destinations: &BTreeSet<Location>) -> Vec<Violation> {
        let mut violations = Vec::new();
        let depot = route.depot();

        let mut seen = HashSet::new();
        for stop in route.stops() {
            if !seen.insert(stop) {
                violations.push(Violation::new(ViolationType::DuplicateStop {
                    location: stop.clone(),
                }));
            }
            if stop == depot || !destinations.contains(stop) {
                violations.push(Violation::new(ViolationType::UnexpectedStop {
                    location: stop.clone(),
                }));
            }
        }
        for destination in destinations {
            if destination != depot && !seen.contains(destination) {
                violations.push(Violation::new(ViolationType::MissingDestination {
                    location: destination.clone(),
                }));
            }
        }

        for (from, to) in route.legs() {
            if self.distances.distance(from, to).is_none() {
                violations.push(Violation::new(ViolationType::UnreachableLeg {
                    from: from.clone(),
                    to: to.clone(),
                }));
            }
        }

        if let Some(actual) = self.route_cost(route) {
            let reported = route.cost();
            if (reported - actual).abs() > self.tolerance * actual.abs().max(1.0) {
                violations.push(Violation::new(ViolationType::CostMismatch {
                    reported,
                    actual,
                }));
            }
        }

        violations
    }

    /// Checks a loaded vehicle: capacity, destination bookkeeping, and its
    /// route if one has been computed.
    pub fn check_vehicle(&self, vehicle: &Vehicle) -> Vec<Violation> {
        let mut violations = Vec::new();

        let load: f64 = vehicle.parcels().iter().map(|p| p.weight()).sum();
        if load > vehicle.capacity() * (1.0 + self.tolerance) {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                vehicle_id: vehicle.id(),
                load,
                capacity: vehicle.capacity(),
            }));
        }

        let expected: BTreeSet<&Location> =
            vehicle.parcels().iter().map(|p| p.destination()).collect();
        if !expected.iter().copied().eq(vehicle.destinations().iter()) {
            violations.push(Violation::new(ViolationType::DestinationsOutOfSync {
                vehicle_id: vehicle.id(),
            }));
        }

        if let Some(route) = vehicle.route() {
            violations.extend(self.check_route(route, vehicle.destinations()));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceTable;
    use crate::models::Parcel;

    fn loc(name: &str) -> Location {
        Location::from(name)
    }

    fn set(names: &[&str]) -> BTreeSet<Location> {
        names.iter().map(|&n| loc(n)).collect()
    }

    fn setup() -> DistanceTable {
        let mut t = DistanceTable::new();
        t.insert_symmetric("D", "A", 5.0).expect("valid");
        t.insert_symmetric("D", "B", 8.0).expect("valid");
        t.insert_symmetric("A", "B", 4.0).expect("valid");
        t.insert("D", "C", 1.0).expect("valid");
        t
    }

    #[test]
    fn test_tour_cost_empty() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        assert_eq!(eval.tour_cost(&loc("D"), &[]), Some(0.0));
    }

    #[test]
    fn test_tour_cost_closed() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let cost = eval.tour_cost(&loc("D"), &[loc("A"), loc("B")]);
        assert_eq!(cost, Some(17.0));
    }

    #[test]
    fn test_tour_cost_unreachable() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        assert_eq!(eval.tour_cost(&loc("D"), &[loc("C")]), None);
    }

    #[test]
    fn test_check_route_valid() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let route = Route::new(loc("D"), vec![loc("A"), loc("B")], 17.0);
        assert!(eval.check_route(&route, &set(&["A", "B"])).is_empty());
    }

    #[test]
    fn test_check_route_missing_and_duplicate() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let route = Route::new(loc("D"), vec![loc("A"), loc("A")], 10.0);
        let violations = eval.check_route(&route, &set(&["A", "B"]));
        assert!(violations.contains(&Violation::new(ViolationType::DuplicateStop {
            location: loc("A"),
        })));
        assert!(violations.contains(&Violation::new(ViolationType::MissingDestination {
            location: loc("B"),
        })));
    }

    #[test]
    fn test_check_route_unexpected_depot_stop() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let route = Route::new(loc("D"), vec![loc("A"), loc("D")], 10.0);
        let violations = eval.check_route(&route, &set(&["A"]));
        assert!(violations.iter().any(|v| matches!(
            &v.kind,
            ViolationType::UnexpectedStop { location } if location.as_str() == "D"
        )));
    }

    #[test]
    fn test_check_route_unreachable_leg() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let route = Route::new(loc("D"), vec![loc("C")], 1.0);
        let violations = eval.check_route(&route, &set(&["C"]));
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            &violations[0].kind,
            ViolationType::UnreachableLeg { from, to }
                if from.as_str() == "C" && to.as_str() == "D"
        ));
    }

    #[test]
    fn test_check_route_cost_mismatch() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let route = Route::new(loc("D"), vec![loc("A"), loc("B")], 16.0);
        let violations = eval.check_route(&route, &set(&["A", "B"]));
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::CostMismatch { reported, actual }
                if reported == 16.0 && actual == 17.0
        ));
    }

    #[test]
    fn test_check_route_tolerance() {
        let t = setup();
        let eval = RouteEvaluator::new(&t).with_tolerance(0.1);
        let route = Route::new(loc("D"), vec![loc("A"), loc("B")], 16.0);
        assert!(eval.check_route(&route, &set(&["A", "B"])).is_empty());
    }

    #[test]
    fn test_check_vehicle() {
        let t = setup();
        let eval = RouteEvaluator::new(&t);
        let mut vehicle = Vehicle::new(0, 100.0).expect("valid");
        vehicle
            .place(Parcel::new("P1", 40.0, "A", "An").expect("valid"))
            .expect("fits");
        vehicle
            .place(Parcel::new("P2", 60.0, "B", "Binh").expect("valid"))
            .expect("fits");
        assert!(eval.check_vehicle(&vehicle).is_empty());

        vehicle.set_route(Route::new(loc("D"), vec![loc("B")], 16.0));
        let violations = eval.check_vehicle(&vehicle);
        assert!(violations.contains(&Violation::new(ViolationType::MissingDestination {
            location: loc("A"),
        })));
    }
}
