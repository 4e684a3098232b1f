//! Closed delivery tours.

use std::fmt;
use std::iter;

use serde::Serialize;

use super::Location;

/// A closed tour that starts and ends at a depot.
///
/// The depot is implicit at both ends and is not stored in `stops`.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::{Location, Route};
///
/// let route = Route::new(
///     Location::from("Hanoi"),
///     vec![Location::from("Hai Phong")],
///     242.0,
/// );
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.legs().len(), 2);
/// assert_eq!(route.to_string(), "Hanoi -> Hai Phong -> Hanoi (cost 242)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    depot: Location,
    stops: Vec<Location>,
    cost: f64,
}

impl Route {
    /// Creates a route from its stop sequence and total closed-tour cost.
    pub fn new(depot: Location, stops: Vec<Location>, cost: f64) -> Self {
        Self { depot, stops, cost }
    }

    /// A route with no stops and zero cost.
    pub fn trivial(depot: Location) -> Self {
        Self::new(depot, Vec::new(), 0.0)
    }

    /// The depot this tour leaves from and returns to.
    pub fn depot(&self) -> &Location {
        &self.depot
    }

    /// Stops in visiting order, excluding the depot.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Total cost including the return leg to the depot.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Position of `location` in the stop sequence.
    pub fn position(&self, location: &Location) -> Option<usize> {
        self.stops.iter().position(|stop| stop == location)
    }

    /// Directed legs of the closed tour, depot legs included.
    ///
    /// Empty for a trivial route.
    pub fn legs(&self) -> Vec<(&Location, &Location)> {
        if self.stops.is_empty() {
            return Vec::new();
        }
        let path: Vec<&Location> = iter::once(&self.depot)
            .chain(self.stops.iter())
            .chain(iter::once(&self.depot))
            .collect();
        path.windows(2).map(|leg| (leg[0], leg[1])).collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depot)?;
        for stop in &self.stops {
            write!(f, " -> {stop}")?;
        }
        if !self.stops.is_empty() {
            write!(f, " -> {}", self.depot)?;
        }
        write!(f, " (cost {})", self.cost)
    }
}
