//! Distance model trait.

use crate::models::Location;

/// Travel cost between two named locations.
///
/// Costs are directed and may be asymmetric. `None` means the pair is
/// unreachable; solvers treat it as an infinite cost and never select a tour
/// through it.
///
/// Implementations are read-only after construction, which is what lets
/// independent vehicles be routed concurrently against one model.
pub trait DistanceModel: Send + Sync {
    /// Cost of travelling from `from` to `to`, or `None` if unreachable.
    fn distance(&self, from: &Location, to: &Location) -> Option<f64>;

    /// Like [`distance`](Self::distance), with unreachable mapped to `+∞`.
    fn cost(&self, from: &Location, to: &Location) -> f64 {
        self.distance(from, to).unwrap_or(f64::INFINITY)
    }
}

impl<T: DistanceModel + ?Sized> DistanceModel for &T {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        (**self).distance(from, to)
    }
}

impl<T: DistanceModel + ?Sized> DistanceModel for Box<T> {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        (**self).distance(from, to)
    }
}
