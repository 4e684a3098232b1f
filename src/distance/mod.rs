//! Travel cost models.
//!
//! Provides the [`DistanceModel`] query trait, a directed lookup table, a
//! coordinate-based Euclidean model, and the dense matrix snapshot used by
//! the route solvers.

mod coordinates;
mod matrix;
mod model;
mod source;
mod table;

pub use coordinates::Coordinates;
pub use matrix::DistanceMatrix;
pub use model::DistanceModel;
pub use source::{DistanceSource, Distances};
pub use table::{DistanceTable, Edge};
