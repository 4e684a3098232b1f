//! Configurable distance sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Coordinates, DistanceModel, DistanceTable, Edge};
use crate::error::Result;
use crate::models::Location;

/// How travel costs are supplied, as written in a configuration file.
///
/// The two variants are independent strategies; a table and a coordinate
/// set describing the same places are not expected to agree.
///
/// # Examples
///
/// ```
/// use parcel_routing::distance::{DistanceModel, DistanceSource};
/// use parcel_routing::models::Location;
///
/// let json = r#"{
///     "kind": "table",
///     "symmetric": true,
///     "edges": [{"from": "Hanoi", "to": "Hai Phong", "distance": 121}]
/// }"#;
/// let source: DistanceSource = serde_json::from_str(json).unwrap();
/// let model = source.build().unwrap();
/// let d = model.distance(&Location::from("Hai Phong"), &Location::from("Hanoi"));
/// assert_eq!(d, Some(121.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistanceSource {
    /// Explicit directed entries; missing pairs are unreachable.
    Table {
        #[serde(default)]
        symmetric: bool,
        edges: Vec<Edge>,
    },
    /// Named `[x, y]` points with straight-line distance.
    Coordinates { points: BTreeMap<Location, [f64; 2]> },
}

impl DistanceSource {
    /// Builds the distance model, validating every entry.
    pub fn build(&self) -> Result<Distances> {
        match self {
            Self::Table { symmetric, edges } => {
                DistanceTable::from_edges(edges, *symmetric).map(Distances::Table)
            }
            Self::Coordinates { points } => {
                let mut coordinates = Coordinates::new();
                for (location, [x, y]) in points {
                    coordinates.insert(location.clone(), *x, *y)?;
                }
                Ok(Distances::Coordinates(coordinates))
            }
        }
    }
}

impl Default for DistanceSource {
    fn default() -> Self {
        Self::Table {
            symmetric: false,
            edges: Vec::new(),
        }
    }
}

/// A built distance model of either kind.
#[derive(Debug, Clone)]
pub enum Distances {
    Table(DistanceTable),
    Coordinates(Coordinates),
}

impl DistanceModel for Distances {
    fn distance(&self, from: &Location, to: &Location) -> Option<f64> {
        match self {
            Self::Table(table) => table.distance(from, to),
            Self::Coordinates(points) => points.distance(from, to),
        }
    }
}
