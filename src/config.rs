//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::dispatch::ManifestOrder;
use crate::distance::DistanceSource;
use crate::error::{Error, Result};
use crate::models::Location;
use crate::routing::{HeldKarp, Solver, Strategy};

/// Settings for one dispatch run: vehicle capacity, depot, solver choice,
/// manifest ordering, and the distance source.
///
/// Missing fields fall back to [`DispatchConfig::default`].
///
/// # Examples
///
/// ```
/// use parcel_routing::config::DispatchConfig;
/// use parcel_routing::routing::Strategy;
///
/// let config = DispatchConfig::from_json(r#"{
///     "capacity": 500,
///     "depot": "Hanoi",
///     "strategy": "held_karp",
///     "distances": {
///         "kind": "coordinates",
///         "points": {"Hanoi": [105.8542, 21.0285], "Dalat": [108.4582, 11.9404]}
///     }
/// }"#).unwrap();
/// assert_eq!(config.capacity, 500.0);
/// assert_eq!(config.strategy, Strategy::HeldKarp);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Capacity of every vehicle, in kilograms.
    pub capacity: f64,
    /// Start and end of every tour.
    pub depot: Location,
    pub strategy: Strategy,
    /// Largest number of distinct destinations one vehicle may be routed
    /// through; `None` keeps each solver's default.
    pub max_destinations: Option<usize>,
    pub manifest_order: ManifestOrder,
    pub distances: DistanceSource,
}

impl DispatchConfig {
    /// Default vehicle capacity, in kilograms.
    pub const DEFAULT_CAPACITY: f64 = 500.0;

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured strategy with its destination limit.
    pub fn solver(&self) -> Solver {
        let solver = Solver::new(self.strategy);
        match self.max_destinations {
            Some(max) => solver.with_max_destinations(max),
            None => solver,
        }
    }

    /// Checks capacity, depot and destination limit.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if self.depot.is_blank() {
            return Err(Error::invalid_config("depot must be named"));
        }
        if let Some(max) = self.max_destinations {
            if max == 0 || max > HeldKarp::MAX_SUPPORTED_DESTINATIONS {
                return Err(Error::invalid_config(format!(
                    "max_destinations must be between 1 and {}, got {max}",
                    HeldKarp::MAX_SUPPORTED_DESTINATIONS
                )));
            }
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            depot: Location::from("Depot"),
            strategy: Strategy::default(),
            max_destinations: None,
            manifest_order: ManifestOrder::default(),
            distances: DistanceSource::default(),
        }
    }
}
