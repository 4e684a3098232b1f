//! Crate-wide error type.

use thiserror::Error as ThisError;

use crate::models::Location;

/// Errors raised by allocation, routing, and configuration.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A parcel record is malformed (bad weight or missing field).
    #[error("invalid parcel {id:?}: {reason}")]
    InvalidParcel { id: String, reason: String },

    /// A parcel is heavier than a whole vehicle and can never be placed.
    #[error("parcel {id} weighs {weight} kg, exceeding vehicle capacity {capacity} kg")]
    ParcelExceedsCapacity {
        id: String,
        weight: f64,
        capacity: f64,
    },

    /// Vehicle capacity is not a positive finite number.
    #[error("invalid vehicle capacity: {0}")]
    InvalidCapacity(f64),

    /// A distance table entry is negative or non-finite.
    #[error("invalid distance {distance} from {from} to {to}")]
    InvalidDistance {
        from: Location,
        to: Location,
        distance: f64,
    },

    /// Every closed tour over the destinations needs an unreachable leg.
    #[error("no feasible route from depot {depot} through {}", join(.destinations))]
    NoFeasibleRoute {
        depot: Location,
        destinations: Vec<Location>,
    },

    /// The destination count exceeds what the chosen solver accepts.
    #[error("{count} destinations exceed the solver limit of {limit}")]
    TooManyDestinations { count: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_parcel(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParcel {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
