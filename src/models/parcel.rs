//! Parcel types.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::{Error, Result};

/// An opaque parcel identifier.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::ParcelId;
///
/// let id = ParcelId::random(&mut rand::rng());
/// assert_eq!(id.as_str().len(), 7);
/// assert!(id.as_str().starts_with('P'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(String);

impl ParcelId {
    /// Creates an identifier from an existing token.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier of the form `P` followed by six digits.
    ///
    /// Uniqueness is not checked; callers that need it must compare against
    /// the ids already in use.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(format!("P{:06}", rng.random_range(1..=999_999u32)))
    }

    /// The identifier token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParcelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParcelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parcel to be delivered: identifier, weight, destination, customer.
///
/// Parcels are immutable once created. Construction validates the record,
/// and deserialization goes through the same checks.
///
/// # Examples
///
/// ```
/// use parcel_routing::models::Parcel;
///
/// let p = Parcel::new("P000001", 12.5, "Dalat", "Nguyen An").unwrap();
/// assert_eq!(p.weight(), 12.5);
/// assert_eq!(p.destination().as_str(), "Dalat");
///
/// assert!(Parcel::new("P000002", 0.0, "Dalat", "Nguyen An").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParcelRecord")]
pub struct Parcel {
    id: ParcelId,
    weight: f64,
    destination: Location,
    customer: String,
}

impl Parcel {
    /// Creates a validated parcel.
    ///
    /// Fails with [`Error::InvalidParcel`] if the weight is not a positive
    /// finite number, or if the id, destination or customer label is blank.
    pub fn new(
        id: impl Into<ParcelId>,
        weight: f64,
        destination: impl Into<Location>,
        customer: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let destination = destination.into();
        let customer = customer.into();

        if id.as_str().trim().is_empty() {
            return Err(Error::invalid_parcel(id.as_str(), "missing id"));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::invalid_parcel(
                id.as_str(),
                format!("weight must be positive, got {weight}"),
            ));
        }
        if destination.is_blank() {
            return Err(Error::invalid_parcel(id.as_str(), "missing destination"));
        }
        if customer.trim().is_empty() {
            return Err(Error::invalid_parcel(id.as_str(), "missing customer"));
        }

        Ok(Self {
            id,
            weight,
            destination,
            customer,
        })
    }

    pub fn id(&self) -> &ParcelId {
        &self.id
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn destination(&self) -> &Location {
        &self.destination
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parcel({}, {}kg, {}, {})",
            self.id, self.weight, self.destination, self.customer
        )
    }
}

/// Raw parcel record as produced by an ingestion collaborator.
#[derive(Deserialize)]
struct ParcelRecord {
    #[serde(alias = "parcel_id")]
    id: String,
    weight: f64,
    destination: String,
    #[serde(alias = "customer_name")]
    customer: String,
}

impl TryFrom<ParcelRecord> for Parcel {
    type Error = Error;

    fn try_from(record: ParcelRecord) -> Result<Self> {
        Parcel::new(
            record.id,
            record.weight,
            record.destination,
            record.customer,
        )
    }
}
