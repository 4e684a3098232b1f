//! Domain model types for parcel allocation and routing.
//!
//! Provides the core values: named locations, parcels, capacity-limited
//! vehicles, and closed delivery routes.

mod location;
mod parcel;
mod route;
mod vehicle;

pub use location::Location;
pub use parcel::{Parcel, ParcelId};
pub use route::Route;
pub use vehicle::Vehicle;
