//! # parcel-routing
//!
//! Parcel dispatch: packs parcels into capacity-limited vehicles and
//! computes an exact closed delivery tour from a shared depot for each
//! vehicle.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Parcel, Vehicle, Route)
//! - [`distance`] — Distance models (table, coordinates) and the indexed matrix
//! - [`allocation`] — Best-Fit-Decreasing parcel allocation
//! - [`routing`] — Exact tour solvers (brute force, Held-Karp)
//! - [`evaluation`] — Route and vehicle checks independent of the solvers
//! - [`dispatch`] — Allocation-then-routing pipeline and manifests
//! - [`config`] — JSON run configuration
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use parcel_routing::allocation::best_fit_decreasing;
//! use parcel_routing::dispatch::route_vehicles;
//! use parcel_routing::distance::DistanceTable;
//! use parcel_routing::models::{Location, Parcel};
//! use parcel_routing::routing::HeldKarp;
//!
//! let mut table = DistanceTable::new();
//! table.insert_symmetric("Hanoi", "Hai Phong", 121.0).unwrap();
//! table.insert_symmetric("Hanoi", "Da Nang", 768.0).unwrap();
//! table.insert_symmetric("Hai Phong", "Da Nang", 800.0).unwrap();
//!
//! let parcels = vec![
//!     Parcel::new("P000001", 300.0, "Da Nang", "Le Van C").unwrap(),
//!     Parcel::new("P000002", 150.0, "Hai Phong", "Pham Thi D").unwrap(),
//! ];
//! let mut vehicles = best_fit_decreasing(&parcels, 500.0)
//!     .unwrap()
//!     .into_vehicles()
//!     .unwrap();
//! let failures = route_vehicles(&mut vehicles, &Location::from("Hanoi"), &HeldKarp::new(), &table);
//!
//! assert!(failures.is_empty());
//! assert_eq!(vehicles.len(), 1);
//! assert_eq!(vehicles[0].route().unwrap().cost(), 121.0 + 800.0 + 768.0);
//! ```

pub mod allocation;
pub mod config;
pub mod dispatch;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod routing;

pub use error::{Error, Result};
