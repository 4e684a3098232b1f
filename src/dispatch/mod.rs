//! Allocation-to-routing pipeline.
//!
//! - [`route_vehicles`] — routes every vehicle of an allocation, isolating failures
//! - [`Dispatcher`] — session running allocation and routing for a [`DispatchConfig`](crate::config::DispatchConfig)
//! - [`manifest`] — display-time parcel ordering

mod dispatcher;
mod manifest;
mod plan;
mod routing;

pub use dispatcher::Dispatcher;
pub use manifest::{manifest, ManifestOrder};
pub use plan::DispatchPlan;
pub use routing::{route_vehicles, RoutingFailure};
