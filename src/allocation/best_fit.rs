//! Best-Fit-Decreasing parcel allocation.
//!
//! # Algorithm
//!
//! Sorts parcels by weight, heaviest first (stable, so equal weights keep
//! their input order). Each parcel goes into the open vehicle that would be
//! left with the least spare capacity after taking it; ties go to the
//! earliest-created vehicle. When no open vehicle can take the parcel, a new
//! vehicle is opened at the end of the list.
//!
//! This is a greedy heuristic: it is deterministic and reproducible, but it
//! does not guarantee the minimum number of vehicles.
//!
//! # Complexity
//!
//! O(n log n + n·m) where n = parcels and m = vehicles opened.

use std::collections::HashSet;

use log::{debug, warn};

use super::{Allocation, Rejection};
use crate::error::{Error, Result};
use crate::models::{Parcel, Vehicle};

/// Packs parcels into vehicles of the given capacity using Best-Fit-Decreasing.
///
/// Parcels that can never be placed are not dropped silently: a parcel
/// heavier than `capacity` is rejected with [`Error::ParcelExceedsCapacity`],
/// and a repeated parcel id is rejected with [`Error::InvalidParcel`] (the
/// first occurrence is kept). Rejections are returned in
/// [`Allocation::rejected`] and never appear in any vehicle.
///
/// Fails outright only if `capacity` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use parcel_routing::allocation::best_fit_decreasing;
/// use parcel_routing::models::Parcel;
///
/// let parcels: Vec<Parcel> = [300.0, 250.0, 200.0, 150.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &w)| Parcel::new(format!("P{i}"), w, "Dalat", "An").unwrap())
///     .collect();
///
/// let allocation = best_fit_decreasing(&parcels, 500.0).unwrap();
/// assert_eq!(allocation.num_vehicles(), 2);
/// assert!(allocation.is_complete());
/// ```
pub fn best_fit_decreasing(parcels: &[Parcel], capacity: f64) -> Result<Allocation> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(Error::InvalidCapacity(capacity));
    }

    let mut rejected = Vec::new();
    let mut seen = HashSet::new();
    let mut order: Vec<&Parcel> = Vec::with_capacity(parcels.len());
    for parcel in parcels {
        if !seen.insert(parcel.id()) {
            warn!("allocation: duplicate parcel id {}", parcel.id());
            rejected.push(Rejection {
                parcel: parcel.clone(),
                error: Error::invalid_parcel(parcel.id().as_str(), "duplicate id"),
            });
            continue;
        }
        order.push(parcel);
    }

    // Stable sort: equal weights keep input order.
    order.sort_by(|a, b| b.weight().total_cmp(&a.weight()));

    let mut vehicles: Vec<Vehicle> = Vec::new();
    for parcel in order {
        if parcel.weight() > capacity {
            warn!(
                "allocation: parcel {} ({} kg) exceeds capacity {} kg",
                parcel.id(),
                parcel.weight(),
                capacity
            );
            rejected.push(Rejection {
                parcel: parcel.clone(),
                error: Error::ParcelExceedsCapacity {
                    id: parcel.id().to_string(),
                    weight: parcel.weight(),
                    capacity,
                },
            });
            continue;
        }

        match tightest_fit(&vehicles, parcel.weight()) {
            Some(idx) => vehicles[idx].place(parcel.clone())?,
            None => {
                let mut vehicle = Vehicle::new(vehicles.len(), capacity)?;
                vehicle.place(parcel.clone())?;
                vehicles.push(vehicle);
            }
        }
    }

    let utilization = if vehicles.is_empty() {
        0.0
    } else {
        vehicles.iter().map(Vehicle::utilization).sum::<f64>() / vehicles.len() as f64
    };
    debug!(
        "allocation: parcels={} vehicles={} rejected={} mean_utilization={:.3}",
        parcels.len(),
        vehicles.len(),
        rejected.len(),
        utilization
    );

    Ok(Allocation { vehicles, rejected })
}

/// Index of the vehicle left with the least spare capacity after taking
/// `weight`; the earliest one wins ties.
fn tightest_fit(vehicles: &[Vehicle], weight: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, vehicle) in vehicles.iter().enumerate() {
        if !vehicle.fits(weight) {
            continue;
        }
        let leftover = vehicle.remaining() - weight;
        if best.map_or(true, |(_, least)| leftover < least) {
            best = Some((idx, leftover));
        }
    }
    best.map(|(idx, _)| idx)
}
