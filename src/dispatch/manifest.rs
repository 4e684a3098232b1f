//! Display-time ordering of a vehicle's parcels.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceModel;
use crate::models::{Location, Parcel, Vehicle};

/// How a vehicle's parcel list is ordered for display.
///
/// Allocation always stores parcels in insertion order; these policies are
/// applied once, when a manifest is produced. Every ordering is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestOrder {
    /// The order the allocator loaded the parcels.
    #[default]
    Insertion,
    /// Grouped by the position of their destination in the computed route;
    /// unrouted destinations last.
    RouteOrder,
    /// Destination farthest from the depot first; unreachable destinations
    /// last.
    FarthestFirst,
}

/// Lists a vehicle's parcels in the given order.
///
/// # Examples
///
/// ```
/// use parcel_routing::dispatch::{manifest, ManifestOrder};
/// use parcel_routing::distance::DistanceTable;
/// use parcel_routing::models::{Location, Parcel, Vehicle};
///
/// let mut table = DistanceTable::new();
/// table.insert("Hanoi", "Hai Phong", 121.0).unwrap();
/// table.insert("Hanoi", "HCMC", 1682.0).unwrap();
///
/// let mut v = Vehicle::new(0, 100.0).unwrap();
/// v.place(Parcel::new("P1", 10.0, "Hai Phong", "An").unwrap()).unwrap();
/// v.place(Parcel::new("P2", 10.0, "HCMC", "Binh").unwrap()).unwrap();
///
/// let order = manifest(&v, ManifestOrder::FarthestFirst, &Location::from("Hanoi"), &table);
/// assert_eq!(order[0].id().as_str(), "P2");
/// ```
pub fn manifest<'a>(
    vehicle: &'a Vehicle,
    order: ManifestOrder,
    depot: &Location,
    distances: &dyn DistanceModel,
) -> Vec<&'a Parcel> {
    let mut parcels: Vec<&Parcel> = vehicle.parcels().iter().collect();
    match order {
        ManifestOrder::Insertion => {}
        ManifestOrder::RouteOrder => {
            if let Some(route) = vehicle.route() {
                parcels.sort_by_key(|p| route.position(p.destination()).unwrap_or(usize::MAX));
            }
        }
        ManifestOrder::FarthestFirst => {
            let reach = |p: &Parcel| {
                distances
                    .distance(depot, p.destination())
                    .unwrap_or(f64::NEG_INFINITY)
            };
            parcels.sort_by(|a, b| reach(*b).total_cmp(&reach(*a)));
        }
    }
    parcels
}
