use std::collections::BTreeSet;

use parcel_routing::allocation::best_fit_decreasing;
use parcel_routing::dispatch::{route_vehicles, Dispatcher, ManifestOrder};
use parcel_routing::distance::{DistanceModel, DistanceTable};
use parcel_routing::evaluation::RouteEvaluator;
use parcel_routing::models::{Location, Parcel};
use parcel_routing::routing::{BruteForce, HeldKarp, RouteOptimizer};
use parcel_routing::Error;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parcel(id: &str, weight: f64, destination: &str) -> Parcel {
    Parcel::new(id, weight, destination, "Customer").expect("valid parcel")
}

fn weights(parcels: &[Parcel]) -> Vec<f64> {
    parcels.iter().map(Parcel::weight).collect()
}

/// Road distances between the delivery cities, in km.
fn vietnam() -> DistanceTable {
    let rows: [(&str, [(&str, f64); 5]); 6] = [
        ("Hanoi", [("Da Nang", 768.0), ("Nha Trang", 1286.0), ("Dalat", 1470.0), ("Hai Phong", 121.0), ("HCMC", 1682.0)]),
        ("HCMC", [("Da Nang", 924.0), ("Nha Trang", 399.0), ("Dalat", 326.0), ("Hai Phong", 1755.0), ("Hanoi", 1682.0)]),
        ("Da Nang", [("Hanoi", 768.0), ("Nha Trang", 528.0), ("Dalat", 713.0), ("Hai Phong", 843.0), ("HCMC", 924.0)]),
        ("Nha Trang", [("Hanoi", 1286.0), ("Da Nang", 528.0), ("Dalat", 189.0), ("Hai Phong", 1362.0), ("HCMC", 399.0)]),
        ("Dalat", [("Hanoi", 1470.0), ("Da Nang", 713.0), ("Nha Trang", 189.0), ("Hai Phong", 1546.0), ("HCMC", 326.0)]),
        ("Hai Phong", [("Hanoi", 121.0), ("Da Nang", 843.0), ("Nha Trang", 1362.0), ("Dalat", 1546.0), ("HCMC", 1755.0)]),
    ];
    let mut table = DistanceTable::new();
    for (from, row) in rows {
        for (to, distance) in row {
            table.insert(from, to, distance).expect("valid distance");
        }
    }
    table
}

#[test]
fn test_best_fit_groups_heaviest_first() {
    init_logger();
    let parcels = vec![
        parcel("P1", 300.0, "Dalat"),
        parcel("P2", 250.0, "Dalat"),
        parcel("P3", 200.0, "Dalat"),
        parcel("P4", 150.0, "Dalat"),
    ];
    let allocation = best_fit_decreasing(&parcels, 500.0).expect("valid capacity");

    assert!(allocation.is_complete());
    assert_eq!(allocation.num_vehicles(), 2);
    let vehicles = allocation.vehicles();
    assert_eq!(weights(vehicles[0].parcels()), vec![300.0, 200.0]);
    assert_eq!(weights(vehicles[1].parcels()), vec![250.0, 150.0]);
    assert_eq!(vehicles[0].remaining(), 0.0);
    assert_eq!(vehicles[1].remaining(), 100.0);
}

#[test]
fn test_brute_force_matches_held_karp_on_three_stops() {
    init_logger();
    let mut table = DistanceTable::new();
    table.insert_symmetric("D", "A", 4.0).expect("valid");
    table.insert_symmetric("D", "B", 7.0).expect("valid");
    table.insert_symmetric("D", "C", 3.0).expect("valid");
    table.insert_symmetric("A", "B", 2.0).expect("valid");
    table.insert_symmetric("A", "C", 6.0).expect("valid");
    table.insert_symmetric("B", "C", 5.0).expect("valid");

    let destinations: BTreeSet<Location> = ["A", "B", "C"].into_iter().map(Location::from).collect();
    let depot = Location::from("D");

    let brute = BruteForce::new()
        .optimize(&destinations, &depot, &table)
        .expect("feasible");
    let dp = HeldKarp::new()
        .optimize(&destinations, &depot, &table)
        .expect("feasible");

    // D-A-B-C-D = 4 + 2 + 5 + 3
    assert_eq!(brute.cost(), 14.0);
    assert_eq!(dp.cost(), brute.cost());
    let evaluator = RouteEvaluator::new(&table);
    assert!(evaluator.check_route(&brute, &destinations).is_empty());
    assert!(evaluator.check_route(&dp, &destinations).is_empty());
}

#[test]
fn test_overweight_parcel_is_rejected() {
    init_logger();
    let parcels = vec![
        parcel("P1", 200.0, "Hai Phong"),
        parcel("P2", 650.0, "Da Nang"),
        parcel("P3", 100.0, "HCMC"),
    ];
    let allocation = best_fit_decreasing(&parcels, 500.0).expect("valid capacity");

    assert_eq!(allocation.rejected().len(), 1);
    let rejection = &allocation.rejected()[0];
    assert_eq!(rejection.parcel.id().as_str(), "P2");
    assert!(matches!(
        rejection.error,
        Error::ParcelExceedsCapacity { weight, capacity, .. } if weight == 650.0 && capacity == 500.0
    ));
    assert!(allocation
        .vehicles()
        .iter()
        .flat_map(|v| v.parcels())
        .all(|p| p.id().as_str() != "P2"));
    assert_eq!(allocation.num_parcels(), 2);

    let err = allocation.into_vehicles().expect_err("incomplete");
    assert!(matches!(err, Error::ParcelExceedsCapacity { .. }));
}

#[test]
fn test_missing_return_edge_fails_only_that_vehicle() {
    init_logger();
    let mut table = vietnam();
    // One-way outbound edge to an island stop.
    table.insert("Hanoi", "Phu Quoc", 1950.0).expect("valid");

    let parcels = vec![
        parcel("P1", 400.0, "Phu Quoc"),
        parcel("P2", 300.0, "Da Nang"),
        parcel("P3", 200.0, "HCMC"),
    ];
    let mut vehicles = best_fit_decreasing(&parcels, 500.0)
        .expect("valid capacity")
        .into_vehicles()
        .expect("all placed");
    assert_eq!(vehicles.len(), 2);

    let depot = Location::from("Hanoi");
    let failures = route_vehicles(&mut vehicles, &depot, &HeldKarp::new(), &table);

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].vehicle_id, 0);
    assert!(matches!(failures[0].error, Error::NoFeasibleRoute { .. }));
    assert!(vehicles[0].route().is_none());

    let route = vehicles[1].route().expect("routed");
    assert_eq!(route.cost(), 768.0 + 924.0 + 1682.0);
}

#[test]
fn test_vietnam_dispatch_session() {
    init_logger();
    let mut dispatcher = Dispatcher::from_json(
        r#"{
            "capacity": 500,
            "depot": "Hanoi",
            "strategy": "auto",
            "manifest_order": "route_order",
            "distances": {
                "kind": "table",
                "symmetric": true,
                "edges": [
                    {"from": "Hanoi", "to": "Da Nang", "distance": 768},
                    {"from": "Hanoi", "to": "Hai Phong", "distance": 121},
                    {"from": "Hanoi", "to": "HCMC", "distance": 1682},
                    {"from": "Da Nang", "to": "Hai Phong", "distance": 843},
                    {"from": "Da Nang", "to": "HCMC", "distance": 924},
                    {"from": "Hai Phong", "to": "HCMC", "distance": 1755}
                ]
            }
        }"#,
    )
    .expect("valid config");

    let parcels = vec![
        parcel("P000001", 120.0, "HCMC"),
        parcel("P000002", 90.0, "Hai Phong"),
        parcel("P000003", 60.0, "Da Nang"),
        parcel("P000004", 45.0, "HCMC"),
    ];
    dispatcher.run(&parcels).expect("runs");
    let plan = dispatcher.plan().expect("plan");
    assert!(plan.is_complete());
    assert_eq!(plan.num_vehicles(), 1);
    // Hanoi -> Da Nang -> HCMC -> Hai Phong -> Hanoi
    assert_eq!(plan.total_cost(), 768.0 + 924.0 + 1755.0 + 121.0);

    let route = plan.vehicles()[0].route().expect("routed");
    let evaluator = RouteEvaluator::new(dispatcher.distances());
    assert!(evaluator.check_vehicle(&plan.vehicles()[0]).is_empty());
    assert_eq!(evaluator.route_cost(route), Some(route.cost()));

    let manifest = dispatcher.manifest(0).expect("vehicle");
    let destinations: Vec<&str> = manifest.iter().map(|p| p.destination().as_str()).collect();
    let stops: Vec<&str> = route.stops().iter().map(Location::as_str).collect();
    let mut grouped = destinations.clone();
    grouped.dedup();
    assert_eq!(grouped, stops);

    dispatcher.clear();
    assert!(dispatcher.plan().is_none());
}

#[test]
fn test_farthest_first_manifest() {
    init_logger();
    let config = parcel_routing::config::DispatchConfig {
        depot: Location::from("Hanoi"),
        manifest_order: ManifestOrder::FarthestFirst,
        ..Default::default()
    };
    let mut dispatcher = Dispatcher::with_distances(config, vietnam()).expect("valid");
    dispatcher
        .run(&[
            parcel("P1", 50.0, "Hai Phong"),
            parcel("P2", 40.0, "HCMC"),
            parcel("P3", 30.0, "Da Nang"),
        ])
        .expect("runs");

    let manifest = dispatcher.manifest(0).expect("vehicle");
    let ids: Vec<&str> = manifest.iter().map(|p| p.id().as_str()).collect();
    assert_eq!(ids, vec!["P2", "P3", "P1"]);

    let depot = Location::from("Hanoi");
    let reach: Vec<f64> = manifest
        .iter()
        .map(|p| dispatcher.distances().cost(&depot, p.destination()))
        .collect();
    assert!(reach.windows(2).all(|w| w[0] >= w[1]));
}
