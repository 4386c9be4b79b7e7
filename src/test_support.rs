//! Small hand-checked networks shared by unit tests.

use crate::distance::{CongestionMatrix, DistanceMatrix};
use crate::models::{Site, Vehicle};
use crate::network::{DeliveryNetwork, FuelModel, NetworkConfig};

/// Depot at x=0, stops at x=10, 20, 30; no congestion.
///
/// Vehicle 1000 kg empty, 300 kg cargo (100 per stop). Fuel is
/// `d/100 × (10 + 0.01 × W)`, so `[1, 2, 3]` costs 2.3 + 2.2 + 2.1 + 6.0 = 12.6
/// and is the unique optimum.
pub(crate) fn line_network(tank: f64) -> DeliveryNetwork {
    let sites = vec![
        Site::depot(),
        Site::new(1, 10.0, 0.0),
        Site::new(2, 20.0, 0.0),
        Site::new(3, 30.0, 0.0),
    ];
    let vehicle = Vehicle::new(1000.0, 300.0, tank).expect("valid vehicle");
    let config = NetworkConfig::default().with_fuel(FuelModel::new(10.0, 0.01));
    DeliveryNetwork::imported(
        DistanceMatrix::from_sites(&sites),
        CongestionMatrix::uniform(4),
        vehicle,
        100.0,
        &config,
    )
    .expect("valid network")
    .with_positions(sites)
    .expect("sizes match")
}

/// Fuel equals distance, tank 14. Nearest-neighbor walks 0→1→2 and then
/// cannot reach 3 and still get home; `[2, 1, 3]` and `[3, 1, 2]` both cost 13.
pub(crate) fn trap_network() -> DeliveryNetwork {
    #[rustfmt::skip]
    let data = vec![
        0.0, 1.0, 2.0, 5.0,
        1.0, 0.0, 1.0, 5.0,
        2.0, 1.0, 0.0, 8.0,
        5.0, 5.0, 8.0, 0.0,
    ];
    let vehicle = Vehicle::new(1000.0, 100.0, 14.0).expect("valid vehicle");
    let config = NetworkConfig::default().with_fuel(FuelModel::new(100.0, 0.0));
    DeliveryNetwork::imported(
        DistanceMatrix::from_data(4, data).expect("4x4"),
        CongestionMatrix::uniform(4),
        vehicle,
        10.0,
        &config,
    )
    .expect("valid network")
}
