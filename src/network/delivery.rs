//! The delivery network model.

use rand::Rng;
use tracing::debug;

use crate::distance::{CongestionMatrix, DistanceMatrix};
use crate::error::{ConfigError, NetworkError};
use crate::models::{FuelNetwork, Site, Vehicle};

use super::{FuelModel, NetworkConfig};

/// Smallest valid network: the depot plus one stop.
pub const MIN_SITES: usize = 2;

const SYMMETRY_TOL: f64 = 1e-9;

/// Where a network's distances came from.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkOrigin {
    /// Random coordinates around the depot, Euclidean distances.
    Generated {
        /// Site positions, depot first.
        positions: Vec<Site>,
    },
    /// A caller-supplied distance matrix.
    Imported {
        /// Positions for display, when the caller has them.
        positions: Option<Vec<Site>>,
    },
}

/// An immutable depot-centered delivery network.
///
/// Holds the base distances, congestion factors and the adjusted distances
/// derived from them, together with the vehicle, the uniform per-stop demand
/// and the fuel model. Every invariant is checked on construction; a
/// network that exists is valid.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::models::{FuelNetwork, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
///
/// let distances = DistanceMatrix::from_data(2, vec![0.0, 100.0, 100.0, 0.0]).unwrap();
/// let vehicle = Vehicle::new(3000.0, 1000.0, 200.0).unwrap();
/// let network = DeliveryNetwork::imported(
///     distances,
///     CongestionMatrix::uniform(2),
///     vehicle,
///     500.0,
///     &NetworkConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(network.num_stops(), 1);
/// assert_eq!(network.distance(0, 1).unwrap(), 100.0);
/// assert!(network.distance(0, 2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryNetwork {
    origin: NetworkOrigin,
    base: DistanceMatrix,
    congestion: CongestionMatrix,
    adjusted: DistanceMatrix,
    vehicle: Vehicle,
    demand_per_stop: f64,
    fuel: FuelModel,
}

impl DeliveryNetwork {
    /// Generates a network of `num_stops` stops placed uniformly at random
    /// in `[-w, w]²` around a depot at the origin, with random congestion.
    pub fn generate<R: Rng>(
        num_stops: usize,
        vehicle: Vehicle,
        demand_per_stop: f64,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let num_sites = num_stops + 1;
        check_site_count(num_sites)?;
        check_demand(num_stops, demand_per_stop, &vehicle)?;
        let w = config.area_half_width;
        if !w.is_finite() || w < 0.0 {
            return Err(ConfigError::InvalidArea(w));
        }

        let mut positions = Vec::with_capacity(num_sites);
        positions.push(Site::depot());
        for id in 1..num_sites {
            let x = rng.random_range(-w..=w);
            let y = rng.random_range(-w..=w);
            positions.push(Site::new(id, x, y));
        }
        let base = DistanceMatrix::from_sites(&positions);
        let congestion = CongestionMatrix::random(num_sites, config.congestion, rng)?;

        Self::build(
            NetworkOrigin::Generated { positions },
            base,
            congestion,
            vehicle,
            demand_per_stop,
            config,
        )
    }

    /// Builds a network from a caller-supplied base distance matrix and
    /// congestion matrix.
    ///
    /// The distance matrix must be square, symmetric, non-negative and have a
    /// zero diagonal; the congestion matrix must match its size and stay
    /// within `config.congestion`.
    pub fn imported(
        distances: DistanceMatrix,
        congestion: CongestionMatrix,
        vehicle: Vehicle,
        demand_per_stop: f64,
        config: &NetworkConfig,
    ) -> Result<Self, ConfigError> {
        Self::build(
            NetworkOrigin::Imported { positions: None },
            distances,
            congestion,
            vehicle,
            demand_per_stop,
            config,
        )
    }

    /// Like [`imported`](Self::imported), drawing congestion factors from
    /// `config.congestion` with the caller's RNG.
    pub fn imported_with_random_congestion<R: Rng>(
        distances: DistanceMatrix,
        vehicle: Vehicle,
        demand_per_stop: f64,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_site_count(distances.size())?;
        let congestion = CongestionMatrix::random(distances.size(), config.congestion, rng)?;
        Self::imported(distances, congestion, vehicle, demand_per_stop, config)
    }

    /// Attaches display positions to an imported network.
    pub fn with_positions(mut self, positions: Vec<Site>) -> Result<Self, ConfigError> {
        if positions.len() != self.base.size() {
            return Err(ConfigError::SizeMismatch {
                what: "positions",
                found: positions.len(),
                expected: self.base.size(),
            });
        }
        self.origin = match self.origin {
            NetworkOrigin::Generated { .. } => NetworkOrigin::Generated { positions },
            NetworkOrigin::Imported { .. } => NetworkOrigin::Imported {
                positions: Some(positions),
            },
        };
        Ok(self)
    }

    fn build(
        origin: NetworkOrigin,
        base: DistanceMatrix,
        congestion: CongestionMatrix,
        vehicle: Vehicle,
        demand_per_stop: f64,
        config: &NetworkConfig,
    ) -> Result<Self, ConfigError> {
        check_site_count(base.size())?;
        base.validate(SYMMETRY_TOL)?;
        congestion.validate(&config.congestion)?;
        config.fuel.validate()?;
        check_demand(base.size() - 1, demand_per_stop, &vehicle)?;
        let adjusted = base.scaled_by(&congestion)?;

        debug!(
            sites = base.size(),
            demand_per_stop,
            generated = matches!(origin, NetworkOrigin::Generated { .. }),
            "delivery network built"
        );

        Ok(Self {
            origin,
            base,
            congestion,
            adjusted,
            vehicle,
            demand_per_stop,
            fuel: config.fuel,
        })
    }

    /// How this network was produced.
    pub fn origin(&self) -> &NetworkOrigin {
        &self.origin
    }

    /// Site positions, if known.
    pub fn positions(&self) -> Option<&[Site]> {
        match &self.origin {
            NetworkOrigin::Generated { positions } => Some(positions),
            NetworkOrigin::Imported { positions } => positions.as_deref(),
        }
    }

    /// Base distances before congestion.
    pub fn base_distances(&self) -> &DistanceMatrix {
        &self.base
    }

    /// Congestion factors.
    pub fn congestion(&self) -> &CongestionMatrix {
        &self.congestion
    }

    /// Adjusted distances (base × congestion).
    pub fn adjusted_distances(&self) -> &DistanceMatrix {
        &self.adjusted
    }

    /// The fuel formula.
    pub fn fuel_model(&self) -> &FuelModel {
        &self.fuel
    }
}

impl FuelNetwork for DeliveryNetwork {
    fn num_stops(&self) -> usize {
        self.adjusted.size() - 1
    }

    fn distance(&self, from: usize, to: usize) -> Result<f64, NetworkError> {
        self.adjusted.try_get(from, to)
    }

    fn fuel_for_leg(&self, distance: f64, total_weight: f64) -> f64 {
        self.fuel.fuel_for_leg(distance, total_weight)
    }

    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn demand_per_stop(&self) -> f64 {
        self.demand_per_stop
    }
}

fn check_site_count(num_sites: usize) -> Result<(), ConfigError> {
    if num_sites < MIN_SITES {
        return Err(ConfigError::TooFewSites {
            found: num_sites,
            min: MIN_SITES,
        });
    }
    Ok(())
}

fn check_demand(num_stops: usize, demand_per_stop: f64, vehicle: &Vehicle) -> Result<(), ConfigError> {
    if !demand_per_stop.is_finite() || demand_per_stop < 0.0 {
        return Err(ConfigError::NegativeDemand(demand_per_stop));
    }
    let total = num_stops as f64 * demand_per_stop;
    if total > vehicle.max_load() {
        return Err(ConfigError::DemandExceedsCapacity {
            total,
            max_load: vehicle.max_load(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vehicle() -> Vehicle {
        Vehicle::new(3000.0, 57000.0, 1000.0).expect("valid")
    }

    #[test]
    fn test_generate_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let net = DeliveryNetwork::generate(5, vehicle(), 500.0, &NetworkConfig::default(), &mut rng)
            .expect("valid");
        assert_eq!(net.num_stops(), 5);
        assert_eq!(net.num_sites(), 6);
        let positions = net.positions().expect("generated");
        assert_eq!(positions.len(), 6);
        assert!(positions[0].is_depot());
        for p in &positions[1..] {
            assert!(p.x().abs() <= 100.0 && p.y().abs() <= 100.0);
        }
        assert!(net.adjusted_distances().is_symmetric(1e-9));
    }

    #[test]
    fn test_adjusted_is_base_times_congestion() {
        let mut rng = StdRng::seed_from_u64(3);
        let net = DeliveryNetwork::generate(4, vehicle(), 100.0, &NetworkConfig::default(), &mut rng)
            .expect("valid");
        for i in 0..5 {
            for j in 0..5 {
                let expected = net.base_distances().get(i, j) * net.congestion().get(i, j);
                assert!((net.distance(i, j).expect("in range") - expected).abs() < 1e-10);
                if i != j {
                    // Congestion never shortens a road.
                    assert!(net.distance(i, j).expect("in range") >= net.base_distances().get(i, j));
                }
            }
        }
    }

    #[test]
    fn test_generate_reproducible() {
        let cfg = NetworkConfig::default();
        let a = DeliveryNetwork::generate(6, vehicle(), 10.0, &cfg, &mut StdRng::seed_from_u64(9))
            .expect("valid");
        let b = DeliveryNetwork::generate(6, vehicle(), 10.0, &cfg, &mut StdRng::seed_from_u64(9))
            .expect("valid");
        assert_eq!(a.adjusted_distances(), b.adjusted_distances());
    }

    #[test]
    fn test_demand_exceeds_capacity() {
        let mut rng = StdRng::seed_from_u64(1);
        let small = Vehicle::new(3000.0, 2000.0, 1000.0).expect("valid");
        let err = DeliveryNetwork::generate(5, small, 500.0, &NetworkConfig::default(), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DemandExceedsCapacity {
                total: 2500.0,
                max_load: 2000.0
            }
        );
    }

    #[test]
    fn test_too_few_sites() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            DeliveryNetwork::generate(0, vehicle(), 1.0, &NetworkConfig::default(), &mut rng),
            Err(ConfigError::TooFewSites { found: 1, min: 2 })
        ));
        let dm = DistanceMatrix::new(1);
        assert!(matches!(
            DeliveryNetwork::imported(dm, CongestionMatrix::uniform(1), vehicle(), 1.0, &NetworkConfig::default()),
            Err(ConfigError::TooFewSites { .. })
        ));
    }

    #[test]
    fn test_imported_rejects_asymmetric() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 12.0, 0.0]).expect("len");
        let err = DeliveryNetwork::imported(
            dm,
            CongestionMatrix::uniform(2),
            vehicle(),
            1.0,
            &NetworkConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::AsymmetricMatrix { .. }));
    }

    #[test]
    fn test_imported_rejects_mismatched_congestion() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 10.0, 0.0]).expect("len");
        let err = DeliveryNetwork::imported(
            dm,
            CongestionMatrix::uniform(3),
            vehicle(),
            1.0,
            &NetworkConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::SizeMismatch { .. }));
    }

    #[test]
    fn test_imported_with_random_congestion_and_positions() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 10.0, 10.0, 0.0]).expect("len");
        let mut rng = StdRng::seed_from_u64(5);
        let net = DeliveryNetwork::imported_with_random_congestion(
            dm,
            vehicle(),
            1.0,
            &NetworkConfig::default(),
            &mut rng,
        )
        .expect("valid");
        assert!(net.positions().is_none());
        let d = net.distance(0, 1).expect("in range");
        assert!((10.0..=20.0).contains(&d));

        let net = net
            .with_positions(vec![Site::depot(), Site::new(1, 10.0, 0.0)])
            .expect("sizes match");
        assert_eq!(net.positions().map(|p| p.len()), Some(2));
        assert!(matches!(net.origin(), NetworkOrigin::Imported { .. }));
        assert!(net.with_positions(vec![Site::depot()]).is_err());
    }

    #[test]
    fn test_fuel_and_return_check() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 100.0, 100.0, 0.0]).expect("len");
        let net = DeliveryNetwork::imported(
            dm,
            CongestionMatrix::uniform(2),
            vehicle(),
            500.0,
            &NetworkConfig::default(),
        )
        .expect("valid");
        // 100 km at 3000 kg: 20 + 15 = 35 L
        assert!((net.fuel_for_leg(100.0, 3000.0) - 35.0).abs() < 1e-10);
        assert!(net.can_return_to_depot(1, 35.0, 0.0));
        assert!(!net.can_return_to_depot(1, 35.0, 500.0));
    }
}
