//! Tour evaluator that simulates fuel and load leg by leg.

use crate::models::{FuelNetwork, Tour, TourFailure, DEPOT};

/// Outcome of evaluating one tour.
///
/// Invalid tours cost `+∞` and carry the reason they were rejected.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TourEvaluation {
    cost: f64,
    failure: Option<TourFailure>,
}

impl TourEvaluation {
    fn valid(cost: f64) -> Self {
        Self {
            cost,
            failure: None,
        }
    }

    fn invalid(failure: TourFailure) -> Self {
        Self {
            cost: f64::INFINITY,
            failure: Some(failure),
        }
    }

    /// Total fuel burned, `+∞` if invalid.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if the tour satisfied every check.
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Why the tour was rejected.
    pub fn failure(&self) -> Option<&TourFailure> {
        self.failure.as_ref()
    }

    /// Human-readable rejection reason, empty for a valid tour.
    pub fn reason(&self) -> String {
        self.failure
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// State after one completed leg (and delivery, if the leg ended at a stop).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegRecord {
    /// Leg origin.
    pub from: usize,
    /// Leg destination.
    pub to: usize,
    /// Adjusted distance driven.
    pub distance: f64,
    /// Vehicle weight while driving the leg.
    pub total_weight: f64,
    /// Fuel burned on the leg.
    pub fuel_used: f64,
    /// Fuel left on arrival.
    pub fuel_remaining: f64,
    /// Cargo left after delivering at `to`.
    pub load_remaining: f64,
}

/// Evaluates tours by simulating fuel burn and cargo drop-off.
///
/// The vehicle leaves the depot with a full tank and all demand on board.
/// Each leg is driven at the weight implied by the cargo still on board;
/// after each delivery the vehicle must still be able to drive straight
/// home. The evaluator holds no state between calls.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::evaluation::TourEvaluator;
/// use fuel_routing::models::{Tour, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, FuelModel, NetworkConfig};
///
/// let distances = DistanceMatrix::from_data(2, vec![0.0, 100.0, 100.0, 0.0]).unwrap();
/// let config = NetworkConfig::default().with_fuel(FuelModel::new(20.0, 0.005));
/// let vehicle = Vehicle::new(3000.0, 1000.0, 100.0).unwrap();
/// let network =
///     DeliveryNetwork::imported(distances, CongestionMatrix::uniform(2), vehicle, 1000.0, &config)
///         .unwrap();
///
/// let evaluation = TourEvaluator::new(&network).evaluate(&Tour::from_stops(&[1]));
/// // out at 4000 kg: 40 L, back empty at 3000 kg: 35 L
/// assert!(evaluation.is_valid());
/// assert!((evaluation.cost() - 75.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a, N: FuelNetwork + ?Sized> {
    network: &'a N,
}

impl<'a, N: FuelNetwork + ?Sized> TourEvaluator<'a, N> {
    /// Creates an evaluator over `network`.
    pub fn new(network: &'a N) -> Self {
        Self { network }
    }

    /// The network tours are evaluated against.
    pub fn network(&self) -> &'a N {
        self.network
    }

    /// Evaluates a tour, returning its fuel cost and validity.
    pub fn evaluate(&self, tour: &Tour) -> TourEvaluation {
        self.run(tour.sites(), None)
    }

    /// Evaluates a raw site sequence.
    pub fn evaluate_sites(&self, sites: &[usize]) -> TourEvaluation {
        self.run(sites, None)
    }

    /// Evaluates the tour `depot, stops..., depot`.
    pub fn evaluate_stops(&self, stops: &[usize]) -> TourEvaluation {
        self.evaluate(&Tour::from_stops(stops))
    }

    /// Evaluates a tour and records the state after every completed leg.
    ///
    /// On failure the trace ends with the last leg that succeeded.
    pub fn simulate(&self, tour: &Tour) -> (TourEvaluation, Vec<LegRecord>) {
        let mut legs = Vec::with_capacity(tour.len().saturating_sub(1));
        let evaluation = self.run(tour.sites(), Some(&mut legs));
        (evaluation, legs)
    }

    fn run(&self, sites: &[usize], mut trace: Option<&mut Vec<LegRecord>>) -> TourEvaluation {
        if let Err(failure) = self.check_site_set(sites) {
            return TourEvaluation::invalid(failure);
        }

        let network = self.network;
        let vehicle = network.vehicle();
        let mut fuel = vehicle.tank_capacity();
        let mut load = network.total_demand();
        let mut cost = 0.0;

        for w in sites.windows(2) {
            let (from, to) = (w[0], w[1]);
            let distance = match network.distance(from, to) {
                Ok(d) => d,
                Err(_) => return TourEvaluation::invalid(TourFailure::UnknownSite { site: from.max(to) }),
            };
            let total_weight = vehicle.total_weight(load);
            let needed = network.fuel_for_leg(distance, total_weight);
            if needed > fuel {
                return TourEvaluation::invalid(TourFailure::InsufficientFuel {
                    from,
                    to,
                    needed,
                    available: fuel,
                });
            }
            fuel -= needed;
            cost += needed;

            if to != DEPOT {
                load = (load - network.demand(to)).max(0.0);
                if !network.can_return_to_depot(to, fuel, load) {
                    let needed = network.fuel_to_depot(to, load).unwrap_or(f64::INFINITY);
                    return TourEvaluation::invalid(TourFailure::CannotReturn {
                        site: to,
                        needed,
                        available: fuel,
                    });
                }
            }

            if let Some(legs) = trace.as_deref_mut() {
                legs.push(LegRecord {
                    from,
                    to,
                    distance,
                    total_weight,
                    fuel_used: needed,
                    fuel_remaining: fuel,
                    load_remaining: load,
                });
            }
        }

        TourEvaluation::valid(cost)
    }

    /// Checks that `sites` is depot, a permutation of every stop, depot.
    fn check_site_set(&self, sites: &[usize]) -> Result<(), TourFailure> {
        if sites.len() < 2 || sites[0] != DEPOT || sites[sites.len() - 1] != DEPOT {
            return Err(TourFailure::NotDepotAnchored);
        }
        let num_sites = self.network.num_sites();
        let interior = &sites[1..sites.len() - 1];
        let mut seen = vec![false; num_sites];
        for (offset, &site) in interior.iter().enumerate() {
            if site >= num_sites {
                return Err(TourFailure::UnknownSite { site });
            }
            if site == DEPOT {
                return Err(TourFailure::InteriorDepotVisit {
                    position: offset + 1,
                });
            }
            if seen[site] {
                return Err(TourFailure::RepeatedStop { site });
            }
            seen[site] = true;
        }
        let expected = self.network.num_stops();
        if interior.len() != expected {
            return Err(TourFailure::WrongStopCount {
                expected,
                found: interior.len(),
            });
        }
        Ok(())
    }
}
