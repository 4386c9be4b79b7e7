//! Exhaustive permutation enumeration.
//!
//! Every ordering of the stops is wrapped with the depot, evaluated, and
//! the cheapest valid one is kept. Cost grows factorially, so instances
//! above a configured ceiling are refused before any work starts.

use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

use crate::error::SolveError;
use crate::evaluation::TourEvaluator;
use crate::models::{FuelNetwork, SolveOutcome, Tour};

/// Settings for exhaustive enumeration.
///
/// # Examples
///
/// ```
/// use fuel_routing::exact::ExactConfig;
///
/// assert_eq!(ExactConfig::default().max_stops, 10);
/// assert_eq!(ExactConfig::default().with_max_stops(8).max_stops, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExactConfig {
    /// Largest stop count accepted (10! = 3 628 800 permutations).
    pub max_stops: usize,
}

impl ExactConfig {
    /// Sets the stop-count ceiling.
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self { max_stops: 10 }
    }
}

/// Result of an exhaustive run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExactReport {
    /// Cheapest valid tour, or infeasible if none exists.
    pub outcome: SolveOutcome,
    /// Number of permutations evaluated.
    pub permutations_tested: u64,
    /// Number of those that were valid.
    pub valid_tours: u64,
}

/// Finds the minimum-fuel valid tour by trying every stop permutation.
///
/// Permutations are visited in lexicographic order of stop indices and a
/// tour replaces the incumbent only if strictly cheaper, so among equal-cost
/// optima the lexicographically first wins.
///
/// # Errors
///
/// [`SolveError::TooManyStops`] if the network has more than
/// `config.max_stops` stops. Nothing is enumerated in that case.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::exact::{brute_force, ExactConfig};
/// use fuel_routing::models::{Site, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
///
/// let sites = vec![Site::depot(), Site::new(1, 30.0, 0.0), Site::new(2, 10.0, 0.0)];
/// let network = DeliveryNetwork::imported(
///     DistanceMatrix::from_sites(&sites),
///     CongestionMatrix::uniform(3),
///     Vehicle::new(3000.0, 1000.0, 100.0).unwrap(),
///     500.0,
///     &NetworkConfig::default(),
/// )
/// .unwrap();
///
/// let report = brute_force(&network, &ExactConfig::default()).unwrap();
/// assert_eq!(report.permutations_tested, 2);
/// // Drop the near stop first while heavy, then drive the long legs lighter.
/// assert_eq!(report.outcome.tour().unwrap().stops(), &[2, 1]);
/// ```
#[instrument(skip_all, fields(stops = network.num_stops()))]
pub fn brute_force<N: FuelNetwork + ?Sized>(
    network: &N,
    config: &ExactConfig,
) -> Result<ExactReport, SolveError> {
    let n = network.num_stops();
    if n > config.max_stops {
        return Err(SolveError::TooManyStops {
            stops: n,
            max: config.max_stops,
        });
    }

    let evaluator = TourEvaluator::new(network);
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut permutations_tested = 0u64;
    let mut valid_tours = 0u64;

    for stops in (1..=n).permutations(n) {
        permutations_tested += 1;
        let evaluation = evaluator.evaluate_stops(&stops);
        if !evaluation.is_valid() {
            continue;
        }
        valid_tours += 1;
        let cost = evaluation.cost();
        if best.as_ref().map_or(true, |(_, best_cost)| cost < *best_cost) {
            debug!(cost, ?stops, "new best permutation");
            best = Some((stops, cost));
        }
    }

    info!(permutations_tested, valid_tours, "enumeration finished");

    let outcome = match best {
        Some((stops, cost)) => SolveOutcome::feasible(Tour::from_stops(&stops), cost),
        None => {
            warn!("no permutation satisfies the fuel constraints");
            SolveOutcome::infeasible()
        }
    };

    Ok(ExactReport {
        outcome,
        permutations_tested,
        valid_tours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_feasible_neighbor;
    use crate::test_support::{line_network, trap_network};

    #[test]
    fn test_line_optimum() {
        let report = brute_force(&line_network(100.0), &ExactConfig::default()).expect("small");
        assert_eq!(report.permutations_tested, 6);
        assert_eq!(report.valid_tours, 6);
        let tour = report.outcome.tour().expect("feasible");
        assert_eq!(tour.stops(), &[1, 2, 3]);
        assert!((report.outcome.cost_or_infinity() - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_counts_only_valid_tours() {
        // 13.0 L rules out [3, 2, 1] (13.2) but still admits [1, 2, 3].
        let report = brute_force(&line_network(13.0), &ExactConfig::default()).expect("small");
        assert_eq!(report.permutations_tested, 6);
        assert!(report.valid_tours >= 1 && report.valid_tours < 6);
        assert_eq!(report.outcome.tour().map(|t| t.stops().to_vec()), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_finds_tour_greedy_misses() {
        let net = trap_network();
        assert!(!nearest_feasible_neighbor(&net).is_feasible());
        let report = brute_force(&net, &ExactConfig::default()).expect("small");
        // [2, 1, 3] and [3, 1, 2] tie at 13; lexicographic order picks the first.
        assert_eq!(report.outcome.cost(), Some(13.0));
        assert_eq!(report.outcome.tour().map(|t| t.stops().to_vec()), Some(vec![2, 1, 3]));
    }

    #[test]
    fn test_no_feasible_tour() {
        let report = brute_force(&line_network(12.0), &ExactConfig::default()).expect("small");
        assert_eq!(report.valid_tours, 0);
        assert!(!report.outcome.is_feasible());
        assert_eq!(report.outcome.cost_or_infinity(), f64::INFINITY);
    }

    #[test]
    fn test_refuses_above_ceiling() {
        let err = brute_force(&line_network(100.0), &ExactConfig::default().with_max_stops(2))
            .unwrap_err();
        assert_eq!(err, SolveError::TooManyStops { stops: 3, max: 2 });
    }

    #[test]
    fn test_round_trip_through_evaluator() {
        let net = line_network(100.0);
        let report = brute_force(&net, &ExactConfig::default()).expect("small");
        let tour = report.outcome.tour().expect("feasible");
        let evaluation = TourEvaluator::new(&net).evaluate(tour);
        assert!(evaluation.is_valid());
        assert_eq!(Some(evaluation.cost()), report.outcome.cost());
    }
}
