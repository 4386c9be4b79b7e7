//! Nearest-feasible-neighbor constructive heuristic.
//!
//! Builds one tour greedily: starting from the depot with a full tank and
//! all cargo on board, always drive to the nearest unvisited stop that can
//! be reached and still leaves enough fuel to get home. When no stop
//! qualifies before every stop is served, the walk has hit a dead end and
//! the heuristic reports the instance as infeasible for it.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use tracing::{debug, info, instrument, warn};

use crate::evaluation::TourEvaluator;
use crate::models::{FuelNetwork, SolveOutcome, Tour, DEPOT};

/// Constructs a tour using the nearest-feasible-neighbor heuristic.
///
/// A stop is a candidate when the leg to it fits in the remaining fuel and
/// [`can_return_to_depot`](FuelNetwork::can_return_to_depot) holds after
/// delivering there. Among candidates the smallest adjusted distance wins,
/// ties going to the lowest site index.
///
/// Returns an infeasible [`SolveOutcome`] on a dead end.
///
/// # Examples
///
/// ```
/// use fuel_routing::constructive::nearest_feasible_neighbor;
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::models::{Site, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
///
/// let sites = vec![
///     Site::depot(),
///     Site::new(1, 10.0, 0.0),
///     Site::new(2, 20.0, 0.0),
///     Site::new(3, 30.0, 0.0),
/// ];
/// let network = DeliveryNetwork::imported(
///     DistanceMatrix::from_sites(&sites),
///     CongestionMatrix::uniform(4),
///     Vehicle::new(3000.0, 1500.0, 100.0).unwrap(),
///     500.0,
///     &NetworkConfig::default(),
/// )
/// .unwrap();
///
/// let outcome = nearest_feasible_neighbor(&network);
/// assert_eq!(outcome.tour().unwrap().sites(), &[0, 1, 2, 3, 0]);
/// ```
#[instrument(skip_all, fields(stops = network.num_stops()))]
pub fn nearest_feasible_neighbor<N: FuelNetwork + ?Sized>(network: &N) -> SolveOutcome {
    let n = network.num_stops();
    let vehicle = network.vehicle();

    let mut visited = vec![false; n + 1];
    visited[DEPOT] = true;
    let mut stops = Vec::with_capacity(n);
    let mut current = DEPOT;
    let mut fuel = vehicle.tank_capacity();
    let mut load = network.total_demand();

    while stops.len() < n {
        let weight = vehicle.total_weight(load);
        let mut best: Option<(usize, f64, f64)> = None;
        for site in 1..=n {
            if visited[site] {
                continue;
            }
            let Ok(d) = network.distance(current, site) else {
                continue;
            };
            let leg = network.fuel_for_leg(d, weight);
            if leg > fuel {
                continue;
            }
            let load_after = (load - network.demand(site)).max(0.0);
            if !network.can_return_to_depot(site, fuel - leg, load_after) {
                continue;
            }
            if best.map_or(true, |(_, best_d, _)| d < best_d) {
                best = Some((site, d, leg));
            }
        }

        match best {
            Some((next, _, leg)) => {
                visited[next] = true;
                stops.push(next);
                fuel -= leg;
                load = (load - network.demand(next)).max(0.0);
                current = next;
            }
            None => {
                debug!(
                    at = current,
                    served = stops.len(),
                    remaining = n - stops.len(),
                    fuel,
                    "nearest neighbor reached a dead end"
                );
                return SolveOutcome::infeasible();
            }
        }
    }

    let tour = Tour::from_stops(&stops);
    let evaluation = TourEvaluator::new(network).evaluate(&tour);
    if !evaluation.is_valid() {
        warn!(reason = %evaluation.reason(), "nearest neighbor built a tour the evaluator rejects");
        return SolveOutcome::infeasible();
    }
    info!(cost = evaluation.cost(), "nearest neighbor tour built");
    SolveOutcome::feasible(tour, evaluation.cost())
}
