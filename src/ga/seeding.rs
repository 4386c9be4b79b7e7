//! Initial population and repair.
//!
//! The population mixes four kinds of individuals:
//!
//! - one copy of the nearest-feasible-neighbor tour, when it exists;
//! - greedy variants: the greedy tour, with one random swap half the time;
//! - near-first orders: the 60% of stops closest to the depot first, then
//!   the rest, each group shuffled;
//! - uniformly random permutations.
//!
//! The last three fill the remaining slots in roughly 40/30/30 proportion,
//! and each goes through [`repair`] before joining the population.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::TourEvaluator;
use crate::models::{FuelNetwork, SolveOutcome, DEPOT};

const GREEDY_VARIANT_SHARE: f64 = 0.4;
const NEAR_FIRST_SHARE: f64 = 0.3;
const GREEDY_SWAP_PROBABILITY: f64 = 0.5;
const NEAR_GROUP_FRACTION: f64 = 0.6;

/// A uniformly random permutation of stops `1..=n`.
pub fn random_stops<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut stops: Vec<usize> = (1..=n).collect();
    stops.shuffle(rng);
    stops
}

/// The greedy stop order, with two random positions swapped half the time.
///
/// Falls back to a random permutation when there is no greedy tour.
pub fn greedy_variant<R: Rng>(greedy: Option<&[usize]>, n: usize, rng: &mut R) -> Vec<usize> {
    let Some(greedy) = greedy else {
        return random_stops(n, rng);
    };
    let mut stops = greedy.to_vec();
    if stops.len() >= 2 && rng.random::<f64>() < GREEDY_SWAP_PROBABILITY {
        let i = rng.random_range(0..stops.len());
        let mut j = rng.random_range(0..stops.len() - 1);
        if j >= i {
            j += 1;
        }
        stops.swap(i, j);
    }
    stops
}

/// Stops sorted by adjusted distance from the depot, ties by index.
pub fn stops_by_depot_distance<N: FuelNetwork + ?Sized>(network: &N, stops: &[usize]) -> Vec<usize> {
    let mut keyed: Vec<(usize, f64)> = stops
        .iter()
        .map(|&s| (s, network.distance(DEPOT, s).unwrap_or(f64::INFINITY)))
        .collect();
    keyed.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    keyed.into_iter().map(|(s, _)| s).collect()
}

/// The nearest 60% of stops (at least one) in random order, followed by
/// the rest in random order.
pub fn near_first<N: FuelNetwork + ?Sized, R: Rng>(network: &N, rng: &mut R) -> Vec<usize> {
    let all: Vec<usize> = (1..=network.num_stops()).collect();
    let mut sorted = stops_by_depot_distance(network, &all);
    let near_count = ((sorted.len() as f64 * NEAR_GROUP_FRACTION) as usize)
        .max(1)
        .min(sorted.len());
    let (near, far) = sorted.split_at_mut(near_count);
    near.shuffle(rng);
    far.shuffle(rng);
    sorted
}

/// Best-effort repair.
///
/// A valid order is returned as is. Otherwise the stops are re-ordered by
/// increasing distance from the depot; that order is returned if valid,
/// else the input is kept. The result may still be invalid.
pub fn repair<N: FuelNetwork + ?Sized>(stops: Vec<usize>, evaluator: &TourEvaluator<'_, N>) -> Vec<usize> {
    if evaluator.evaluate_stops(&stops).is_valid() {
        return stops;
    }
    let reordered = stops_by_depot_distance(evaluator.network(), &stops);
    if evaluator.evaluate_stops(&reordered).is_valid() {
        reordered
    } else {
        stops
    }
}

/// Builds an initial population of `size` stop orders.
pub fn seed_population<N: FuelNetwork + ?Sized, R: Rng>(
    evaluator: &TourEvaluator<'_, N>,
    greedy: &SolveOutcome,
    size: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let network = evaluator.network();
    let n = network.num_stops();
    let greedy_stops = greedy.tour().map(|t| t.stops());

    let mut population = Vec::with_capacity(size);
    if let Some(stops) = greedy_stops {
        if size > 0 {
            population.push(stops.to_vec());
        }
    }
    while population.len() < size {
        let draw = rng.random::<f64>();
        let individual = if draw < GREEDY_VARIANT_SHARE {
            greedy_variant(greedy_stops, n, rng)
        } else if draw < GREEDY_VARIANT_SHARE + NEAR_FIRST_SHARE {
            near_first(network, rng)
        } else {
            random_stops(n, rng)
        };
        population.push(repair(individual, evaluator));
    }
    population
}
