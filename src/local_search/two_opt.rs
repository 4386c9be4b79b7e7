//! Fuel-aware 2-opt.
//!
//! # Algorithm
//!
//! For each pair of stop positions `i < j`, reverse the segment
//! `stops[i..=j]` and re-evaluate the whole tour. Fuel cost depends on the
//! load carried along every leg, so a reversal changes the cost of more
//! than the two edges it swaps; the delta cannot be computed from distances
//! alone and each candidate is simulated in full.
//!
//! The best strictly-improving valid candidate is kept.
//!
//! # Complexity
//!
//! O(n²) candidates per pass, O(n) each to evaluate: O(n³).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use crate::evaluation::TourEvaluator;
use crate::models::FuelNetwork;

/// Applies one pass of 2-opt to a tour given by its stop order.
///
/// Returns the improved stop order and its cost. If the input is invalid it
/// is returned unchanged with cost `+∞`; if no reversal improves it, it is
/// returned unchanged with its own cost.
///
/// # Examples
///
/// ```
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::evaluation::TourEvaluator;
/// use fuel_routing::local_search::two_opt_pass;
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
/// let evaluator = TourEvaluator::new(&network);
///
/// let (improved, cost) = two_opt_pass(&[3, 2, 1], &evaluator);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert!(cost < evaluator.evaluate_stops(&[3, 2, 1]).cost());
/// ```
pub fn two_opt_pass<N: FuelNetwork + ?Sized>(
    stops: &[usize],
    evaluator: &TourEvaluator<'_, N>,
) -> (Vec<usize>, f64) {
    let initial = evaluator.evaluate_stops(stops);
    if !initial.is_valid() {
        return (stops.to_vec(), f64::INFINITY);
    }

    let mut best = stops.to_vec();
    let mut best_cost = initial.cost();
    let n = stops.len();
    let mut candidate = stops.to_vec();

    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            candidate.copy_from_slice(stops);
            candidate[i..=j].reverse();
            let evaluation = evaluator.evaluate_stops(&candidate);
            if evaluation.is_valid() && evaluation.cost() < best_cost {
                trace!(i, j, cost = evaluation.cost(), "2-opt improvement");
                best_cost = evaluation.cost();
                best.copy_from_slice(&candidate);
            }
        }
    }

    (best, best_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{line_network, trap_network};

    #[test]
    fn test_2opt_already_optimal() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        let (improved, cost) = two_opt_pass(&[1, 2, 3], &eval);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((cost - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_2opt_reverses_whole_tour() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        let (improved, cost) = two_opt_pass(&[3, 2, 1], &eval);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((cost - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        for start in [[2, 3, 1], [3, 1, 2], [1, 3, 2]] {
            let before = eval.evaluate_stops(&start).cost();
            let (improved, after) = two_opt_pass(&start, &eval);
            assert!(after <= before);
            assert_eq!(eval.evaluate_stops(&improved).cost(), after);
        }
    }

    #[test]
    fn test_2opt_invalid_input_untouched() {
        let net = trap_network();
        let eval = TourEvaluator::new(&net);
        let (same, cost) = two_opt_pass(&[1, 2, 3], &eval);
        assert_eq!(same, vec![1, 2, 3]);
        assert_eq!(cost, f64::INFINITY);
    }

    #[test]
    fn test_2opt_single_stop() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        // Wrong site set: unchanged, infinite.
        let (same, cost) = two_opt_pass(&[2], &eval);
        assert_eq!(same, vec![2]);
        assert_eq!(cost, f64::INFINITY);
    }
}
