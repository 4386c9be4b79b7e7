//! Permutation chromosome.
//!
//! A chromosome is the stop order of a tour with the depot left implicit
//! at both ends. Its evaluation is computed once, when it is created.

use crate::evaluation::TourEvaluator;
use crate::models::{FuelNetwork, Tour};

/// Numerator of the fitness function: fitness = `FITNESS_SCALE / cost`.
pub const FITNESS_SCALE: f64 = 1000.0;

/// A stop permutation with its fuel cost and validity.
///
/// Invalid chromosomes have fitness `0` and stay in the population as raw
/// material for crossover.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    stops: Vec<usize>,
    cost: f64,
    valid: bool,
}

impl Chromosome {
    /// Evaluates `stops` and wraps the result.
    pub fn evaluate<N: FuelNetwork + ?Sized>(stops: Vec<usize>, evaluator: &TourEvaluator<'_, N>) -> Self {
        let evaluation = evaluator.evaluate_stops(&stops);
        Self {
            stops,
            cost: evaluation.cost(),
            valid: evaluation.is_valid(),
        }
    }

    /// The stop order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Fuel cost, `+∞` if invalid.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns `true` if the tour is valid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `FITNESS_SCALE / cost` for valid tours, `0` otherwise.
    pub fn fitness(&self) -> f64 {
        if self.valid {
            FITNESS_SCALE / self.cost
        } else {
            0.0
        }
    }

    /// The full tour, depot at both ends.
    pub fn tour(&self) -> Tour {
        Tour::from_stops(&self.stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::line_network;

    #[test]
    fn test_valid_fitness() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        let c = Chromosome::evaluate(vec![1, 2, 3], &eval);
        assert!(c.is_valid());
        assert!((c.fitness() - 1000.0 / 12.6).abs() < 1e-9);
        assert_eq!(c.tour().sites(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_invalid_fitness_is_zero() {
        let net = line_network(10.0);
        let eval = TourEvaluator::new(&net);
        let c = Chromosome::evaluate(vec![1, 2, 3], &eval);
        assert!(!c.is_valid());
        assert_eq!(c.fitness(), 0.0);
        assert_eq!(c.cost(), f64::INFINITY);
    }

    #[test]
    fn test_cheaper_is_fitter() {
        let net = line_network(100.0);
        let eval = TourEvaluator::new(&net);
        let good = Chromosome::evaluate(vec![1, 2, 3], &eval);
        let worse = Chromosome::evaluate(vec![3, 2, 1], &eval);
        assert!(good.fitness() > worse.fitness());
    }
}
