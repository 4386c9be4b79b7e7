//! Genetic algorithm for fuel-constrained tours.
//!
//! - [`Chromosome`] — a stop permutation with its cached evaluation
//! - [`seeding`] — hybrid initial population and best-effort repair
//! - [`operators`] — tournament selection, order crossover, mutation
//! - [`GeneticSolver`] — elitist generational loop

mod chromosome;
pub mod operators;
pub mod seeding;
mod solver;

pub use chromosome::{Chromosome, FITNESS_SCALE};
pub use solver::{GeneticConfig, GeneticResult, GeneticSolver};
