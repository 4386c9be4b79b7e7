//! Exact search by exhaustive enumeration.
//!
//! - [`brute_force`] — evaluates every stop permutation, O(n! · n)

mod brute_force;

pub use brute_force::{brute_force, ExactConfig, ExactReport};
