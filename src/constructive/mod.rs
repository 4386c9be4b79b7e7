//! Constructive heuristics for building tours.
//!
//! - [`nearest_feasible_neighbor`] — greedy nearest reachable stop, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_feasible_neighbor;
