//! # fuel-routing
//!
//! Fuel-constrained single-vehicle delivery tours. A loaded vehicle leaves
//! a depot, drops an equal share of cargo at every stop, and returns; fuel
//! burned on each leg grows with the weight still on board and with traffic
//! congestion, and the tank must never run dry.
//!
//! ## Modules
//!
//! - [`models`] — Vehicle, sites, tours, outcomes, and the [`FuelNetwork`](models::FuelNetwork) trait
//! - [`distance`] — Distance and congestion matrices
//! - [`network`] — Fuel model and the generated or imported delivery network
//! - [`evaluation`] — Tour validity and fuel cost
//! - [`constructive`] — Nearest-feasible-neighbor heuristic
//! - [`exact`] — Exhaustive enumeration for small instances
//! - [`local_search`] — 2-opt improvement pass
//! - [`ga`] — Genetic algorithm over stop permutations
//! - [`compare`] — Greedy versus exact, with optimality gap
//! - [`error`] — Configuration and solver errors
//!
//! ## Example
//!
//! ```
//! use fuel_routing::constructive::nearest_feasible_neighbor;
//! use fuel_routing::exact::{brute_force, ExactConfig};
//! use fuel_routing::models::Vehicle;
//! use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let vehicle = Vehicle::new(3000.0, 57000.0, 1000.0).unwrap();
//! let network =
//!     DeliveryNetwork::generate(5, vehicle, 500.0, &NetworkConfig::default(), &mut rng).unwrap();
//!
//! let greedy = nearest_feasible_neighbor(&network);
//! let exact = brute_force(&network, &ExactConfig::default()).unwrap();
//! assert!(exact.outcome.cost_or_infinity() <= greedy.cost_or_infinity());
//! ```

pub mod compare;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod network;

#[cfg(test)]
mod test_support;
