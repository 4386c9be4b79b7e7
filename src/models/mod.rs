//! Domain model types for fuel-constrained delivery tours.
//!
//! Provides the vehicle, site positions, the tour candidate, failure and
//! outcome types, and the [`FuelNetwork`] trait every solver works against.

mod problem;
mod site;
mod solution;
mod tour;
mod vehicle;

pub use problem::FuelNetwork;
pub use site::Site;
pub use solution::{SolveOutcome, TourFailure};
pub use tour::Tour;
pub use vehicle::Vehicle;

/// Index of the depot in every network.
pub const DEPOT: usize = 0;
