//! Delivery network: adjusted distances, fuel formula and vehicle.
//!
//! - [`FuelModel`] — load-dependent fuel consumption per leg
//! - [`NetworkConfig`] — tunables for building a network
//! - [`DeliveryNetwork`] — the immutable model every solver reads, either
//!   generated from random coordinates or imported from a matrix

mod config;
mod delivery;
mod fuel;

pub use config::NetworkConfig;
pub use delivery::{DeliveryNetwork, NetworkOrigin, MIN_SITES};
pub use fuel::FuelModel;
