//! Fuel network capability trait.

use crate::error::NetworkError;

use super::{Vehicle, DEPOT};

/// Read-only view of a delivery network that solvers consume.
///
/// Implementations supply adjusted distances, the fuel formula, the vehicle
/// and the per-stop demand. The return-to-depot rule lives here, in
/// [`can_return_to_depot`](FuelNetwork::can_return_to_depot), and nowhere
/// else.
///
/// # Examples
///
/// ```
/// use fuel_routing::error::NetworkError;
/// use fuel_routing::models::{FuelNetwork, Vehicle};
///
/// struct Line { vehicle: Vehicle }
///
/// impl FuelNetwork for Line {
///     fn num_stops(&self) -> usize { 1 }
///     fn distance(&self, from: usize, to: usize) -> Result<f64, NetworkError> {
///         match (from, to) {
///             (0, 1) | (1, 0) => Ok(100.0),
///             (0, 0) | (1, 1) => Ok(0.0),
///             _ => Err(NetworkError::SiteOutOfRange { site: from.max(to), num_sites: 2 }),
///         }
///     }
///     fn fuel_for_leg(&self, distance: f64, total_weight: f64) -> f64 {
///         distance / 100.0 * (20.0 + 0.005 * total_weight)
///     }
///     fn vehicle(&self) -> &Vehicle { &self.vehicle }
///     fn demand_per_stop(&self) -> f64 { 500.0 }
/// }
///
/// let net = Line { vehicle: Vehicle::new(3000.0, 1000.0, 100.0).unwrap() };
/// // 100 km empty: 20 + 15 = 35 L
/// assert!(net.can_return_to_depot(1, 35.0, 0.0));
/// assert!(!net.can_return_to_depot(1, 34.9, 0.0));
/// ```
pub trait FuelNetwork: Send + Sync {
    /// Number of delivery stops (sites 1..=n).
    fn num_stops(&self) -> usize;

    /// Number of sites, depot included.
    fn num_sites(&self) -> usize {
        self.num_stops() + 1
    }

    /// Adjusted distance (base × congestion) between two sites.
    fn distance(&self, from: usize, to: usize) -> Result<f64, NetworkError>;

    /// Fuel burned over `distance` at `total_weight`.
    fn fuel_for_leg(&self, distance: f64, total_weight: f64) -> f64;

    /// The vehicle running the tour.
    fn vehicle(&self) -> &Vehicle;

    /// Quantity delivered at every stop.
    fn demand_per_stop(&self) -> f64;

    /// Quantity delivered at `site` (zero at the depot).
    fn demand(&self, site: usize) -> f64 {
        if site == DEPOT {
            0.0
        } else {
            self.demand_per_stop()
        }
    }

    /// Cargo on board when leaving the depot.
    fn total_demand(&self) -> f64 {
        self.num_stops() as f64 * self.demand_per_stop()
    }

    /// Fuel needed to drive straight home from `current_site` carrying
    /// `remaining_load`.
    fn fuel_to_depot(&self, current_site: usize, remaining_load: f64) -> Result<f64, NetworkError> {
        let distance = self.distance(current_site, DEPOT)?;
        Ok(self.fuel_for_leg(distance, self.vehicle().total_weight(remaining_load)))
    }

    /// Returns `true` if `remaining_fuel` covers the direct leg home.
    ///
    /// An unknown site can never return.
    fn can_return_to_depot(&self, current_site: usize, remaining_fuel: f64, remaining_load: f64) -> bool {
        self.fuel_to_depot(current_site, remaining_load)
            .map(|needed| remaining_fuel >= needed)
            .unwrap_or(false)
    }
}
