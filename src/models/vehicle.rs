//! Delivery vehicle parameters.

use crate::error::ConfigError;

/// The vehicle performing the tour.
///
/// Weights are in kilograms and the tank in litres. The vehicle leaves the
/// depot with a full tank and every stop's demand on board.
///
/// # Examples
///
/// ```
/// use fuel_routing::models::Vehicle;
///
/// let v = Vehicle::new(3000.0, 57000.0, 1000.0).unwrap();
/// assert_eq!(v.total_weight(2500.0), 5500.0);
/// assert_eq!(v.full_weight(), 60000.0);
/// ```
///
/// Deserialization goes through [`Vehicle::new`], so loaded parameters are
/// checked the same way:
///
/// ```
/// use fuel_routing::models::Vehicle;
///
/// let bad = r#"{ "empty_weight": -1.0, "max_load": 10.0, "tank_capacity": 5.0 }"#;
/// assert!(serde_json::from_str::<Vehicle>(bad).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VehicleParams")]
pub struct Vehicle {
    empty_weight: f64,
    max_load: f64,
    tank_capacity: f64,
}

/// Unchecked wire form of [`Vehicle`].
#[derive(serde::Deserialize)]
struct VehicleParams {
    empty_weight: f64,
    max_load: f64,
    tank_capacity: f64,
}

impl TryFrom<VehicleParams> for Vehicle {
    type Error = ConfigError;

    fn try_from(p: VehicleParams) -> Result<Self, Self::Error> {
        Self::new(p.empty_weight, p.max_load, p.tank_capacity)
    }
}

impl Vehicle {
    /// Creates a vehicle.
    ///
    /// Every parameter must be finite and non-negative.
    pub fn new(empty_weight: f64, max_load: f64, tank_capacity: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("empty_weight", empty_weight),
            ("max_load", max_load),
            ("tank_capacity", tank_capacity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidVehicle { name, value });
            }
        }
        Ok(Self {
            empty_weight,
            max_load,
            tank_capacity,
        })
    }

    /// Weight of the vehicle with no cargo.
    pub fn empty_weight(&self) -> f64 {
        self.empty_weight
    }

    /// Maximum cargo weight.
    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    /// Fuel tank capacity.
    pub fn tank_capacity(&self) -> f64 {
        self.tank_capacity
    }

    /// Total weight carrying `load` of cargo, `0 <= load <= max_load`.
    pub fn total_weight(&self, load: f64) -> f64 {
        self.empty_weight + load
    }

    /// Total weight at maximum load.
    pub fn full_weight(&self) -> f64 {
        self.empty_weight + self.max_load
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(3000.0, 57000.0, 1000.0).expect("valid");
        assert_eq!(v.empty_weight(), 3000.0);
        assert_eq!(v.max_load(), 57000.0);
        assert_eq!(v.tank_capacity(), 1000.0);
        assert_eq!(v.total_weight(0.0), 3000.0);
    }

    #[test]
    fn test_vehicle_rejects_negative() {
        let err = Vehicle::new(3000.0, -1.0, 1000.0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVehicle {
                name: "max_load",
                ..
            }
        ));
        assert!(Vehicle::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(Vehicle::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_deserialize_checks_parameters() {
        let json = r#"{"empty_weight":-10000.0,"max_load":1000.0,"tank_capacity":100.0}"#;
        let err = serde_json::from_str::<Vehicle>(json).unwrap_err();
        assert!(err.to_string().contains("empty_weight"));

        let params = VehicleParams {
            empty_weight: -10000.0,
            max_load: 1000.0,
            tank_capacity: 100.0,
        };
        assert!(matches!(
            Vehicle::try_from(params),
            Err(ConfigError::InvalidVehicle {
                name: "empty_weight",
                ..
            })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Vehicle::new(3000.0, 57000.0, 1000.0).expect("valid");
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Vehicle = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, v);
    }
}
