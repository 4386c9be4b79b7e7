//! Fuel consumption model.

use crate::error::ConfigError;

/// Linear load-dependent fuel consumption.
///
/// ```text
/// fuel = distance / 100 × (base_rate + weight_coefficient × total_weight)
/// ```
///
/// `base_rate` is in litres per 100 distance units; `weight_coefficient` adds
/// litres per 100 distance units per unit of weight.
///
/// # Examples
///
/// ```
/// use fuel_routing::network::FuelModel;
///
/// let model = FuelModel::default();
/// // 50 km at 10 t: 0.5 × (20 + 50) = 35 L
/// assert!((model.fuel_for_leg(50.0, 10_000.0) - 35.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FuelModel {
    /// Consumption of the bare vehicle per 100 distance units.
    pub base_rate: f64,
    /// Extra consumption per 100 distance units per unit of total weight.
    pub weight_coefficient: f64,
}

impl FuelModel {
    /// Creates a fuel model.
    pub fn new(base_rate: f64, weight_coefficient: f64) -> Self {
        Self {
            base_rate,
            weight_coefficient,
        }
    }

    /// Sets the base rate.
    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    /// Sets the weight coefficient.
    pub fn with_weight_coefficient(mut self, weight_coefficient: f64) -> Self {
        self.weight_coefficient = weight_coefficient;
        self
    }

    /// Both coefficients must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("base_rate", self.base_rate),
            ("weight_coefficient", self.weight_coefficient),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeCoefficient { name, value });
            }
        }
        Ok(())
    }

    /// Fuel burned over `distance` carrying `total_weight`.
    pub fn fuel_for_leg(&self, distance: f64, total_weight: f64) -> f64 {
        distance / 100.0 * (self.base_rate + self.weight_coefficient * total_weight)
    }
}

impl Default for FuelModel {
    fn default() -> Self {
        Self {
            base_rate: 20.0,
            weight_coefficient: 0.005,
        }
    }
}
