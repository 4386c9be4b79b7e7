//! Network construction settings.

use crate::distance::CongestionRange;

use super::FuelModel;

/// Settings shared by generated and imported networks.
///
/// # Examples
///
/// ```
/// use fuel_routing::network::NetworkConfig;
///
/// let config: NetworkConfig = serde_json::from_str(r#"{ "area_half_width": 50.0 }"#).unwrap();
/// assert_eq!(config.area_half_width, 50.0);
/// assert_eq!(config.fuel.base_rate, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Fuel formula coefficients.
    pub fuel: FuelModel,
    /// Range for congestion factors.
    pub congestion: CongestionRange,
    /// Generated stops lie in `[-w, w]²` around the depot.
    pub area_half_width: f64,
}

impl NetworkConfig {
    /// Sets the fuel model.
    pub fn with_fuel(mut self, fuel: FuelModel) -> Self {
        self.fuel = fuel;
        self
    }

    /// Sets the congestion range.
    pub fn with_congestion(mut self, congestion: CongestionRange) -> Self {
        self.congestion = congestion;
        self
    }

    /// Sets the half-width of the generation area.
    pub fn with_area_half_width(mut self, w: f64) -> Self {
        self.area_half_width = w;
        self
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            fuel: FuelModel::default(),
            congestion: CongestionRange::default(),
            area_half_width: 100.0,
        }
    }
}
