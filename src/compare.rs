//! Side-by-side comparison of the greedy heuristic and exact enumeration.

use tracing::{info, instrument, warn};

use crate::constructive::nearest_feasible_neighbor;
use crate::exact::{brute_force, ExactConfig};
use crate::models::{FuelNetwork, SolveOutcome};

/// Greedy and exact outcomes on the same network.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MethodComparison {
    /// Nearest-feasible-neighbor outcome.
    pub greedy: SolveOutcome,
    /// `None` when the network exceeds the exact ceiling.
    pub exact: Option<SolveOutcome>,
    /// Greedy cost minus exact cost, when both are feasible.
    pub gap: Option<f64>,
    /// `gap` as a percentage of the exact cost.
    pub gap_percent: Option<f64>,
}

/// Runs the greedy heuristic and, when the network is small enough, the
/// exact solver, and reports how far the heuristic is from optimal.
///
/// # Examples
///
/// ```
/// use fuel_routing::compare::compare_methods;
/// use fuel_routing::distance::{CongestionMatrix, DistanceMatrix};
/// use fuel_routing::exact::ExactConfig;
/// use fuel_routing::models::{Site, Vehicle};
/// use fuel_routing::network::{DeliveryNetwork, NetworkConfig};
///
/// let sites = vec![Site::depot(), Site::new(1, 10.0, 0.0), Site::new(2, 0.0, 10.0)];
/// let network = DeliveryNetwork::imported(
///     DistanceMatrix::from_sites(&sites),
///     CongestionMatrix::uniform(3),
///     Vehicle::new(3000.0, 1000.0, 100.0).unwrap(),
///     500.0,
///     &NetworkConfig::default(),
/// )
/// .unwrap();
///
/// let comparison = compare_methods(&network, &ExactConfig::default());
/// assert!(comparison.gap.unwrap() >= 0.0);
/// ```
#[instrument(skip_all, fields(stops = network.num_stops()))]
pub fn compare_methods<N: FuelNetwork + ?Sized>(network: &N, config: &ExactConfig) -> MethodComparison {
    let greedy = nearest_feasible_neighbor(network);
    let exact = match brute_force(network, config) {
        Ok(report) => Some(report.outcome),
        Err(e) => {
            warn!(error = %e, "skipping exact solver");
            None
        }
    };

    let gap = match (greedy.cost(), exact.as_ref().and_then(SolveOutcome::cost)) {
        (Some(g), Some(e)) => Some(g - e),
        _ => None,
    };
    let gap_percent = gap.and_then(|gap| {
        let exact_cost = exact.as_ref().and_then(SolveOutcome::cost)?;
        (exact_cost > 0.0).then(|| gap / exact_cost * 100.0)
    });
    info!(?gap, ?gap_percent, "method comparison");

    MethodComparison {
        greedy,
        exact,
        gap,
        gap_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{line_network, trap_network};

    #[test]
    fn test_greedy_optimal_zero_gap() {
        let net = line_network(100.0);
        let c = compare_methods(&net, &ExactConfig::default());
        assert!(c.gap.unwrap().abs() < 1e-9);
        assert!(c.gap_percent.unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_greedy_dead_end_no_gap() {
        let net = trap_network();
        let c = compare_methods(&net, &ExactConfig::default());
        assert!(!c.greedy.is_feasible());
        assert!((c.exact.as_ref().unwrap().cost().unwrap() - 13.0).abs() < 1e-9);
        assert!(c.gap.is_none());
    }

    #[test]
    fn test_over_ceiling_skips_exact() {
        let net = line_network(100.0);
        let c = compare_methods(&net, &ExactConfig::default().with_max_stops(2));
        assert!(c.exact.is_none());
        assert!(c.greedy.is_feasible());
        assert!(c.gap.is_none());
    }

    #[test]
    fn test_serializes() {
        let net = line_network(100.0);
        let c = compare_methods(&net, &ExactConfig::default());
        let json = serde_json::to_string(&c).unwrap();
        let back: MethodComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(back.greedy, c.greedy);
    }
}
