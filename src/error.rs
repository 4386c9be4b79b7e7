//! Error types.
//!
//! Configuration problems are rejected when a model is built. Infeasible
//! tours are not errors; they are reported through
//! [`TourEvaluation`](crate::evaluation::TourEvaluation) and
//! [`SolveOutcome`](crate::models::SolveOutcome).

use thiserror::Error;

/// Invalid model or solver configuration, raised at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("network needs at least {min} sites (depot included), got {found}")]
    TooFewSites { found: usize, min: usize },
    #[error("matrix must be square: {rows} rows but row {row} has {len} entries")]
    NonSquareMatrix { rows: usize, row: usize, len: usize },
    #[error("matrix data has {len} entries, expected {expected}")]
    WrongDataLength { len: usize, expected: usize },
    #[error("matrix is not symmetric at ({i}, {j}): {a} != {b}")]
    AsymmetricMatrix { i: usize, j: usize, a: f64, b: f64 },
    #[error("negative distance {value} at ({i}, {j})")]
    NegativeDistance { i: usize, j: usize, value: f64 },
    #[error("non-zero diagonal distance {value} at site {site}")]
    NonZeroDiagonal { site: usize, value: f64 },
    #[error("non-finite value at ({i}, {j})")]
    NonFiniteValue { i: usize, j: usize },
    #[error("{what} has {found} sites, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        found: usize,
        expected: usize,
    },
    #[error("invalid congestion range [{min}, {max}]")]
    InvalidCongestionRange { min: f64, max: f64 },
    #[error("congestion factor {value} at ({i}, {j}) outside [{min}, {max}]")]
    CongestionOutOfRange {
        i: usize,
        j: usize,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("generation area half-width must be non-negative and finite, got {0}")]
    InvalidArea(f64),
    #[error("fuel coefficient `{name}` must be non-negative and finite, got {value}")]
    NegativeCoefficient { name: &'static str, value: f64 },
    #[error("vehicle parameter `{name}` must be non-negative and finite, got {value}")]
    InvalidVehicle { name: &'static str, value: f64 },
    #[error("per-stop demand must be non-negative and finite, got {0}")]
    NegativeDemand(f64),
    #[error("total demand {total} exceeds vehicle max load {max_load}")]
    DemandExceedsCapacity { total: f64, max_load: f64 },
    #[error("genetic parameter `{name}` is invalid: {reason}")]
    InvalidGeneticParameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Failure to look up network data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    #[error("site {site} is out of range (network has {num_sites} sites)")]
    SiteOutOfRange { site: usize, num_sites: usize },
}

/// Solver refusal, raised before any work begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("exact enumeration refused: {stops} stops exceeds the ceiling of {max}")]
    TooManyStops { stops: usize, max: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let e = ConfigError::DemandExceedsCapacity {
            total: 3000.0,
            max_load: 2500.0,
        };
        assert_eq!(
            e.to_string(),
            "total demand 3000 exceeds vehicle max load 2500"
        );

        let e = SolveError::TooManyStops { stops: 11, max: 10 };
        assert!(e.to_string().contains("11 stops"));
    }

    #[test]
    fn test_config_error_converts() {
        let e: SolveError = ConfigError::NegativeDemand(-1.0).into();
        assert!(matches!(e, SolveError::Config(ConfigError::NegativeDemand(_))));
    }
}
