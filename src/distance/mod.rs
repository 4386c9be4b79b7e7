//! Distance and congestion matrices.
//!
//! Provides the dense base distance matrix and the congestion factors that
//! scale it into adjusted distances.

mod congestion;
mod matrix;

pub use congestion::{CongestionMatrix, CongestionRange};
pub use matrix::DistanceMatrix;
