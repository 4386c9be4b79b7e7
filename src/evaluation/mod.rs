//! Tour feasibility and fuel-cost evaluation.
//!
//! [`TourEvaluator`] is the single arbiter of tour validity: every solver
//! scores candidates through it.

mod evaluator;

pub use evaluator::{LegRecord, TourEvaluation, TourEvaluator};
