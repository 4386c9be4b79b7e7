//! Local search operators for improving tours.
//!
//! - [`two_opt_pass`] — one best-improvement pass of fuel-aware 2-opt

mod two_opt;

pub use two_opt::two_opt_pass;
