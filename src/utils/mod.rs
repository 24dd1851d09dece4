//! Numeric utilities backing model estimation.

pub mod optimization;

pub use optimization::{nelder_mead, SimplexConfig, SimplexResult};
