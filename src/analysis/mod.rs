//! Baseline normalization and series grouping
//!
//! Turns raw measurements into baseline-relative deltas and lays
//! them out per library for charting.

pub mod grouping;
pub mod normalizer;

pub use grouping::GroupedSeries;
pub use normalizer::normalize;
