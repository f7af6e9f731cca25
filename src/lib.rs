//! Flash size and cycle comparison of `tfmt` against `core::fmt`.
//!
//! Measurements are normalized against a baseline row, printed as an
//! aligned table and, when rows carry a library tag, drawn as a
//! two-panel bar chart.

pub mod analysis;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use crate::analysis::{GroupedSeries, normalize};
pub use crate::config::{ChartConfig, CliConfig, ReportConfig};
pub use crate::core::{Dataset, MeasurementRow, NormalizedRow, ReportError, Result};
pub use crate::pipeline::{ReportOutcome, run_report};
