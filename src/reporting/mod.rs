//! Reporting
//!
//! This module renders normalized measurements as a text table and
//! a bar chart, and holds the structured logging helpers.

pub mod chart;
pub mod logging;
pub mod table;

// Re-export commonly used items
pub use chart::render_chart;
pub use table::{TableLayout, TableReporter};
