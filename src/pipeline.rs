//! End-to-end run: dataset, normalization, table, chart

use std::io::Write;
use std::path::PathBuf;

use crate::analysis::{GroupedSeries, normalize};
use crate::config::ReportConfig;
use crate::core::NormalizedRow;
use crate::core::error::Result;
use crate::reporting::logging;
use crate::reporting::{TableReporter, render_chart};

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub rows: Vec<NormalizedRow>,
    /// Path of the written chart, if one was rendered
    pub chart: Option<PathBuf>,
}

/// Print the table for `config` to `out` and render the chart when the
/// dataset has a library dimension and charting is enabled.
pub fn run_report<W: Write>(config: &ReportConfig, out: &mut W) -> Result<ReportOutcome> {
    let dataset = config.dataset()?;
    logging::log_dataset_info(&dataset);

    let rows = normalize(&dataset);
    TableReporter::for_dataset(&dataset).write_to(&rows, out)?;

    let chart = if !config.chart.enabled {
        logging::log_chart_skipped("disabled");
        None
    } else if !dataset.is_tagged() {
        logging::log_chart_skipped("dataset has no library dimension");
        None
    } else {
        logging::log_chart_config(&config.chart);
        let series = GroupedSeries::from_rows(&rows);
        render_chart(&series, &config.chart, &config.chart.output)?;
        logging::log_chart_written(&config.chart.output);
        Some(config.chart.output.clone())
    };

    Ok(ReportOutcome { rows, chart })
}
