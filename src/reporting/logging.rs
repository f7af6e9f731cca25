use crate::config::ChartConfig;
use crate::core::Dataset;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // stdout carries only the table unless verbose
    };

    let installed = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    match installed {
        Ok(()) => debug!("Logger initialized with level: {level:?}"),
        Err(e) => debug!("Logger already installed, keeping it: {e}"),
    }
}

/// Log the shape of the dataset about to be reported
pub fn log_dataset_info(dataset: &Dataset) {
    let baseline = dataset.baseline();
    info!(
        "Baseline '{}': size={} bytes, cycles={}",
        baseline.name(),
        dataset.base_size(),
        dataset.base_cycles()
    );
    info!(
        "Comparing {} row(s), library dimension: {}",
        dataset.comparisons().len(),
        if dataset.is_tagged() { "yes" } else { "no" }
    );
}

/// Log chart settings before rendering
pub fn log_chart_config(chart: &ChartConfig) {
    debug!(
        "Chart: {}x{}, size axis 0..{}, cycles axis 0..{}",
        chart.width, chart.height, chart.size_axis_max, chart.cycles_axis_max
    );
}

pub fn log_chart_written(path: &Path) {
    info!("Chart written to {}", path.display());
}

pub fn log_chart_skipped(reason: &str) {
    info!("Chart skipped: {reason}");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
