//! Configuration management
//!
//! This module holds the dataset and chart settings that drive a run.
//! The embedded benchmark is the default; a TOML file and CLI
//! arguments can replace parts of it.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::chart;
use crate::core::error::{ReportError, Result};
use crate::core::types::{Dataset, MeasurementRow, embedded_rows};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Measurement rows, baseline first
    #[serde(default = "default_rows")]
    pub rows: Vec<MeasurementRow>,

    /// Chart rendering settings
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Render the chart at all
    pub enabled: bool,

    /// Image path; `.svg` selects the SVG backend, anything else PNG
    pub output: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Upper bound of the size panel's y axis
    pub size_axis_max: u32,

    /// Upper bound of the cycles panel's y axis
    pub cycles_axis_max: u32,

    pub size_title: String,

    pub cycles_title: String,
}

fn default_rows() -> Vec<MeasurementRow> {
    // An empty list is rejected later by Dataset::new
    embedded_rows().unwrap_or_default()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: PathBuf::from(chart::OUTPUT_FILE),
            width: chart::WIDTH,
            height: chart::HEIGHT,
            size_axis_max: chart::SIZE_AXIS_MAX,
            cycles_axis_max: chart::CYCLES_AXIS_MAX,
            size_title: chart::SIZE_TITLE.to_string(),
            cycles_title: chart::CYCLES_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ReportConfig = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref output) = cli_config.output {
            self.chart.output = PathBuf::from(output);
        }
        if cli_config.no_chart {
            self.chart.enabled = false;
        }
    }

    /// Build the dataset described by the configured rows
    pub fn dataset(&self) -> Result<Dataset> {
        Dataset::new(self.rows.clone())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.chart.validate()?;
        self.dataset()?;
        Ok(())
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReportError::Config(format!(
                "Chart dimensions {}x{} are invalid. Expected positive width and height.",
                self.width, self.height
            )));
        }
        if self.size_axis_max == 0 || self.cycles_axis_max == 0 {
            return Err(ReportError::Config(
                "Chart axis maxima cannot be 0.".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ReportError::Config(
                "Chart output path cannot be empty.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub config_file: Option<String>, // --config
    pub output: Option<String>,      // --output
    pub no_chart: bool,              // --no-chart
    pub verbose: bool,               // --verbose
    pub quiet: bool,                 // --quiet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.rows.len(), 11);
        assert!(config.chart.enabled);
        assert_eq!(config.chart.output, PathBuf::from("performance.png"));
        assert_eq!(config.chart.size_axis_max, 25_000);
        assert_eq!(config.chart.cycles_axis_max, 6_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
[[rows]]
name = "base"
size_bytes = 100
cycles_min = 5
cycles_max = 5

[[rows]]
name = "u32"
size_bytes = 150
cycles_min = 10
cycles_max = 20

[chart]
output = "out.svg"
"#,
        )?;

        let config = ReportConfig::load_from_file(file.path())?;
        assert_eq!(config.rows.len(), 2);
        assert_eq!(config.chart.output, PathBuf::from("out.svg"));
        assert_eq!(config.chart.width, chart::WIDTH);
        assert!(!config.dataset()?.is_tagged());

        Ok(())
    }

    #[test]
    fn test_config_without_rows_uses_embedded() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"[chart]\nenabled = false\n")?;

        let config = ReportConfig::load_from_file(file.path())?;
        assert_eq!(config.rows, embedded_rows()?);
        assert!(!config.chart.enabled);

        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = ReportConfig::load_from_file("definitely-not-here.toml");
        match result {
            Err(ReportError::Config(msg)) => assert!(msg.contains("definitely-not-here.toml")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_load_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"[[rows]\nname = ")?;

        let result = ReportConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ReportError::TomlParsing(_))));

        Ok(())
    }

    #[test]
    fn test_config_load_rejects_mixed_tags() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
[[rows]]
name = "base"
size_bytes = 100
cycles_min = 1
cycles_max = 1

[[rows]]
name = "a"
library = "tfmt"
size_bytes = 110
cycles_min = 1
cycles_max = 2

[[rows]]
name = "b"
size_bytes = 120
cycles_min = 1
cycles_max = 2
"#,
        )?;

        let result = ReportConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ReportError::InvalidDataset(_))));

        Ok(())
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = ReportConfig::default();
        let cli_config = CliConfig {
            output: Some("bench.png".to_string()),
            no_chart: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.chart.output, PathBuf::from("bench.png"));
        assert!(!config.chart.enabled);
    }

    #[test]
    fn test_config_merge_with_empty_cli_keeps_defaults() {
        let mut config = ReportConfig::default();
        config.merge_with_cli(&CliConfig::default());
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_chart_validation() {
        let zero_width = ChartConfig {
            width: 0,
            ..Default::default()
        };
        assert!(zero_width.validate().is_err());

        let zero_axis = ChartConfig {
            cycles_axis_max: 0,
            ..Default::default()
        };
        assert!(zero_axis.validate().is_err());

        let empty_output = ChartConfig {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert!(empty_output.validate().is_err());
    }
}
