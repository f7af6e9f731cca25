// Command-line interface definitions and parsing for tfmt-report

use crate::config::CliConfig;
use clap::Parser;

/// Print the tfmt vs core::fmt size/cycle comparison and render its chart
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // Input
    /// Load measurements and chart settings from a TOML file
    #[arg(short = 'c', long, value_name = "FILE", help_heading = "Input")]
    pub config: Option<String>,

    // Chart
    /// Chart image path (default: performance.png; .svg writes SVG)
    #[arg(short = 'o', long, value_name = "PATH", help_heading = "Chart")]
    pub output: Option<String>,

    /// Print the table only
    #[arg(long, help_heading = "Chart")]
    pub no_chart: bool,

    // Output & Verbosity
    /// Suppress all logging
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,
}

/// Convert parsed CLI arguments into CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        config_file: cli.config.clone(),
        output: cli.output.clone(),
        no_chart: cli.no_chart,
        verbose: cli.verbose,
        quiet: cli.quiet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_to_config_default() {
        let cli = Cli::try_parse_from(["tfmt-report"]).unwrap();

        let config = cli_to_config(&cli);

        assert_eq!(config.config_file, None);
        assert_eq!(config.output, None);
        assert!(!config.no_chart);
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_cli_to_config_all_flags() {
        let cli = Cli::try_parse_from([
            "tfmt-report",
            "--config",
            "bench.toml",
            "-o",
            "out.svg",
            "--no-chart",
            "-v",
            "-q",
        ])
        .unwrap();

        let config = cli_to_config(&cli);

        assert_eq!(config.config_file.as_deref(), Some("bench.toml"));
        assert_eq!(config.output.as_deref(), Some("out.svg"));
        assert!(config.no_chart);
        assert!(config.verbose);
        assert!(config.quiet);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tfmt-report", "data.csv"]).is_err());
    }
}
