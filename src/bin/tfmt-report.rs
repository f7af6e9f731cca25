use clap::Parser;
use tfmt_report::config::{CliConfig, ReportConfig};
use tfmt_report::pipeline::run_report;
use tfmt_report::reporting::logging;
use tfmt_report::ui::{Cli, cli_to_config};

fn main() {
    let cli = Cli::parse();

    match run_report_logic(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main report logic extracted from main() for testing
pub fn run_report_logic(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    logging::init_logger(cli_config.verbose, cli_config.quiet);

    let config = load_and_merge_config(&cli_config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&config, &mut out).inspect_err(|e| {
        logging::log_error("Report failed", Some(e));
    })?;

    Ok(())
}

/// Load the configuration file if one was given and apply CLI overrides
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    let mut config = if let Some(ref config_file) = cli_config.config_file {
        ReportConfig::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        ReportConfig::default()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
