//! Command-line interface components.

use crate::config::AnalyzerConfig;
use crate::describer::HeaderDescriber;
use crate::error::{AnalyzerError, Result};
use crate::header::read_csv_headers;
use crate::models::{AnalysisSummary, HeaderDescriptions};
use crate::report::{print_results, save_results};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "csv_header_analyzer")]
#[command(about = "Describe each column of a CSV file from its header row")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example: csv_header_analyzer sample_data.csv")]
pub struct Args {
    /// Path to the CSV file whose first row holds the column names
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Report file to write (overwritten if it exists)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print results to the console only, without writing a report file
    #[arg(long)]
    pub no_save: bool,

    /// Suppress progress messages (results are still printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Determine the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the run configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> AnalyzerConfig {
        let mut config = AnalyzerConfig::default();

        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        if self.no_save {
            config = config.without_report();
        }
        if self.quiet {
            config = config.quiet();
        }

        config
    }
}

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub results: HeaderDescriptions,
    pub summary: AnalysisSummary,
    /// Report path when the file was written successfully
    pub report_path: Option<PathBuf>,
}

/// Set up structured logging to stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_header_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| AnalyzerError::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run a full analysis for the parsed arguments
pub fn run(args: &Args) -> Result<RunOutcome> {
    let config = args.to_config();
    config.validate()?;
    analyze_file(&args.csv_file, &config)
}

/// Read headers from `csv_file`, describe them, print and save the results.
///
/// Input errors are fatal. A failed report write is logged and reported
/// on stderr but the run still succeeds, since results were already printed.
pub fn analyze_file(csv_file: &Path, config: &AnalyzerConfig) -> Result<RunOutcome> {
    if !csv_file.exists() {
        return Err(AnalyzerError::InputNotFound {
            path: csv_file.to_path_buf(),
        });
    }

    progress(config, "Initializing CSV Header Analyzer...".bright_yellow());
    let describer = HeaderDescriber::new();
    info!("Loaded {} description patterns", describer.pattern_count());

    progress(
        config,
        format!("Reading headers from: {}", csv_file.display()).bright_cyan(),
    );
    let headers = read_csv_headers(csv_file)?;

    progress(
        config,
        format!("Found {} headers: {}", headers.len(), headers.join(", ")).normal(),
    );

    progress(config, "Analyzing headers...".bright_yellow());
    let results = describer.analyze(&headers);
    if results.is_empty() {
        return Err(AnalyzerError::NoHeaders {
            path: csv_file.to_path_buf(),
        });
    }

    let summary = results.summary();
    info!(
        "Described {} headers: {} exact, {} substring, {} fallback",
        summary.total(),
        summary.exact_matches,
        summary.substring_matches,
        summary.fallbacks
    );

    print_results(&results, config);

    let report_path = if config.save_report {
        match save_results(&results, &config.output_path, config.report_width) {
            Ok(path) => {
                progress(
                    config,
                    format!("\nResults saved to: {}", path.display()).bright_green(),
                );
                Some(path)
            }
            Err(e) => {
                warn!("Continuing without report file");
                eprintln!("{} {}", "Error saving results to file:".bright_red(), e);
                None
            }
        }
    } else {
        debug!("Report file disabled");
        None
    };

    progress(config, "\nAnalysis complete!".bright_green().bold());

    Ok(RunOutcome {
        results,
        summary,
        report_path,
    })
}

fn progress(config: &AnalyzerConfig, message: ColoredString) {
    if config.show_progress {
        println!("{}", message);
    }
}
