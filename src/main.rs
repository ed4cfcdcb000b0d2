use anyhow::Context;
use clap::Parser;
use csv_header_analyzer::cli::{self, Args};
use std::process;

fn main() {
    // Usage errors exit with status 2 from clap
    let args = Args::parse();

    if let Err(error) = cli::setup_logging(&args) {
        eprintln!("Warning: {}", error);
    }

    let result = cli::run(&args)
        .with_context(|| format!("Failed to analyze headers of {}", args.csv_file.display()));

    match result {
        Ok(_outcome) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
