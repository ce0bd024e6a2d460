//! beatscan CLI entry point
//!
//! stdout carries exactly one JSON object per invocation, either the
//! estimate or an error report. Logs go to stderr.

use beatscan::config::{Cli, Settings};
use beatscan::pipeline;
use beatscan::types::ErrorReport;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse CLI arguments; any misuse becomes the usage error report
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print_error("Usage: beatscan <audio_file>");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    init_logging(&cli);

    // Build settings from CLI
    let settings = Settings::from_cli(&cli);

    // Run the pipeline
    match pipeline::run(&settings) {
        Ok(estimate) => match serde_json::to_string(&estimate) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                print_error(format!("Failed to serialize result: {}", e));
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            print_error(e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_error(message: impl Into<String>) {
    let report = ErrorReport::new(message);
    match serde_json::to_string(&report) {
        Ok(json) => println!("{}", json),
        Err(_) => println!(r#"{{"error": "Failed to serialize error report"}}"#),
    }
}
