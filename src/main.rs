//! prime-stride - Parallel Trial-Division Prime Sieve
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use prime_stride::config::{CliArgs, SieveConfig};
use prime_stride::progress::{print_header, print_summary, ProgressReporter};
use prime_stride::report::write_report;
use prime_stride::sieve::{aggregate, SieveCoordinator};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Setup logging
    setup_logging(args.verbose)?;

    // Validate and create config
    let config = SieveConfig::from_args(args).context("Invalid configuration")?;

    // Print header
    if config.show_progress {
        print_header(
            config.limit,
            config.worker_count,
            &config.output_path.display().to_string(),
        );
    }

    // Run the parallel sieve
    let progress = if config.show_progress {
        Some(ProgressReporter::new())
    } else {
        None
    };

    if let Some(ref p) = progress {
        p.set_status("Sieving...");
    }

    let result = SieveCoordinator::new(&config)
        .run()
        .context("Sieve failed")?;

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    // Derive statistics from the combined table
    let stats = aggregate(&result.table, result.range.requested_limit());

    // Write the report
    write_report(&config.output_path, &stats, result.duration).with_context(|| {
        format!(
            "Failed to write report to '{}'",
            config.output_path.display()
        )
    })?;

    info!(
        report = %config.output_path.display(),
        primes = stats.count,
        "Report written"
    );

    // Print summary
    if config.show_progress {
        print_summary(
            &stats,
            result.duration,
            &config.output_path.display().to_string(),
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("prime_stride=debug,warn")
    } else {
        EnvFilter::new("prime_stride=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
