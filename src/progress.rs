//! Console output for the sieve run
//!
//! Provides a spinner for the parallel phase plus the styled header and
//! summary, using indicatif and console.

use crate::report::format_elapsed;
use crate::sieve::PrimeStats;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the workers run
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();

        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );

        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Set a status message
    pub fn set_status(&self, status: &str) {
        self.bar.set_message(status.to_string());
    }

    /// Finish and clear the spinner
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let bytes: Vec<_> = s.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .rev()
                .map(|&b| b as char)
                .collect::<String>()
        })
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}

/// Print a header at the start of the run
pub fn print_header(limit: usize, workers: usize, output: &str) {
    println!();
    println!(
        "{} {}",
        style("prime-stride").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    println!("  {} {}", style("Limit:").bold(), format_number(limit as u64));
    println!("  {} {}", style("Workers:").bold(), workers);
    println!("  {} {}", style("Output:").bold(), output);
    println!();
}

/// Print a summary of the sieve results
pub fn print_summary(stats: &PrimeStats, duration: Duration, report_path: &str) {
    println!();
    println!("{}", style("Sieve Complete").green().bold());
    println!("{}", style("─".repeat(50)).dim());
    println!(
        "  {} {}",
        style("Primes Found:").bold(),
        format_number(stats.count)
    );
    println!(
        "  {} {}",
        style("Sum of Primes:").bold(),
        format_number(stats.sum)
    );
    if let Some(largest) = stats.largest.last() {
        println!(
            "  {} {}",
            style("Largest Prime:").bold(),
            format_number(*largest as u64)
        );
    }
    println!(
        "  {} {}",
        style("Duration:").bold(),
        format_elapsed(duration)
    );
    println!("  {} {}", style("Report:").bold(), report_path);
    println!();
}
