//! Configuration types for prime-stride
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Maximum reasonable worker count
const MAX_WORKERS: usize = 512;

/// Smallest limit the primality test is defined for
const MIN_LIMIT: usize = 5;

/// Largest supported limit. Each worker allocates one byte per candidate, and
/// the u64 prime-sum accumulator must stay clear of overflow; the sum of all
/// primes below 2e9 is well under u64::MAX.
const MAX_LIMIT: usize = 2_000_000_000;

/// Parallel trial-division prime sieve
#[derive(Parser, Debug, Clone)]
#[command(
    name = "prime-stride",
    version,
    about = "Finds all primes up to a limit using partitioned worker threads",
    long_about = "Computes every prime up to LIMIT with one trial-division worker per\n\
                  partition, merges the per-worker results, and writes count, sum, and\n\
                  the ten largest primes to a report file.",
    after_help = "EXAMPLES:\n    \
        prime-stride 100000000 -o primes.txt\n    \
        prime-stride 1000000 -w 8 -q\n    \
        prime-stride 30 -w 4 -v"
)]
pub struct CliArgs {
    /// Inclusive upper bound for primes of interest
    #[arg(value_name = "LIMIT", default_value_t = 100_000_000)]
    pub limit: usize,

    /// Output report file, truncated at run start
    #[arg(short, long, default_value = "primes.txt", value_name = "FILE")]
    pub output: PathBuf,

    /// Number of worker threads (partitions)
    #[arg(
        short = 'w',
        long,
        default_value_t = default_workers(),
        value_name = "NUM"
    )]
    pub workers: usize,

    /// Quiet mode - suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (per-worker debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn default_workers() -> usize {
    // Trial division is CPU bound, so one worker per core
    num_cpus::get()
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct SieveConfig {
    /// Inclusive upper bound for primes of interest
    pub limit: usize,

    /// Number of worker threads
    pub worker_count: usize,

    /// Report file path
    pub output_path: PathBuf,

    /// Show progress indicator and summary
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl SieveConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Validate worker count
        if args.workers == 0 || args.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount {
                count: args.workers,
                max: MAX_WORKERS,
            });
        }

        // Validate limit
        if args.limit < MIN_LIMIT || args.limit > MAX_LIMIT {
            return Err(ConfigError::InvalidLimit {
                limit: args.limit,
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            });
        }

        // Validate output path
        if let Some(parent) = args.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ConfigError::InvalidOutputPath {
                    path: args.output.clone(),
                    reason: format!("Parent directory '{}' does not exist", parent.display()),
                });
            }
        }

        Ok(Self {
            limit: args.limit,
            worker_count: args.workers,
            output_path: args.output,
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("prime-stride").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.limit, 100_000_000);
        assert_eq!(args.output, PathBuf::from("primes.txt"));
        assert!(!args.quiet);
    }

    #[test]
    fn test_valid_config() {
        let config = SieveConfig::from_args(parse(&["1000", "-w", "4"])).unwrap();
        assert_eq!(config.limit, 1000);
        assert_eq!(config.worker_count, 4);
        assert!(config.show_progress);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let err = SieveConfig::from_args(parse(&["1000", "-w", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorkerCount { count: 0, .. }));
    }

    #[test]
    fn test_excessive_workers_rejected() {
        let err = SieveConfig::from_args(parse(&["1000", "-w", "513"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorkerCount { .. }));
    }

    #[test]
    fn test_limit_below_minimum_rejected() {
        let err = SieveConfig::from_args(parse(&["4"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit { limit: 4, .. }));
    }

    #[test]
    fn test_limit_at_minimum_accepted() {
        let config = SieveConfig::from_args(parse(&["5"])).unwrap();
        assert_eq!(config.limit, 5);
    }

    #[test]
    fn test_missing_output_parent_rejected() {
        let err =
            SieveConfig::from_args(parse(&["1000", "-o", "/no/such/dir/primes.txt"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOutputPath { .. }));
    }
}
