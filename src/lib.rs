//! prime-stride - Parallel Trial-Division Prime Sieve
//!
//! Computes all primes up to a configurable limit with one trial-division
//! worker per partition, then reports count, sum, and the ten largest primes
//! to a plain-text file.
//!
//! # Features
//!
//! - **Zero-coordination parallelism**: candidates of the form 6k±1 are
//!   interleaved across workers by a fixed stride, so workers share nothing
//!   but an immutable range and never touch a lock or atomic.
//!
//! - **Deterministic merge**: the merge re-derives each worker's stride and
//!   reads every position from exactly one private buffer, so the final
//!   prime set is identical for any worker count.
//!
//! - **Plain-text report**: execution time, prime count, prime sum, and the
//!   ten largest primes, written in one shot at the end of the run.
//!
//! # Example
//!
//! ```bash
//! # Default: primes up to 100,000,000, one worker per core
//! prime-stride
//!
//! # Small run with explicit worker count and output path
//! prime-stride 1000000 -w 8 -o primes.txt
//! ```

pub mod config;
pub mod error;
pub mod progress;
pub mod report;
pub mod sieve;

pub use config::{CliArgs, SieveConfig};
pub use error::{Result, SieveError};
pub use sieve::{aggregate, PrimeStats, SieveCoordinator, SieveResult};
