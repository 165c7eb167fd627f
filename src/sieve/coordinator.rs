//! Sieve coordinator - orchestrates the parallel sieve phase
//!
//! The coordinator is responsible for:
//! - Spawning one worker per partition
//! - Joining every worker before any partial buffer is consumed
//! - Timing the parallel phase
//! - Running the sequential merge

use crate::config::SieveConfig;
use crate::error::Result;
use crate::sieve::merge::merge;
use crate::sieve::partition::SieveRange;
use crate::sieve::worker::SieveWorker;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a completed sieve run
#[derive(Debug)]
pub struct SieveResult {
    /// Combined primality table, indexed by candidate value
    pub table: Vec<bool>,

    /// Candidate range the table covers
    pub range: SieveRange,

    /// Duration of the parallel phase (first spawn to last join)
    pub duration: Duration,
}

/// Coordinates the parallel sieve
pub struct SieveCoordinator {
    range: SieveRange,
    worker_count: usize,
}

impl SieveCoordinator {
    /// Create a coordinator from validated configuration
    pub fn new(config: &SieveConfig) -> Self {
        Self {
            range: SieveRange::new(config.limit),
            worker_count: config.worker_count,
        }
    }

    /// Run the sieve: spawn workers, join them all, merge their buffers.
    ///
    /// Workers are spawned with distinct 1-based indices and each returns its
    /// buffer by value, so the only shared state is the immutable range. The
    /// join loop runs in index order, which keeps the partial buffers aligned
    /// with the slots the merge expects.
    pub fn run(self) -> Result<SieveResult> {
        info!(
            limit = self.range.requested_limit(),
            workers = self.worker_count,
            "Starting sieve"
        );

        let start = Instant::now();

        let mut workers = Vec::with_capacity(self.worker_count);
        for index in 1..=self.worker_count {
            workers.push(SieveWorker::spawn(index, self.worker_count, self.range)?);
        }
        debug!(count = workers.len(), "Workers spawned");

        let mut partials = Vec::with_capacity(self.worker_count);
        for worker in workers {
            partials.push(worker.join()?);
        }

        let duration = start.elapsed();
        debug!(elapsed_ms = duration.as_millis() as u64, "Workers joined");

        let table = merge(&partials, self.range);

        info!(
            duration_ms = duration.as_millis() as u64,
            "Sieve completed"
        );

        Ok(SieveResult {
            table,
            range: self.range,
            duration,
        })
    }
}
