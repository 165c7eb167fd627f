//! Worker thread wrapper for the parallel sieve phase
//!
//! Each worker runs one partition to completion on its own OS thread and
//! hands its private buffer back by value through the join handle. Nothing is
//! shared between workers during the parallel phase, so no locks or atomics
//! are needed.

use crate::error::WorkerError;
use crate::sieve::partition::{run_partition, PartialResult, SieveRange};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// A spawned sieve worker, joined exactly once
pub struct SieveWorker {
    /// 1-based worker index, doubling as the partition index
    index: usize,

    /// Thread handle, taken on join
    handle: Option<JoinHandle<PartialResult>>,
}

impl SieveWorker {
    /// Spawn a worker for partition `index` of `worker_count`
    pub fn spawn(
        index: usize,
        worker_count: usize,
        range: SieveRange,
    ) -> Result<Self, WorkerError> {
        let handle = thread::Builder::new()
            .name(format!("sieve-{}", index))
            .spawn(move || {
                debug!(worker = index, "Worker started");
                let flags = run_partition(index, worker_count, range);
                debug!(worker = index, "Worker finished");
                flags
            })
            .map_err(|e| WorkerError::SpawnFailed {
                index,
                reason: e.to_string(),
            })?;

        Ok(Self {
            index,
            handle: Some(handle),
        })
    }

    /// Partition index this worker owns
    pub fn index(&self) -> usize {
        self.index
    }

    /// Wait for the worker and take its private buffer
    pub fn join(mut self) -> Result<PartialResult, WorkerError> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| WorkerError::Panicked { index: self.index }),
            None => Err(WorkerError::Panicked { index: self.index }),
        }
    }
}
