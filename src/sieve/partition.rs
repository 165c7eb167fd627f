//! Candidate partitioning across workers
//!
//! Every prime >= 5 has the form 6k±1, so only the two neighbors of each
//! multiple of 6 ever need testing. Worker j of W starts at 6j and strides by
//! 6W, testing the pair (n-1, n+1) at every step. The partitions are pairwise
//! disjoint and together cover every multiple of 6 below the upper limit,
//! which is what lets both the workers and the merge walk the same
//! progression without any coordination.

use crate::sieve::primality::is_prime;

/// One worker's private primality flags over the full range.
///
/// Positions not owned by the producing worker are never written and stay
/// false. Exclusively owned by its worker until handed to the merge.
pub type PartialResult = Vec<bool>;

/// The sieve's fixed candidate range.
///
/// The working upper limit is the requested limit plus 2: each step tests n+1
/// as well as n-1, so the walk may probe one pair past the requested limit.
/// The aggregation phase clips back to the requested limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveRange {
    requested_limit: usize,
    upper_limit: usize,
}

impl SieveRange {
    /// Create the range for an inclusive requested limit
    pub fn new(requested_limit: usize) -> Self {
        Self {
            requested_limit,
            upper_limit: requested_limit + 2,
        }
    }

    /// Inclusive upper bound for primes of interest
    pub fn requested_limit(&self) -> usize {
        self.requested_limit
    }

    /// Exclusive bound on partition base positions (look-ahead pad included)
    pub fn upper_limit(&self) -> usize {
        self.upper_limit
    }

    /// Length of a primality table indexed by candidate value
    pub fn table_len(&self) -> usize {
        self.upper_limit + 1
    }
}

/// Base positions (multiples of 6) owned by worker `worker_index` of
/// `worker_count`.
///
/// Worker indices are 1-based. The same progression is re-derived by the
/// merge, so the two sides agree on ownership without communicating.
pub fn partition_bases(
    worker_index: usize,
    worker_count: usize,
    range: SieveRange,
) -> impl Iterator<Item = usize> {
    debug_assert!(worker_index >= 1 && worker_index <= worker_count);
    (6 * worker_index..range.upper_limit()).step_by(6 * worker_count)
}

/// Sieve the candidates owned by one worker into a private buffer.
///
/// Writes only at the n-1 and n+1 neighbors of owned base positions; every
/// other index stays false. If the worker owns no base positions the buffer
/// comes back all-false.
pub fn run_partition(
    worker_index: usize,
    worker_count: usize,
    range: SieveRange,
) -> PartialResult {
    let mut flags = vec![false; range.table_len()];

    for n in partition_bases(worker_index, worker_count, range) {
        flags[n - 1] = is_prime(n - 1);
        flags[n + 1] = is_prime(n + 1);
    }

    flags
}
