//! Merging per-worker partial results into the combined primality table
//!
//! The merge re-derives the exact stride each worker walked instead of
//! scanning every buffer at every index. Partitions are disjoint, so each
//! position is read from exactly one partial buffer, and the whole merge is
//! linear in the range size.

use crate::sieve::partition::{partition_bases, PartialResult, SieveRange};

/// Combine the workers' partial buffers into one authoritative table.
///
/// `partials` must be ordered by worker index (slot 0 holds worker 1's
/// buffer), which is how the coordinator collects them. 2 and 3 are seeded
/// directly after the merge; the primality test never sees them.
pub fn merge(partials: &[PartialResult], range: SieveRange) -> Vec<bool> {
    let worker_count = partials.len();
    let mut combined = vec![false; range.table_len()];

    for (slot, flags) in partials.iter().enumerate() {
        let worker_index = slot + 1;
        for n in partition_bases(worker_index, worker_count, range) {
            if flags[n - 1] {
                combined[n - 1] = true;
            }
            if flags[n + 1] {
                combined[n + 1] = true;
            }
        }
    }

    // table_len is at least 8 for any valid range
    combined[2] = true;
    combined[3] = true;

    combined
}
