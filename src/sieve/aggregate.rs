//! Statistics derived from the combined primality table

/// Number of largest primes reported
pub const TOP_PRIMES: usize = 10;

/// Aggregate statistics over the primes found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeStats {
    /// Number of primes up to the requested limit
    pub count: u64,

    /// Sum of all primes up to the requested limit
    pub sum: u64,

    /// The largest primes found, ascending; shorter than [`TOP_PRIMES`] when
    /// fewer primes exist in range
    pub largest: Vec<usize>,
}

/// Scan the combined table and produce count, sum, and the largest primes.
///
/// Only indices up to `requested_limit` count: the table extends two past it
/// for the sieve's look-ahead, and anything flagged in the pad is ignored.
pub fn aggregate(combined: &[bool], requested_limit: usize) -> PrimeStats {
    debug_assert!(requested_limit < combined.len());

    let mut count = 0u64;
    let mut sum = 0u64;
    for i in 0..=requested_limit {
        if combined[i] {
            count += 1;
            sum += i as u64;
        }
    }

    let mut largest: Vec<usize> = (1..=requested_limit)
        .rev()
        .filter(|&i| combined[i])
        .take(TOP_PRIMES)
        .collect();
    largest.reverse();

    PrimeStats {
        count,
        sum,
        largest,
    }
}
