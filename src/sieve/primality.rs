//! Trial-division primality test
//!
//! The test relies on the caller only ever passing numbers of the form 6k±1:
//! divisibility by 2 and 3 is never checked, which is what makes the divisor
//! stride of 6 sound.

/// Returns true when `n` is prime.
///
/// Only defined for `n >= 5`. Callers must seed 2 and 3 themselves and never
/// pass 0, 1, 4, or any even number.
///
/// Tests divisors i and i+2 for i = 5, 11, 17, ... while i*i <= n. Every
/// composite n has a divisor no greater than sqrt(n), and divisors of the
/// form 6k and 6k±2 and 6k+3 are ruled out by n itself being 6k±1.
pub fn is_prime(n: usize) -> bool {
    debug_assert!(n >= 5, "is_prime is only defined for n >= 5");

    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference test: plain trial division by every integer up to sqrt(n)
    fn is_prime_reference(n: usize) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_matches_reference_for_candidates() {
        // Only 6k±1 numbers are ever passed in by the partition walk
        for k in 1..=2_000 {
            for n in [6 * k - 1, 6 * k + 1] {
                assert_eq!(
                    is_prime(n),
                    is_prime_reference(n),
                    "disagreement at n={n}"
                );
            }
        }
    }

    #[test]
    fn test_small_primes() {
        for n in [5, 7, 11, 13, 17, 19, 23, 29, 31] {
            assert!(is_prime(n), "{n} should be prime");
        }
    }

    #[test]
    fn test_small_composites() {
        // All of 6k±1 form, so within the function's contract
        for n in [25, 35, 49, 55, 65, 77, 91, 95, 119, 121, 125] {
            assert!(!is_prime(n), "{n} should be composite");
        }
    }

    #[test]
    fn test_large_known_values() {
        assert!(is_prime(999_983));
        assert!(is_prime(1_000_003));
        assert!(!is_prime(1_000_001)); // 101 * 9901
    }
}
