//! Prime counting by odd trial division

use crate::bench::run_timed;
use crate::error::Result;
use crate::types::BenchmarkResult;
use std::hint::black_box;

pub const LABEL: &str = "Prime Sieve";

/// Trial division by odd divisors up to `sqrt(n)` inclusive.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3u64;
    // divisor <= n / divisor avoids squaring past u64::MAX
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Number of primes in `[2, limit]`.
pub fn count_primes(limit: u64) -> u64 {
    (2..=limit).filter(|&n| is_prime(n)).count() as u64
}

/// Time one `count_primes(limit)` pass.
pub fn bench_primes(limit: u64) -> Result<BenchmarkResult> {
    run_timed(
        LABEL,
        || Ok(u128::from(count_primes(black_box(limit)))),
        |value| format!("Primes up to {}: {}", limit, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_edges() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_is_prime_large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn test_count_primes() {
        assert_eq!(count_primes(0), 0);
        assert_eq!(count_primes(1), 0);
        assert_eq!(count_primes(2), 1);
        assert_eq!(count_primes(100), 25);
        assert_eq!(count_primes(10_000), 1_229);
    }

    #[test]
    fn test_bench_description() {
        let result = bench_primes(10_000).unwrap();

        assert_eq!(result.label, "Prime Sieve");
        assert_eq!(result.computed_value, 1_229);
        assert_eq!(result.description, "Primes up to 10000: 1229");
    }
}
