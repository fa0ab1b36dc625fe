//! Recursive factorial kernel

use crate::bench::run_timed;
use crate::error::{KernelError, Result};
use crate::types::BenchmarkResult;
use std::hint::black_box;

pub const LABEL: &str = "Factorial";

/// Largest `n` whose factorial fits in `u64`
pub const MAX_INPUT: u64 = 20;

/// `n!` by direct recursion. Errors once the product leaves `u64` (n > 20).
pub fn factorial(n: u64) -> Result<u64> {
    // Rejected up front so oversized inputs never recurse
    if n > MAX_INPUT {
        return Err(KernelError::overflow("factorial", n));
    }
    if n <= 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(n)
        .ok_or_else(|| KernelError::overflow("factorial", n))
}

/// Time `iterations` repeated evaluations of `factorial(n)`, keeping the last.
pub fn bench_factorial(n: u64, iterations: u64) -> Result<BenchmarkResult> {
    run_timed(
        LABEL,
        || {
            let mut last = 0;
            for _ in 0..iterations {
                last = factorial(black_box(n))?;
            }
            Ok(u128::from(last))
        },
        |value| format!("factorial({}) x {} = {}", n, iterations, value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
    }

    #[test]
    fn test_factorial_20() {
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_21_overflows() {
        assert_eq!(factorial(21), Err(KernelError::overflow("factorial", 21)));
    }

    #[test]
    fn test_huge_input_fails_without_recursing() {
        assert_eq!(
            factorial(10_000_000),
            Err(KernelError::overflow("factorial", 10_000_000))
        );
        assert_eq!(factorial(u64::MAX), Err(KernelError::overflow("factorial", u64::MAX)));
    }

    #[test]
    fn test_bench_huge_input_is_an_error() {
        assert_eq!(
            bench_factorial(10_000_000, 1).unwrap_err(),
            KernelError::overflow("factorial", 10_000_000)
        );
    }

    #[test]
    fn test_bench_reports_last_value() {
        let result = bench_factorial(20, 10).unwrap();

        assert_eq!(result.label, "Factorial");
        assert_eq!(result.computed_value, 2_432_902_008_176_640_000);
        assert_eq!(result.description, "factorial(20) x 10 = 2432902008176640000");
    }

    #[test]
    fn test_bench_with_zero_iterations() {
        let result = bench_factorial(20, 0).unwrap();
        assert_eq!(result.computed_value, 0);
    }
}
