//! Naive doubly recursive Fibonacci
//! The exponential call tree is the workload, so no memoisation.

use crate::bench::run_timed;
use crate::error::Result;
use crate::types::BenchmarkResult;
use std::hint::black_box;

pub const LABEL: &str = "Fibonacci";

/// `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`.
pub fn fib(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Time a single evaluation of `fib(n)`.
pub fn bench_fibonacci(n: u64) -> Result<BenchmarkResult> {
    run_timed(
        LABEL,
        || Ok(u128::from(fib(black_box(n)))),
        |value| format!("fib({}) = {}", n, value),
    )
}
