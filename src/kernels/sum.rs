//! Iterative summation

use crate::bench::run_timed;
use crate::error::{KernelError, Result};
use crate::types::BenchmarkResult;
use std::hint::black_box;

pub const LABEL: &str = "Sum";

/// Sum of `1..=n` by accumulation. The loop is the measured workload.
pub fn sum_to_n(n: u64) -> Result<u64> {
    let mut total = 0u64;
    for i in 1..=n {
        total = total
            .checked_add(i)
            .ok_or_else(|| KernelError::overflow("sum_to_n", n))?;
    }
    Ok(total)
}

/// Time one `sum_to_n(n)` pass.
pub fn bench_sum(n: u64) -> Result<BenchmarkResult> {
    run_timed(
        LABEL,
        || sum_to_n(black_box(n)).map(u128::from),
        |value| format!("sum(1..{}) = {}", n, value),
    )
}
