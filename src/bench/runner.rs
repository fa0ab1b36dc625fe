//! Timed benchmark runner
//! Wall-clock measurement around a single unit of work

use crate::error::Result;
use crate::types::BenchmarkResult;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Run `work` once between two monotonic timestamps.
///
/// `describe` renders the computed value into the description line. Errors
/// from `work` propagate without a result being produced.
pub fn run_timed<F, D>(label: &str, work: F, describe: D) -> Result<BenchmarkResult>
where
    F: FnOnce() -> Result<u128>,
    D: FnOnce(u128) -> String,
{
    debug!(label, "starting benchmark");

    let start = Instant::now();
    let value = black_box(work())?;
    let elapsed = start.elapsed();

    let result = BenchmarkResult {
        label: label.to_string(),
        description: describe(value),
        computed_value: value,
        elapsed_seconds: elapsed.as_secs_f64(),
    };

    debug!(
        label,
        value = %result.computed_value,
        elapsed_ns = elapsed.as_nanos() as u64,
        "benchmark finished"
    );

    Ok(result)
}
