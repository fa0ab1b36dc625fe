//! Full benchmark suite
//! Runs every kernel with its configured input, in a fixed order

use crate::config::BenchConfig;
use crate::error::Result;
use crate::kernels::{bench_factorial, bench_fibonacci, bench_primes, bench_sum};
use crate::types::BenchmarkResult;
use tracing::info;

/// Run all benchmarks
pub fn run_all_benchmarks(config: &BenchConfig) -> Result<Vec<BenchmarkResult>> {
    info!("Running benchmark suite");

    let results = vec![
        // Recursion
        bench_factorial(config.factorial.n, config.factorial.iterations)?,
        bench_fibonacci(config.fibonacci.n)?,
        // Loops
        bench_primes(config.primes.limit)?,
        bench_sum(config.sum.n)?,
    ];

    for r in &results {
        info!(label = %r.label, elapsed_seconds = r.elapsed_seconds, "benchmark complete");
    }

    Ok(results)
}

/// Summed wall-clock time across `results`
pub fn total_seconds(results: &[BenchmarkResult]) -> f64 {
    results.iter().map(|r| r.elapsed_seconds).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BenchConfig {
        let mut config = BenchConfig::default();
        config.factorial.iterations = 10;
        config.fibonacci.n = 15;
        config.primes.limit = 100;
        config.sum.n = 10;
        config
    }

    #[test]
    fn test_suite_order_and_values() {
        let results = run_all_benchmarks(&small_config()).unwrap();

        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Factorial", "Fibonacci", "Prime Sieve", "Sum"]);

        let values: Vec<u128> = results.iter().map(|r| r.computed_value).collect();
        assert_eq!(values, [2_432_902_008_176_640_000, 610, 25, 55]);
    }

    #[test]
    fn test_suite_stops_on_overflow() {
        let mut config = small_config();
        config.factorial.n = 21;

        assert!(run_all_benchmarks(&config).is_err());
    }

    #[test]
    fn test_total_seconds() {
        let results = run_all_benchmarks(&small_config()).unwrap();
        let total = total_seconds(&results);

        assert!(total >= 0.0);
        assert!(total.is_finite());
        assert_eq!(total_seconds(&[]), 0.0);
    }
}
