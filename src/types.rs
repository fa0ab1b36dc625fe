//! Core types for benchmark reporting

use serde::Serialize;
use std::fmt;

/// Outcome of a single timed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    /// Headline name, e.g. "Fibonacci"
    pub label: String,
    /// Input and result line, e.g. "fib(35) = 9227465"
    pub description: String,
    pub computed_value: u128,
    pub elapsed_seconds: f64,
}

impl BenchmarkResult {
    /// Timing line in the fixed `Time: 0.000s` format
    pub fn time_line(&self) -> String {
        format!("Time: {:.3}s", self.elapsed_seconds)
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} Benchmark ===", self.label)?;
        writeln!(f, "{}", self.description)?;
        write!(f, "{}", self.time_line())
    }
}
