//! numbench
//!
//! Wall-clock microbenchmarks for small numeric kernels.
//!
//! ## Layout
//! - Bench: `run_timed` harness and the full suite
//! - Kernels: factorial, Fibonacci, prime counting, summation
//! - Config: fixed inputs, overridable for the suite runner
//! - Telemetry: stderr logging via `tracing`

pub mod bench;
pub mod config;
pub mod error;
pub mod kernels;
pub mod telemetry;
pub mod types;

pub use bench::{run_all_benchmarks, run_timed};
pub use config::BenchConfig;
pub use error::KernelError;
pub use types::BenchmarkResult;
