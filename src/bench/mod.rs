//! Benchmark module
//! Wall-clock timing harness and the full suite

pub mod runner;
pub mod suite;

pub use runner::run_timed;
pub use suite::{run_all_benchmarks, total_seconds};
