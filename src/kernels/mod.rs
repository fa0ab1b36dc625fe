//! Numeric kernels and their benchmark entry points

pub mod factorial;
pub mod fibonacci;
pub mod primes;
pub mod sum;

pub use factorial::{bench_factorial, factorial};
pub use fibonacci::{bench_fibonacci, fib};
pub use primes::{bench_primes, count_primes, is_prime};
pub use sum::{bench_sum, sum_to_n};
