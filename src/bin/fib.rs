//! Fibonacci benchmark

use numbench::kernels::bench_fibonacci;
use numbench::telemetry::init_logging;
use numbench::BenchConfig;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();
    init_logging(&config.logging)?;

    let result = bench_fibonacci(config.fibonacci.n)?;
    println!("{}", result);

    Ok(())
}
