//! Factorial benchmark

use numbench::kernels::bench_factorial;
use numbench::telemetry::init_logging;
use numbench::BenchConfig;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();
    init_logging(&config.logging)?;

    let result = bench_factorial(config.factorial.n, config.factorial.iterations)?;
    println!("{}", result);

    Ok(())
}
