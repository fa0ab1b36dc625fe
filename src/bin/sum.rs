//! Summation benchmark

use numbench::kernels::bench_sum;
use numbench::telemetry::init_logging;
use numbench::BenchConfig;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();
    init_logging(&config.logging)?;

    let result = bench_sum(config.sum.n)?;
    println!("{}", result);

    Ok(())
}
