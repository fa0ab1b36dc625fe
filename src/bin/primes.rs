//! Prime counting benchmark

use numbench::kernels::bench_primes;
use numbench::telemetry::init_logging;
use numbench::BenchConfig;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::default();
    init_logging(&config.logging)?;

    let result = bench_primes(config.primes.limit)?;
    println!("{}", result);

    Ok(())
}
