//! numbench suite runner
//! Runs every benchmark; `numbench json` prints the results as JSON.

use numbench::bench::total_seconds;
use numbench::telemetry::init_logging;
use numbench::{run_all_benchmarks, BenchConfig};
use std::env;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = BenchConfig::from_env()?;
    init_logging(&config.logging)?;
    info!(?config, "Configuration loaded");

    let args: Vec<String> = env::args().collect();
    let json = match args.get(1).map(String::as_str) {
        None => false,
        Some("json") => true,
        Some(other) => anyhow::bail!("unknown argument '{}' (expected 'json')", other),
    };

    let results = run_all_benchmarks(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for r in &results {
        println!("{}\n", r);
    }
    println!("Total: {:.3}s", total_seconds(&results));

    Ok(())
}
