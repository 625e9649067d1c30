//! policy-runner: one-shot synthesizer + aggregation run.
//!
//! Usage:
//!   policy-runner
//!   policy-runner --count 1000 --seed 42
//!   policy-runner --count 250 --db policies.db --json

use anyhow::Result;
use policydata_core::{
    config::GeneratorConfig, generator::RecordGenerator, rng::PolicyRng, store::PolicyStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = GeneratorConfig::default();
    let count = parse_arg(&args, "--count", config.record_count);
    let seed: Option<u64> = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse().ok());
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let json_output = args.iter().any(|a| a == "--json");

    let mut rng = match seed {
        Some(s) => PolicyRng::seeded(s),
        None => PolicyRng::from_entropy(),
    };

    let mut store = if db == ":memory:" {
        PolicyStore::in_memory()?
    } else {
        PolicyStore::open(db)?
    };
    store.migrate()?;

    let generator = RecordGenerator::new(config);
    let records = generator.generate(count, &mut rng)?;
    store.insert_policies(&records)?;
    log::info!("loaded {} records into {db}", records.len());

    let averages = store.avg_coverage_by_type()?;

    if json_output {
        println!("{}", serde_json::to_string(&averages)?);
        return Ok(());
    }

    println!("=== AVERAGE COVERAGE BY POLICY TYPE ===");
    println!("  records: {}", records.len());
    if averages.is_empty() {
        println!("  (no rows)");
    }
    for row in &averages {
        println!("  {:<16} {:>12.2}", row.policy_type, row.avg_coverage);
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
