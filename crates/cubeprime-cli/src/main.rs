#![doc = include_str!("../README.md")]

mod config;
mod input;
mod output;
mod telemetry;

use clap::Parser;
use config::{CliArgs, RunConfig};
use cubeprime::{Sieve, WorkDistributor};
use std::io;
use std::time::Instant;
use telemetry::init_telemetry;

// The sieve alone is a ~120 MB allocation; mimalloc keeps the per-worker
// buffers cheap alongside it.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = RunConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let range = input::read_range(&config, &mut io::stdin().lock(), &mut io::stdout())?;

    let started = Instant::now();
    let sieve = Sieve::new(config.sieve_limit);
    tracing::info!(
        "Sieve up to {} built in {:?} ({} primes)",
        sieve.limit(),
        started.elapsed(),
        sieve.primes().len()
    );

    let searching = Instant::now();
    let results = WorkDistributor::new(&sieve)
        .workers(config.workers)
        .run(range)?;
    tracing::info!(
        "Searched {}..={} in {:?}: {} found, {} not found",
        range.start(),
        range.end(),
        searching.elapsed(),
        results.found(),
        results.not_found()
    );

    output::write_results(&config.output, &results)?;
    println!("{}", output::summary(&config.output, &results));
    Ok(())
}

fn log_startup_info(config: &RunConfig) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting cube search with full config: {:#?}", config);
    } else {
        tracing::info!("Starting cube search with {} workers", config.workers);
    }
}
