//! # Logging
//!
//! The binary always installs a `tracing_subscriber` registry with:
//!
//! - an [`EnvFilter`] defaulting to `info` (override with `RUST_LOG`, e.g.
//!   `RUST_LOG=cubeprime=debug` to see per-worker counts), and
//! - a `fmt` layer writing to **stderr**, so prompts and the final summary on
//!   stdout stay clean.
//!
//! Events emitted by the `cubeprime` library (sieve construction, worker
//! start/stop, search totals) flow through the same subscriber because the
//! binary enables the library's `tracing` feature.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .try_init()?;
    Ok(())
}
