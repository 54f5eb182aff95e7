/// Stone Engine v1 — Entry Point
///
/// Runs the default seed for the default number of blinks and prints
/// progress, the final stone count and the execution time.

use std::io;

use anyhow::Result;
use tracing::Level;

use stone_engine::driver::{self, RunConfig};

fn init_tracing() {
    // stdout carries the report; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = RunConfig::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = driver::run(&config, &mut out)?;

    driver::write_summary(&mut out, &outcome)?;
    Ok(())
}
