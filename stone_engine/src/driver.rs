/// Stone Engine v1 — Driver
///
/// Seeds a line of stones from decimal literals, blinks a fixed number of
/// times and reports progress, the final count and the wall-clock time.

use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{Sequence, Stone};
use crate::engine::BlinkEngine;
use crate::error::StoneError;

/// Seed of the default run.
pub const DEFAULT_STONES: [&str; 8] = ["890", "0", "1", "935698", "68001", "3441397", "7221", "27"];

/// Blink count of the default run.
pub const DEFAULT_BLINKS: usize = 75;

/// Auxiliary timing cases: `(seed, blinks)`.
pub const BENCHMARK_CASES: [(&[&str], usize); 3] = [
    (&["125", "17"], 6),
    (&["125", "17"], 10),
    (&["125", "17"], 15),
];

/// What to simulate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub stones: Vec<String>,
    pub blinks: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            stones: DEFAULT_STONES.iter().map(|s| s.to_string()).collect(),
            blinks: DEFAULT_BLINKS,
        }
    }
}

/// Result of a timed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub stone_count: usize,
    pub elapsed: Duration,
}

/// Parse one decimal stone literal.
pub fn parse_stone(literal: &str) -> Result<Stone, StoneError> {
    literal
        .parse::<u64>()
        .map(Stone)
        .map_err(|source| StoneError::Parse {
            literal: literal.to_string(),
            source,
        })
}

/// Parse a seed. Malformed literals become `0`; they are logged, never fatal.
pub fn parse_stones<S: AsRef<str>>(literals: &[S]) -> Sequence {
    literals
        .iter()
        .map(|lit| {
            parse_stone(lit.as_ref()).unwrap_or_else(|err| {
                warn!(%err, "stone literal replaced with 0");
                Stone(0)
            })
        })
        .collect()
}

/// Blink `blinks` times from `initial`, writing a progress line to `out`
/// after every fifth blink (0, 5, 10, ...). Returns the final stone count.
pub fn solve_pluto_stones<S, W>(initial: &[S], blinks: usize, out: &mut W) -> Result<usize, StoneError>
where
    S: AsRef<str>,
    W: Write,
{
    let mut engine = BlinkEngine::new(parse_stones(initial));
    let sequence = engine.try_run(blinks, |report| {
        if report.is_checkpoint() {
            writeln!(
                out,
                "Completed blink {}, current stone count: {}",
                report.blink, report.stone_count
            )?;
        }
        Ok::<(), StoneError>(())
    })?;
    Ok(sequence.len())
}

/// Timed `solve_pluto_stones` over a `RunConfig`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunOutcome, StoneError> {
    info!(stones = config.stones.len(), blinks = config.blinks, "starting run");
    let start = Instant::now();
    let stone_count = solve_pluto_stones(config.stones.as_slice(), config.blinks, out)?;
    Ok(RunOutcome {
        stone_count,
        elapsed: start.elapsed(),
    })
}

/// Final report lines: stone count and execution time.
pub fn write_summary<W: Write>(out: &mut W, outcome: &RunOutcome) -> Result<(), StoneError> {
    writeln!(out, "Test case result: {} stones", outcome.stone_count)?;
    writeln!(out, "Execution time: {} ms", format_elapsed_ms(outcome.elapsed))?;
    Ok(())
}

/// Run every case in `BENCHMARK_CASES`, writing one timing line per case.
/// Returns `(blinks, stone_count)` per case.
pub fn run_benchmark<W: Write>(out: &mut W) -> Result<Vec<(usize, usize)>, StoneError> {
    let mut results = Vec::with_capacity(BENCHMARK_CASES.len());
    for (stones, blinks) in BENCHMARK_CASES {
        let start = Instant::now();
        let count = solve_pluto_stones(stones, blinks, out)?;
        let elapsed = start.elapsed();
        writeln!(
            out,
            "Blinks: {}, Stones: {}, Time: {} ms",
            blinks,
            count,
            format_elapsed_ms(elapsed)
        )?;
        results.push((blinks, count));
    }
    Ok(results)
}

/// Milliseconds with two decimals, from whole microseconds.
pub fn format_elapsed_ms(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_micros() as f64 / 1000.0)
}
