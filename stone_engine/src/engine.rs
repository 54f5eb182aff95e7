/// Stone Engine v1 — Engine
///
/// Top-level orchestrator. Delegates rewriting to transitions,
/// validates via invariants.
///
/// The sequence is replaced wholesale on every blink.

use tracing::debug;

use crate::domain::{BlinkReport, Sequence};
use crate::invariants::validate_blink;
use crate::transitions::blink as transition_blink;

/// Stateful engine wrapping the pure blink function.
pub struct BlinkEngine {
    seed: Sequence,
    sequence: Sequence,
    blinks_applied: usize,
}

impl BlinkEngine {
    /// Create an engine positioned at `seed`, zero blinks applied.
    pub fn new(seed: Sequence) -> Self {
        Self {
            sequence: seed.clone(),
            seed,
            blinks_applied: 0,
        }
    }

    /// Current line of stones.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn seed(&self) -> &Sequence {
        &self.seed
    }

    pub fn blinks_applied(&self) -> usize {
        self.blinks_applied
    }

    /// Discard all blinks and return to the seed.
    pub fn reset(&mut self) -> &Sequence {
        self.sequence = self.seed.clone();
        self.blinks_applied = 0;
        &self.sequence
    }

    /// Apply one blink:
    ///   1. Delegate to transitions::blink
    ///   2. Validate invariants on the new sequence
    ///   3. Replace and report
    pub fn blink(&mut self) -> BlinkReport {
        let next = transition_blink(&self.sequence);
        validate_blink(&self.sequence, &next);
        self.sequence = next;

        let report = BlinkReport {
            blink: self.blinks_applied,
            stone_count: self.sequence.len(),
        };
        self.blinks_applied += 1;
        debug!(blink = report.blink, stones = report.stone_count, "blink applied");
        report
    }

    /// Apply `blinks` blinks in order, handing every report to `observer`.
    pub fn run<F>(&mut self, blinks: usize, mut observer: F) -> &Sequence
    where
        F: FnMut(&BlinkReport),
    {
        for _ in 0..blinks {
            let report = self.blink();
            observer(&report);
        }
        &self.sequence
    }

    /// Like `run`, with an observer that may fail. Stops at the first error.
    pub fn try_run<F, E>(&mut self, blinks: usize, mut observer: F) -> Result<&Sequence, E>
    where
        F: FnMut(&BlinkReport) -> Result<(), E>,
    {
        for _ in 0..blinks {
            let report = self.blink();
            observer(&report)?;
        }
        Ok(&self.sequence)
    }

    /// Reset to the seed and run `blinks` blinks without observing.
    pub fn replay(&mut self, blinks: usize) -> &Sequence {
        self.reset();
        self.run(blinks, |_| {})
    }
}
