//! Drift detection — determinism verification and line comparison.

use std::collections::BTreeMap;

use serde::Serialize;

use stone_engine::domain::Sequence;

use crate::replay;

/// Replay the same seed twice and assert identical hashes. Panics on failure.
pub fn verify_determinism(seed: &Sequence, blinks: usize) {
    let (_, hash1) = replay::rebuild_sequence(seed, blinks);
    let (_, hash2) = replay::rebuild_sequence(seed, blinks);

    if hash1 != hash2 {
        panic!(
            "DETERMINISM FAILURE: two replays produced different hashes.\n\
             Run 1: {}\n\
             Run 2: {}",
            hash1, hash2
        );
    }
}

/// Structured comparison of two lines of stones.
pub fn compare_sequences(seq_a: &Sequence, seq_b: &Sequence) -> DriftReport {
    let counts_a = multiplicities(seq_a);
    let counts_b = multiplicities(seq_b);

    // value -> (count in b) - (count in a), zero deltas omitted
    let mut multiplicity_delta = BTreeMap::new();
    for value in counts_a.keys().chain(counts_b.keys()) {
        let a = counts_a.get(value).copied().unwrap_or(0) as i64;
        let b = counts_b.get(value).copied().unwrap_or(0) as i64;
        if a != b {
            multiplicity_delta.insert(*value, b - a);
        }
    }

    DriftReport {
        stone_count_a: seq_a.len() as i64,
        stone_count_b: seq_b.len() as i64,
        stone_count_delta: seq_b.len() as i64 - seq_a.len() as i64,
        distinct_values_a: counts_a.len() as i64,
        distinct_values_b: counts_b.len() as i64,
        identical_order: seq_a == seq_b,
        multiplicity_delta,
    }
}

fn multiplicities(seq: &Sequence) -> BTreeMap<u64, usize> {
    let mut counts = BTreeMap::new();
    for stone in seq {
        *counts.entry(stone.value()).or_insert(0) += 1;
    }
    counts
}

/// Structured drift report — all counts are i64.
#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    pub stone_count_a: i64,
    pub stone_count_b: i64,
    pub stone_count_delta: i64,
    pub distinct_values_a: i64,
    pub distinct_values_b: i64,
    pub identical_order: bool,
    pub multiplicity_delta: BTreeMap<u64, i64>,
}

impl DriftReport {
    /// Same stones, possibly in a different order.
    pub fn is_permutation(&self) -> bool {
        self.multiplicity_delta.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("DriftReport serialization failed")
    }
}
