//! Replay orchestrator — rebuild a line of stones from its seed.
//!
//! Delegates all rewriting to the frozen kernel.
//! No shortcuts, no cached state.

use stone_engine::domain::Sequence;
use stone_engine::engine::BlinkEngine;
use stone_engine::hashing::canonical_hash;

/// Rebuild the line reached after `blinks` blinks from `seed`.
///
/// 1. Create a fresh engine at the seed
/// 2. Blink `blinks` times
/// 3. Return (final_sequence, canonical_hash)
pub fn rebuild_sequence(seed: &Sequence, blinks: usize) -> (Sequence, String) {
    let mut engine = BlinkEngine::new(seed.clone());
    engine.run(blinks, |_| {});

    let sequence = engine.sequence().clone();
    let hash = canonical_hash(&sequence, blinks);
    (sequence, hash)
}

/// Rebuild and return only the canonical hash.
pub fn rebuild_hash(seed: &Sequence, blinks: usize) -> String {
    let (_, hash) = rebuild_sequence(seed, blinks);
    hash
}
