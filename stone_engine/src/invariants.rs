/// Stone Engine v1 — Invariant Checks
///
/// Hard-fail validation. Every check panics on failure.

use crate::domain::Sequence;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate a single blink `prev -> next`. Panics on the first failure.
pub fn validate_blink(prev: &Sequence, next: &Sequence) {
    if let Err(msg) = try_validate_blink(prev, next) {
        panic!("Invariant violation: {}", msg);
    }
}

/// Non-panicking variant of `validate_blink`.
/// Returns `Err(message)` on the first failure, `Ok(())` if all pass.
pub fn try_validate_blink(prev: &Sequence, next: &Sequence) -> Result<(), String> {
    try_check_no_stone_dropped(prev, next)?;
    try_check_at_most_doubled(prev, next)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

/// Every stone yields at least one successor.
fn try_check_no_stone_dropped(prev: &Sequence, next: &Sequence) -> Result<(), String> {
    if next.len() < prev.len() {
        return Err(format!(
            "[INVARIANT:no_stone_dropped] blink shrank the line from {} to {} stones",
            prev.len(),
            next.len()
        ));
    }
    Ok(())
}

/// Every stone yields at most two successors.
fn try_check_at_most_doubled(prev: &Sequence, next: &Sequence) -> Result<(), String> {
    if next.len() > prev.len().saturating_mul(2) {
        return Err(format!(
            "[INVARIANT:at_most_doubled] blink grew the line from {} to {} stones",
            prev.len(),
            next.len()
        ));
    }
    Ok(())
}
