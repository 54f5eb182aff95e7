/// Stone Engine v1 — Transition Logic
///
/// ALL stone-rewriting logic lives here.
/// Pure functions: the input sequence is never mutated.

use crate::arithmetic::{digit_count, multiply_stone, split_digits};
use crate::domain::{Expansion, Rule, Sequence, Stone};

// ---------------------------------------------------------------------------
// Stone transformer
// ---------------------------------------------------------------------------

/// Rewrite a single stone. First matching rule wins:
///   1. `0` -> `[1]`
///   2. even digit count -> `[left, right]`
///   3. otherwise -> `[v * 2024]`, wrapping on u64 overflow
pub fn transform_stone(stone: Stone) -> Expansion {
    match Rule::classify(stone) {
        Rule::Flip => Expansion::One(Stone(1)),
        Rule::Split => {
            let (left, right) = split_digits(stone.0, digit_count(stone.0));
            Expansion::Two(Stone(left), Stone(right))
        }
        Rule::Multiply => Expansion::One(Stone(multiply_stone(stone.0))),
    }
}

// ---------------------------------------------------------------------------
// Blink simulator
// ---------------------------------------------------------------------------

/// Apply `transform_stone` to every stone in order and concatenate.
pub fn blink(sequence: &Sequence) -> Sequence {
    let mut next = Sequence::with_capacity(sequence.len() * 2);
    for stone in sequence {
        next.extend_expansion(transform_stone(*stone));
    }
    next
}
