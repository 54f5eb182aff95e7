/// Stone Engine v1 — Core Domain Types
///
/// Pure data. Transition logic lives in `transitions`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::arithmetic::digit_count;

// ── Core Domain Types ──────────────────────────────────────────────

/// A single stone. Identified only by its engraved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stone(pub u64);

impl Stone {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered line of stones. Duplicates are expected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Stone>);

impl Sequence {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn from_values(values: &[u64]) -> Self {
        Self(values.iter().copied().map(Stone).collect())
    }

    /// Raw values in order.
    pub fn values(&self) -> Vec<u64> {
        self.0.iter().map(|s| s.0).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stone> {
        self.0.iter()
    }

    pub(crate) fn extend_expansion(&mut self, expansion: Expansion) {
        match expansion {
            Expansion::One(s) => self.0.push(s),
            Expansion::Two(left, right) => {
                self.0.push(left);
                self.0.push(right);
            }
        }
    }
}

impl FromIterator<Stone> for Sequence {
    fn from_iter<I: IntoIterator<Item = Stone>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Stone;
    type IntoIter = std::slice::Iter<'a, Stone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which of the three rules applies to a stone. Exactly one always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `0` becomes `1`.
    Flip,
    /// Even digit count: split into left and right halves.
    Split,
    /// Anything else: multiply by 2024.
    Multiply,
}

impl Rule {
    pub fn classify(stone: Stone) -> Rule {
        if stone.0 == 0 {
            Rule::Flip
        } else if digit_count(stone.0) % 2 == 0 {
            Rule::Split
        } else {
            Rule::Multiply
        }
    }
}

/// The one or two stones that replace a single stone after a blink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    One(Stone),
    /// Left half first, then right half.
    Two(Stone, Stone),
}

impl Expansion {
    pub fn len(&self) -> usize {
        match self {
            Expansion::One(_) => 1,
            Expansion::Two(_, _) => 2,
        }
    }

    pub fn to_vec(self) -> Vec<Stone> {
        match self {
            Expansion::One(s) => vec![s],
            Expansion::Two(left, right) => vec![left, right],
        }
    }
}

/// Per-blink summary. `blink` is 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkReport {
    pub blink: usize,
    pub stone_count: usize,
}

impl BlinkReport {
    /// Progress lines are emitted on every fifth blink, starting at 0.
    pub fn is_checkpoint(&self) -> bool {
        self.blink % 5 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_classify() {
        assert_eq!(Rule::classify(Stone(0)), Rule::Flip);
        assert_eq!(Rule::classify(Stone(10)), Rule::Split);
        assert_eq!(Rule::classify(Stone(1)), Rule::Multiply);
        assert_eq!(Rule::classify(Stone(999)), Rule::Multiply);
        assert_eq!(Rule::classify(Stone(253000)), Rule::Split);
    }

    #[test]
    fn test_sequence_serializes_as_plain_array() {
        let seq = Sequence::from_values(&[125, 17]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[125,17]");
    }

    #[test]
    fn test_checkpoint() {
        assert!(BlinkReport { blink: 0, stone_count: 3 }.is_checkpoint());
        assert!(!BlinkReport { blink: 4, stone_count: 3 }.is_checkpoint());
        assert!(BlinkReport { blink: 10, stone_count: 3 }.is_checkpoint());
    }
}
