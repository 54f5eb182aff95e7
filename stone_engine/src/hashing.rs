/// Stone Engine v1 — Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing of a run.
///
/// Rules:
///   - Stones kept in line order (order is part of the identity)
///   - Field order: kernel_version, blinks, stone_count, stones
///   - UTF-8 JSON, no whitespace, no float

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::Sequence;
use crate::KERNEL_VERSION;

/// Canonical serialization of a sequence reached after `blinks` blinks.
pub fn canonical_serialize(sequence: &Sequence, blinks: usize) -> Vec<u8> {
    let obj = build_canonical_value(sequence, blinks);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(sequence: &Sequence, blinks: usize) -> String {
    let bytes = canonical_serialize(sequence, blinks);
    let digest = Sha256::digest(&bytes);
    digest
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

fn build_canonical_value(sequence: &Sequence, blinks: usize) -> Value {
    let stones: Vec<Value> = sequence
        .iter()
        .map(|s| Value::Number(s.value().into()))
        .collect();

    // kernel_version MUST be first.
    let mut root = Map::new();
    root.insert(
        "kernel_version".to_string(),
        Value::Number(KERNEL_VERSION.into()),
    );
    root.insert("blinks".to_string(), Value::Number((blinks as u64).into()));
    root.insert(
        "stone_count".to_string(),
        Value::Number((sequence.len() as u64).into()),
    );
    root.insert("stones".to_string(), Value::Array(stones));

    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_layout() {
        let seq = Sequence::from_values(&[253000, 1, 7]);
        let json = String::from_utf8(canonical_serialize(&seq, 1)).unwrap();
        assert_eq!(
            json,
            r#"{"kernel_version":1,"blinks":1,"stone_count":3,"stones":[253000,1,7]}"#
        );
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let h = canonical_hash(&Sequence::from_values(&[125, 17]), 0);
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_order_changes_hash() {
        let a = canonical_hash(&Sequence::from_values(&[125, 17]), 0);
        let b = canonical_hash(&Sequence::from_values(&[17, 125]), 0);
        assert_ne!(a, b);
    }
}
