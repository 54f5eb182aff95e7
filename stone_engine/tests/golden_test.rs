/// Golden determinism test — replays the frozen seed and asserts the
/// canonical hash and stone count match the permanent v1 values.
///
/// This test must NEVER be modified to match new behavior.
/// If it fails, the kernel has been broken.

use std::fs;

use stone_engine::driver::{parse_stones, solve_pluto_stones, RunConfig};
use stone_engine::engine::BlinkEngine;
use stone_engine::hashing::canonical_hash;
use stone_engine::KERNEL_VERSION;

fn load_config(path: &str) -> RunConfig {
    let data = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    serde_json::from_str(&data).expect("Failed to parse seed JSON")
}

fn load_expected_hash(path: &str) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
        .trim()
        .to_string()
}

fn golden_hash(config: &RunConfig) -> String {
    let mut engine = BlinkEngine::new(parse_stones(config.stones.as_slice()));
    engine.run(config.blinks, |_| {});
    canonical_hash(engine.sequence(), engine.blinks_applied())
}

#[test]
fn golden_replay_hash_matches() {
    let config = load_config("tests/golden/seed.json");
    let hash = golden_hash(&config);

    let expected = load_expected_hash("tests/golden/expected_hash.txt");
    assert_eq!(
        hash, expected,
        "GOLDEN TEST FAILED: Kernel v1 produced a different line of stones.\n\
         Got:      {}\n\
         Expected: {}",
        hash, expected
    );
}

#[test]
fn golden_replay_is_deterministic() {
    let config = load_config("tests/golden/seed.json");
    let h1 = golden_hash(&config);
    let h2 = golden_hash(&config);
    assert_eq!(
        h1, h2,
        "DETERMINISM FAILURE: Two runs of the same seed produced different hashes.\n\
         Run 1: {}\n\
         Run 2: {}",
        h1, h2
    );
}

#[test]
fn golden_stone_counts() {
    let mut sink = Vec::new();
    assert_eq!(solve_pluto_stones(&["125", "17"], 1, &mut sink).unwrap(), 3);
    assert_eq!(solve_pluto_stones(&["125", "17"], 6, &mut sink).unwrap(), 22);
    assert_eq!(solve_pluto_stones(&["125", "17"], 25, &mut sink).unwrap(), 55312);
}

#[test]
fn default_seed_after_25_blinks() {
    let mut sink = Vec::new();
    let config = RunConfig::default();
    let count = solve_pluto_stones(config.stones.as_slice(), 25, &mut sink).unwrap();
    assert_eq!(count, 194782);
}

#[test]
fn first_blink_of_example_seed() {
    let mut engine = BlinkEngine::new(parse_stones(&["125", "17"]));
    engine.blink();
    assert_eq!(engine.sequence().values(), vec![253000, 1, 7]);
    assert_eq!(
        canonical_hash(engine.sequence(), 1),
        "02677f35ecff4b8159024e09d73a1af6367c5e917245470b1885abb882e8e8bf"
    );
}

#[test]
fn kernel_version_is_one() {
    assert_eq!(KERNEL_VERSION, 1, "KERNEL_VERSION must be 1 and never change");
}
