#![forbid(unsafe_code)]

/// Kernel v1. Behavioral changes to the blink rules require kernel_v2.
pub const KERNEL_VERSION: u32 = 1;

pub mod arithmetic;
pub mod domain;
pub mod transitions;
pub mod invariants;
pub mod hashing;
pub mod engine;
pub mod error;
pub mod driver;

