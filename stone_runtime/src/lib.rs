#![forbid(unsafe_code)]

//! Stone Engine v1 — Rust Runtime
//!
//! Wraps the frozen blink kernel with replay and drift detection.
//!
//! No rewriting logic lives here — every blink is delegated to the
//! kernel.

pub mod replay;
pub mod drift;
