//! # Armory Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Determinism test harness
//! - Fixture helpers
//! - Scripted random sources and plan scripts
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod script;
pub mod scripted;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
