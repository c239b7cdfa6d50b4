//! Data structures for production configuration.
//!
//! Pure data loaded from RON files. This module does no IO; reading files is
//! left to the tooling.

mod production_config;

pub use production_config::{MaterialCount, MaterialRatio, ProductionConfig};
