//! # Armory Core
//!
//! Deterministic war-material production plan for a settlement economy.
//!
//! Each economy keeps, per material, a target production ratio and a
//! bounded count of queued orders. Workshops ask the plan which weapon or
//! tool to forge next; the answer comes from a weighted draw over the group.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No global randomness (every draw goes through an injected [`random::RandomSource`])
//!
//! This enables lockstep multiplayer: peers that apply the same orders and
//! share a seeded source reach identical plans.
//!
//! ## Crate Structure
//!
//! - [`material`] - Material types and the weapon/tool groups
//! - [`production`] - Ratios, future demand and the weighted group draw
//! - [`random`] - Random source capability and the seeded implementation
//! - [`snapshot`] - Save-game and sync snapshots
//! - [`data`] - RON-loadable starting configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod data;
pub mod error;
pub mod material;
pub mod production;
pub mod random;
pub mod snapshot;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::data::{MaterialCount, MaterialRatio, ProductionConfig};
    pub use crate::error::{ProductionError, Result};
    pub use crate::material::{MaterialGroup, MaterialType, TOOLS, WEAPONS};
    pub use crate::production::{
        GroupWeights, MaterialProduction, MaterialProductionView, ProductionState,
        SelectionRegime, MAXIMUM_FUTURE_PRODUCTION,
    };
    pub use crate::random::{RandomSource, SeededRandom};
    pub use crate::snapshot::{ProductionSnapshot, SNAPSHOT_VERSION};
}
