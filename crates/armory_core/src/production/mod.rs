//! War-material production plan.
//!
//! A [`MaterialProduction`] belongs to one economy. It holds, per material:
//!
//! - a target production **ratio**, used as a fallback weighting when nothing
//!   is queued
//! - a bounded **future demand** counter of queued orders
//!
//! and decides which weapon or tool a workshop produces next with a weighted
//! group draw.
//!
//! The instance is single-writer: the owning scheduler calls every operation
//! synchronously from its simulation step.

mod demand;
mod ratio;
mod selector;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::data::ProductionConfig;
use crate::error::{ProductionError, Result};
use crate::material::MaterialType;
use crate::snapshot::ProductionSnapshot;

pub use demand::MAXIMUM_FUTURE_PRODUCTION;
pub use selector::{pick_index, GroupWeights, SelectionRegime};

/// Serializable production state, one value per material ordinal.
///
/// This is the payload stored in save games and network sync messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionState {
    /// Target production ratio per material.
    pub ratios: [f32; MaterialType::COUNT],
    /// Outstanding production requests per material.
    pub future_demand: [f32; MaterialType::COUNT],
}

impl ProductionState {
    /// State with every ratio and demand at zero.
    pub const EMPTY: Self = Self {
        ratios: [0.0; MaterialType::COUNT],
        future_demand: [0.0; MaterialType::COUNT],
    };
}

impl Default for ProductionState {
    fn default() -> Self {
        let mut state = Self::EMPTY;
        for (material, ratio) in DEFAULT_RATIOS {
            state.ratios[material.ordinal()] = *ratio;
        }
        state
    }
}

/// Ratios a fresh economy starts with. Everything else starts at zero.
pub const DEFAULT_RATIOS: &[(MaterialType, f32)] = &[
    (MaterialType::Sword, 1.0),
    (MaterialType::Spear, 0.3),
    (MaterialType::Bow, 0.7),
];

/// Read-only view of a production plan for UI and AI layers.
pub trait MaterialProductionView {
    /// Target production ratio of `material`.
    fn ratio_of_material(&self, material: MaterialType) -> f32;

    /// Queued production requests of `material`, truncated to whole items.
    fn number_of_future_produced_material(&self, material: MaterialType) -> i32;
}

/// Production plan for one economy.
///
/// Serializes as its [`ProductionState`]; deserializing goes through
/// [`MaterialProduction::from_state`], so demand is clamped on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductionState", into = "ProductionState")]
pub struct MaterialProduction {
    state: ProductionState,
}

impl MaterialProduction {
    /// Create a plan with the default weapon ratios and no queued demand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ProductionState::default(),
        }
    }

    /// Build a plan from a validated config.
    ///
    /// Materials the config does not mention start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidConfig`] if the config fails
    /// validation.
    pub fn from_config(config: &ProductionConfig) -> Result<Self> {
        let problems = config.validate();
        if !problems.is_empty() {
            for problem in &problems {
                tracing::warn!(%problem, "Rejected production config");
            }
            return Err(ProductionError::InvalidConfig(problems));
        }

        let mut production = Self {
            state: ProductionState::EMPTY,
        };
        for entry in &config.ratios {
            production.set_ratio_of_material(entry.material, entry.ratio);
        }
        for entry in &config.queued {
            production
                .set_number_of_future_produced_material(entry.material, f32::from(entry.count));
        }
        Ok(production)
    }

    /// Restore a plan from persisted state.
    ///
    /// Demand values outside `[0, MAXIMUM_FUTURE_PRODUCTION]` are clamped on
    /// the way in, ratios are taken verbatim.
    #[must_use]
    pub fn from_state(state: ProductionState) -> Self {
        let mut production = Self {
            state: ProductionState {
                ratios: state.ratios,
                future_demand: [0.0; MaterialType::COUNT],
            },
        };
        for material in MaterialType::ALL {
            let stored = state.future_demand[material.ordinal()];
            production.set_number_of_future_produced_material(material, stored);
            if production.future_demand(material).to_bits() != stored.to_bits() {
                tracing::debug!(%material, stored, "Clamped restored future demand");
            }
        }
        production
    }

    /// Copy of the persisted state.
    #[must_use]
    pub const fn state(&self) -> ProductionState {
        self.state
    }

    /// Raw future demand counter of `material`, before truncation.
    #[must_use]
    pub const fn future_demand(&self, material: MaterialType) -> f32 {
        self.state.future_demand[material.ordinal()]
    }

    /// Calculate a hash of the production state.
    ///
    /// Used for desync detection: replicas with identical state produce
    /// identical hashes. Values are hashed by bit pattern.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        for ratio in &self.state.ratios {
            ratio.to_bits().hash(&mut hasher);
        }
        for demand in &self.state.future_demand {
            demand.to_bits().hash(&mut hasher);
        }

        hasher.finish()
    }

    /// Serialize the plan for a save game or network sync.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        ProductionSnapshot::capture(self).encode()
    }

    /// Deserialize a plan written by [`serialize`](Self::serialize).
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed or from another version.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        Ok(ProductionSnapshot::decode(data)?.restore())
    }
}

impl Default for MaterialProduction {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ProductionState> for MaterialProduction {
    fn from(state: ProductionState) -> Self {
        Self::from_state(state)
    }
}

impl From<MaterialProduction> for ProductionState {
    fn from(production: MaterialProduction) -> Self {
        production.state
    }
}

impl MaterialProductionView for MaterialProduction {
    fn ratio_of_material(&self, material: MaterialType) -> f32 {
        Self::ratio_of_material(self, material)
    }

    fn number_of_future_produced_material(&self, material: MaterialType) -> i32 {
        Self::number_of_future_produced_material(self, material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MaterialCount, MaterialRatio};
    use crate::material::{TOOLS, WEAPONS};

    #[test]
    fn test_default_state() {
        let production = MaterialProduction::new();

        assert_eq!(production.ratio_of_material(MaterialType::Sword), 1.0);
        assert_eq!(production.ratio_of_material(MaterialType::Spear), 0.3);
        assert_eq!(production.ratio_of_material(MaterialType::Bow), 0.7);

        for material in MaterialType::ALL {
            if !material.is_weapon() {
                assert_eq!(production.ratio_of_material(material), 0.0);
            }
            assert_eq!(production.number_of_future_produced_material(material), 0);
            assert_eq!(production.future_demand(material), 0.0);
        }
    }

    #[test]
    fn test_view_trait_reads_same_values() {
        let mut production = MaterialProduction::new();
        production.set_number_of_future_produced_material(MaterialType::Axe, 4.0);

        let view: &dyn MaterialProductionView = &production;
        assert_eq!(view.ratio_of_material(MaterialType::Sword), 1.0);
        assert_eq!(view.number_of_future_produced_material(MaterialType::Axe), 4);
    }

    #[test]
    fn test_from_config_starts_unlisted_materials_at_zero() {
        let config = ProductionConfig {
            ratios: vec![MaterialRatio {
                material: MaterialType::Bow,
                ratio: 0.5,
            }],
            queued: vec![MaterialCount {
                material: MaterialType::Pick,
                count: 3,
            }],
        };

        let production = MaterialProduction::from_config(&config).unwrap();
        assert_eq!(production.ratio_of_material(MaterialType::Bow), 0.5);
        assert_eq!(production.ratio_of_material(MaterialType::Sword), 0.0);
        assert_eq!(production.number_of_future_produced_material(MaterialType::Pick), 3);
    }

    #[test]
    fn test_from_default_config_matches_new() {
        let production = MaterialProduction::from_config(&ProductionConfig::default()).unwrap();
        assert_eq!(production, MaterialProduction::new());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ProductionConfig {
            ratios: vec![],
            queued: vec![MaterialCount {
                material: MaterialType::Saw,
                count: 25,
            }],
        };

        let err = MaterialProduction::from_config(&config).unwrap_err();
        assert!(matches!(err, ProductionError::InvalidConfig(ref problems) if problems.len() == 1));
    }

    #[test]
    fn test_from_state_clamps_demand_only() {
        let mut state = ProductionState::EMPTY;
        state.ratios[MaterialType::Spear.ordinal()] = -2.5;
        state.future_demand[MaterialType::Hammer.ordinal()] = 45.0;
        state.future_demand[MaterialType::Blade.ordinal()] = -3.0;
        state.future_demand[MaterialType::Pick.ordinal()] = 2.75;

        let production = MaterialProduction::from_state(state);
        assert_eq!(production.ratio_of_material(MaterialType::Spear), -2.5);
        assert_eq!(production.future_demand(MaterialType::Hammer), 20.0);
        assert_eq!(production.future_demand(MaterialType::Blade), 0.0);
        assert_eq!(production.future_demand(MaterialType::Pick), 2.75);
    }

    #[test]
    fn test_state_hash_tracks_changes() {
        let a = MaterialProduction::new();
        let mut b = MaterialProduction::new();
        assert_eq!(a.state_hash(), b.state_hash());

        b.increase_number_of_future_produced_material(TOOLS[0]);
        assert_ne!(a.state_hash(), b.state_hash());

        b.decrease_number_of_future_produced_material(TOOLS[0]);
        assert_eq!(a.state_hash(), b.state_hash());

        b.set_ratio_of_material(WEAPONS[1], 0.31);
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn test_serialize_roundtrip_is_bit_identical() {
        let mut production = MaterialProduction::new();
        production.set_ratio_of_material(MaterialType::Spear, 0.1 + 0.2);
        production.set_ratio_of_material(MaterialType::Scythe, f32::MIN_POSITIVE);
        production.set_number_of_future_produced_material(MaterialType::Bow, 13.37);

        let bytes = production.serialize().unwrap();
        let restored = MaterialProduction::deserialize(&bytes).unwrap();

        for material in MaterialType::ALL {
            assert_eq!(
                restored.ratio_of_material(material).to_bits(),
                production.ratio_of_material(material).to_bits()
            );
            assert_eq!(
                restored.future_demand(material).to_bits(),
                production.future_demand(material).to_bits()
            );
        }
        assert_eq!(restored.state_hash(), production.state_hash());
    }

    #[test]
    fn test_serde_deserialize_clamps_demand() {
        let mut state = ProductionState::default();
        state.future_demand[MaterialType::Sword.ordinal()] = 50.0;
        state.future_demand[MaterialType::Bow.ordinal()] = -4.0;
        state.future_demand[MaterialType::Pick.ordinal()] = 7.5;
        let text = ron::to_string(&state).unwrap();

        let production: MaterialProduction = ron::from_str(&text).unwrap();

        assert_eq!(production.number_of_future_produced_material(MaterialType::Sword), 20);
        assert_eq!(production.number_of_future_produced_material(MaterialType::Bow), 0);
        assert_eq!(production.future_demand(MaterialType::Pick), 7.5);
        assert_eq!(production.ratio_of_material(MaterialType::Spear), 0.3);
    }

    #[test]
    fn test_serde_form_is_production_state() {
        let mut production = MaterialProduction::new();
        production.set_number_of_future_produced_material(MaterialType::Axe, 2.0);

        let text = ron::to_string(&production).unwrap();
        let state: ProductionState = ron::from_str(&text).unwrap();

        assert_eq!(state, production.state());
    }
}
