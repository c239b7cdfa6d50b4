//! Test fixtures and helpers.
//!
//! Pre-built production plans for consistent testing.

use armory_core::material::{MaterialType, WEAPONS};
use armory_core::production::MaterialProduction;
use armory_core::random::SeededRandom;

/// Seed used by tests that don't care which seed they get.
pub const TEST_SEED: u64 = 0x5EED_CAFE;

/// A plan as a new economy starts it.
#[must_use]
pub fn fresh_production() -> MaterialProduction {
    MaterialProduction::new()
}

/// A fresh plan with the given demand queued.
#[must_use]
pub fn production_with_demand(demand: &[(MaterialType, f32)]) -> MaterialProduction {
    let mut production = MaterialProduction::new();
    for &(material, count) in demand {
        production.set_number_of_future_produced_material(material, count);
    }
    production
}

/// A fresh plan where every weapon ratio is zero, so weapon draws are
/// degenerate until something is queued.
#[must_use]
pub fn production_without_weapon_ratios() -> MaterialProduction {
    let mut production = MaterialProduction::new();
    for &weapon in WEAPONS {
        production.set_ratio_of_material(weapon, 0.0);
    }
    production
}

/// A seeded source for the default test seed.
#[must_use]
pub fn session_random() -> SeededRandom {
    SeededRandom::new(TEST_SEED)
}
