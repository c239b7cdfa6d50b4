//! Bounded future demand counters.
//!
//! Every counter stays within `[0, MAXIMUM_FUTURE_PRODUCTION]` after every
//! call. Out-of-range input is clamped silently.

use super::MaterialProduction;
use crate::material::{MaterialType, TOOLS};

/// Upper bound of every future demand counter.
pub const MAXIMUM_FUTURE_PRODUCTION: u8 = 20;

const DEMAND_CEILING: f32 = MAXIMUM_FUTURE_PRODUCTION as f32;

/// Clamp a requested demand into the valid range. NaN counts as no demand.
fn clamp_demand(count: f32) -> f32 {
    if count.is_nan() {
        0.0
    } else {
        count.clamp(0.0, DEMAND_CEILING)
    }
}

impl MaterialProduction {
    /// Queued production requests of `material`, truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn number_of_future_produced_material(&self, material: MaterialType) -> i32 {
        self.state.future_demand[material.ordinal()] as i32
    }

    /// Queue one more `material`, up to the maximum.
    pub fn increase_number_of_future_produced_material(&mut self, material: MaterialType) {
        let current = self.future_demand(material);
        self.set_number_of_future_produced_material(material, current + 1.0);
    }

    /// Drop one queued `material`, down to zero.
    pub fn decrease_number_of_future_produced_material(&mut self, material: MaterialType) {
        let current = self.future_demand(material);
        self.set_number_of_future_produced_material(material, current - 1.0);
    }

    /// Set the queued count of `material`, clamped to
    /// `[0, MAXIMUM_FUTURE_PRODUCTION]`.
    pub fn set_number_of_future_produced_material(&mut self, material: MaterialType, count: f32) {
        self.state.future_demand[material.ordinal()] = clamp_demand(count);
    }

    /// Make sure each tool in `needed_tools` is queued at least as many times
    /// as it occurs there.
    ///
    /// Counters already at or above the required count are left alone, and
    /// materials that are not tools are ignored.
    pub fn ensure_needed_tools_are_queued(&mut self, needed_tools: &[MaterialType]) {
        let mut required = [0u16; MaterialType::COUNT];
        for tool in needed_tools {
            let slot = &mut required[tool.ordinal()];
            *slot = slot.saturating_add(1);
        }

        for &tool in TOOLS {
            let count = f32::from(required[tool.ordinal()]);
            if self.future_demand(tool) < count {
                tracing::debug!(
                    %tool,
                    from = self.future_demand(tool),
                    to = count,
                    "Raising queued tools to cover demand"
                );
                self.set_number_of_future_produced_material(tool, count);
            }
        }
    }
}
