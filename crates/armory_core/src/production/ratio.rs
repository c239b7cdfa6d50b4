//! Target production ratios.

use super::MaterialProduction;
use crate::material::MaterialType;

impl MaterialProduction {
    /// Target production ratio of `material`.
    #[must_use]
    pub const fn ratio_of_material(&self, material: MaterialType) -> f32 {
        self.state.ratios[material.ordinal()]
    }

    /// Set the target production ratio of `material`.
    ///
    /// Values are stored as given. Ratios are only read as a fallback
    /// weighting, so keeping them sane is up to the caller.
    pub fn set_ratio_of_material(&mut self, material: MaterialType, ratio: f32) {
        self.state.ratios[material.ordinal()] = ratio;
    }
}
