//! Starting production plan for an economy.

use serde::{Deserialize, Serialize};

use crate::error::{ProductionError, Result};
use crate::material::MaterialType;
use crate::production::{DEFAULT_RATIOS, MAXIMUM_FUTURE_PRODUCTION};

/// Target ratio for one material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialRatio {
    /// Material the ratio applies to.
    pub material: MaterialType,
    /// Desired share of production.
    pub ratio: f32,
}

/// Queued count for one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCount {
    /// Material to queue.
    pub material: MaterialType,
    /// Number of items queued.
    pub count: u8,
}

/// Starting production plan.
///
/// # Example RON
///
/// ```ron
/// ProductionConfig(
///     ratios: [
///         (material: Sword, ratio: 1.0),
///         (material: Bow, ratio: 0.5),
///     ],
///     queued: [
///         (material: Hammer, count: 2),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionConfig {
    /// Target ratios. Materials not listed start at zero.
    #[serde(default = "default_ratios")]
    pub ratios: Vec<MaterialRatio>,

    /// Production requests queued at game start.
    #[serde(default)]
    pub queued: Vec<MaterialCount>,
}

fn default_ratios() -> Vec<MaterialRatio> {
    DEFAULT_RATIOS
        .iter()
        .map(|&(material, ratio)| MaterialRatio { material, ratio })
        .collect()
}

impl Default for ProductionConfig {
    fn default() -> Self {
        Self {
            ratios: default_ratios(),
            queued: Vec::new(),
        }
    }
}

impl ProductionConfig {
    /// Parse a config from RON text.
    ///
    /// `source_name` labels the text in error messages, usually a file path.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::ConfigParse`] if the text is not a valid
    /// config.
    pub fn from_ron(text: &str, source_name: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| ProductionError::ConfigParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Ratio configured for `material`, if listed.
    #[must_use]
    pub fn ratio_for(&self, material: MaterialType) -> Option<f32> {
        self.ratios
            .iter()
            .find(|entry| entry.material == material)
            .map(|entry| entry.ratio)
    }

    /// Validate internal consistency.
    ///
    /// Checks for:
    /// - Materials listed twice
    /// - Ratios that are NaN or infinite
    /// - Queued counts above the future production limit
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = [false; MaterialType::COUNT];
        for entry in &self.ratios {
            if std::mem::replace(&mut seen[entry.material.ordinal()], true) {
                errors.push(format!("Ratio for '{}' listed more than once", entry.material));
            }
            if !entry.ratio.is_finite() {
                errors.push(format!(
                    "Ratio for '{}' is not a finite number: {}",
                    entry.material, entry.ratio
                ));
            }
        }

        let mut seen = [false; MaterialType::COUNT];
        for entry in &self.queued {
            if std::mem::replace(&mut seen[entry.material.ordinal()], true) {
                errors.push(format!(
                    "Queued count for '{}' listed more than once",
                    entry.material
                ));
            }
            if entry.count > MAXIMUM_FUTURE_PRODUCTION {
                errors.push(format!(
                    "Queued count for '{}' is {}, above the limit of {}",
                    entry.material, entry.count, MAXIMUM_FUTURE_PRODUCTION
                ));
            }
        }

        errors
    }
}
