//! Save-game and network-sync snapshots of a production plan.
//!
//! The binary form (bincode) goes into save files and sync messages. The RON
//! form is for humans: debugging dumps and hand-edited test states.

use serde::{Deserialize, Serialize};

use crate::error::{ProductionError, Result};
use crate::production::{MaterialProduction, ProductionState};

/// Snapshot format version for compatibility.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned production state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionSnapshot {
    /// Snapshot format version.
    pub version: u32,
    /// Ratios and future demand per material ordinal.
    pub state: ProductionState,
}

impl ProductionSnapshot {
    /// Capture the current state of a plan.
    #[must_use]
    pub const fn capture(production: &MaterialProduction) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            state: production.state(),
        }
    }

    /// Rebuild the plan this snapshot was taken from.
    #[must_use]
    pub fn restore(&self) -> MaterialProduction {
        MaterialProduction::from_state(self.state)
    }

    /// Encode for a save game or sync message.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes =
            bincode::serialize(self).map_err(|e| ProductionError::Serialization(e.to_string()))?;
        tracing::debug!(bytes = bytes.len(), "Encoded production snapshot");
        Ok(bytes)
    }

    /// Decode a payload written by [`encode`](Self::encode).
    ///
    /// # Errors
    /// Returns an error if the payload is malformed or has another version.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| ProductionError::Deserialization(e.to_string()))?;
        snapshot.check_version()?;
        tracing::debug!(bytes = bytes.len(), "Decoded production snapshot");
        Ok(snapshot)
    }

    /// Render as pretty-printed RON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ProductionError::Serialization(e.to_string()))
    }

    /// Parse a RON rendering written by [`to_ron`](Self::to_ron).
    ///
    /// # Errors
    /// Returns an error if the text is malformed or has another version.
    pub fn from_ron(text: &str) -> Result<Self> {
        let snapshot: Self =
            ron::from_str(text).map_err(|e| ProductionError::Deserialization(e.to_string()))?;
        snapshot.check_version()?;
        Ok(snapshot)
    }

    fn check_version(&self) -> Result<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(ProductionError::SnapshotVersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialType;

    fn sample_production() -> MaterialProduction {
        let mut production = MaterialProduction::new();
        production.set_ratio_of_material(MaterialType::Hammer, 0.25);
        production.set_number_of_future_produced_material(MaterialType::Hammer, 4.0);
        production.set_number_of_future_produced_material(MaterialType::Bow, 0.5);
        production
    }

    #[test]
    fn test_binary_roundtrip() {
        let production = sample_production();
        let bytes = ProductionSnapshot::capture(&production).encode().unwrap();

        let restored = ProductionSnapshot::decode(&bytes).unwrap().restore();
        assert_eq!(restored, production);
    }

    #[test]
    fn test_ron_roundtrip() {
        let production = sample_production();
        let text = ProductionSnapshot::capture(&production).to_ron().unwrap();
        assert!(text.contains("future_demand"));

        let restored = ProductionSnapshot::from_ron(&text).unwrap().restore();
        assert_eq!(restored, production);
    }

    #[test]
    fn test_decode_rejects_other_version() {
        let mut snapshot = ProductionSnapshot::capture(&sample_production());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let bytes = bincode::serialize(&snapshot).unwrap();

        let err = ProductionSnapshot::decode(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ProductionError::SnapshotVersionMismatch { found, .. } if found == SNAPSHOT_VERSION + 1
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let bytes = ProductionSnapshot::capture(&sample_production()).encode().unwrap();
        let err = ProductionSnapshot::decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ProductionError::Deserialization(_)));
    }

    #[test]
    fn test_payload_is_fixed_size() {
        let a = ProductionSnapshot::capture(&MaterialProduction::new()).encode().unwrap();
        let b = ProductionSnapshot::capture(&sample_production()).encode().unwrap();

        // Version plus two f32 tables, no length prefixes on fixed arrays.
        assert_eq!(a.len(), 4 + 2 * 4 * MaterialType::COUNT);
        assert_eq!(a.len(), b.len());
    }
}
