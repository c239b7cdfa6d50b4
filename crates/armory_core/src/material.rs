//! Material types and the fixed production groups.
//!
//! Every producible good has a stable ordinal. Per-material tables in this
//! crate are plain arrays indexed by that ordinal, so the order of
//! [`MaterialType::ALL`] is part of the save/sync format and must never be
//! reordered.

use serde::{Deserialize, Serialize};

/// A producible good in the settlement economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum MaterialType {
    /// Sawn plank.
    Plank,
    /// Quarried stone.
    Stone,
    /// Felled tree trunk.
    Trunk,
    /// Baked bread.
    Bread,
    /// Harvested crop.
    Crop,
    /// Caught fish.
    Fish,
    /// Milled flour.
    Flour,
    /// Live pig.
    Pig,
    /// Drawn water.
    Water,
    /// Pressed wine.
    Wine,
    /// Mined coal.
    Coal,
    /// Mined iron ore.
    IronOre,
    /// Mined gold ore.
    GoldOre,
    /// Smelted iron.
    IronBar,
    /// Smelted gold.
    GoldBar,
    /// Butchered meat.
    Meat,
    /// Sword for swordsmen.
    Sword,
    /// Spear for pikemen.
    Spear,
    /// Bow for bowmen.
    Bow,
    /// Hammer for builders.
    Hammer,
    /// Blade for butchers.
    Blade,
    /// Pick for miners and stonecutters.
    Pick,
    /// Axe for lumberjacks.
    Axe,
    /// Saw for sawmillers.
    Saw,
    /// Scythe for farmers.
    Scythe,
    /// Fishing rod for fishers.
    FishingRod,
}

impl MaterialType {
    /// Number of material types.
    pub const COUNT: usize = 26;

    /// Every material type, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Plank,
        Self::Stone,
        Self::Trunk,
        Self::Bread,
        Self::Crop,
        Self::Fish,
        Self::Flour,
        Self::Pig,
        Self::Water,
        Self::Wine,
        Self::Coal,
        Self::IronOre,
        Self::GoldOre,
        Self::IronBar,
        Self::GoldBar,
        Self::Meat,
        Self::Sword,
        Self::Spear,
        Self::Bow,
        Self::Hammer,
        Self::Blade,
        Self::Pick,
        Self::Axe,
        Self::Saw,
        Self::Scythe,
        Self::FishingRod,
    ];

    /// Stable index of this material in per-material tables.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a material by its ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Whether this material is part of [`WEAPONS`].
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self, Self::Sword | Self::Spear | Self::Bow)
    }

    /// Whether this material is part of [`TOOLS`].
    #[must_use]
    pub const fn is_tool(self) -> bool {
        matches!(
            self,
            Self::Hammer
                | Self::Blade
                | Self::Pick
                | Self::Axe
                | Self::Saw
                | Self::Scythe
                | Self::FishingRod
        )
    }

    /// The production group this material is drawn from, if any.
    #[must_use]
    pub const fn group(self) -> Option<MaterialGroup> {
        if self.is_weapon() {
            Some(MaterialGroup::Weapons)
        } else if self.is_tool() {
            Some(MaterialGroup::Tools)
        } else {
            None
        }
    }

    /// Get the display name for this material.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plank => "Plank",
            Self::Stone => "Stone",
            Self::Trunk => "Trunk",
            Self::Bread => "Bread",
            Self::Crop => "Crop",
            Self::Fish => "Fish",
            Self::Flour => "Flour",
            Self::Pig => "Pig",
            Self::Water => "Water",
            Self::Wine => "Wine",
            Self::Coal => "Coal",
            Self::IronOre => "Iron ore",
            Self::GoldOre => "Gold ore",
            Self::IronBar => "Iron bar",
            Self::GoldBar => "Gold bar",
            Self::Meat => "Meat",
            Self::Sword => "Sword",
            Self::Spear => "Spear",
            Self::Bow => "Bow",
            Self::Hammer => "Hammer",
            Self::Blade => "Blade",
            Self::Pick => "Pick",
            Self::Axe => "Axe",
            Self::Saw => "Saw",
            Self::Scythe => "Scythe",
            Self::FishingRod => "Fishing rod",
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Weapons produced by the weapon smith, in draw order.
pub const WEAPONS: &[MaterialType] = &[MaterialType::Sword, MaterialType::Spear, MaterialType::Bow];

/// Tools produced by the tool smith, in draw order.
pub const TOOLS: &[MaterialType] = &[
    MaterialType::Hammer,
    MaterialType::Blade,
    MaterialType::Pick,
    MaterialType::Axe,
    MaterialType::Saw,
    MaterialType::Scythe,
    MaterialType::FishingRod,
];

/// A fixed group of materials that a single workshop chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialGroup {
    /// [`WEAPONS`].
    Weapons,
    /// [`TOOLS`].
    Tools,
}

impl MaterialGroup {
    /// Members of this group in draw order.
    #[must_use]
    pub const fn members(self) -> &'static [MaterialType] {
        match self {
            Self::Weapons => WEAPONS,
            Self::Tools => TOOLS,
        }
    }

    /// Whether `material` belongs to this group.
    #[must_use]
    pub fn contains(self, material: MaterialType) -> bool {
        self.members().contains(&material)
    }
}

impl std::fmt::Display for MaterialGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapons => f.write_str("weapons"),
            Self::Tools => f.write_str("tools"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_ordinal_order() {
        for (index, material) in MaterialType::ALL.iter().enumerate() {
            assert_eq!(material.ordinal(), index);
            assert_eq!(MaterialType::from_ordinal(index), Some(*material));
        }
        assert_eq!(MaterialType::from_ordinal(MaterialType::COUNT), None);
    }

    #[test]
    fn test_group_membership_matches_constants() {
        for material in MaterialType::ALL {
            assert_eq!(material.is_weapon(), WEAPONS.contains(&material));
            assert_eq!(material.is_tool(), TOOLS.contains(&material));
            assert!(!(material.is_weapon() && material.is_tool()));
        }
    }

    #[test]
    fn test_group_lookup() {
        assert_eq!(MaterialType::Bow.group(), Some(MaterialGroup::Weapons));
        assert_eq!(MaterialType::Saw.group(), Some(MaterialGroup::Tools));
        assert_eq!(MaterialType::Wine.group(), None);
        assert!(MaterialGroup::Tools.contains(MaterialType::FishingRod));
        assert!(!MaterialGroup::Weapons.contains(MaterialType::Hammer));
    }

    #[test]
    fn test_group_order_is_fixed() {
        assert_eq!(
            MaterialGroup::Weapons.members(),
            &[MaterialType::Sword, MaterialType::Spear, MaterialType::Bow]
        );
        assert_eq!(MaterialGroup::Tools.members().len(), 7);
        assert_eq!(MaterialGroup::Tools.members()[0], MaterialType::Hammer);
        assert_eq!(MaterialGroup::Tools.members()[6], MaterialType::FishingRod);
    }
}
