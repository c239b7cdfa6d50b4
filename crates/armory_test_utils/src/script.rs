//! Scripted scheduler calls against a production plan.
//!
//! A script is the sequence of calls an economy's scheduler would make over
//! a session. Replaying the same script with the same seed must reach the
//! same plan on every replica.

use armory_core::material::MaterialType;
use armory_core::production::MaterialProduction;
use armory_core::random::RandomSource;

/// One scheduler call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanStep {
    /// Queue one more of a material.
    Increase(MaterialType),
    /// Drop one queued material.
    Decrease(MaterialType),
    /// Set a queued count directly.
    SetDemand(MaterialType, f32),
    /// Set a target ratio.
    SetRatio(MaterialType, f32),
    /// Raise tool counters to cover the listed tools.
    EnsureTools(Vec<MaterialType>),
    /// Ask for the next weapon.
    DropWeapon,
    /// Ask for the next tool.
    DropTool,
}

impl PlanStep {
    /// Whether this step can draw from the random source.
    #[must_use]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Self::DropWeapon | Self::DropTool)
    }

    /// Apply this step. Drop steps return the selected material.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        production: &mut MaterialProduction,
        random: &mut R,
    ) -> Option<MaterialType> {
        match self {
            Self::Increase(material) => {
                production.increase_number_of_future_produced_material(*material);
                None
            }
            Self::Decrease(material) => {
                production.decrease_number_of_future_produced_material(*material);
                None
            }
            Self::SetDemand(material, count) => {
                production.set_number_of_future_produced_material(*material, *count);
                None
            }
            Self::SetRatio(material, ratio) => {
                production.set_ratio_of_material(*material, *ratio);
                None
            }
            Self::EnsureTools(tools) => {
                production.ensure_needed_tools_are_queued(tools);
                None
            }
            Self::DropWeapon => production.drop_weapon(random),
            Self::DropTool => production.drop_tool(random),
        }
    }
}

/// Apply every step in order and collect the outcome of each drop step.
pub fn run_script<R: RandomSource + ?Sized>(
    production: &mut MaterialProduction,
    random: &mut R,
    steps: &[PlanStep],
) -> Vec<Option<MaterialType>> {
    let mut outcomes = Vec::new();
    for step in steps {
        let outcome = step.apply(production, random);
        if step.is_drop() {
            outcomes.push(outcome);
        }
    }
    outcomes
}
