//! Weighted group draw deciding what a workshop produces next.
//!
//! Each member of a [`MaterialGroup`] gets an integer percentage weight:
//!
//! - **Demand regime**: when anything in the group is queued, a member's
//!   weight is its share of the group's queued demand.
//! - **Ratio regime**: otherwise the target ratios are used directly.
//!
//! A single draw `r` in `[0, total)` is taken from the session's
//! [`RandomSource`], then the group is walked in order and the first member
//! with `r <= weight` wins, subtracting each passed weight from `r`. The
//! comparison is inclusive, so every member gets one extra slot compared to
//! a plain proportional draw. The winner's queued demand drops by one.
//!
//! Draw count is part of the lockstep contract: exactly one draw when the
//! total weight is positive, none otherwise.

use serde::{Deserialize, Serialize};

use super::MaterialProduction;
use crate::material::{MaterialGroup, MaterialType};
use crate::random::RandomSource;

/// Source of the weights for a group draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionRegime {
    /// Weights are shares of queued demand.
    Demand,
    /// Nothing queued; weights are target ratios.
    Ratio,
}

/// Integer weights of a group, in group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupWeights {
    /// Where the weights came from.
    pub regime: SelectionRegime,
    /// Percentage weight per group member.
    pub weights: Vec<i32>,
}

impl GroupWeights {
    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.weights.iter().map(|&w| i64::from(w)).sum()
    }
}

/// Truncate a fractional share to a whole percentage.
#[allow(clippy::cast_possible_truncation)]
fn percent(share: f32) -> i32 {
    (share * 100.0).floor() as i32
}

/// Walk `weights` in order and return the index `draw` lands on.
///
/// Returns `None` only when `draw` is above the sum of the weights. A draw
/// below a positive total always lands on some index, negative weights
/// included.
#[must_use]
pub fn pick_index(weights: &[i32], draw: u32) -> Option<usize> {
    let mut remaining = i64::from(draw);
    for (index, &weight) in weights.iter().enumerate() {
        let weight = i64::from(weight);
        if remaining <= weight {
            return Some(index);
        }
        remaining -= weight;
    }
    None
}

impl MaterialProduction {
    /// Compute the draw weights of `group` from the current state.
    #[must_use]
    pub fn group_weights(&self, group: MaterialGroup) -> GroupWeights {
        let members = group.members();
        let demand_sum = members
            .iter()
            .fold(0.0f32, |sum, &material| sum + self.future_demand(material));

        if demand_sum > 0.0 {
            GroupWeights {
                regime: SelectionRegime::Demand,
                weights: members
                    .iter()
                    .map(|&material| percent(self.future_demand(material) / demand_sum))
                    .collect(),
            }
        } else {
            GroupWeights {
                regime: SelectionRegime::Ratio,
                weights: members
                    .iter()
                    .map(|&material| percent(self.ratio_of_material(material)))
                    .collect(),
            }
        }
    }

    /// Pick the next weapon to forge.
    ///
    /// Returns `None` when no weapon is eligible this cycle.
    pub fn drop_weapon<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Option<MaterialType> {
        self.drop_material(MaterialGroup::Weapons, random)
    }

    /// Pick the next tool to forge.
    ///
    /// Returns `None` when no tool is eligible this cycle.
    pub fn drop_tool<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> Option<MaterialType> {
        self.drop_material(MaterialGroup::Tools, random)
    }

    /// Run a weighted draw over `group` and consume one queued unit of the
    /// winner.
    ///
    /// A non-positive total weight yields `None` without touching `random`
    /// or the plan.
    pub fn drop_material<R: RandomSource + ?Sized>(
        &mut self,
        group: MaterialGroup,
        random: &mut R,
    ) -> Option<MaterialType> {
        let members = group.members();
        let weights = self.group_weights(group);
        let total = weights.total();

        if total <= 0 {
            tracing::trace!(%group, regime = ?weights.regime, total, "Nothing eligible to drop");
            return None;
        }

        // Absurd ratios can overflow the draw range; they are the caller's problem.
        let bound = u32::try_from(total).unwrap_or(u32::MAX);
        let draw = random.next_bounded(bound);

        let Some(index) = pick_index(&weights.weights, draw) else {
            // Only reachable if the source ignores its bound.
            tracing::trace!(%group, total, draw, "Draw ran past every weight");
            return None;
        };

        let winner = members[index];
        self.decrease_number_of_future_produced_material(winner);
        tracing::trace!(
            %group,
            regime = ?weights.regime,
            total,
            draw,
            %winner,
            "Dropped material"
        );
        Some(winner)
    }
}
