//! Proptest strategies for production plans.
//!
//! These strategies generate random but reproducible scheduler scripts for
//! property-based testing.

use proptest::prelude::*;

use armory_core::material::{MaterialType, TOOLS, WEAPONS};

use crate::script::PlanStep;

/// Any material type.
pub fn arb_material() -> impl Strategy<Value = MaterialType> {
    (0..MaterialType::COUNT).prop_map(|i| MaterialType::ALL[i])
}

/// A weapon.
pub fn arb_weapon() -> impl Strategy<Value = MaterialType> {
    prop::sample::select(WEAPONS)
}

/// A tool.
pub fn arb_tool() -> impl Strategy<Value = MaterialType> {
    prop::sample::select(TOOLS)
}

/// A demand request, including values on both sides of the valid range.
pub fn arb_demand() -> impl Strategy<Value = f32> {
    -5.0f32..30.0
}

/// A target ratio. Mostly sane, occasionally negative.
pub fn arb_ratio() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => 0.0f32..2.0,
        1 => -1.0f32..0.0,
    ]
}

/// A list of tools needed by idle workers, with repeats.
pub fn arb_needed_tools(max_len: usize) -> impl Strategy<Value = Vec<MaterialType>> {
    proptest::collection::vec(prop_oneof![4 => arb_tool(), 1 => arb_material()], 0..max_len)
}

/// A single scheduler call.
pub fn arb_plan_step() -> impl Strategy<Value = PlanStep> {
    prop_oneof![
        2 => arb_material().prop_map(PlanStep::Increase),
        2 => arb_material().prop_map(PlanStep::Decrease),
        1 => (arb_material(), arb_demand()).prop_map(|(m, v)| PlanStep::SetDemand(m, v)),
        1 => (arb_weapon(), arb_ratio()).prop_map(|(m, r)| PlanStep::SetRatio(m, r)),
        1 => (arb_tool(), arb_ratio()).prop_map(|(m, r)| PlanStep::SetRatio(m, r)),
        1 => arb_needed_tools(12).prop_map(PlanStep::EnsureTools),
        3 => Just(PlanStep::DropWeapon),
        3 => Just(PlanStep::DropTool),
    ]
}

/// A sequence of scheduler calls.
pub fn arb_plan(max_len: usize) -> impl Strategy<Value = Vec<PlanStep>> {
    proptest::collection::vec(arb_plan_step(), 0..max_len)
}
