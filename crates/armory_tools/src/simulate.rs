//! Headless draw simulation.
//!
//! Runs a production plan through a number of workshop rounds without a
//! game around it. Each round asks for one weapon and then one tool, the
//! order a settlement's smiths are served in. Useful for eyeballing how a
//! ratio or queue setup plays out.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use armory_core::material::{MaterialGroup, MaterialType};
use armory_core::production::MaterialProduction;
use armory_core::random::SeededRandom;

/// Options for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Session seed.
    pub seed: u64,
    /// Number of rounds to run.
    pub rounds: u32,
}

/// Tally for one material group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupTally {
    /// Items produced per material.
    pub produced: BTreeMap<MaterialType, u32>,
    /// Rounds where nothing in the group was eligible.
    pub idle_rounds: u32,
}

impl GroupTally {
    fn record(&mut self, outcome: Option<MaterialType>) {
        match outcome {
            Some(material) => *self.produced.entry(material).or_insert(0) += 1,
            None => self.idle_rounds += 1,
        }
    }

    /// Total items produced.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.produced.values().sum()
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Session seed.
    pub seed: u64,
    /// Rounds run.
    pub rounds: u32,
    /// Weapon smith results.
    pub weapons: GroupTally,
    /// Tool smith results.
    pub tools: GroupTally,
    /// Draws taken from the session source.
    pub draws: u64,
    /// Hash of the plan after the last round.
    pub final_state_hash: u64,
}

impl SimulationReport {
    /// Tally for `group`.
    #[must_use]
    pub const fn tally(&self, group: MaterialGroup) -> &GroupTally {
        match group {
            MaterialGroup::Weapons => &self.weapons,
            MaterialGroup::Tools => &self.tools,
        }
    }
}

/// Run `options.rounds` rounds against `production`.
pub fn run_simulation(
    production: &mut MaterialProduction,
    options: SimulationOptions,
) -> SimulationReport {
    let mut random = SeededRandom::new(options.seed);
    let mut weapons = GroupTally::default();
    let mut tools = GroupTally::default();

    for round in 0..options.rounds {
        weapons.record(production.drop_weapon(&mut random));
        tools.record(production.drop_tool(&mut random));
        tracing::trace!(round, draws = random.draws(), "Simulated round");
    }

    tracing::info!(
        seed = options.seed,
        rounds = options.rounds,
        draws = random.draws(),
        "Simulation finished"
    );

    SimulationReport {
        seed: options.seed,
        rounds: options.rounds,
        weapons,
        tools,
        draws: random.draws(),
        final_state_hash: production.state_hash(),
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed {} / {} rounds / {} draws", self.seed, self.rounds, self.draws)?;
        for group in [MaterialGroup::Weapons, MaterialGroup::Tools] {
            let tally = self.tally(group);
            writeln!(f, "{group}: {} produced, {} idle rounds", tally.total(), tally.idle_rounds)?;
            for material in group.members() {
                let count = tally.produced.get(material).copied().unwrap_or(0);
                writeln!(f, "  {:<12} {count:>6}", material.display_name())?;
            }
        }
        write!(f, "Final state hash: {:016x}", self.final_state_hash)
    }
}
