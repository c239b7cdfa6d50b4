//! Determinism testing utilities.
//!
//! Provides a harness for verifying that production plans reach identical
//! results given identical scripts and seeds.
//!
//! # Testing Strategy
//!
//! Every peer of a lockstep session replays the same scheduler calls against
//! its own copy of the plan. Sources of divergence include:
//!
//! - **Draw order**: one extra or missing draw shifts every later draw. We
//!   compare draw counts alongside state hashes.
//!
//! - **Float evaluation**: weights are computed in `f32`; the hash covers raw
//!   bit patterns so any rounding difference shows up.
//!
//! - **Thread scheduling**: replicas are run on separate threads and must
//!   still agree.

use std::thread;

use armory_core::material::MaterialType;
use armory_core::production::MaterialProduction;
use armory_core::random::SeededRandom;

use crate::script::{run_script, PlanStep};

/// Hashes collected from repeated runs of one draw sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether every replica ended on the same hash.
    pub is_deterministic: bool,
    /// Final hash of each replica, in run order.
    pub hashes: Vec<u64>,
    /// Steps each replica applied.
    pub steps: u64,
}

impl DeterminismResult {
    /// Distinct final hashes, sorted.
    #[must_use]
    pub fn distinct_hashes(&self) -> Vec<u64> {
        let mut distinct = self.hashes.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }

    /// Panic with the diverging hashes unless every replica agreed.
    ///
    /// # Panics
    ///
    /// Panics if two replicas ended on different hashes.
    pub fn assert_deterministic(&self) {
        if self.is_deterministic {
            return;
        }
        let distinct = self.distinct_hashes();
        panic!(
            "Replicas ended on {} different plan hashes after {} steps each \
             ({} replicas): {:?}",
            distinct.len(),
            self.steps,
            self.hashes.len(),
            self.hashes
        );
    }
}

/// Replay `steps` steps on `replicas` independent copies and compare the
/// final hashes.
///
/// `setup` builds one replica (usually a plan plus its seeded source),
/// `step` advances it by one scheduler call and `hash` fingerprints it.
/// Fold the draw count into `hash` to catch a replica that drew a
/// different number of times but happened to end on the same plan.
pub fn verify_determinism<S, Setup, Step, HashFn>(
    replicas: usize,
    steps: u64,
    setup: Setup,
    step: Step,
    hash: HashFn,
) -> DeterminismResult
where
    Setup: Fn() -> S,
    Step: Fn(&mut S),
    HashFn: Fn(&S) -> u64,
{
    let hashes: Vec<u64> = (0..replicas)
        .map(|_| {
            let mut replica = setup();
            (0..steps).for_each(|_| step(&mut replica));
            hash(&replica)
        })
        .collect();

    DeterminismResult {
        is_deterministic: hashes.windows(2).all(|pair| pair[0] == pair[1]),
        hashes,
        steps,
    }
}

/// Final state of one replica.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaOutcome {
    /// Hash of the final plan.
    pub state_hash: u64,
    /// Draws taken from the session source.
    pub draws: u64,
    /// Result of every drop step, in order.
    pub drops: Vec<Option<MaterialType>>,
}

/// Result of running replicas of one session.
#[derive(Debug, Clone)]
pub struct ReplicaResult {
    /// Outcome of each replica.
    pub outcomes: Vec<ReplicaOutcome>,
    /// Session seed shared by all replicas.
    pub seed: u64,
}

impl ReplicaResult {
    /// Check if all replicas agree.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.outcomes.windows(2).all(|w| w[0] == w[1])
    }

    /// Assert all replicas agree.
    ///
    /// # Panics
    ///
    /// Panics if any replica diverged.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic() {
            let hashes: Vec<u64> = self.outcomes.iter().map(|o| o.state_hash).collect();
            let draws: Vec<u64> = self.outcomes.iter().map(|o| o.draws).collect();
            panic!(
                "Replicas diverged!\n\
                 Replicas: {}\n\
                 Seed: {}\n\
                 Hashes: {:?}\n\
                 Draws: {:?}",
                self.outcomes.len(),
                self.seed,
                hashes,
                draws
            );
        }
    }
}

/// Replay `script` on a fresh plan with a source seeded by `seed`.
#[must_use]
pub fn run_replica(script: &[PlanStep], seed: u64) -> ReplicaOutcome {
    let mut production = MaterialProduction::new();
    let mut random = SeededRandom::new(seed);
    let drops = run_script(&mut production, &mut random, script);

    ReplicaOutcome {
        state_hash: production.state_hash(),
        draws: random.draws(),
        drops,
    }
}

/// Replay `script` on `replicas` threads, one plan and one source each.
///
/// # Panics
///
/// Panics if a replica thread panics.
#[must_use]
pub fn run_replicas(script: &[PlanStep], seed: u64, replicas: usize) -> ReplicaResult {
    let outcomes = thread::scope(|scope| {
        let handles: Vec<_> = (0..replicas)
            .map(|_| scope.spawn(|| run_replica(script, seed)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Replica thread panicked"))
            .collect()
    });

    tracing::debug!(seed, replicas, steps = script.len(), "Ran replicas");
    ReplicaResult { outcomes, seed }
}

/// Replay `script` twice with the same seed and check both runs agree.
#[must_use]
pub fn verify_plan_determinism(script: &[PlanStep], seed: u64) -> bool {
    run_replica(script, seed) == run_replica(script, seed)
}
