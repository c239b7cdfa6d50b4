//! Random source that plays back a fixed list of draws.

use std::collections::VecDeque;

use armory_core::random::RandomSource;

/// Plays back scripted draws in order and records every bound requested.
///
/// Lets tests pin a draw to an exact value and check how many draws an
/// operation made, and with which bounds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
    bounds: Vec<u32>,
}

impl ScriptedRandom {
    /// Create a source that returns `draws` in order.
    #[must_use]
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            bounds: Vec::new(),
        }
    }

    /// Bounds requested so far, in call order.
    #[must_use]
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.bounds.len()
    }

    /// Scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    /// # Panics
    ///
    /// Panics if the script is exhausted or the scripted value is outside
    /// `[0, bound)`.
    fn next_bounded(&mut self, bound: u32) -> u32 {
        self.bounds.push(bound);
        let draw = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("Scripted random exhausted at draw {}", self.bounds.len()));
        assert!(
            draw < bound,
            "Scripted draw {draw} is outside [0, {bound})"
        );
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_back_in_order() {
        let mut random = ScriptedRandom::new(&[3, 1, 4]);
        assert_eq!(random.next_bounded(10), 3);
        assert_eq!(random.next_bounded(5), 1);
        assert_eq!(random.remaining(), 1);
        assert_eq!(random.bounds(), &[10, 5]);
        assert_eq!(random.draw_count(), 2);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_panics_when_exhausted() {
        let mut random = ScriptedRandom::new(&[]);
        random.next_bounded(10);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_panics_on_out_of_bound_script() {
        let mut random = ScriptedRandom::new(&[200]);
        random.next_bounded(200);
    }
}
