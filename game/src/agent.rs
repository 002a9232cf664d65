use rand::Rng;

use super::STRENGTH_RANGE;

/// A competitor with a hidden ground-truth strength. The strength is fixed
/// at creation and never observed directly by the rating pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    strength: i64,
}

impl Agent {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            strength: rng.gen_range(0..STRENGTH_RANGE),
        }
    }

    pub fn with_strength(strength: i64) -> Self {
        Self { strength }
    }

    pub fn strength(&self) -> i64 {
        self.strength
    }
}

pub fn spawn_agents(num_agents: usize, rng: &mut impl Rng) -> Vec<Agent> {
    (0..num_agents).map(|_| Agent::new(rng)).collect()
}
