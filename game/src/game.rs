use anyhow::{bail, Result};
use rand::Rng;
use serde_json::{json, Value};

use super::{Agent, GameOptions, Outcome, FAILURE_PROB, MALFORMED_PROB};

/// Simulates one match between two agents. The raw payload is returned
/// rather than an `Outcome` because a small fraction of matches report
/// corrupted results that only the validator may reject.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        Self { options }
    }

    pub fn play(&self, rng: &mut impl Rng, agent_a: &Agent, agent_b: &Agent) -> Result<Value> {
        if !self.options.latency.is_zero() {
            std::thread::sleep(self.options.latency);
        }

        if rng.gen::<f64>() < FAILURE_PROB {
            bail!("match task failed");
        }

        if rng.gen::<f64>() < MALFORMED_PROB {
            return Ok(malformed_payload(rng));
        }

        let deterministic = if agent_a.strength() < agent_b.strength() {
            Outcome::AgentB
        } else {
            Outcome::AgentA
        };

        let gap = (agent_a.strength() - agent_b.strength()).abs() as f64
            / self.options.strength_range as f64;

        // Upsets and ties become rarer as the strength gap grows. Both
        // probabilities clamp at zero so a wide gap never overrides.
        if rng.gen::<f64>() < (self.options.max_random_prob - gap).max(0.0) {
            if rng.gen::<f64>() < (self.options.max_tie_prob - gap).max(0.0) {
                return Ok(Outcome::Tie.to_payload());
            }

            return Ok(deterministic.flipped().to_payload());
        }

        Ok(deterministic.to_payload())
    }
}

fn malformed_payload(rng: &mut impl Rng) -> Value {
    match rng.gen_range(0..4) {
        0 => json!(""),
        1 => json!(-10),
        2 => json!(0.5),
        _ => json!({}),
    }
}
