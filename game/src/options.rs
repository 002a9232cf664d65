use std::time::Duration;

use anyhow::Result;
use common::Config;
use serde::{Deserialize, Serialize};

use super::STRENGTH_RANGE;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameOptions {
    /// Artificial per-match latency, emulating an unresponsive remote task.
    pub latency: Duration,
    /// Maximum probability of overriding the deterministic result. Shrinks
    /// linearly with the strength gap.
    pub max_random_prob: f64,
    /// Maximum probability of a tie within the override branch.
    pub max_tie_prob: f64,
    /// Normalizer for strength gaps.
    pub strength_range: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            latency: Duration::from_secs(1),
            max_random_prob: 0.3,
            max_tie_prob: 0.2,
            strength_range: STRENGTH_RANGE,
        }
    }
}

impl Config for GameOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        Ok(Self {
            latency: config
                .get("latency_ms")
                .and_then(|v| v.as_usize())
                .map(|ms| Duration::from_millis(ms as u64))
                .unwrap_or(Duration::from_secs(1)),
            max_random_prob: config
                .get("max_random_prob")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.3),
            max_tie_prob: config
                .get("max_tie_prob")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.2),
            strength_range: config
                .get("strength_range")
                .and_then(|v| v.as_usize())
                .map(|r| r as i64)
                .unwrap_or(STRENGTH_RANGE),
        })
    }
}
