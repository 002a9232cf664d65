use anyhow::{bail, Result};
use common::Config;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArenaOptions {
    pub num_agents: usize,
    pub num_matches: usize,
    pub poll_interval_secs: u64,
}

impl Default for ArenaOptions {
    fn default() -> Self {
        Self {
            num_agents: 10,
            num_matches: 100,
            poll_interval_secs: 1,
        }
    }
}

impl ArenaOptions {
    /// Pair selection needs at least two agents; anything less is a
    /// configuration error, not a runtime panic.
    pub fn validate(&self) -> Result<()> {
        if self.num_agents < 2 {
            bail!("num_agents must be at least 2, got {}", self.num_agents);
        }

        Ok(())
    }
}

impl Config for ArenaOptions {
    fn load(config: &common::ConfigLoader) -> Result<Self> {
        let options = Self {
            num_agents: config
                .get("num_agents")
                .and_then(|v| v.as_usize())
                .unwrap_or(10),
            num_matches: config
                .get("num_matches")
                .and_then(|v| v.as_usize())
                .unwrap_or(100),
            poll_interval_secs: config
                .get("poll_interval_secs")
                .and_then(|v| v.as_usize())
                .map(|v| v as u64)
                .unwrap_or(1),
        };

        options.validate()?;

        Ok(options)
    }
}
