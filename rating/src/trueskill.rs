use serde::{Deserialize, Serialize};
use skillratings::trueskill::{trueskill, TrueSkillConfig, TrueSkillRating};
use skillratings::Outcomes;

/// Public skill estimate: a Gaussian belief over an agent's strength.
/// Thin serializable wrapper over the skillratings representation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64,
}

impl Default for Rating {
    fn default() -> Self {
        TrueSkillRating::new().into()
    }
}

impl From<Rating> for TrueSkillRating {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.mu,
            uncertainty: rating.sigma,
        }
    }
}

impl From<TrueSkillRating> for Rating {
    fn from(rating: TrueSkillRating) -> Self {
        Self {
            mu: rating.rating,
            sigma: rating.uncertainty,
        }
    }
}

/// Two-player TrueSkill environment. The canonical parameterization
/// (beta = sigma/2, tau = sigma/100, 10% draws) is the config default.
#[derive(Debug, Clone)]
pub struct TrueSkill {
    config: TrueSkillConfig,
}

impl Default for TrueSkill {
    fn default() -> Self {
        Self {
            config: TrueSkillConfig::new(),
        }
    }
}

impl TrueSkill {
    pub fn new(config: TrueSkillConfig) -> Self {
        Self { config }
    }

    /// Applies one match result. For a decisive result the first argument
    /// is the winner; for `drawn` the order of the two is irrelevant.
    pub fn rate_1vs1(&self, winner: Rating, loser: Rating, drawn: bool) -> (Rating, Rating) {
        let outcome = if drawn { Outcomes::DRAW } else { Outcomes::WIN };

        let (new_winner, new_loser) =
            trueskill(&winner.into(), &loser.into(), &outcome, &self.config);

        (new_winner.into(), new_loser.into())
    }
}
