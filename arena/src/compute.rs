use cluster::JobHandle;
use game::Outcome;
use rating::{Rating, TrueSkill};

use super::{validated_outcome, MatchRecord};

/// Applies every validated result to the ratings, one match at a time, in
/// the order the handles are given. Each update reads only the two
/// involved ratings, so matches over disjoint pairs commute; only chains
/// sharing an agent are order-dependent. The `ratings` slice is
/// index-parallel with the agent population.
pub fn compute_ratings<H>(handles: &[H], ratings: &mut [Rating], env: &TrueSkill)
where
    H: JobHandle<MatchRecord>,
{
    for handle in handles {
        if let Some((outcome, agent_a, agent_b)) = validated_outcome(handle) {
            let (winner, loser, drawn) = match outcome {
                Outcome::AgentA => (agent_a, agent_b, false),
                Outcome::AgentB => (agent_b, agent_a, false),
                Outcome::Tie => (agent_a, agent_b, true),
            };

            let (new_winner, new_loser) = env.rate_1vs1(ratings[winner], ratings[loser], drawn);
            ratings[winner] = new_winner;
            ratings[loser] = new_loser;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeHandle;
    use serde_json::json;

    #[test]
    fn test_winner_rises_and_loser_falls() {
        let env = TrueSkill::default();
        let mut ratings = vec![Rating::default(); 2];
        let handles = vec![FakeHandle::succeeded(json!(0), 0, 1)];

        compute_ratings(&handles, &mut ratings, &env);

        assert!(ratings[0].mu > Rating::default().mu);
        assert!(ratings[1].mu < Rating::default().mu);
    }

    #[test]
    fn test_agent_b_payload_selects_the_right_winner() {
        let env = TrueSkill::default();
        let mut ratings = vec![Rating::default(); 2];
        let handles = vec![FakeHandle::succeeded(json!(1), 0, 1)];

        compute_ratings(&handles, &mut ratings, &env);

        assert!(ratings[1].mu > ratings[0].mu);
    }

    #[test]
    fn test_invalid_results_leave_ratings_untouched() {
        let env = TrueSkill::default();
        let mut ratings = vec![Rating::default(); 2];
        let handles = vec![
            FakeHandle::failed(),
            FakeHandle::succeeded(json!(""), 0, 1),
            FakeHandle::pending(),
        ];

        compute_ratings(&handles, &mut ratings, &env);

        assert_eq!(ratings[0], Rating::default());
        assert_eq!(ratings[1], Rating::default());
    }

    #[test]
    fn test_disjoint_matches_commute() {
        let env = TrueSkill::default();
        let a_beats_b = FakeHandle::succeeded(json!(0), 0, 1);
        let c_beats_d = FakeHandle::succeeded(json!(0), 2, 3);

        let mut forward = vec![Rating::default(); 4];
        compute_ratings(
            &[a_beats_b.clone(), c_beats_d.clone()],
            &mut forward,
            &env,
        );

        let mut reversed = vec![Rating::default(); 4];
        compute_ratings(&[c_beats_d, a_beats_b], &mut reversed, &env);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_tie_is_applied_as_a_drawn_update() {
        let env = TrueSkill::default();
        let mut ratings = vec![
            Rating {
                mu: 28.0,
                sigma: 7.0,
            },
            Rating {
                mu: 22.0,
                sigma: 7.0,
            },
        ];
        let handles = vec![FakeHandle::succeeded(json!(null), 0, 1)];

        compute_ratings(&handles, &mut ratings, &env);

        assert!(ratings[0].mu < 28.0);
        assert!(ratings[1].mu > 22.0);
    }
}
