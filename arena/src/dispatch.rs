use cluster::WorkerPool;
use game::{Agent, Game};
use rand::prelude::{SeedableRng, StdRng};
use rand::{Rng, RngCore};

use super::MatchRecord;

/// Picks two distinct agents uniformly. The second draw is over a reduced
/// range and shifted past the first index, so self-play is impossible
/// without rejection sampling.
pub fn draw_pair(rng: &mut impl Rng, num_agents: usize) -> (usize, usize) {
    assert!(num_agents >= 2, "need at least two agents for a match");

    let agent_a = rng.gen_range(0..num_agents);
    let mut agent_b = rng.gen_range(0..num_agents - 1);
    if agent_b >= agent_a {
        agent_b += 1;
    }

    (agent_a, agent_b)
}

/// Submits `num_matches` random pairings to the pool without blocking and
/// returns the handles in submission order. Each job gets its own RNG seed
/// drawn from the caller's RNG, so a seeded run is reproducible regardless
/// of which worker executes which job.
pub fn run_matches<P>(
    pool: &P,
    game: &Game,
    agents: &[Agent],
    num_matches: usize,
    rng: &mut impl Rng,
) -> Vec<P::Handle>
where
    P: WorkerPool<MatchRecord>,
{
    (0..num_matches)
        .map(|_| {
            let (agent_a, agent_b) = draw_pair(rng, agents.len());
            let seed = rng.next_u64();
            let game = game.clone();
            let a = agents[agent_a];
            let b = agents[agent_b];

            pool.submit(move || {
                let mut job_rng = StdRng::seed_from_u64(seed);
                let payload = game.play(&mut job_rng, &a, &b)?;

                Ok(MatchRecord {
                    payload,
                    agent_a,
                    agent_b,
                })
            })
        })
        .collect()
}
