use std::time::{Duration, Instant};

use anyhow::Result;
use cluster::WorkerPool;
use game::{spawn_agents, Game, GameOptions};
use log::info;
use rand::Rng;
use rating::{estimate_accuracy, Rating, TrueSkill};
use serde::Serialize;

use super::{compute_ratings, run_matches, track_jobs, ArenaOptions, JobCounts, MatchRecord};

#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub counts: JobCounts,
    pub accuracy: f64,
    pub play_elapsed: Duration,
    pub rate_elapsed: Duration,
}

/// The full pipeline: spawn a population with prior ratings, submit every
/// match, wait for all of them to reach a terminal state, then fold the
/// validated results into the ratings sequentially. Aggregation starts
/// strictly after the poll loop exits, so no locking is needed here.
pub async fn run<P>(
    pool: &P,
    options: &ArenaOptions,
    game_options: &GameOptions,
    rng: &mut impl Rng,
) -> Result<RunReport>
where
    P: WorkerPool<MatchRecord>,
{
    options.validate()?;

    let game = Game::new(game_options.clone());
    let agents = spawn_agents(options.num_agents, rng);
    let mut ratings = vec![Rating::default(); agents.len()];
    let env = TrueSkill::default();

    let play_start = Instant::now();
    let handles = run_matches(pool, &game, &agents, options.num_matches, rng);
    let counts = track_jobs(&handles, Duration::from_secs(options.poll_interval_secs)).await;
    let play_elapsed = play_start.elapsed();
    info!("Matches run in {:.2}s", play_elapsed.as_secs_f64());

    let rate_start = Instant::now();
    compute_ratings(&handles, &mut ratings, &env);
    let rate_elapsed = rate_start.elapsed();
    info!("Skills computed in {:.2}s", rate_elapsed.as_secs_f64());

    let accuracy = estimate_accuracy(&agents, &ratings);

    Ok(RunReport {
        counts,
        accuracy,
        play_elapsed,
        rate_elapsed,
    })
}
