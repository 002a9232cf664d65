mod cli;

use anyhow::Result;
use arena::{ArenaOptions, RunReport};
use clap::Parser;
use cli::{Cli, Commands, RunCommand};
use cluster::{LocalPool, NodeList};
use common::{get_env_usize, ConfigLoader};
use dotenv::dotenv;
use env_logger::Env;
use game::GameOptions;
use log::info;
use rand::prelude::{SeedableRng, StdRng};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut builder = tokio::runtime::Builder::new_multi_thread();

    builder.enable_all();

    if let Some(worker_threads) = get_env_usize("TOKIO_THREADS")? {
        builder.worker_threads(worker_threads);
    }

    builder.build()?.block_on(async_main())?;

    Ok(())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(run_args) => run(run_args).await?,
    }

    Ok(())
}

async fn run(run_args: &RunCommand) -> Result<()> {
    let (arena_options, game_options) = load_options(run_args)?;

    let nodes = NodeList::from_file(&run_args.nodes)?;
    info!(
        "Connecting to cluster scheduler {} with workers:",
        nodes.scheduler()
    );
    for worker in nodes.workers() {
        info!("{:>35}", worker);
    }

    let pool = LocalPool::new(nodes.workers().len().max(1));

    let mut rng = StdRng::from_entropy();
    let report = arena::run(&pool, &arena_options, &game_options, &mut rng).await?;

    print_summary(&report);

    Ok(())
}

fn load_options(run_args: &RunCommand) -> Result<(ArenaOptions, GameOptions)> {
    match &run_args.config {
        Some(path) => {
            let config = ConfigLoader::new(path, "run".to_string())?;
            let arena_options: ArenaOptions = config.load()?;
            let game_options: GameOptions = config.load()?;

            Ok((arena_options, game_options))
        }
        None => Ok((ArenaOptions::default(), GameOptions::default())),
    }
}

fn print_summary(report: &RunReport) {
    println!(
        "Completed: {}, Errors: {}",
        report.counts.completed, report.counts.error
    );
    println!(
        "Matches run in {:.2}s, skills computed in {:.2}s",
        report.play_elapsed.as_secs_f64(),
        report.rate_elapsed.as_secs_f64()
    );
    println!("Accuracy of the ratings: {:.2}", report.accuracy);
}
