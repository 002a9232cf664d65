use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "Skill Ranking Client")]
#[clap(about = "Runs distributed matches and ranks the agents by skill", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(RunCommand),
}

#[derive(Args)]
pub struct RunCommand {
    /// Optional HOCON config with run parameters; defaults apply otherwise.
    #[clap(short, long)]
    pub config: Option<String>,

    /// Node list file: scheduler address first, one worker per line.
    #[clap(short, long, default_value_t = String::from("ips.txt"))]
    pub nodes: String,
}
