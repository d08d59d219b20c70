//! Questlog entry point.

use clap::Parser;
use questlog::cli::{self, Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Status { json } => cli::cmd_status(json),
        Command::Tasks { json } => cli::cmd_tasks(json),
        Command::Quests { json } => cli::cmd_quests(json),
        Command::Simulate { seed, json } => cli::cmd_simulate(seed, json),
        Command::Serve { addr, seed } => cli::cmd_serve(addr, seed),
    };

    if let Err(error) = result {
        tracing::error!(%error, "command failed");
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
