//! Random move bot - drops each pack at a random column and rotation.

use block_core::GameConfig;
use bot_random::{run, BotConfig, RngSource};
use clap::Parser;
use drop_protocol::stdio_session;
use std::path::PathBuf;
use tracing::Level;

/// Reference bot that plays random drops.
#[derive(Parser)]
#[command(name = "bot-random")]
#[command(about = "Drops each pack at a random position and rotation")]
struct Args {
    /// Path to a TOML config file (defaults to ./bot.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name printed to the server
    #[arg(long)]
    name: Option<String>,

    /// Seed for the move generator
    #[arg(long)]
    seed: Option<u64>,

    /// Log pack and board dumps every turn
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BotConfig::load_from(path)?,
        None => BotConfig::load()?,
    };
    if let Some(name) = args.name {
        config.name = name;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.verbose |= args.verbose;

    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    tracing::info!("Starting {} (seed {})", config.name, config.seed);

    let mut session = stdio_session(GameConfig::standard());
    let mut source = RngSource::seeded(config.seed);
    match run(&mut session, &config.name, &mut source) {
        Ok(summary) => {
            tracing::info!("Played {} turns", summary.turns);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Fatal protocol error: {}", e);
            Err(e.into())
        }
    }
}
