use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::RngCore;

use game_session::config::Config;
use game_session::scores::ScoreStore;
use game_session::session::play_random_game;

#[derive(Parser, Debug)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of games to play (overrides the config)
    #[arg(long)]
    games: Option<u32>,

    /// Score database path (overrides the config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Base RNG seed; game i plays with seed + i (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_toml(path)
            .map_err(|err| anyhow::anyhow!("failed to load {}: {err}", path.display()))?,
        None => Config::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(db) = args.db {
        config.store.db_path = Some(db);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let mut store = match &config.store.db_path {
        Some(path) => Some(
            ScoreStore::open(path, config.store.keep)
                .with_context(|| format!("failed to open score store at {}", path.display()))?,
        ),
        None => None,
    };

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    for i in 0..config.games {
        let outcome = play_random_game(base_seed.wrapping_add(u64::from(i)));
        info!(
            "game {}/{}: score {} highest tile {} steps {}{}",
            i + 1,
            config.games,
            outcome.score,
            outcome.highest_tile,
            outcome.steps,
            if outcome.won { " (won)" } else { "" }
        );
        if let Some(store) = store.as_mut() {
            store.submit(outcome.score).context("failed to record score")?;
        }
    }

    if let Some(store) = &store {
        println!("High scores ({})", store.db_path().display());
        for (rank, record) in store.top_scores()?.iter().enumerate() {
            println!("{:>2}. {:>8}  {}", rank + 1, record.score, record.recorded_at);
        }
    }

    Ok(())
}
