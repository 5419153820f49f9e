#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Verdenfall **
//! A text adventure across a darkening land.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use verdenfall_engine::data_paths::data_path;
use verdenfall_engine::loader::DEFAULT_WORLD_FILE;
use verdenfall_engine::{VERDENFALL_VERSION, game_rng, load_world, run_repl};

#[derive(Parser)]
#[command(author, version, about = "Verdenfall: a text adventure with quests.")]
struct Cli {
    /// World file to play instead of the shipped one.
    #[arg(long, value_name = "PATH")]
    world: Option<PathBuf>,
    /// Seed NPC movement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Play under this name instead of the world's default.
    #[arg(long, value_name = "NAME")]
    name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let world_path = cli.world.unwrap_or_else(|| data_path(DEFAULT_WORLD_FILE));
    info!("Start: loading Verdenfall {VERDENFALL_VERSION} world from {}", world_path.display());
    let mut world = load_world(&world_path).with_context(|| format!("while loading world '{}'", world_path.display()))?;
    info!("World loaded successfully.");

    if let Some(name) = cli.name {
        world.player.name = name;
    }

    let mut rng = game_rng(cli.seed);
    info!("Starting the game!");
    run_repl(&mut world, &mut rng)
}
