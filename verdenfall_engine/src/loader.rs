//! Loader utilities for building a `World` from serialized data.
//!
//! World content is a TOML `WorldDef`. It is validated as a whole (every
//! problem reported at once) before any runtime structure is built.

pub mod placement;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use verdenfall_data::WorldDef;

use crate::loader::placement::{place_items, place_player};
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::World;

/// File name of the shipped world inside the data directory.
pub const DEFAULT_WORLD_FILE: &str = "world.toml";

/// Load, validate and build the `World` described by the TOML file at `path`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or invalid references.
pub fn load_world(path: &Path) -> Result<World> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    world_from_def(&worlddef)
}

/// Validate and build a `World` from an already-parsed definition.
///
/// # Errors
/// - if the definition fails validation
pub fn world_from_def(worlddef: &WorldDef) -> Result<World> {
    validate_worlddef(worlddef)?;
    let mut world = build_world_from_def(worlddef).context("while building world from worlddef")?;
    place_items(&mut world, worlddef).context("while placing items")?;
    place_player(&mut world, worlddef).context("while placing player")?;
    info!("{} rooms added to World", world.rooms.len());
    info!("{} NPCs added to World", world.npcs.len());
    info!("{} items placed", worlddef.items.len());
    info!("{} quests added to World", world.player.quests.quests().len());
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = verdenfall_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
