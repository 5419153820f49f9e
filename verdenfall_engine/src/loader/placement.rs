//! Placement helpers for populating rooms and the player's starting bag.

use anyhow::{Context, Result, bail};
use log::info;

use verdenfall_data::{LocationDef, WorldDef};

use crate::item::{Item, ItemHolder, Weight};
use crate::world::World;

/// Place items in their starting locations.
///
/// # Errors
/// - on a room reference that doesn't resolve
pub fn place_items(world: &mut World, def: &WorldDef) -> Result<()> {
    let mut in_rooms = 0;
    let mut in_inventory = 0;
    for item_def in &def.items {
        let item = Item::new(
            item_def.name.clone(),
            item_def.description.clone(),
            Weight::from_kg(item_def.weight),
        );
        let displaced = match &item_def.location {
            LocationDef::Inventory => {
                in_inventory += 1;
                world.player.add_item(item)
            },
            LocationDef::Room(symbol) => {
                let room = world
                    .room_by_symbol(symbol)
                    .with_context(|| format!("room id '{symbol}' for item '{}' not found", item_def.name))?;
                in_rooms += 1;
                world.room_mut(room).add_item(item)
            },
        };
        if let Some(old) = displaced {
            bail!("item '{}' collides with item '{}' already placed there", item_def.name, old.name());
        }
    }
    info!("placed {in_rooms} items into rooms and {in_inventory} into the player's inventory");
    Ok(())
}

/// Name the player and put them in the starting room.
///
/// # Errors
/// - if the start room doesn't exist
pub fn place_player(world: &mut World, def: &WorldDef) -> Result<()> {
    let player = &def.game.player;
    let start = world
        .room_by_symbol(&player.start_room)
        .with_context(|| format!("player start room '{}' not found", player.start_room))?;
    world.place_player(player.name.clone(), player.description.clone(), start);
    info!("player \"{}\" placed in '{}'", player.name, player.start_room);
    Ok(())
}
