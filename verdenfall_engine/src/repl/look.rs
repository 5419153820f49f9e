//! `repl::look` module
//!
//! Handlers and helpers that describe the player's surroundings.

use crate::error::GameError;
use crate::item::ItemHolder;
use crate::repl::ReplControl;
use crate::view::{ItemLine, NpcLine, View, ViewItem};
use crate::world::World;

/// Queue the current room's title, description and exits.
pub fn push_room_description(world: &World, view: &mut View) {
    let room = world.player_room();
    view.push(ViewItem::RoomDescription {
        name: room.name.clone(),
        description: room.description.clone(),
        exits: room.exit_string(),
    });
}

/// Queue the full picture of the current room: description, items and company.
pub fn push_room_overview(world: &World, view: &mut View) {
    push_room_description(world, view);
    let room = world.player_room();
    view.push(ViewItem::RoomItems(
        room.items()
            .iter()
            .map(|item| ItemLine {
                name: item.name().to_string(),
                description: item.description().to_string(),
                weight: item.weight(),
            })
            .collect(),
    ));
    let npcs: Vec<_> = world
        .npcs_here()
        .map(|npc| NpcLine {
            name: npc.name.clone(),
            description: npc.description.clone(),
        })
        .collect();
    if !npcs.is_empty() {
        view.push(ViewItem::RoomNpcs(npcs));
    }
}

/// Describe the room, what lies in it and who is present.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn look_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    push_room_overview(world, view);
    Ok(ReplControl::Continue)
}
