//! `repl::inventory` module
//!
//! Handlers that move items between the room and the player's bag, list the
//! bag, and use what's in it.

use crate::error::GameError;
use crate::item::ItemHolder;
use crate::repl::{ReplControl, report_progress};
use crate::view::{ItemLine, View, ViewItem};
use crate::world::World;

fn item_param<'a>(params: &[&'a str]) -> &'a str {
    params.first().copied().unwrap_or_default()
}

/// Pick up an item from the current room.
///
/// # Errors
/// - `ItemNotFound` if the room has no such item
pub fn take_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let action = world.take_item(item_param(params))?;
    view.push(ViewItem::ActionSuccess(format!(
        "You take the {} ({}).",
        action.item, action.weight
    )));
    report_progress(view, action.progress);
    Ok(ReplControl::Continue)
}

/// Put an item from the bag down in the current room.
///
/// # Errors
/// - `ItemNotInInventory` if the player isn't carrying it
pub fn drop_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let action = world.drop_item(item_param(params))?;
    view.push(ViewItem::ActionSuccess(format!("You drop the {}.", action.item)));
    report_progress(view, action.progress);
    Ok(ReplControl::Continue)
}

/// List the bag's contents with each weight and the total.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn check_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    let items = world
        .player
        .items()
        .iter()
        .map(|item| ItemLine {
            name: item.name().to_string(),
            description: item.description().to_string(),
            weight: item.weight(),
        })
        .collect();
    view.push(ViewItem::Inventory {
        items,
        total: world.player.current_weight(),
    });
    Ok(ReplControl::Continue)
}

/// Use an item from the bag.
///
/// # Errors
/// - `ItemNotInInventory` if the player isn't carrying it
/// - `ItemNotUsable` if it isn't something that can be used
pub fn use_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let action = world.use_item(item_param(params))?;
    view.push(ViewItem::ActionSuccess(format!("You use the {}.", action.item)));
    report_progress(view, action.progress);
    Ok(ReplControl::Continue)
}
