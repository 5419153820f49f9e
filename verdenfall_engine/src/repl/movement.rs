//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::error::GameError;
use crate::repl::{ReplControl, push_room_description, report_progress};
use crate::room::Direction;
use crate::view::{View, ViewItem};
use crate::world::World;

/// Move the player through the exit in the given direction.
///
/// # Errors
/// - `InvalidDirection` if the parameter isn't a direction
/// - `BlockedExit` / `NoExit` if that way can't be taken
pub fn go_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let direction: Direction = params.first().copied().unwrap_or_default().parse()?;
    let progress = world.move_player(direction)?;
    push_arrival(world, view);
    report_progress(view, progress);
    Ok(ReplControl::Continue)
}

/// Step back into the previous room.
///
/// # Errors
/// - `NoVisitHistory` before the player's first move
pub fn back_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    world.go_back()?;
    push_arrival(world, view);
    Ok(ReplControl::Continue)
}

/// What the player sees on entering a room: its description and where they've been.
fn push_arrival(world: &World, view: &mut View) {
    push_room_description(world, view);
    let history: Vec<_> = world.history().map(|room| room.description.clone()).collect();
    if !history.is_empty() {
        view.push(ViewItem::VisitHistory(history));
    }
}
