//! `repl::system` module
//!
//! Contains repl loop handlers for commands that affect the game system itself
//! rather than the world: help, quit and the opening welcome.

use log::info;

use crate::command::COMMANDS;
use crate::error::GameError;
use crate::repl::ReplControl;
use crate::view::{HelpLine, View, ViewItem};
use crate::world::World;

/// Queue the title card shown when a game starts.
pub fn push_welcome(world: &World, view: &mut View) {
    view.push(ViewItem::Welcome {
        title: world.title.clone(),
        intro: world.intro.clone(),
        player: world.player.name.clone(),
        room: world.player_room().name.clone(),
    });
}

/// List the command table.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn help_handler(_world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    view.push(ViewItem::Help(
        COMMANDS
            .iter()
            .map(|entry| HelpLine {
                usage: entry.usage.to_string(),
                help: entry.help.to_string(),
            })
            .collect(),
    ));
    Ok(ReplControl::Continue)
}

/// Say goodbye and end the loop.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn quit_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    info!("{} quit after {} moves", world.player.name, world.player.move_count);
    view.push(ViewItem::Farewell {
        player: world.player.name.clone(),
    });
    Ok(ReplControl::Quit)
}
