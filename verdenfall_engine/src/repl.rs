//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`World`].
//!
//! One turn is always the same three steps: run the command, let every NPC
//! take its chance to wander, then check whether the game has been won or lost.

mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod npc;
pub mod quest;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use npc::*;
pub use quest::*;
pub use system::*;

use anyhow::{Context, Result};
use log::info;

use crate::command::{resolve, tokenize};
use crate::quest::QuestProgress;
use crate::random::RandomSource;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::{Outcome, World};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the player quits or the game ends.
///
/// # Errors
/// - if the terminal can't be read
pub fn run_repl(world: &mut World, rng: &mut dyn RandomSource) -> Result<()> {
    let mut view = View::new();
    push_welcome(world, &mut view);
    push_room_overview(world, &mut view);
    view.flush();

    let mut input_manager = InputManager::new();
    let mut turn = 0_u32;
    loop {
        let prompt = format!(
            "\n[{}|Moves: {}]>> ",
            world.player_room().name,
            world.player.move_count
        )
        .prompt_style()
        .to_string();

        let input = match input_manager.read_line(&prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::ActionSuccess("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        turn += 1;
        info!("================> INPUT {turn}: \"{}\" <================", input.trim());
        let control = process_command(world, &mut view, rng, &input);
        view.flush();
        if control == ReplControl::Quit {
            break;
        }
    }
    Ok(())
}

/// Process one line of player input as a full turn.
///
/// Unknown or malformed commands are reported and cost nothing: the NPC pass
/// and the win/lose check only follow a command that was accepted, whether its
/// handler then succeeded or not.
pub fn process_command(world: &mut World, view: &mut View, rng: &mut dyn RandomSource, input: &str) -> ReplControl {
    let words = tokenize(input);
    let Some((word, params)) = words.split_first() else {
        return ReplControl::Continue;
    };
    let entry = match resolve(word, params) {
        Ok(entry) => entry,
        Err(err) => {
            view.push(ViewItem::Error(err.to_string()));
            return ReplControl::Continue;
        },
    };

    match (entry.handler)(world, view, params) {
        Ok(ReplControl::Quit) => return ReplControl::Quit,
        Ok(ReplControl::Continue) => {},
        Err(err) => {
            info!("'{}' rejected: {err}", entry.word);
            view.push(ViewItem::Error(err.to_string()));
        },
    }

    npc_pass(world, view, rng);
    check_outcome(world, view)
}

/// Poll the win/lose predicates; either one ends the loop.
pub fn check_outcome(world: &World, view: &mut View) -> ReplControl {
    let Some(outcome) = world.outcome() else {
        return ReplControl::Continue;
    };
    let (win_text, lose_text) = world
        .terminal
        .as_ref()
        .map(|rule| (rule.win_text.clone(), rule.lose_text.clone()))
        .unwrap_or_default();
    match outcome {
        Outcome::Won => {
            info!("{} has won", world.player.name);
            view.push(ViewItem::GameWon(win_text));
        },
        Outcome::Lost => {
            info!("{} has lost", world.player.name);
            view.push(ViewItem::GameLost(lose_text));
        },
    }
    ReplControl::Quit
}

/// Turn quest engine progress into view notices.
pub fn report_progress(view: &mut View, progress: Vec<QuestProgress>) {
    for step in progress {
        view.push(match step {
            QuestProgress::ObjectiveComplete { quest, objective } => ViewItem::ObjectiveComplete { quest, objective },
            QuestProgress::QuestComplete { quest } => ViewItem::QuestComplete { quest },
            QuestProgress::RewardGranted { reward, .. } => ViewItem::RewardGranted { reward },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemHolder, Weight};
    use crate::random::ScriptedRandom;
    use crate::room::{Direction, Exit};
    use crate::world::TerminalRule;

    fn create_test_world() -> World {
        let mut world = World::new("Test", "");
        let a = world.add_room("a", "Room A", "in room A.");
        let b = world.add_room("b", "Room B", "in room B.");
        world.room_mut(a).set_exit(Direction::North, Exit::Room(b));
        world.room_mut(b).set_exit(Direction::South, Exit::Room(a));
        world
            .room_mut(a)
            .add_item(Item::new("vial", "A vial", Weight::from_kg(1.0)));
        world.place_player("Tester", "", a);
        world.terminal = Some(TerminalRule {
            item: "vial".into(),
            room: b,
            win_text: "You win.".into(),
            lose_text: "You lose.".into(),
        });
        world
    }

    #[test]
    fn unknown_command_is_reported_and_costs_no_turn() {
        let mut world = create_test_world();
        world.add_npc("cat", "Cat", "A cat", world.player.location, vec![]);
        let mut view = View::with_width(80);
        // a flip of `true` would move the cat if the NPC pass ran
        let mut rng = ScriptedRandom::new([true], [0]);
        assert_eq!(process_command(&mut world, &mut view, &mut rng, "dance"), ReplControl::Continue);
        assert!(matches!(view.items(), [ViewItem::Error(_)]));
        assert!(world.player_room().npcs.len() == 1);
    }

    #[test]
    fn failed_handler_still_advances_npcs() {
        let mut world = create_test_world();
        world.add_npc("cat", "Cat", "A cat", world.player.location, vec![]);
        let mut view = View::with_width(80);
        let mut rng = ScriptedRandom::new([true], [0]);
        process_command(&mut world, &mut view, &mut rng, "go E");
        assert!(world.player_room().npcs.is_empty());
        assert!(view.items().iter().any(|i| i.is_npc_left()));
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut world = create_test_world();
        let mut view = View::with_width(80);
        let mut rng = ScriptedRandom::still();
        assert_eq!(process_command(&mut world, &mut view, &mut rng, "   "), ReplControl::Continue);
        assert!(view.is_empty());
    }

    #[test]
    fn using_the_terminal_item_ends_the_loop() {
        let mut world = create_test_world();
        let mut view = View::with_width(80);
        let mut rng = ScriptedRandom::still();
        process_command(&mut world, &mut view, &mut rng, "take vial");
        process_command(&mut world, &mut view, &mut rng, "go N");
        assert_eq!(process_command(&mut world, &mut view, &mut rng, "use vial"), ReplControl::Quit);
        assert!(view.items().contains(&ViewItem::GameWon("You win.".into())));
    }

    #[test]
    fn quit_skips_the_npc_pass() {
        let mut world = create_test_world();
        world.add_npc("cat", "Cat", "A cat", world.player.location, vec![]);
        let mut view = View::with_width(80);
        let mut rng = ScriptedRandom::new([true], [0]);
        assert_eq!(process_command(&mut world, &mut view, &mut rng, "quit"), ReplControl::Quit);
        assert_eq!(world.player_room().npcs.len(), 1);
    }
}
