//! Command module
//!
//! The static table of commands a player can type. Each entry maps a command
//! word to its handler and declares how many parameters it takes, so the
//! parameter count is checked once, here, before any handler runs.

use std::fmt::{self, Display};

use crate::error::GameError;
use crate::repl::{
    ReplControl, activate_handler, back_handler, check_handler, drop_handler, go_handler, help_handler, look_handler,
    quest_handler, quests_handler, quit_handler, rewards_handler, take_handler, talk_handler, use_handler,
};
use crate::view::View;
use crate::world::World;

/// How many parameter tokens a command accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    None,
    One,
    AtLeastOne,
}
impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::None => count == 0,
            Arity::One => count == 1,
            Arity::AtLeastOne => count >= 1,
        }
    }
}
impl Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::None => write!(f, "no parameters"),
            Arity::One => write!(f, "exactly one parameter"),
            Arity::AtLeastOne => write!(f, "at least one parameter"),
        }
    }
}

/// Signature shared by every command handler.
pub type Handler = fn(&mut World, &mut View, &[&str]) -> Result<ReplControl, GameError>;

/// A registered command.
pub struct CommandEntry {
    pub word: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub arity: Arity,
    pub handler: Handler,
}
impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("word", &self.word)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Every command, in the order `help` lists them.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        word: "help",
        usage: "help",
        help: "Show this list of commands.",
        arity: Arity::None,
        handler: help_handler,
    },
    CommandEntry {
        word: "quit",
        usage: "quit",
        help: "Leave the game.",
        arity: Arity::None,
        handler: quit_handler,
    },
    CommandEntry {
        word: "go",
        usage: "go <N|E|S|O>",
        help: "Walk through the exit in that direction.",
        arity: Arity::One,
        handler: go_handler,
    },
    CommandEntry {
        word: "back",
        usage: "back",
        help: "Return to the room you came from.",
        arity: Arity::None,
        handler: back_handler,
    },
    CommandEntry {
        word: "look",
        usage: "look",
        help: "Describe the room, its items and who is here.",
        arity: Arity::None,
        handler: look_handler,
    },
    CommandEntry {
        word: "take",
        usage: "take <item>",
        help: "Pick up an item from the room.",
        arity: Arity::One,
        handler: take_handler,
    },
    CommandEntry {
        word: "check",
        usage: "check",
        help: "List what you carry and what it weighs.",
        arity: Arity::None,
        handler: check_handler,
    },
    CommandEntry {
        word: "drop",
        usage: "drop <item>",
        help: "Put an item from your bag down in the room.",
        arity: Arity::One,
        handler: drop_handler,
    },
    CommandEntry {
        word: "talk",
        usage: "talk <name>",
        help: "Speak with someone in the room.",
        arity: Arity::One,
        handler: talk_handler,
    },
    CommandEntry {
        word: "use",
        usage: "use <item>",
        help: "Use an item you are carrying.",
        arity: Arity::One,
        handler: use_handler,
    },
    CommandEntry {
        word: "quests",
        usage: "quests",
        help: "List every quest and its status.",
        arity: Arity::None,
        handler: quests_handler,
    },
    CommandEntry {
        word: "quest",
        usage: "quest <title>",
        help: "Show a quest's objectives and reward.",
        arity: Arity::AtLeastOne,
        handler: quest_handler,
    },
    CommandEntry {
        word: "activate",
        usage: "activate <title>",
        help: "Start tracking progress on a quest.",
        arity: Arity::AtLeastOne,
        handler: activate_handler,
    },
    CommandEntry {
        word: "rewards",
        usage: "rewards",
        help: "List the rewards you have earned.",
        arity: Arity::None,
        handler: rewards_handler,
    },
];

/// Split raw input into whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Find a command by its word (case-insensitive).
pub fn lookup(word: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.word.eq_ignore_ascii_case(word))
}

/// Resolve a command word and check its parameter count.
///
/// # Errors
/// - `UnknownCommand` if no command has that word
/// - `WrongParameterCount` if the command doesn't accept that many parameters
pub fn resolve(word: &str, params: &[&str]) -> Result<&'static CommandEntry, GameError> {
    let entry = lookup(word).ok_or_else(|| GameError::UnknownCommand(word.to_string()))?;
    if !entry.arity.accepts(params.len()) {
        return Err(GameError::WrongParameterCount {
            command: entry.word.to_string(),
            expected: entry.arity,
        });
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_is_registered_once() {
        for word in [
            "go", "back", "look", "take", "drop", "check", "talk", "use", "quests", "quest", "activate", "rewards",
            "help", "quit",
        ] {
            assert_eq!(COMMANDS.iter().filter(|c| c.word == word).count(), 1, "{word}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("TAKE").map(|c| c.word), Some("take"));
        assert!(lookup("dance").is_none());
    }

    #[test]
    fn resolve_checks_arity() {
        assert!(resolve("go", &["N"]).is_ok());
        assert_eq!(
            resolve("go", &[]).unwrap_err(),
            GameError::WrongParameterCount {
                command: "go".into(),
                expected: Arity::One,
            }
        );
        assert!(resolve("look", &["around"]).is_err());
        assert!(resolve("quest", &["Great", "Traveller"]).is_ok());
        assert_eq!(
            resolve("dance", &[]).unwrap_err(),
            GameError::UnknownCommand("dance".into())
        );
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("  take\tsword \n"), vec!["take", "sword"]);
        assert!(tokenize("   ").is_empty());
    }
}
