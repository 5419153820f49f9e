//! Recoverable, player-facing failures.
//!
//! Nothing in here is fatal: the dispatcher renders the error into the view
//! and the game loop carries on. Loader and terminal failures use `anyhow`.

use thiserror::Error;

use crate::command::Arity;
use crate::room::Direction;

/// Every way a player command can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The '{command}' command takes {expected}.")]
    WrongParameterCount { command: String, expected: Arity },
    #[error("'{0}' is not a direction. Use N, E, S or O.")]
    InvalidDirection(String),
    #[error("There is no door to the {0}.")]
    NoExit(Direction),
    #[error("Forbidden passage: the way {0} is closed from this side.")]
    BlockedExit(Direction),
    #[error("There is no '{0}' here.")]
    ItemNotFound(String),
    #[error("You are not carrying any '{0}'.")]
    ItemNotInInventory(String),
    #[error("You can't use the '{0}' right now.")]
    ItemNotUsable(String),
    #[error("'{0}' is not here.")]
    CharacterNotPresent(String),
    #[error("No quest is called '{0}'.")]
    UnknownQuestTitle(String),
    #[error("The quest '{0}' is already active.")]
    QuestAlreadyActive(String),
    #[error("There is no previous room to go back to.")]
    NoVisitHistory,
    #[error("Unknown command '{0}'. Type 'help' to see what you can do.")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_and_missing_exits_read_differently() {
        let blocked = GameError::BlockedExit(Direction::South).to_string();
        let missing = GameError::NoExit(Direction::South).to_string();
        assert_ne!(blocked, missing);
        assert!(blocked.contains("Forbidden passage"));
        assert!(missing.contains("no door"));
    }

    #[test]
    fn parameter_count_names_the_command() {
        let err = GameError::WrongParameterCount {
            command: "take".into(),
            expected: Arity::One,
        };
        assert_eq!(err.to_string(), "The 'take' command takes exactly one parameter.");
    }
}
