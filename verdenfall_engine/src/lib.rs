#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const VERDENFALL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod error;
pub mod item;
pub mod loader;
pub mod npc;
pub mod player;
pub mod quest;
pub mod random;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use error::GameError;
pub use item::{Item, ItemHolder, ItemStore, Weight};
pub use loader::{load_world, world_from_def};
pub use npc::{Npc, NpcId};
pub use player::{Player, Rewards};
pub use quest::{ActionVerb, Objective, ObjectiveKind, Quest, QuestManager, QuestProgress};
pub use random::{RandomSource, ScriptedRandom, game_rng};
pub use repl::{ReplControl, process_command, run_repl};
pub use room::{Direction, Exit, Room, RoomId};
pub use view::{View, ViewItem};
pub use world::{Outcome, World};
