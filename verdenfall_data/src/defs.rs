use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier used across `WorldDef` references.
pub type Id = String;

/// Direction keys accepted in a room's exit table, in display order.
pub const DIRECTION_KEYS: [&str; 4] = ["N", "E", "S", "O"];

/// Verbs the engine reports to action objectives.
pub const ACTION_VERBS: [&str; 4] = ["take", "drop", "talk-to", "use"];

/// Named counters the engine reports to counter objectives.
pub const COUNTERS: [&str; 1] = ["moves"];

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub npcs: Vec<NpcDef>,
    #[serde(default)]
    pub quests: Vec<QuestDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub player: PlayerDef,
    #[serde(default)]
    pub terminal: Option<TerminalDef>,
}

/// Player definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_room: Id,
}

/// The item whose use ends the game, and the room where using it wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalDef {
    pub item: String,
    pub room: Id,
    #[serde(default = "default_win_text")]
    pub win_text: String,
    #[serde(default = "default_lose_text")]
    pub lose_text: String,
}

fn default_win_text() -> String {
    "The darkness lifts. You have won.".to_string()
}

fn default_lose_text() -> String {
    "It was all for nothing. You have lost.".to_string()
}

/// Room definition. Direction keys missing from `exits` are one-way blocked passages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: BTreeMap<String, ExitDef>,
}

/// Target of a single exit as written in the world file.
///
/// `"none"` means there is no door, `"blocked"` marks a one-way passage, and
/// anything else is the id of the destination room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExitDef {
    To(Id),
    NoDoor,
    Blocked,
}
impl From<String> for ExitDef {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "" => ExitDef::NoDoor,
            "blocked" => ExitDef::Blocked,
            _ => ExitDef::To(value.trim().to_string()),
        }
    }
}
impl From<ExitDef> for String {
    fn from(value: ExitDef) -> Self {
        value.to_string()
    }
}
impl fmt::Display for ExitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitDef::To(id) => write!(f, "{id}"),
            ExitDef::NoDoor => write!(f, "none"),
            ExitDef::Blocked => write!(f, "blocked"),
        }
    }
}

/// Where an item starts the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationDef {
    Inventory,
    Room(Id),
}
impl From<String> for LocationDef {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("inventory") {
            LocationDef::Inventory
        } else {
            LocationDef::Room(value.trim().to_string())
        }
    }
}
impl From<LocationDef> for String {
    fn from(value: LocationDef) -> Self {
        match value {
            LocationDef::Inventory => "inventory".to_string(),
            LocationDef::Room(id) => id,
        }
    }
}

/// Item definition. The name doubles as the item's identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub weight: f64,
    pub location: LocationDef,
}

/// Non-player character definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcDef {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub location: Id,
    #[serde(default)]
    pub dialogue: Vec<String>,
}

/// Quest definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDef {
    pub title: String,
    pub description: String,
    pub objectives: Vec<ObjectiveDef>,
    #[serde(default)]
    pub reward: Option<String>,
    /// Start the game with this quest already active.
    #[serde(default)]
    pub active: bool,
}

/// Objective definition, one of the three supported kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectiveDef {
    Action {
        verb: String,
        target: String,
        #[serde(default)]
        description: Option<String>,
    },
    Visit {
        room: Id,
        #[serde(default)]
        description: Option<String>,
    },
    Counter {
        counter: String,
        threshold: u32,
        #[serde(default)]
        description: Option<String>,
    },
}
