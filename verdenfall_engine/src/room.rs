//! Room definitions and spatial utilities.
//!
//! Any location the player or an NPC can inhabit is a `Room`. Rooms are built
//! once when the world is loaded and never destroyed; everything else refers to
//! them through a [`RoomId`] into the world's room table.

use std::fmt::{self, Display};
use std::str::FromStr;

use variantly::Variantly;

use crate::error::GameError;
use crate::item::{ItemHolder, ItemStore};
use crate::npc::NpcId;

/// Handle to a room in the world's room table.
///
/// Only the world mints these, so every `RoomId` in circulation is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub(crate) usize);
impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The four fixed directions an exit can face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}
impl Direction {
    /// All directions, in display order.
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn key(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "O",
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" | "nord" => Ok(Direction::North),
            "e" | "east" | "est" => Ok(Direction::East),
            "s" | "south" | "sud" => Ok(Direction::South),
            "o" | "w" | "west" | "ouest" => Ok(Direction::West),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

/// What lies in one direction out of a room.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Variantly)]
pub enum Exit {
    /// A passage to another room.
    Room(RoomId),
    /// A wall. There was never a door here.
    NoDoor,
    /// The far side of a one-way passage: it exists but can't be taken from here.
    Blocked,
}

/// Any visitable location in the game world.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub symbol: String,
    pub name: String,
    pub description: String,
    exits: [Exit; 4],
    pub items: ItemStore,
    pub npcs: Vec<NpcId>,
}
impl ItemHolder for Room {
    fn items(&self) -> &ItemStore {
        &self.items
    }
    fn items_mut(&mut self) -> &mut ItemStore {
        &mut self.items
    }
}
impl Room {
    /// Create an empty room. Every direction starts out `Blocked` until configured.
    pub fn new(id: RoomId, symbol: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Room {
        Room {
            id,
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            exits: [Exit::Blocked; 4],
            items: ItemStore::new(),
            npcs: Vec::new(),
        }
    }

    pub fn exit(&self, direction: Direction) -> Exit {
        self.exits[direction.index()]
    }

    pub fn set_exit(&mut self, direction: Direction, exit: Exit) {
        self.exits[direction.index()] = exit;
    }

    /// Directions that lead to an actual room, in display order.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.exit(*dir).is_room())
            .collect()
    }

    /// Rooms reachable in one step, in direction order.
    pub fn neighbors(&self) -> Vec<RoomId> {
        self.exits.iter().filter_map(|exit| exit.room()).collect()
    }

    /// Comma-separated list of open directions, e.g. `"N, S"`.
    pub fn exit_string(&self) -> String {
        self.open_directions()
            .iter()
            .map(|dir| dir.key())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Description and exits as a single block of text.
    pub fn long_description(&self) -> String {
        format!("You are {}\n\nExits: {}", self.description, self.exit_string())
    }

    pub fn has_npc(&self, npc_id: NpcId) -> bool {
        self.npcs.contains(&npc_id)
    }

    pub(crate) fn remove_npc(&mut self, npc_id: NpcId) {
        self.npcs.retain(|id| *id != npc_id);
    }

    pub(crate) fn add_npc(&mut self, npc_id: NpcId) {
        if !self.has_npc(npc_id) {
            self.npcs.push(npc_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, Weight};

    fn test_room(idx: usize) -> Room {
        Room::new(RoomId(idx), format!("room_{idx}"), format!("Room {idx}"), "in a test room.")
    }

    #[test]
    fn new_room_is_sealed() {
        let room = test_room(0);
        for dir in Direction::ALL {
            assert!(room.exit(dir).is_blocked());
        }
        assert_eq!(room.exit_string(), "");
    }

    #[test]
    fn exit_states_are_distinct() {
        let mut room = test_room(0);
        room.set_exit(Direction::North, Exit::Room(RoomId(1)));
        room.set_exit(Direction::East, Exit::NoDoor);
        assert_eq!(room.exit(Direction::North), Exit::Room(RoomId(1)));
        assert!(room.exit(Direction::East).is_no_door());
        assert!(room.exit(Direction::South).is_blocked());
        assert_ne!(room.exit(Direction::East), room.exit(Direction::South));
    }

    #[test]
    fn exit_string_lists_only_real_rooms_in_order() {
        let mut room = test_room(0);
        room.set_exit(Direction::West, Exit::Room(RoomId(3)));
        room.set_exit(Direction::North, Exit::Room(RoomId(1)));
        room.set_exit(Direction::East, Exit::NoDoor);
        assert_eq!(room.exit_string(), "N, O");
        assert_eq!(room.neighbors(), vec![RoomId(1), RoomId(3)]);
        assert!(room.long_description().ends_with("Exits: N, O"));
    }

    #[test]
    fn direction_parsing_accepts_letters_and_words() {
        assert_eq!("n".parse::<Direction>().unwrap(), Direction::North);
        assert_eq!("EAST".parse::<Direction>().unwrap(), Direction::East);
        assert_eq!("O".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::West);
        assert_eq!(
            "up".parse::<Direction>(),
            Err(GameError::InvalidDirection("up".into()))
        );
    }

    #[test]
    fn room_holds_items() {
        let mut room = test_room(0);
        room.add_item(Item::new("lantern", "A brass lantern", Weight::from_kg(1.5)));
        assert!(room.contains_item("Lantern"));
        assert_eq!(room.current_weight(), Weight::from_grams(1500));
        assert!(room.remove_item("lantern").is_some());
        assert_eq!(room.current_weight(), Weight::ZERO);
    }

    #[test]
    fn npc_roster_has_no_duplicates() {
        let mut room = test_room(0);
        room.add_npc(NpcId(4));
        room.add_npc(NpcId(4));
        assert_eq!(room.npcs.len(), 1);
        room.remove_npc(NpcId(4));
        assert!(room.npcs.is_empty());
    }
}
