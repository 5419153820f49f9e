//! Data structures representing the game world.
//!
//! This module defines [`World`], the single owned aggregate every command
//! operates on. Rooms and NPCs live in tables owned by the world and refer
//! to each other only through [`RoomId`] / [`NpcId`] handles.

use log::info;

use crate::error::GameError;
use crate::item::ItemHolder;
use crate::npc::{Npc, NpcId};
use crate::player::{ItemAction, Player, TerminalUse};
use crate::quest::{ActionVerb, QuestProgress};
use crate::random::RandomSource;
use crate::room::{Direction, Room, RoomId};

/// The designated item whose use ends the game, and where using it wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalRule {
    pub item: String,
    pub room: RoomId,
    pub win_text: String,
    pub lose_text: String,
}

/// How the game ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// An NPC relocation made during the NPC pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NpcMove {
    pub npc: NpcId,
    pub from: RoomId,
    pub to: RoomId,
}

/// Result of talking to someone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueReport {
    pub npc: String,
    pub line: Option<String>,
    pub progress: Vec<QuestProgress>,
}

/// Complete state of the running game.
#[derive(Debug, Clone)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub rooms: Vec<Room>,
    pub npcs: Vec<Npc>,
    pub player: Player,
    pub terminal: Option<TerminalRule>,
}
impl World {
    /// Create a world with no rooms yet.
    ///
    /// Add at least one room and call [`World::place_player`] before play; the
    /// player starts out pointing at the first room added.
    pub fn new(title: impl Into<String>, intro: impl Into<String>) -> World {
        World {
            title: title.into(),
            intro: intro.into(),
            rooms: Vec::new(),
            npcs: Vec::new(),
            player: Player::new("Traveller", "", RoomId(0)),
            terminal: None,
        }
    }

    /// Add a room with every exit still blocked and return its handle.
    pub fn add_room(&mut self, symbol: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, symbol, name, description));
        id
    }

    /// Add an NPC standing in `location` and return its handle.
    pub fn add_npc(
        &mut self,
        symbol: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        location: RoomId,
        dialogue: Vec<String>,
    ) -> NpcId {
        let id = NpcId(self.npcs.len());
        self.npcs.push(Npc::new(id, symbol, name, description, location, dialogue));
        self.rooms[location.index()].add_npc(id);
        id
    }

    pub fn place_player(&mut self, name: impl Into<String>, description: impl Into<String>, room: RoomId) {
        self.player.name = name.into();
        self.player.description = description.into();
        self.player.location = room;
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.index()]
    }

    pub fn npc(&self, id: NpcId) -> &Npc {
        &self.npcs[id.index()]
    }

    pub fn room_by_symbol(&self, symbol: &str) -> Option<RoomId> {
        self.rooms.iter().find(|r| r.symbol == symbol).map(|r| r.id)
    }

    /// The room the player occupies.
    pub fn player_room(&self) -> &Room {
        self.room(self.player.location)
    }

    /// NPCs currently in the player's room.
    pub fn npcs_here(&self) -> impl Iterator<Item = &Npc> {
        self.player_room().npcs.iter().map(|id| self.npc(*id))
    }

    /// Rooms the player has left behind, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Room> {
        self.player.visited_rooms.iter().map(|id| self.room(*id))
    }

    /// # Errors
    /// See [`Player::move_to`].
    pub fn move_player(&mut self, direction: Direction) -> Result<Vec<QuestProgress>, GameError> {
        self.player.move_to(&self.rooms, direction)
    }

    /// # Errors
    /// See [`Player::go_back`].
    pub fn go_back(&mut self) -> Result<RoomId, GameError> {
        self.player.go_back()
    }

    /// # Errors
    /// See [`Player::take_item`].
    pub fn take_item(&mut self, name: &str) -> Result<ItemAction, GameError> {
        let here = self.player.location.index();
        self.player.take_item(&mut self.rooms[here], name)
    }

    /// # Errors
    /// See [`Player::drop_item`].
    pub fn drop_item(&mut self, name: &str) -> Result<ItemAction, GameError> {
        let here = self.player.location.index();
        self.player.drop_item(&mut self.rooms[here], name)
    }

    /// Hear the next line from the named NPC, if they're in the player's room.
    ///
    /// # Errors
    /// - `CharacterNotPresent` if nobody by that name is here
    pub fn talk_to(&mut self, name: &str) -> Result<DialogueReport, GameError> {
        let wanted = name.to_lowercase();
        let npc_id = self
            .player_room()
            .npcs
            .iter()
            .copied()
            .find(|id| {
                let npc = self.npc(*id);
                npc.name.to_lowercase() == wanted || npc.symbol.to_lowercase() == wanted
            })
            .ok_or_else(|| GameError::CharacterNotPresent(name.to_string()))?;
        let npc = &mut self.npcs[npc_id.index()];
        let line = npc.get_msg();
        let npc_name = npc.name.clone();
        info!("{} talked to {npc_name}", self.player.name);
        let progress = self.player.record_action(ActionVerb::TalkTo, &npc_name);
        Ok(DialogueReport {
            npc: npc_name,
            line,
            progress,
        })
    }

    /// Use an item from the bag. Only the terminal item can be used, and doing so ends the game.
    ///
    /// # Errors
    /// - `ItemNotInInventory` if the player isn't carrying it
    /// - `ItemNotUsable` for anything that isn't the terminal item
    pub fn use_item(&mut self, name: &str) -> Result<ItemAction, GameError> {
        if !self.player.contains_item(name) {
            return Err(GameError::ItemNotInInventory(name.to_string()));
        }
        let is_terminal = self
            .terminal
            .as_ref()
            .is_some_and(|rule| rule.item.to_lowercase() == name.to_lowercase());
        if !is_terminal {
            return Err(GameError::ItemNotUsable(name.to_string()));
        }
        let action = self.player.consume_item(name)?;
        let used = TerminalUse {
            room: self.player.location,
            quests_complete: self.player.quests.all_completed(),
        };
        info!(
            "terminal item '{}' used in '{}' (all quests complete: {})",
            action.item,
            self.player_room().symbol,
            used.quests_complete
        );
        self.player.terminal_use = Some(used);
        Ok(action)
    }

    /// Give every NPC its chance to wander, in handle order.
    pub fn advance_npcs(&mut self, rng: &mut dyn RandomSource) -> Vec<NpcMove> {
        let mut moves = Vec::new();
        for idx in 0..self.npcs.len() {
            let from = self.npcs[idx].location;
            let Some(to) = self.npcs[idx].choose_destination(&self.rooms[from.index()], rng) else {
                continue;
            };
            let npc = &mut self.npcs[idx];
            npc.location = to;
            let id = npc.id;
            info!(
                "{} wandered from '{}' to '{}'",
                npc.name,
                self.rooms[from.index()].symbol,
                self.rooms[to.index()].symbol
            );
            self.rooms[from.index()].remove_npc(id);
            self.rooms[to.index()].add_npc(id);
            moves.push(NpcMove { npc: id, from, to });
        }
        moves
    }

    /// True once the terminal item was used in the terminal room with every quest complete.
    pub fn has_won(&self) -> bool {
        match (&self.terminal, self.player.terminal_use) {
            (Some(rule), Some(used)) => used.room == rule.room && used.quests_complete,
            _ => false,
        }
    }

    /// True once the terminal item was used anywhere else, or too early.
    pub fn has_lost(&self) -> bool {
        self.player.terminal_use.is_some() && !self.has_won()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_won() {
            Some(Outcome::Won)
        } else if self.has_lost() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }
}
