//! NPC Module

use std::collections::VecDeque;
use std::fmt::{self, Display};

use crate::random::RandomSource;
use crate::room::{Room, RoomId};

/// Handle to an NPC in the world's NPC table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NpcId(pub(crate) usize);
impl NpcId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A non-playable character.
#[derive(Debug, Clone)]
pub struct Npc {
    pub id: NpcId,
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub location: RoomId,
    dialogue: Vec<String>,
    pending: VecDeque<String>,
}
impl Npc {
    pub fn new(
        id: NpcId,
        symbol: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        location: RoomId,
        dialogue: Vec<String>,
    ) -> Npc {
        Npc {
            id,
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            location,
            pending: dialogue.iter().cloned().collect(),
            dialogue,
        }
    }

    /// Next line of dialogue.
    ///
    /// Lines come out in their original order and each is used up as it is said;
    /// once all have been heard the full list comes back and the cycle repeats.
    /// Returns `None` only for an NPC with nothing to say.
    pub fn get_msg(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            self.pending.extend(self.dialogue.iter().cloned());
        }
        self.pending.pop_front()
    }

    pub fn dialogue(&self) -> &[String] {
        &self.dialogue
    }

    /// Decide where (if anywhere) this NPC wanders this turn.
    ///
    /// A fair coin decides whether to move at all; if so, one of the exits that
    /// lead to a real room is picked uniformly. Walls and blocked passages are never taken.
    pub fn choose_destination(&self, room: &Room, rng: &mut dyn RandomSource) -> Option<RoomId> {
        if !rng.coin_flip() {
            return None;
        }
        let options = room.neighbors();
        if options.is_empty() {
            return None;
        }
        Some(options[rng.pick_index(options.len())])
    }
}
impl Display for Npc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}
