//! Player -- the traveller, their bag and their progress.
//!
//! Movement and item transfer live here because both feed the quest engine.
//! Each primitive checks everything it needs before it touches any state, so
//! a rejected command leaves the player, the room and the quests exactly as
//! they were.

use log::{info, warn};

use crate::error::GameError;
use crate::item::{Item, ItemHolder, ItemStore, Weight};
use crate::quest::{ActionVerb, MOVES_COUNTER, QuestManager, QuestProgress};
use crate::room::{Direction, Exit, Room, RoomId};

/// Rewards granted so far, in the order they were earned. Never holds a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewards(Vec<String>);
impl Rewards {
    /// Add a reward. Returns `false` (and changes nothing) if it was already granted.
    pub fn grant(&mut self, reward: &str) -> bool {
        if self.contains(reward) {
            warn!("reward \"{reward}\" already granted; ignoring repeat");
            return false;
        }
        info!("reward \"{reward}\" granted");
        self.0.push(reward.to_string());
        true
    }

    pub fn contains(&self, reward: &str) -> bool {
        self.0.iter().any(|r| r == reward)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Record of the game-ending action: where the terminal item was used, and
/// whether every quest was finished at that moment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TerminalUse {
    pub room: RoomId,
    pub quests_complete: bool,
}

/// What a successful item action reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    /// The item's canonical name.
    pub item: String,
    pub weight: Weight,
    pub progress: Vec<QuestProgress>,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub location: RoomId,
    /// Rooms left behind, most recent last.
    pub visited_rooms: Vec<RoomId>,
    pub inventory: ItemStore,
    pub move_count: u32,
    pub quests: QuestManager,
    pub rewards: Rewards,
    pub terminal_use: Option<TerminalUse>,
}
impl ItemHolder for Player {
    fn items(&self) -> &ItemStore {
        &self.inventory
    }
    fn items_mut(&mut self) -> &mut ItemStore {
        &mut self.inventory
    }
}
impl Player {
    pub fn new(name: impl Into<String>, description: impl Into<String>, location: RoomId) -> Player {
        Player {
            name: name.into(),
            description: description.into(),
            location,
            visited_rooms: Vec::new(),
            inventory: ItemStore::new(),
            move_count: 0,
            quests: QuestManager::new(),
            rewards: Rewards::default(),
            terminal_use: None,
        }
    }

    /// Walk through the exit facing `direction`.
    ///
    /// On success the old room goes onto the history stack, the move counter
    /// goes up, and the quest engine hears about the new room and then the new
    /// count. The returned progress lists whatever that completed.
    ///
    /// # Errors
    /// - `BlockedExit` for a one-way passage seen from its closed side
    /// - `NoExit` where there is no door at all
    pub fn move_to(&mut self, rooms: &[Room], direction: Direction) -> Result<Vec<QuestProgress>, GameError> {
        let here = &rooms[self.location.index()];
        let destination = match here.exit(direction) {
            Exit::Blocked => return Err(GameError::BlockedExit(direction)),
            Exit::NoDoor => return Err(GameError::NoExit(direction)),
            Exit::Room(id) => &rooms[id.index()],
        };

        self.visited_rooms.push(self.location);
        self.location = destination.id;
        self.move_count = self.move_count.saturating_add(1);
        info!(
            "{} moved {direction} from '{}' to '{}' (move #{})",
            self.name, here.symbol, destination.symbol, self.move_count
        );

        let mut progress = self.quests.check_room_objectives(&destination.name, &mut self.rewards);
        progress.extend(
            self.quests
                .check_counter_objectives(MOVES_COUNTER, self.move_count, &mut self.rewards),
        );
        Ok(progress)
    }

    /// Return to the most recently left room. Neither records history nor counts as a move.
    ///
    /// # Errors
    /// - `NoVisitHistory` if the player hasn't been anywhere yet
    pub fn go_back(&mut self) -> Result<RoomId, GameError> {
        let previous = self.visited_rooms.pop().ok_or(GameError::NoVisitHistory)?;
        info!("{} went back to room #{}", self.name, previous.index());
        self.location = previous;
        Ok(previous)
    }

    /// Move the named item from `room` into the bag.
    ///
    /// # Errors
    /// - `ItemNotFound` if the room has no such item
    pub fn take_item(&mut self, room: &mut Room, name: &str) -> Result<ItemAction, GameError> {
        let item = room
            .remove_item(name)
            .ok_or_else(|| GameError::ItemNotFound(name.to_string()))?;
        info!("{} took '{}' from '{}'", self.name, item.name(), room.symbol);
        Ok(self.stow(item, ActionVerb::Take))
    }

    /// Move the named item from the bag onto the floor of `room`.
    ///
    /// # Errors
    /// - `ItemNotInInventory` if the player isn't carrying it
    pub fn drop_item(&mut self, room: &mut Room, name: &str) -> Result<ItemAction, GameError> {
        let item = self
            .remove_item(name)
            .ok_or_else(|| GameError::ItemNotInInventory(name.to_string()))?;
        info!("{} dropped '{}' in '{}'", self.name, item.name(), room.symbol);
        let action = ItemAction {
            item: item.name().to_string(),
            weight: item.weight(),
            progress: Vec::new(),
        };
        room.add_item(item);
        Ok(self.with_progress(action, ActionVerb::Drop))
    }

    /// Take the named item out of the bag for good.
    ///
    /// # Errors
    /// - `ItemNotInInventory` if the player isn't carrying it
    pub fn consume_item(&mut self, name: &str) -> Result<ItemAction, GameError> {
        let item = self
            .remove_item(name)
            .ok_or_else(|| GameError::ItemNotInInventory(name.to_string()))?;
        info!("{} used up '{}'", self.name, item.name());
        let action = ItemAction {
            item: item.name().to_string(),
            weight: item.weight(),
            progress: Vec::new(),
        };
        Ok(self.with_progress(action, ActionVerb::Use))
    }

    /// Tell the quest engine the player did `verb` to `target`.
    pub fn record_action(&mut self, verb: ActionVerb, target: &str) -> Vec<QuestProgress> {
        self.quests.check_action_objectives(verb, target, &mut self.rewards)
    }

    fn stow(&mut self, item: Item, verb: ActionVerb) -> ItemAction {
        let action = ItemAction {
            item: item.name().to_string(),
            weight: item.weight(),
            progress: Vec::new(),
        };
        self.add_item(item);
        self.with_progress(action, verb)
    }

    fn with_progress(&mut self, mut action: ItemAction, verb: ActionVerb) -> ItemAction {
        action.progress = self.record_action(verb, &action.item);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{Objective, ObjectiveKind, Quest};

    fn create_test_rooms() -> Vec<Room> {
        // 0 --N--> 1, and 1 has no configured way back south
        let mut a = Room::new(RoomId(0), "a", "Room A", "in room A.");
        let mut b = Room::new(RoomId(1), "b", "Room B", "in room B.");
        a.set_exit(Direction::North, Exit::Room(RoomId(1)));
        a.set_exit(Direction::East, Exit::NoDoor);
        b.set_exit(Direction::East, Exit::Room(RoomId(0)));
        a.add_item(Item::new("sword", "A notched blade", Weight::from_kg(2.0)));
        a.add_item(Item::new("shield", "A round shield", Weight::from_kg(3.0)));
        vec![a, b]
    }

    fn create_test_player() -> Player {
        Player::new("Tester", "A test player", RoomId(0))
    }

    #[test]
    fn move_updates_location_history_and_count() {
        let rooms = create_test_rooms();
        let mut player = create_test_player();
        player.move_to(&rooms, Direction::North).unwrap();
        assert_eq!(player.location, RoomId(1));
        assert_eq!(player.visited_rooms, vec![RoomId(0)]);
        assert_eq!(player.move_count, 1);
    }

    #[test]
    fn blocked_return_is_not_a_missing_door() {
        let rooms = create_test_rooms();
        let mut player = create_test_player();
        player.move_to(&rooms, Direction::North).unwrap();
        assert_eq!(
            player.move_to(&rooms, Direction::South),
            Err(GameError::BlockedExit(Direction::South))
        );
        assert_eq!(player.location, RoomId(1));
        assert_eq!(player.move_count, 1);
        assert_eq!(player.visited_rooms.len(), 1);
    }

    #[test]
    fn wall_reports_no_door() {
        let rooms = create_test_rooms();
        let mut player = create_test_player();
        assert_eq!(
            player.move_to(&rooms, Direction::East),
            Err(GameError::NoExit(Direction::East))
        );
        assert_eq!(player.location, RoomId(0));
        assert_eq!(player.move_count, 0);
    }

    #[test]
    fn go_back_pops_without_counting() {
        let rooms = create_test_rooms();
        let mut player = create_test_player();
        assert_eq!(player.go_back(), Err(GameError::NoVisitHistory));
        player.move_to(&rooms, Direction::North).unwrap();
        assert_eq!(player.go_back(), Ok(RoomId(0)));
        assert_eq!(player.location, RoomId(0));
        assert!(player.visited_rooms.is_empty());
        assert_eq!(player.move_count, 1);
    }

    #[test]
    fn take_moves_item_and_weight() {
        let mut rooms = create_test_rooms();
        let mut player = create_test_player();
        let action = player.take_item(&mut rooms[0], "sword").unwrap();
        assert_eq!(action.item, "sword");
        assert!(player.contains_item("sword"));
        assert!(!rooms[0].contains_item("sword"));
        assert_eq!(player.current_weight(), Weight::from_kg(2.0));
        assert_eq!(player.current_weight(), player.inventory.recomputed_weight());
    }

    #[test]
    fn take_missing_item_changes_nothing() {
        let mut rooms = create_test_rooms();
        let mut player = create_test_player();
        let before = rooms[0].current_weight();
        assert_eq!(
            player.take_item(&mut rooms[0], "lamp"),
            Err(GameError::ItemNotFound("lamp".into()))
        );
        assert_eq!(rooms[0].current_weight(), before);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn drop_is_the_inverse_of_take() {
        let mut rooms = create_test_rooms();
        let mut player = create_test_player();
        let total = rooms[0].current_weight();
        player.take_item(&mut rooms[0], "shield").unwrap();
        player.take_item(&mut rooms[0], "sword").unwrap();
        assert_eq!(rooms[0].current_weight() + player.current_weight(), total);
        player.drop_item(&mut rooms[0], "Shield").unwrap();
        assert_eq!(rooms[0].current_weight() + player.current_weight(), total);
        assert_eq!(player.current_weight(), Weight::from_kg(2.0));
        assert_eq!(
            player.drop_item(&mut rooms[0], "shield"),
            Err(GameError::ItemNotInInventory("shield".into()))
        );
    }

    #[test]
    fn take_emits_action_event() {
        let mut rooms = create_test_rooms();
        let mut player = create_test_player();
        player.quests.add_quest(Quest::new(
            "Armed",
            "Find a weapon",
            vec![Objective::new(ObjectiveKind::Action {
                verb: ActionVerb::Take,
                target: "Sword".into(),
            })],
            Some("Courage".into()),
        ));
        player.quests.activate_quest("Armed").unwrap();
        let action = player.take_item(&mut rooms[0], "sword").unwrap();
        assert_eq!(action.progress.len(), 3);
        assert!(player.rewards.contains("Courage"));
    }

    #[test]
    fn rewards_are_never_duplicated() {
        let mut rewards = Rewards::default();
        assert!(rewards.grant("Map"));
        assert!(!rewards.grant("Map"));
        assert!(rewards.grant("Lamp"));
        assert_eq!(rewards.iter().collect::<Vec<_>>(), ["Map", "Lamp"]);
    }
}
