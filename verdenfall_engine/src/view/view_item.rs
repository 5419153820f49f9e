//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn. Variants contain different
//! payloads, depending the type of information that needs to be displayed.

use variantly::Variantly;

use crate::item::Weight;
use crate::quest::QuestStatus;
use crate::view::{HelpLine, ItemLine, NpcLine, ObjectiveLine, QuestLine, Section};

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    ActionSuccess(String),
    Error(String),
    Farewell {
        player: String,
    },
    GameLost(String),
    GameWon(String),
    Help(Vec<HelpLine>),
    Inventory {
        items: Vec<ItemLine>,
        total: Weight,
    },
    NpcEntered {
        npc_name: String,
    },
    NpcLeft {
        npc_name: String,
    },
    NpcSilent {
        speaker: String,
    },
    NpcSpeech {
        speaker: String,
        quote: String,
    },
    ObjectiveComplete {
        quest: String,
        objective: String,
    },
    QuestActivated {
        title: String,
        description: String,
    },
    QuestComplete {
        quest: String,
    },
    QuestDetail {
        title: String,
        description: String,
        status: QuestStatus,
        objectives: Vec<ObjectiveLine>,
        reward: Option<String>,
    },
    QuestList(Vec<QuestLine>),
    RewardGranted {
        reward: String,
    },
    RewardList(Vec<String>),
    RoomDescription {
        name: String,
        description: String,
        exits: String,
    },
    RoomItems(Vec<ItemLine>),
    RoomNpcs(Vec<NpcLine>),
    VisitHistory(Vec<String>),
    Welcome {
        title: String,
        intro: String,
        player: String,
        room: String,
    },
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::Welcome { .. } => Section::Transition,
            ViewItem::RoomDescription { .. }
            | ViewItem::RoomItems(_)
            | ViewItem::RoomNpcs(_)
            | ViewItem::VisitHistory(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::Error(_)
            | ViewItem::Inventory { .. }
            | ViewItem::QuestList(_)
            | ViewItem::QuestDetail { .. }
            | ViewItem::QuestActivated { .. }
            | ViewItem::RewardList(_)
            | ViewItem::NpcSpeech { .. }
            | ViewItem::NpcSilent { .. } => Section::DirectResult,
            ViewItem::NpcEntered { .. }
            | ViewItem::NpcLeft { .. }
            | ViewItem::ObjectiveComplete { .. }
            | ViewItem::QuestComplete { .. }
            | ViewItem::RewardGranted { .. } => Section::WorldResponse,
            ViewItem::Help(_) | ViewItem::Farewell { .. } | ViewItem::GameWon(_) | ViewItem::GameLost(_) => {
                Section::System
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_binned_by_section() {
        assert_eq!(ViewItem::VisitHistory(vec![]).section(), Section::Environment);
        assert_eq!(ViewItem::Error("x".into()).section(), Section::DirectResult);
        assert_eq!(
            ViewItem::NpcLeft {
                npc_name: "Guardian".into()
            }
            .section(),
            Section::WorldResponse
        );
        assert_eq!(ViewItem::GameWon("yay".into()).section(), Section::System);
    }
}
