//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

mod render_env;
mod render_player;
mod render_quest;
mod render_system;
mod view_item;

pub use view_item::ViewItem;

use std::fmt::Write as _;

use textwrap::termwidth;

use crate::item::Weight;
use crate::quest::QuestStatus;
use crate::style::GameStyle;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
impl View {
    /// Create a new empty view sized to the terminal.
    pub fn new() -> Self {
        Self::with_width(termwidth())
    }

    /// Create a new empty view with a fixed wrap width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Items queued for the current frame, in the order they were pushed.
    pub fn items(&self) -> &[ViewItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Compose the current frame.
    ///
    /// Items are grouped by [`Section`] (in section order) and keep their push order within a section.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in Section::ALL {
            let entries: Vec<_> = self.items.iter().filter(|i| i.section() == section).collect();
            if entries.is_empty() {
                continue;
            }
            if let Some(label) = section.label() {
                let _ = writeln!(out, "{:.>width$}\n", label.section_style(), width = self.width);
            }
            for item in entries {
                self.render_item(item, &mut out);
            }
        }
        out
    }

    /// Print the current frame and clear it for the next turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        if !self.items.is_empty() {
            println!("{}", self.render());
        }
        self.items.clear();
    }

    fn render_item(&self, item: &ViewItem, out: &mut String) {
        let width = self.width;
        match item {
            ViewItem::Welcome {
                title,
                intro,
                player,
                room,
            } => render_system::welcome(out, width, title, intro, player, room),
            ViewItem::RoomDescription {
                name,
                description,
                exits,
            } => render_env::room_description(out, width, name, description, exits),
            ViewItem::RoomItems(items) => render_env::room_items(out, items),
            ViewItem::RoomNpcs(npcs) => render_env::room_npcs(out, width, npcs),
            ViewItem::VisitHistory(history) => render_env::visit_history(out, width, history),
            ViewItem::Inventory { items, total } => render_player::inventory(out, items, *total),
            ViewItem::RewardList(rewards) => render_player::rewards(out, rewards),
            ViewItem::NpcSpeech { speaker, quote } => render_env::npc_speech(out, width, speaker, quote),
            ViewItem::NpcSilent { speaker } => {
                let _ = writeln!(out, "{} has nothing to say.", speaker.npc_style());
            },
            ViewItem::NpcEntered { npc_name } => {
                let _ = writeln!(out, "\u{2192} {} arrives.", npc_name.npc_style());
            },
            ViewItem::NpcLeft { npc_name } => {
                let _ = writeln!(out, "\u{2190} {} leaves.", npc_name.npc_style());
            },
            ViewItem::QuestList(quests) => render_quest::quest_list(out, quests),
            ViewItem::QuestDetail {
                title,
                description,
                status,
                objectives,
                reward,
            } => render_quest::quest_detail(out, width, title, description, *status, objectives, reward.as_deref()),
            ViewItem::QuestActivated { title, description } => {
                render_quest::quest_activated(out, width, title, description);
            },
            ViewItem::ObjectiveComplete { quest, objective } => render_quest::objective_complete(out, quest, objective),
            ViewItem::QuestComplete { quest } => render_quest::quest_complete(out, quest),
            ViewItem::RewardGranted { reward } => {
                let _ = writeln!(out, "{ICON_CELEBRATE} Reward earned: {}", reward.reward_style());
            },
            ViewItem::Help(lines) => render_system::help(out, lines),
            ViewItem::ActionSuccess(msg) => {
                let _ = writeln!(out, "{ICON_SUCCESS} {}", msg.success_style());
            },
            ViewItem::Error(msg) => {
                let _ = writeln!(out, "{ICON_ERROR} {}", msg.error_style());
            },
            ViewItem::GameWon(msg) => render_system::game_over(out, width, "VICTORY", msg),
            ViewItem::GameLost(msg) => render_system::game_over(out, width, "DEFEAT", msg),
            ViewItem::Farewell { player } => {
                let _ = writeln!(out, "Farewell, {player}. Until the next journey.");
            },
        }
    }
}

const ICON_SUCCESS: &str = "\u{2611}";
const ICON_ERROR: &str = "\u{26A0}\u{FE0E}";
const ICON_CELEBRATE: &str = "\u{1F389}";

/// Top-level grouping of a frame's output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Opening text shown once at the start of a game.
    Transition,
    /// Room description, contents and history.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Follow-up reactions from the world: NPC traffic, quest progress.
    WorldResponse,
    /// Meta/game-system feedback (help, endings, quit).
    System,
}
impl Section {
    pub const ALL: [Section; 5] = [
        Section::Transition,
        Section::Environment,
        Section::DirectResult,
        Section::WorldResponse,
        Section::System,
    ];

    fn label(self) -> Option<&'static str> {
        match self {
            Section::Transition => None,
            Section::Environment => Some("scene"),
            Section::DirectResult => Some("results"),
            Section::WorldResponse => Some("responses"),
            Section::System => Some("game"),
        }
    }
}

/// One item as shown in room and inventory listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub name: String,
    pub description: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcLine {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLine {
    pub title: String,
    pub status: QuestStatus,
}

/// An objective as shown in quest detail; `counter` is `(current, threshold)` for counter objectives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveLine {
    pub description: String,
    pub complete: bool,
    pub counter: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLine {
    pub usage: String,
    pub help: String,
}
