//! Renderers for quest listings, detail and progress notices.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize as _};
use textwrap::fill;

use crate::quest::QuestStatus;
use crate::style::{GameStyle as _, indented_block};
use crate::view::{ObjectiveLine, QuestLine};

fn status_tag(status: QuestStatus) -> ColoredString {
    match status {
        QuestStatus::Inactive => "inactive".quest_inactive_style(),
        QuestStatus::Active => "active".quest_active_style(),
        QuestStatus::Complete => "complete".quest_complete_style(),
    }
}

pub(super) fn quest_list(out: &mut String, quests: &[QuestLine]) {
    let _ = writeln!(out, "{}:", "Quests".subheading_style());
    if quests.is_empty() {
        let _ = writeln!(out, "   {}", "There are no quests in this world.".italic().dimmed());
    }
    for quest in quests {
        let _ = writeln!(out, "   {} [{}]", quest.title, status_tag(quest.status));
    }
}

pub(super) fn quest_detail(
    out: &mut String,
    width: usize,
    title: &str,
    description: &str,
    status: QuestStatus,
    objectives: &[ObjectiveLine],
    reward: Option<&str>,
) {
    let _ = writeln!(out, "{} [{}]", title.subheading_style(), status_tag(status));
    let _ = writeln!(out, "{}", fill(description, indented_block(width)).description_style());
    let _ = writeln!(out, "Objectives:");
    for objective in objectives {
        let mark = if objective.complete { "x" } else { " " };
        match objective.counter {
            Some((current, threshold)) => {
                let _ = writeln!(out, "   [{mark}] {} ({current}/{threshold})", objective.description);
            },
            None => {
                let _ = writeln!(out, "   [{mark}] {}", objective.description);
            },
        }
    }
    if let Some(reward) = reward {
        let _ = writeln!(out, "Reward: {}", reward.reward_style());
    }
}

pub(super) fn quest_activated(out: &mut String, width: usize, title: &str, description: &str) {
    let _ = writeln!(out, "Quest activated: {}", title.quest_active_style());
    let _ = writeln!(out, "{}", fill(description, indented_block(width)).description_style());
}

pub(super) fn objective_complete(out: &mut String, quest: &str, objective: &str) {
    let _ = writeln!(out, "Objective complete ({}): {objective}", quest.quest_active_style());
}

pub(super) fn quest_complete(out: &mut String, quest: &str) {
    let _ = writeln!(out, "Quest complete: {}", quest.quest_complete_style());
}
