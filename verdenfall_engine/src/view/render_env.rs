//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame, plus NPC speech.

use std::fmt::Write as _;

use textwrap::fill;

use crate::style::{GameStyle as _, indented_block, normal_block};
use crate::view::{ItemLine, NpcLine};

pub(super) fn room_description(out: &mut String, width: usize, name: &str, description: &str, exits: &str) {
    let _ = writeln!(out, "{:^width$}", name.room_titlebar_style());
    let _ = writeln!(
        out,
        "{}\n",
        fill(&format!("You are {description}"), normal_block(width)).description_style()
    );
    let exits = if exits.is_empty() { "none" } else { exits };
    let _ = writeln!(out, "Exits: {}\n", exits.exit_style());
}

pub(super) fn room_items(out: &mut String, items: &[ItemLine]) {
    let _ = writeln!(out, "{}:", "Items here".subheading_style());
    if items.is_empty() {
        let _ = writeln!(out, "   nothing worth taking.");
    }
    for line in items {
        let _ = writeln!(
            out,
            "   {}: {} ({})",
            line.name.item_style(),
            line.description,
            line.weight
        );
    }
    out.push('\n');
}

pub(super) fn room_npcs(out: &mut String, width: usize, npcs: &[NpcLine]) {
    if npcs.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}:", "Present".subheading_style());
    for npc in npcs {
        let _ = writeln!(out, "   {}", npc.name.npc_style());
        let _ = writeln!(out, "{}", fill(&npc.description, indented_block(width)).description_style());
    }
    out.push('\n');
}

pub(super) fn visit_history(out: &mut String, width: usize, history: &[String]) {
    if history.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", "You have already visited:".subheading_style());
    for description in history {
        let _ = writeln!(out, "{}", fill(description, indented_block(width)).history_style());
    }
    out.push('\n');
}

pub(super) fn npc_speech(out: &mut String, width: usize, speaker: &str, quote: &str) {
    let _ = writeln!(out, "{}:", speaker.npc_style());
    let _ = writeln!(
        out,
        "{}",
        fill(&format!("\"{quote}\""), indented_block(width)).npc_quote_style()
    );
}
