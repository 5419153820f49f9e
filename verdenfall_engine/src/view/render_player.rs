//! module Render Player
//!
//! Renderers for player-related feedback: inventory and earned rewards.

use std::fmt::Write as _;

use colored::Colorize as _;

use crate::item::Weight;
use crate::style::GameStyle as _;
use crate::view::ItemLine;

/// Displays the player's bag and what it weighs.
pub(super) fn inventory(out: &mut String, items: &[ItemLine], total: Weight) {
    let _ = writeln!(out, "{}:", "Inventory".subheading_style());
    if items.is_empty() {
        let _ = writeln!(out, "   {}", "You have... nothing at all.".italic().dimmed());
    } else {
        for line in items {
            let _ = writeln!(
                out,
                "   {}: {} ({})",
                line.name.item_style(),
                line.description,
                line.weight
            );
        }
    }
    let _ = writeln!(out, "Total weight: {total}");
}

pub(super) fn rewards(out: &mut String, rewards: &[String]) {
    let _ = writeln!(out, "{}:", "Rewards".subheading_style());
    if rewards.is_empty() {
        let _ = writeln!(out, "   {}", "None yet. Finish a quest to earn one.".italic().dimmed());
    }
    for reward in rewards {
        let _ = writeln!(out, "   {}", reward.reward_style());
    }
}
