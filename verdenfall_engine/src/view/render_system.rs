//! Renderers for the system section: welcome, help and game endings.

use std::fmt::Write as _;

use textwrap::fill;

use crate::style::{GameStyle as _, normal_block};
use crate::view::HelpLine;

pub(super) fn welcome(out: &mut String, width: usize, title: &str, intro: &str, player: &str, room: &str) {
    let _ = writeln!(out, "{:^width$}\n", title.title_style());
    if !intro.is_empty() {
        let _ = writeln!(out, "{}\n", fill(intro, normal_block(width)).description_style());
    }
    let _ = writeln!(out, "Welcome, {player}. Your journey begins in {}.", room.room_titlebar_style());
    let _ = writeln!(out, "Type 'help' for a list of commands.\n");
}

pub(super) fn help(out: &mut String, lines: &[HelpLine]) {
    let _ = writeln!(out, "{}:", "Commands".subheading_style());
    let usage_width = lines.iter().map(|l| l.usage.len()).max().unwrap_or(0);
    for line in lines {
        let _ = writeln!(out, "   {:<usage_width$}  {}", line.usage, line.help);
    }
}

pub(super) fn game_over(out: &mut String, width: usize, banner: &str, message: &str) {
    let _ = writeln!(out, "{:^width$}", banner.title_style());
    let _ = writeln!(out, "{}", fill(message, normal_block(width)));
}
