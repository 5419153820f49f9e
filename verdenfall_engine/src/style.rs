//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::Options;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn npc_quote_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn history_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn quest_active_style(&self) -> ColoredString;
    fn quest_complete_style(&self) -> ColoredString;
    fn quest_inactive_style(&self) -> ColoredString;
    fn reward_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn title_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn quest_active_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn quest_complete_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220).strikethrough()
    }
    fn quest_inactive_style(&self) -> ColoredString {
        self.dimmed()
    }
    fn reward_style(&self) -> ColoredString {
        self.bold().truecolor(230, 200, 60)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn npc_quote_style(&self) -> ColoredString {
        self.italic().truecolor(100, 200, 130)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn history_style(&self) -> ColoredString {
        self.italic().dimmed()
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn success_style(&self) -> ColoredString {
        self.truecolor(80, 200, 80)
    }
    fn title_style(&self) -> ColoredString {
        self.bold().truecolor(223, 77, 10)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(170, 170, 170)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn quest_active_style(&self) -> ColoredString {
        self.as_str().quest_active_style()
    }
    fn quest_complete_style(&self) -> ColoredString {
        self.as_str().quest_complete_style()
    }
    fn quest_inactive_style(&self) -> ColoredString {
        self.as_str().quest_inactive_style()
    }
    fn reward_style(&self) -> ColoredString {
        self.as_str().reward_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn npc_quote_style(&self) -> ColoredString {
        self.as_str().npc_quote_style()
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_str().room_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn history_style(&self) -> ColoredString {
        self.as_str().history_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary paragraphs.
pub fn normal_block(width: usize) -> Options<'static> {
    Options::new(width.max(20))
}

/// Wrapping options for text set in under a heading or bullet.
pub fn indented_block(width: usize) -> Options<'static> {
    Options::new(width.max(20))
        .initial_indent("    ")
        .subsequent_indent("    ")
}
