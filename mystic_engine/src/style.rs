//! Terminal styling.
//!
//! Every kind of game text has one look, applied through [`GameStyle`]. The
//! trait is implemented for anything string-like, so literals, `String`s and
//! borrowed names can all be styled in place.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Widest a paragraph is allowed to get, even on very wide terminals.
const MAX_TEXT_WIDTH: usize = 100;

/// Named styles for each kind of game text.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn event_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    /// Section markers print as `[name]` in a dim grey.
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn status_style(&self) -> ColoredString;
    fn victory_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
}

impl<T: AsRef<str>> GameStyle for T {
    fn item_style(&self) -> ColoredString {
        self.as_ref().truecolor(235, 190, 60)
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_ref().bold().truecolor(210, 70, 50)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.as_ref().bold().truecolor(120, 200, 120).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.as_ref().italic().truecolor(140, 200, 235)
    }
    fn event_style(&self) -> ColoredString {
        self.as_ref().italic().truecolor(240, 220, 80)
    }
    fn exit_style(&self) -> ColoredString {
        self.as_ref().truecolor(120, 200, 120)
    }
    fn error_style(&self) -> ColoredString {
        self.as_ref().truecolor(240, 60, 60)
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_ref().bold().underline()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_ref().italic().bold().truecolor(240, 60, 60)
    }
    fn section_style(&self) -> ColoredString {
        format!("[{}]", self.as_ref()).truecolor(90, 90, 100)
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_ref().truecolor(170, 160, 220)
    }
    fn status_style(&self) -> ColoredString {
        self.as_ref().bold().truecolor(190, 170, 255)
    }
    fn victory_style(&self) -> ColoredString {
        self.as_ref().bold().truecolor(255, 210, 0)
    }
    fn transition_style(&self) -> ColoredString {
        self.as_ref().italic().dimmed()
    }
}

/// Wrapping options for ordinary paragraphs.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(MAX_TEXT_WIDTH))
}

/// Wrapping options for text nested under a heading or list entry.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("    ").subsequent_indent("    ")
}
