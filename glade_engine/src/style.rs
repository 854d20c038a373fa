//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn location_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn narration_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn engine_style(&self) -> ColoredString;
    fn score_style(&self) -> ColoredString;
    fn game_over_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn location_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn narration_style(&self) -> ColoredString {
        self.truecolor(230, 230, 200)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn engine_style(&self) -> ColoredString {
        self.dimmed().truecolor(80, 80, 230)
    }
    fn score_style(&self) -> ColoredString {
        self.dimmed().truecolor(75, 80, 75)
    }
    fn game_over_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
}

impl GameStyle for String {
    fn location_style(&self) -> ColoredString {
        self.as_str().location_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn narration_style(&self) -> ColoredString {
        self.as_str().narration_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn engine_style(&self) -> ColoredString {
        self.as_str().engine_style()
    }
    fn score_style(&self) -> ColoredString {
        self.as_str().score_style()
    }
    fn game_over_style(&self) -> ColoredString {
        self.as_str().game_over_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary narration blocks.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(100))
}

/// Wrapping options for indented narration blocks.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth().min(100)).initial_indent("    ").subsequent_indent("    ")
}
