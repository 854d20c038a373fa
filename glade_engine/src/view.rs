//! View module.
//! Rather than printing to the console from each effect, narration is aggregated here in the
//! order it was produced and displayed at the end of the turn.

use colored::Colorize;
use log::info;
use textwrap::fill;
use variantly::Variantly;

use crate::style::{GameStyle, indented_block, normal_block};

const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_ENGINE: &str = "⚙";
const ICON_ITEM: &str = "\u{2611}";
const ICON_DEATH: &str = "☠";

/// Line shown when a direction has nowhere to lead.
pub const BLOCKED_TEXT: &str = "You shouldn't go that way.";
/// Line shown when resolution rejects the player's input.
pub const INVALID_ACTION_TEXT: &str = "Invalid action!";
/// Line shown when the session ends through a fatal effect.
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Anything that can be shown to the player at the end of a turn.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    FirstArrival { name: String, text: String },
    Arrival { name: String, text: String },
    Narration(String),
    ItemTaken { item: String, text: String },
    InvalidAction,
    ScoreTable(Vec<(String, f32)>),
    GameOver,
    EngineMessage(String),
    Error(String),
}

impl ViewItem {
    /// Unstyled text lines for this item.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ViewItem::FirstArrival { text, .. }
            | ViewItem::Arrival { text, .. }
            | ViewItem::ItemTaken { text, .. }
            | ViewItem::Narration(text)
            | ViewItem::EngineMessage(text)
            | ViewItem::Error(text) => vec![text.clone()],
            ViewItem::InvalidAction => vec![INVALID_ACTION_TEXT.to_string()],
            ViewItem::ScoreTable(scores) => scores
                .iter()
                .map(|(phrase, score)| format!("{score:>7.3}  {phrase}"))
                .collect(),
            ViewItem::GameOver => vec![GAME_OVER_TEXT.to_string()],
        }
    }
}

/// Ordered buffer of everything produced during a turn.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything buffered so far without displaying it.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All buffered output as plain text, in the order it was produced.
    pub fn lines(&self) -> Vec<String> {
        self.items.iter().flat_map(ViewItem::lines).collect()
    }

    /// Display all buffered items and empty the buffer for the next turn.
    pub fn flush(&mut self) {
        for item in &self.items {
            println!("{}", render(item));
        }
        info!("view flushed {} item(s)", self.items.len());
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }
}

fn render(item: &ViewItem) -> String {
    match item {
        ViewItem::FirstArrival { name, text } => format!(
            "{}\n{}",
            name.location_style(),
            fill(text, normal_block()).description_style()
        ),
        ViewItem::Arrival { name, text } => format!(
            "{}\n{}",
            name.location_style(),
            fill(text, normal_block()).description_style()
        ),
        ViewItem::Narration(text) => fill(text, normal_block()).narration_style().to_string(),
        ViewItem::ItemTaken { item, text } => format!(
            "{} {} {}",
            ICON_ITEM.item_style(),
            fill(text, normal_block()).narration_style(),
            format!("[{item}]").item_style()
        ),
        ViewItem::InvalidAction => INVALID_ACTION_TEXT.denied_style().to_string(),
        ViewItem::ScoreTable(_) => item
            .lines()
            .iter()
            .map(|line| fill(line, indented_block()).score_style().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        ViewItem::GameOver => format!("\n{ICON_DEATH} {}", GAME_OVER_TEXT.game_over_style()),
        ViewItem::EngineMessage(msg) => format!("{} {}", ICON_ENGINE.engine_style(), msg.engine_style()),
        ViewItem::Error(msg) => format!("{} {}", ICON_ERROR.error_style(), msg.error_style().bold()),
    }
}
