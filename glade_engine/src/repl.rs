//! REPL and turn handling.
//!
//! The game runs in a read-eval-print loop: read a line, hand it to [`World::act`],
//! display whatever the turn produced, and stop once the world is no longer playing.
//! The configured exit command is the only input matched literally.

mod input;

use anyhow::{Context, Result};
use log::{error, info};

use crate::config::EngineConfig;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::{ActOutcome, World};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the game ends or the player quits.
///
/// Output already queued in `view` (usually the opening narration) is shown first.
///
/// # Errors
/// - if player input can no longer be read.
pub fn run_repl(world: &mut World, config: &EngineConfig, view: &mut View) -> Result<()> {
    let mut input_manager = InputManager::new();
    view.flush();

    let mut turn = 0;
    while world.is_playing() {
        turn += 1;
        info!("================> BEGIN TURN {turn} <================");

        let prompt = format!("\n[{}]>> ", world.current_location().name)
            .prompt_style()
            .to_string();
        let line = match input_manager.read_line(&prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => config.exit_command.clone(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        if handle_line(world, &config.exit_command, &line, view) == ReplControl::Quit {
            session_summary(world, view);
            view.flush();
            break;
        }
        view.flush();
    }
    Ok(())
}

/// Process one line of player input.
///
/// `exit_command` ends the session by exact match without resolution. Anything else is
/// resolved by the world; engine failures are reported and the session carries on.
pub fn handle_line(world: &mut World, exit_command: &str, line: &str, view: &mut View) -> ReplControl {
    if line == exit_command {
        info!("exit command received");
        world.quit();
        return ReplControl::Quit;
    }

    match world.act(line, view) {
        Ok(ActOutcome::Resolved { phrase, score }) => info!("turn resolved '{phrase}' ({score:.3})"),
        Ok(ActOutcome::Rejected { .. }) => info!("turn rejected"),
        Ok(ActOutcome::Ignored) => {},
        Err(err) => {
            error!("turn failed: {err}");
            view.push(ViewItem::Error(format!("Something went wrong ({err}). Try again.")));
        },
    }

    if world.is_playing() {
        ReplControl::Continue
    } else {
        ReplControl::Quit
    }
}

/// Push an end-of-session summary of places visited and items carried.
pub fn session_summary(world: &World, view: &mut View) {
    let ids = world.location_ids();
    let visited = ids
        .iter()
        .filter_map(|id| world.location(id))
        .filter(|location| location.visited)
        .count();
    info!("session ended: visited {visited}/{} locations", ids.len());
    view.push(ViewItem::EngineMessage(format!(
        "You visited {visited} of {} locations.",
        ids.len()
    )));

    let inventory = world.inventory();
    let carried = if inventory.is_empty() {
        "You carried nothing.".to_string()
    } else {
        format!("You carried: {}.", inventory.iter().collect::<Vec<_>>().join(", "))
    };
    view.push(ViewItem::EngineMessage(carried));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::{CLEARING, builtin_world};
    use crate::chooser::SequenceChooser;
    use crate::world::WorldBuilder;

    fn world() -> (World, View) {
        let mut view = View::new();
        let world = WorldBuilder::new(builtin_world())
            .chooser(SequenceChooser::new(vec![0]))
            .build(&mut view)
            .unwrap();
        view.clear();
        (world, view)
    }

    #[test]
    fn exit_command_quits_without_resolving() {
        let (mut world, mut view) = world();
        assert_eq!(handle_line(&mut world, "exit", "exit", &mut view), ReplControl::Quit);
        assert!(!world.is_playing());
        assert!(view.is_empty());
        assert_eq!(world.current_location_id(), CLEARING);
    }

    #[test]
    fn exit_command_requires_exact_match() {
        let (mut world, mut view) = world();
        assert_eq!(handle_line(&mut world, "exit", "exit now", &mut view), ReplControl::Continue);
        assert!(world.is_playing());
    }

    #[test]
    fn fatal_action_ends_the_loop() {
        let (mut world, mut view) = world();
        assert_eq!(handle_line(&mut world, "exit", "go east", &mut view), ReplControl::Continue);
        assert_eq!(handle_line(&mut world, "exit", "attack goblin", &mut view), ReplControl::Quit);
    }

    #[test]
    fn summary_reports_visits_and_items() {
        let (mut world, mut view) = world();
        handle_line(&mut world, "exit", "go north", &mut view);
        handle_line(&mut world, "exit", "go inside", &mut view);
        handle_line(&mut world, "exit", "take the sword", &mut view);
        view.clear();
        session_summary(&world, &mut view);
        assert_eq!(
            view.lines(),
            vec!["You visited 2 of 3 locations.", "You carried: sword."]
        );
    }
}
