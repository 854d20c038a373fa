#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Glade **
//! Text adventure driven by free-form player input

use glade_engine::data_paths::data_path;
use glade_engine::style::GameStyle;
use glade_engine::{GLADE_VERSION, View, load_config, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Glade v{GLADE_VERSION}...");
    let config = load_config(&data_path("glade.toml"));

    let mut view = View::new();
    let mut world = load_world(&config, &mut view).context("while loading World")?;
    info!("World loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^84}", world.title.to_uppercase().bright_yellow().underline());
    println!(
        "{}\n",
        format!("(say what you want to do; type \"{}\" to quit)", config.exit_command).engine_style()
    );

    run_repl(&mut world, &config, &mut view)
}
