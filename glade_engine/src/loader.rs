//! Loader utilities for building a `World` from the built-in adventure or a TOML world file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glade_data::WorldDef;
use log::info;

use crate::adventure::builtin_world;
use crate::config::EngineConfig;
use crate::data_paths::data_path;
use crate::view::View;
use crate::world::{World, WorldBuilder};

/// Read a `WorldDef` from a TOML file.
///
/// # Errors
/// - if the file cannot be read or does not describe a world.
pub fn load_world_def(toml_path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading world definition from '{}'", toml_path.display()))?;
    let def: WorldDef =
        toml::from_str(&text).with_context(|| format!("parsing world definition from '{}'", toml_path.display()))?;
    info!(
        "world '{}' read from '{}' ({} locations)",
        def.title,
        toml_path.display(),
        def.locations.len()
    );
    Ok(def)
}

/// Build the world selected by `config`, queueing the start location's narration in `view`.
///
/// Relative `world_file` paths are resolved against the data directory.
///
/// # Errors
/// - if the world file cannot be loaded or the world fails validation.
pub fn load_world(config: &EngineConfig, view: &mut View) -> Result<World> {
    let def = match &config.world_file {
        Some(path) if path.is_absolute() => load_world_def(path)?,
        Some(path) => load_world_def(&data_path(path))?,
        None => {
            info!("using built-in adventure");
            builtin_world()
        },
    };
    let world = WorldBuilder::new(def)
        .config(config)
        .build(view)
        .context("while building world")?;
    info!("World '{}' ready at '{}'", world.title, world.current_location_id());
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glade_data::{EffectDef, validate_world};
    use std::io::Write;

    const LIGHTHOUSE: &str = include_str!("../data/worlds/lighthouse.toml");

    #[test]
    fn shipped_world_file_parses_and_validates() {
        let def: WorldDef = toml::from_str(LIGHTHOUSE).unwrap();
        assert_eq!(def.start, "shore");
        assert_eq!(def.locations.len(), 2);
        assert!(validate_world(&def).is_empty());
        assert!(matches!(
            def.locations[1].actions[1].effect,
            EffectDef::IfFlag { .. }
        ));
    }

    #[test]
    fn load_world_uses_absolute_world_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{LIGHTHOUSE}").unwrap();
        let config = EngineConfig {
            world_file: Some(file.path().to_path_buf()),
            seed: Some(1),
            ..EngineConfig::default()
        };
        let mut view = View::new();
        let world = load_world(&config, &mut view).unwrap();
        assert_eq!(world.title, "The Lighthouse");
        assert_eq!(world.current_location_id(), "shore");
        assert_eq!(view.lines().len(), 1);
    }

    #[test]
    fn load_world_defaults_to_builtin() {
        let mut view = View::new();
        let world = load_world(&EngineConfig::default(), &mut view).unwrap();
        assert_eq!(world.current_location_id(), crate::adventure::CLEARING);
    }

    #[test]
    fn missing_world_file_is_an_error() {
        let config = EngineConfig {
            world_file: Some("/no/such/world.toml".into()),
            ..EngineConfig::default()
        };
        let mut view = View::new();
        assert!(load_world(&config, &mut view).is_err());
    }
}
