//! Engine configuration and loader.
//!
//! Settings live in `glade.toml` in the data directory. Every field is optional; anything
//! missing falls back to the defaults below, and an unreadable file falls back entirely.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::embedding::HashingEmbedder;
use crate::resolver::DEFAULT_MATCH_THRESHOLD;

/// Tunable engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum similarity (inclusive) for input to trigger an action.
    pub match_threshold: f32,
    /// Line that ends the session by exact match, bypassing resolution.
    pub exit_command: String,
    /// Show the phrase/score table after every input.
    pub show_scores: bool,
    /// Seed for wander choices; OS entropy when absent.
    pub seed: Option<u64>,
    /// Vector size of the built-in hashing embedder.
    pub embedding_dims: usize,
    /// TOML world definition to play instead of the built-in adventure.
    pub world_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            exit_command: "exit".to_string(),
            show_scores: false,
            seed: None,
            embedding_dims: HashingEmbedder::DEFAULT_DIMS,
            world_file: None,
        }
    }
}

/// Loads the engine configuration from a TOML file, or returns defaults if loading fails.
pub fn load_config(toml_path: &Path) -> EngineConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!(
                "engine config loaded from '{}' (threshold {})",
                toml_path.display(),
                config.match_threshold
            );
            config
        },
        Err(e) => {
            warn!(
                "Could not load engine config from '{}': {:#}. Using defaults.",
                toml_path.display(),
                e
            );
            EngineConfig::default()
        },
    }
}

/// Attempts to load the engine configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn try_load_config(toml_path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading engine config from '{}'", toml_path.display()))?;
    let config: EngineConfig =
        toml::from_str(&text).with_context(|| format!("parsing engine config from '{}'", toml_path.display()))?;
    Ok(config)
}
