#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GLADE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod adventure;
pub mod chooser;
pub mod config;
pub mod data_paths;
pub mod effect;
pub mod embedding;
pub mod inventory;
pub mod loader;
pub mod location;
pub mod repl;
pub mod resolver;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use chooser::{Chooser, RngChooser, SequenceChooser};
pub use config::{EngineConfig, load_config};
pub use embedding::{Embedding, EmbeddingError, EmbeddingProvider, HashingEmbedder, cosine_similarity};
pub use inventory::Inventory;
pub use loader::{load_world, load_world_def};
pub use location::Location;
pub use repl::run_repl;
pub use resolver::{DEFAULT_MATCH_THRESHOLD, Resolution, Resolver};
pub use view::{View, ViewItem};
pub use world::{ActOutcome, EngineError, World, WorldBuilder, WorldError};
