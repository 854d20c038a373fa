#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use glade_engine as ge;

use ge::adventure::builtin_world;
use ge::{Embedding, EmbeddingError, EmbeddingProvider, SequenceChooser, View, World, WorldBuilder};

/// Builds the built-in adventure with the hashing embedder and scripted wander picks.
pub fn builtin(picks: Vec<usize>) -> (World, View) {
    let mut view = View::new();
    let world = WorldBuilder::new(builtin_world())
        .chooser(SequenceChooser::new(picks))
        .build(&mut view)
        .expect("built-in world is valid");
    (world, view)
}

/// Gives each phrase a fixed score regardless of what the player typed.
///
/// Phrases in the table embed to their position in it; anything else embeds to `[-1.0]`
/// and scores 0.0 as a phrase.
pub struct FixedScores {
    phrases: Vec<String>,
    scores: Vec<f32>,
    pub calls: Rc<Cell<usize>>,
}

impl FixedScores {
    pub fn new(table: &[(&str, f32)]) -> Self {
        Self {
            phrases: table.iter().map(|(phrase, _)| (*phrase).to_string()).collect(),
            scores: table.iter().map(|(_, score)| *score).collect(),
            calls: Rc::new(Cell::new(0)),
        }
    }
}

impl EmbeddingProvider for FixedScores {
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        self.calls.set(self.calls.get() + 1);
        #[allow(clippy::cast_precision_loss)]
        let slot = self.phrases.iter().position(|phrase| phrase == text).map_or(-1.0, |i| i as f32);
        Ok(vec![slot])
    }

    fn similarity(&self, _input: &[f32], phrase: &[f32]) -> f32 {
        if phrase[0] < 0.0 {
            return 0.0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let slot = phrase[0] as usize;
        self.scores.get(slot).copied().unwrap_or(0.0)
    }
}

/// Provider whose model never loaded.
pub struct Unavailable;

impl EmbeddingProvider for Unavailable {
    fn embed(&self, _text: &str) -> Result<Embedding, EmbeddingError> {
        Err(EmbeddingError::Unavailable("model not loaded".into()))
    }
}

/// Provider that answers batches with one vector too few.
pub struct ShortBatch;

impl EmbeddingProvider for ShortBatch {
    fn embed(&self, _text: &str) -> Result<Embedding, EmbeddingError> {
        Ok(vec![1.0])
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbeddingError> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0]).collect())
    }
}
