//! Action resolution.
//!
//! Player text is scored against the canonical phrases of the current location, and the
//! best phrase is accepted if its score reaches the match threshold. Phrase embeddings
//! never change after a location is built, so they are computed once per location and
//! cached; only the player's text is embedded on every turn.

use std::collections::HashMap;

use log::{debug, info};
use variantly::Variantly;

use crate::embedding::{Embedding, EmbeddingError, EmbeddingProvider};
use crate::location::Location;

/// Threshold used when nothing else is configured.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.45;

/// Outcome of scoring one input against a location's phrases.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum Resolution {
    /// `index` is the phrase's position in the location's action table.
    Matched { index: usize, phrase: String, score: f32 },
    /// Nothing reached the threshold. `best` is `None` when no scoring took place.
    Rejected { best: Option<(String, f32)> },
}

/// A resolution together with the full phrase/score table that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub resolution: Resolution,
    pub scores: Vec<(String, f32)>,
}

/// Phrase embeddings of one location, kept with the phrases they were computed from.
#[derive(Debug, Clone)]
struct CachedPhrases {
    phrases: Vec<String>,
    vectors: Vec<Embedding>,
}

/// Matches free-form text to canonical phrases.
#[derive(Debug, Clone)]
pub struct Resolver {
    threshold: f32,
    cache: HashMap<String, CachedPhrases>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl Resolver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            cache: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of locations whose phrase embeddings are cached.
    pub fn cached_locations(&self) -> usize {
        self.cache.len()
    }

    /// Score `input` against every phrase of `location` and pick the winner.
    ///
    /// Blank input is rejected without consulting the provider. Ties go to the phrase
    /// registered first, and a score equal to the threshold is accepted.
    ///
    /// # Errors
    /// - if the provider fails to embed the input or the phrases.
    pub fn resolve(
        &mut self,
        location: &Location,
        input: &str,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Scored, EmbeddingError> {
        let input = input.trim();
        if input.is_empty() {
            info!("blank input rejected at '{}'", location.id);
            return Ok(Scored {
                resolution: Resolution::Rejected { best: None },
                scores: Vec::new(),
            });
        }

        let phrases = location.phrases();
        // a location rebuilt under the same id must not reuse vectors of other phrases
        if self
            .cache
            .get(&location.id)
            .is_none_or(|cached| cached.phrases != phrases)
        {
            let vectors = embedder.embed_batch(&phrases)?;
            if vectors.len() != phrases.len() {
                return Err(EmbeddingError::BatchMismatch {
                    expected: phrases.len(),
                    got: vectors.len(),
                });
            }
            info!("cached {} phrase embedding(s) for '{}'", vectors.len(), location.id);
            self.cache
                .insert(location.id.clone(), CachedPhrases { phrases, vectors });
        }
        // present: inserted above when missing or stale
        let cached = &self.cache[&location.id];
        let input_vector = embedder.embed(input)?;

        let scores: Vec<(String, f32)> = cached
            .phrases
            .iter()
            .zip(cached.vectors.iter())
            .map(|(phrase, vector)| {
                let score = embedder.similarity(&input_vector, vector);
                (phrase.clone(), score)
            })
            .collect();
        for (phrase, score) in &scores {
            debug!("  {score:>7.3}  {phrase}");
        }

        let resolution = match select_best(scores.iter().map(|(_, score)| *score)) {
            Some((index, score)) if score >= self.threshold => {
                let phrase = scores[index].0.clone();
                info!("'{input}' resolved to '{phrase}' ({score:.3})");
                Resolution::Matched { index, phrase, score }
            },
            Some((index, score)) => {
                info!(
                    "'{input}' rejected: best was '{}' ({score:.3} < {:.3})",
                    scores[index].0, self.threshold
                );
                Resolution::Rejected {
                    best: Some((scores[index].0.clone(), score)),
                }
            },
            None => Resolution::Rejected { best: None },
        };
        Ok(Scored { resolution, scores })
    }
}

/// Position and value of the highest score. The earliest index wins ties; NaN never wins.
pub fn select_best(scores: impl IntoIterator<Item = f32>) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, score) in scores.into_iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {},
            _ => best = Some((index, score)),
        }
    }
    best
}
