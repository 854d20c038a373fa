//! Text embedding seam used by the action resolver.
//!
//! The resolver only needs two capabilities from a model: turn text into a
//! fixed-length vector, and score two vectors against each other. Anything that
//! can do both (a local sentence-transformer, a remote API, a test table) plugs
//! in through [`EmbeddingProvider`].
//!
//! [`HashingEmbedder`] is the provider shipped with the engine. It needs no
//! model files: words and character trigrams are hashed into a fixed number of
//! buckets, so phrasings that share vocabulary land close together.

use log::debug;
use thiserror::Error;

pub type Embedding = Vec<f32>;

/// Failures reported by an embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {0}")]
    Unavailable(String),
    #[error("embedding inference failed: {0}")]
    Inference(String),
    #[error("embedding batch returned {got} vectors for {expected} inputs")]
    BatchMismatch { expected: usize, got: usize },
}

/// Something that can embed text and score embeddings.
///
/// Implementations must give identical text maximal similarity with itself and
/// keep `similarity` symmetric. Nothing else about dimensionality or the scoring
/// formula is assumed.
pub trait EmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }
}

/// Cosine similarity between two vectors, clamped to [-1, 1]. Returns 0.0 for zero-norm inputs.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

const STOP_WORDS: &[&str] = &["a", "an", "the", "to", "at", "of", "some", "my", "please"];
const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.35;

/// Deterministic bag-of-words embedder using the hashing trick.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dims: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIMS)
    }
}

impl HashingEmbedder {
    pub const DEFAULT_DIMS: usize = 512;

    pub fn new(dims: usize) -> Self {
        Self { dims: dims.max(1) }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let hash = fnv1a(feature.as_bytes());
        let bucket = (hash % self.dims as u64) as usize;
        let sign = if hash >> 63 == 1 { -1.0 } else { 1.0 };
        vector[bucket] += sign * weight;
    }
}

impl EmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        let mut vector = vec![0.0; self.dims];
        let words = tokenize(text);
        if words.is_empty() {
            // filler or punctuation only: the raw text is the sole feature
            let raw = text.trim().to_lowercase();
            if !raw.is_empty() {
                self.add_feature(&mut vector, &format!("r:{raw}"), WORD_WEIGHT);
            }
        }
        for word in &words {
            self.add_feature(&mut vector, &format!("w:{word}"), WORD_WEIGHT);
            let padded: Vec<char> = format!("^{word}$").chars().collect();
            for gram in padded.windows(3) {
                let gram: String = gram.iter().collect();
                self.add_feature(&mut vector, &format!("t:{gram}"), TRIGRAM_WEIGHT);
            }
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        debug!("embedded {:?} from {} word(s)", text, words.len());
        Ok(vector)
    }
}

/// Lowercased alphanumeric words with filler words removed.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
}
