//! Source of randomness for effects that pick between alternatives.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index in `0..len`. Callers never pass a zero `len`.
pub trait Chooser {
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngChooser<R: Rng> {
    rng: R,
}

impl<R: Rng> RngChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChooser<StdRng> {
    /// Seeded generator when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                info!("wander choices seeded with {seed}");
                Self::new(StdRng::seed_from_u64(seed))
            },
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng> Chooser for RngChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceChooser {
    picks: Vec<usize>,
    next: usize,
}

impl SequenceChooser {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl Chooser for SequenceChooser {
    fn choose(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}
