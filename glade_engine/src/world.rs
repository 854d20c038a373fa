//! Data structures representing the game world.
//!
//! This module defines [`World`], the owner of every location, the player's inventory,
//! the current-location pointer and the playing flag, together with [`WorldBuilder`],
//! which validates content before anything can be played.

use std::collections::HashMap;

use glade_data::{ValidationError, WorldDef, validate_world};
use log::{info, warn};
use thiserror::Error;
use variantly::Variantly;

use crate::chooser::{Chooser, RngChooser};
use crate::config::EngineConfig;
use crate::effect::dispatch_effect;
use crate::embedding::{EmbeddingError, EmbeddingProvider, HashingEmbedder};
use crate::inventory::Inventory;
use crate::location::Location;
use crate::resolver::{DEFAULT_MATCH_THRESHOLD, Resolution, Resolver};
use crate::view::{View, ViewItem};

/// Content problems found while building a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world definition is invalid:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error("match threshold {0} must be a finite number above zero")]
    BadThreshold(f32),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Failures that abort a single turn. World state is untouched when one is returned.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
    #[error("no location with id '{0}'")]
    UnknownLocation(String),
    #[error("location '{location}' has no action '{phrase}'")]
    UnknownPhrase { location: String, phrase: String },
}

/// What a call to [`World::act`] did.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ActOutcome {
    /// The input matched `phrase` and its effect ran.
    Resolved { phrase: String, score: f32 },
    /// The input matched nothing well enough; nothing changed.
    Rejected { best: Option<(String, f32)> },
    /// The game is already over; the input was not looked at.
    Ignored,
}

/// Complete state of the running game.
pub struct World {
    pub title: String,
    pub(crate) locations: HashMap<String, Location>,
    pub(crate) current: String,
    pub(crate) inventory: Inventory,
    pub(crate) playing: bool,
    pub(crate) chooser: Box<dyn Chooser>,
    resolver: Resolver,
    embedder: Box<dyn EmbeddingProvider>,
    show_scores: bool,
}

impl World {
    /// Resolve player text against the current location and run the matching effect.
    ///
    /// Returns `Ignored` without scoring once the game is over, and `Rejected` (with no
    /// state change) when the best score falls below the match threshold.
    ///
    /// # Errors
    /// - if the embedding provider fails; the turn is abandoned before anything changes.
    pub fn act(&mut self, input: &str, view: &mut View) -> Result<ActOutcome, EngineError> {
        if !self.playing {
            info!("game over, ignoring input '{input}'");
            return Ok(ActOutcome::Ignored);
        }

        let location = self
            .locations
            .get(&self.current)
            .ok_or_else(|| EngineError::UnknownLocation(self.current.clone()))?;
        let scored = self.resolver.resolve(location, input, self.embedder.as_ref())?;
        if self.show_scores && !scored.scores.is_empty() {
            view.push(ViewItem::ScoreTable(scored.scores.clone()));
        }

        match scored.resolution {
            Resolution::Rejected { best } => {
                view.push(ViewItem::InvalidAction);
                Ok(ActOutcome::Rejected { best })
            },
            Resolution::Matched { index, phrase, score } => {
                let effect = location.actions()[index].effect.clone();
                let origin = self.current.clone();
                dispatch_effect(self, view, &origin, &effect)?;
                Ok(ActOutcome::Resolved { phrase, score })
            },
        }
    }

    /// End the session without resolving anything.
    pub fn quit(&mut self) {
        if self.playing {
            info!("session ended at '{}'", self.current);
        }
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_location_id(&self) -> &str {
        &self.current
    }

    pub fn current_location(&self) -> &Location {
        // `current` always names a location: it is only ever set by `arrive_at`
        &self.locations[&self.current]
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// All location ids, sorted.
    pub fn location_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn match_threshold(&self) -> f32 {
        self.resolver.threshold()
    }

    /// Move the player to `id`, queueing its arrival narration.
    pub(crate) fn arrive_at(&mut self, id: &str, view: &mut View) -> Result<(), EngineError> {
        let location = self
            .locations
            .get_mut(id)
            .ok_or_else(|| EngineError::UnknownLocation(id.to_string()))?;
        location.arrive(view);
        info!("player moved from '{}' to '{id}'", self.current);
        self.current = id.to_string();
        Ok(())
    }

    pub(crate) fn location_ref(&self, id: &str) -> Result<&Location, EngineError> {
        self.locations
            .get(id)
            .ok_or_else(|| EngineError::UnknownLocation(id.to_string()))
    }

    pub(crate) fn location_mut(&mut self, id: &str) -> Result<&mut Location, EngineError> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| EngineError::UnknownLocation(id.to_string()))
    }
}

/// Validates a [`WorldDef`] and assembles a playable [`World`].
pub struct WorldBuilder {
    def: WorldDef,
    match_threshold: f32,
    show_scores: bool,
    embedder: Option<Box<dyn EmbeddingProvider>>,
    chooser: Option<Box<dyn Chooser>>,
}

impl WorldBuilder {
    pub fn new(def: WorldDef) -> Self {
        Self {
            def,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            show_scores: false,
            embedder: None,
            chooser: None,
        }
    }

    /// Apply the threshold and score display from `config`. The embedding size and wander
    /// seed only apply when no embedder or chooser has been injected.
    #[must_use]
    pub fn config(mut self, config: &EngineConfig) -> Self {
        self.match_threshold = config.match_threshold;
        self.show_scores = config.show_scores;
        if self.embedder.is_none() {
            self.embedder = Some(Box::new(HashingEmbedder::new(config.embedding_dims)));
        }
        if self.chooser.is_none() {
            self.chooser = Some(Box::new(RngChooser::from_seed(config.seed)));
        }
        self
    }

    #[must_use]
    pub fn match_threshold(mut self, threshold: f32) -> Self {
        self.match_threshold = threshold;
        self
    }

    #[must_use]
    pub fn show_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    #[must_use]
    pub fn embedder(mut self, embedder: impl EmbeddingProvider + 'static) -> Self {
        self.embedder = Some(Box::new(embedder));
        self
    }

    #[must_use]
    pub fn chooser(mut self, chooser: impl Chooser + 'static) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    /// Validate the content, build every location, and arrive at the start location.
    ///
    /// # Errors
    /// - if the definition has dangling references, duplicate ids or phrases, locations
    ///   without actions, or the threshold is not a finite number above zero.
    pub fn build(self, view: &mut View) -> Result<World, WorldError> {
        if !(self.match_threshold.is_finite() && self.match_threshold > 0.0) {
            return Err(WorldError::BadThreshold(self.match_threshold));
        }
        let errors = validate_world(&self.def);
        if !errors.is_empty() {
            for err in &errors {
                warn!("world validation: {err}");
            }
            return Err(WorldError::Invalid(errors));
        }

        let locations: HashMap<String, Location> = self
            .def
            .locations
            .iter()
            .map(|def| (def.id.clone(), Location::from_def(def)))
            .collect();
        info!("{} locations added to World", locations.len());

        let mut world = World {
            title: self.def.title.clone(),
            locations,
            current: self.def.start.clone(),
            inventory: Inventory::new(),
            playing: true,
            chooser: self.chooser.unwrap_or_else(|| Box::new(RngChooser::from_seed(None))),
            resolver: Resolver::new(self.match_threshold),
            embedder: self.embedder.unwrap_or_else(|| Box::new(HashingEmbedder::default())),
            show_scores: self.show_scores,
        };
        world.arrive_at(&self.def.start, view).map_err(|_| {
            WorldError::Invalid(vec![ValidationError::MissingReference {
                kind: "location",
                id: self.def.start.clone(),
                context: "world start".to_string(),
            }])
        })?;
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chooser::SequenceChooser;
    use glade_data::{ActionDef, EffectDef, LocationDef};

    fn location(id: &str, actions: Vec<ActionDef>) -> LocationDef {
        LocationDef {
            id: id.into(),
            name: None,
            first_arrival_text: Some(format!("First time at {id}.")),
            arrival_text: Some(format!("Back at {id}.")),
            actions,
        }
    }

    fn two_rooms() -> WorldDef {
        WorldDef {
            title: "Test".into(),
            start: "hall".into(),
            locations: vec![
                location(
                    "hall",
                    vec![
                        ActionDef::new("go north", EffectDef::Travel { to: "attic".into() }),
                        ActionDef::new("go south", EffectDef::Blocked { message: None }),
                    ],
                ),
                location(
                    "attic",
                    vec![ActionDef::new("go south", EffectDef::Travel { to: "hall".into() })],
                ),
            ],
        }
    }

    fn build(def: WorldDef) -> (World, View) {
        let mut view = View::new();
        let world = WorldBuilder::new(def)
            .chooser(SequenceChooser::new(vec![0]))
            .build(&mut view)
            .expect("valid world");
        (world, view)
    }

    #[test]
    fn build_arrives_at_start() {
        let (world, view) = build(two_rooms());
        assert_eq!(world.current_location_id(), "hall");
        assert!(world.current_location().visited);
        assert!(!world.location("attic").unwrap().visited);
        assert_eq!(view.lines(), vec!["First time at hall."]);
        assert!(world.is_playing());
        assert_eq!(world.match_threshold(), DEFAULT_MATCH_THRESHOLD);
        assert_eq!(world.location_ids(), vec!["attic", "hall"]);
    }

    #[test]
    fn build_rejects_dangling_travel() {
        let mut def = two_rooms();
        def.locations[1]
            .actions
            .push(ActionDef::new("go up", EffectDef::Travel { to: "roof".into() }));
        let mut view = View::new();
        let err = WorldBuilder::new(def).build(&mut view).err().expect("invalid world");
        assert!(err.to_string().contains("roof"));
        assert!(view.is_empty());
    }

    #[test]
    fn build_rejects_nan_threshold() {
        let mut view = View::new();
        let result = WorldBuilder::new(two_rooms()).match_threshold(f32::NAN).build(&mut view);
        assert!(matches!(result, Err(WorldError::BadThreshold(_))));
    }

    #[test]
    fn build_rejects_threshold_at_or_below_zero() {
        for threshold in [0.0, -0.5] {
            let mut view = View::new();
            let result = WorldBuilder::new(two_rooms()).match_threshold(threshold).build(&mut view);
            assert!(matches!(result, Err(WorldError::BadThreshold(_))), "{threshold}");
        }
    }

    struct Offline;

    impl EmbeddingProvider for Offline {
        fn embed(&self, _text: &str) -> Result<crate::embedding::Embedding, EmbeddingError> {
            Err(EmbeddingError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn config_keeps_injected_embedder_and_chooser() {
        let config = EngineConfig {
            match_threshold: 0.5,
            seed: Some(99),
            ..EngineConfig::default()
        };
        let mut view = View::new();
        let mut world = WorldBuilder::new(two_rooms())
            .embedder(Offline)
            .config(&config)
            .build(&mut view)
            .unwrap();
        assert_eq!(world.match_threshold(), 0.5);
        assert!(matches!(
            world.act("go north", &mut view),
            Err(EngineError::Embedding(EmbeddingError::Unavailable(_)))
        ));

        let mut def = two_rooms();
        def.locations[0].actions.push(ActionDef::new(
            "wander",
            EffectDef::Wander {
                options: vec!["go south".into(), "go north".into()],
            },
        ));
        let mut world = WorldBuilder::new(def)
            .chooser(SequenceChooser::new(vec![1]))
            .config(&config)
            .build(&mut view)
            .unwrap();
        world.act("wander", &mut view).unwrap();
        assert_eq!(world.current_location_id(), "attic");
    }

    #[test]
    fn travel_and_return_uses_repeat_text() {
        let (mut world, mut view) = build(two_rooms());
        view.clear();
        assert!(world.act("go north", &mut view).unwrap().is_resolved());
        assert!(world.act("go south", &mut view).unwrap().is_resolved());
        assert_eq!(view.lines(), vec!["First time at attic.", "Back at hall."]);
        assert_eq!(world.current_location_id(), "hall");
    }

    #[test]
    fn blocked_direction_stays_put() {
        let (mut world, mut view) = build(two_rooms());
        view.clear();
        world.act("go south", &mut view).unwrap();
        assert_eq!(view.lines(), vec![crate::view::BLOCKED_TEXT]);
        assert_eq!(world.current_location_id(), "hall");
    }

    #[test]
    fn quit_stops_further_actions() {
        let (mut world, mut view) = build(two_rooms());
        world.quit();
        view.clear();
        assert_eq!(world.act("go north", &mut view).unwrap(), ActOutcome::Ignored);
        assert!(view.is_empty());
        assert_eq!(world.current_location_id(), "hall");
    }

    #[test]
    fn show_scores_pushes_table_before_narration() {
        let mut view = View::new();
        let mut world = WorldBuilder::new(two_rooms())
            .show_scores(true)
            .build(&mut view)
            .unwrap();
        view.clear();
        world.act("go north", &mut view).unwrap();
        assert!(view.items[0].is_score_table());
        assert!(view.items[1].is_first_arrival());
    }
}
