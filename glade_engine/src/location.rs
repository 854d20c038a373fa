//! Location definitions.
//!
//! Every place the player can be is a [`Location`]: a name, one-time and repeat arrival
//! narration, an ordered table of canonical phrases and their effects, and the local
//! flags those effects read and write. Locations never share mutable state.

use std::collections::HashSet;

use glade_data::LocationDef;
use log::info;

use crate::effect::Effect;
use crate::view::{View, ViewItem};

/// A canonical phrase and the effect it triggers.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub phrase: String,
    pub effect: Effect,
}

/// A node of the world's state machine.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub visited: bool,
    pub first_arrival_text: String,
    pub arrival_text: String,
    actions: Vec<Action>,
    flags: HashSet<String>,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        first_arrival_text: impl Into<String>,
        arrival_text: impl Into<String>,
        actions: Vec<Action>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            visited: false,
            first_arrival_text: first_arrival_text.into(),
            arrival_text: arrival_text.into(),
            actions,
            flags: HashSet::new(),
        }
    }

    /// Build a fresh, unvisited location from its definition.
    pub fn from_def(def: &LocationDef) -> Self {
        let actions = def
            .actions
            .iter()
            .map(|action| Action {
                phrase: action.phrase.clone(),
                effect: Effect::from(&action.effect),
            })
            .collect();
        let mut location = Self::new(def.id.clone(), def.first_text(), def.repeat_text(), actions);
        location.name = def.display_name().to_string();
        location
    }

    /// Record an arrival and queue the matching narration.
    ///
    /// The first-arrival text is shown exactly once; `visited` never goes back to false.
    pub fn arrive(&mut self, view: &mut View) {
        if self.visited {
            view.push(ViewItem::Arrival {
                name: self.name.clone(),
                text: self.arrival_text.clone(),
            });
        } else {
            self.visited = true;
            view.push(ViewItem::FirstArrival {
                name: self.name.clone(),
                text: self.first_arrival_text.clone(),
            });
        }
        info!("arrived at '{}' (visited: {})", self.id, self.visited);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Canonical phrases in insertion order.
    pub fn phrases(&self) -> Vec<String> {
        self.actions.iter().map(|action| action.phrase.clone()).collect()
    }

    pub fn action(&self, phrase: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.phrase == phrase)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn set_flag(&mut self, flag: &str) {
        if self.flags.insert(flag.to_string()) {
            info!("location '{}': flag '{flag}' set", self.id);
        }
    }

    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}

/// Local flag recording that `item` was already picked up here.
pub fn taken_flag(item: &str) -> String {
    format!("taken:{item}")
}
