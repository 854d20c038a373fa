use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world content loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    #[serde(default)]
    pub title: String,
    pub start: Id,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
}

/// A single place the player can be, with its narration and available actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDef {
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_arrival_text: Option<String>,
    #[serde(default)]
    pub arrival_text: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

impl LocationDef {
    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Text shown on every arrival after the first.
    pub fn repeat_text(&self) -> String {
        self.arrival_text
            .clone()
            .unwrap_or_else(|| format!("You arrive at {}.", self.display_name()))
    }

    /// Text shown on the very first arrival.
    pub fn first_text(&self) -> String {
        self.first_arrival_text.clone().unwrap_or_else(|| self.repeat_text())
    }
}

/// Canonical phrase bound to the effect it triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    pub phrase: String,
    pub effect: EffectDef,
}

impl ActionDef {
    pub fn new(phrase: impl Into<String>, effect: EffectDef) -> Self {
        Self {
            phrase: phrase.into(),
            effect,
        }
    }
}

/// Effects an action can have when resolved.
///
/// Flags named here are local to the location that owns the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectDef {
    Travel {
        to: Id,
    },
    Blocked {
        #[serde(default)]
        message: Option<String>,
    },
    Narrate {
        text: String,
    },
    SetFlag {
        flag: String,
        text: String,
    },
    IfFlag {
        flag: String,
        then: Box<EffectDef>,
        otherwise: Box<EffectDef>,
    },
    TakeItem {
        item: Id,
        text: String,
    },
    Wander {
        options: Vec<String>,
    },
    GameOver {
        text: String,
    },
    Sequence {
        steps: Vec<EffectDef>,
    },
}

impl EffectDef {
    /// Visit this effect and every effect nested inside it.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a EffectDef)) {
        visit(self);
        match self {
            EffectDef::IfFlag { then, otherwise, .. } => {
                then.walk(visit);
                otherwise.walk(visit);
            },
            EffectDef::Sequence { steps } => {
                for step in steps {
                    step.walk(visit);
                }
            },
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_text_defaults_follow_name() {
        let def = LocationDef {
            id: "goblin camp".into(),
            name: None,
            first_arrival_text: None,
            arrival_text: None,
            actions: Vec::new(),
        };
        assert_eq!(def.repeat_text(), "You arrive at goblin camp.");
        assert_eq!(def.first_text(), def.repeat_text());
    }

    #[test]
    fn first_text_prefers_explicit_value() {
        let def = LocationDef {
            id: "clearing".into(),
            name: Some("the clearing".into()),
            first_arrival_text: Some("You wake up.".into()),
            arrival_text: None,
            actions: Vec::new(),
        };
        assert_eq!(def.first_text(), "You wake up.");
        assert_eq!(def.repeat_text(), "You arrive at the clearing.");
    }

    #[test]
    fn walk_reaches_nested_effects() {
        let effect = EffectDef::IfFlag {
            flag: "entered".into(),
            then: Box::new(EffectDef::Sequence {
                steps: vec![
                    EffectDef::Narrate { text: "a".into() },
                    EffectDef::Travel { to: "x".into() },
                ],
            }),
            otherwise: Box::new(EffectDef::Blocked { message: None }),
        };
        let mut seen = 0;
        effect.walk(&mut |_| seen += 1);
        assert_eq!(seen, 5);
    }

    #[test]
    fn effect_serde_uses_camel_case_tags() {
        let effect = EffectDef::TakeItem {
            item: "sword".into(),
            text: "Got it.".into(),
        };
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("\"takeItem\""));
        let back: EffectDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}
