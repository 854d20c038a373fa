use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    EmptyActions { location: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::EmptyActions { location } => {
                write!(f, "location '{location}' has no actions")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use glade_data::{ActionDef, EffectDef, LocationDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     title: "Demo".into(),
///     start: "start".into(),
///     locations: vec![LocationDef {
///         id: "start".into(),
///         name: None,
///         first_arrival_text: None,
///         arrival_text: None,
///         actions: vec![ActionDef::new("wait", EffectDef::Narrate { text: "Time passes.".into() })],
///     }],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut locations = HashSet::new();
    for location in &world.locations {
        if location.id.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "location id is empty".to_string(),
            });
        }
        if !locations.insert(location.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "location",
                id: location.id.clone(),
            });
        }
    }

    if world.start.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start location missing".to_string(),
        });
    } else if !locations.contains(world.start.as_str()) {
        errors.push(ValidationError::MissingReference {
            kind: "location",
            id: world.start.clone(),
            context: "world start".to_string(),
        });
    }

    for location in &world.locations {
        validate_location(location, &locations, &mut errors);
    }

    errors
}

fn validate_location(location: &LocationDef, locations: &HashSet<&str>, errors: &mut Vec<ValidationError>) {
    if location.actions.is_empty() {
        errors.push(ValidationError::EmptyActions {
            location: location.id.clone(),
        });
        return;
    }

    // phrase -> whether its effect (transitively) wanders
    let mut phrases: HashMap<&str, bool> = HashMap::new();
    for action in &location.actions {
        if action.phrase.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("location '{}' has an empty phrase", location.id),
            });
        }
        let mut wanders = false;
        action.effect.walk(&mut |effect| {
            if matches!(effect, EffectDef::Wander { .. }) {
                wanders = true;
            }
        });
        if phrases.insert(action.phrase.as_str(), wanders).is_some() {
            errors.push(ValidationError::DuplicateId {
                kind: "phrase",
                id: format!("{}: {}", location.id, action.phrase),
            });
        }
    }

    for action in &location.actions {
        let context = format!("location '{}' action '{}'", location.id, action.phrase);
        action.effect.walk(&mut |effect| match effect {
            EffectDef::Travel { to } => {
                if !locations.contains(to.as_str()) {
                    errors.push(ValidationError::MissingReference {
                        kind: "location",
                        id: to.clone(),
                        context: context.clone(),
                    });
                }
            },
            EffectDef::Wander { options } => {
                if options.is_empty() {
                    errors.push(ValidationError::InvalidValue {
                        context: format!("{context}: wander has no options"),
                    });
                }
                for option in options {
                    match phrases.get(option.as_str()) {
                        None => errors.push(ValidationError::MissingReference {
                            kind: "phrase",
                            id: option.clone(),
                            context: context.clone(),
                        }),
                        Some(true) => errors.push(ValidationError::InvalidValue {
                            context: format!("{context}: wander option '{option}' wanders itself"),
                        }),
                        Some(false) => {},
                    }
                }
            },
            EffectDef::TakeItem { item, .. } if item.trim().is_empty() => {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: item id is empty"),
                });
            },
            _ => {},
        });
    }
}
