//! Effects bound to canonical phrases, and their dispatch.
//!
//! An effect runs with explicit context: the [`World`], the turn's [`View`], and the id of
//! the location whose action table it came from (its *origin*). Effects may change only
//! the inventory, the playing flag, the origin's local flags, and (by arriving somewhere)
//! the current location. Flags always refer to the origin, even after a `Travel` step.

use glade_data::EffectDef;
use log::info;

use crate::location::taken_flag;
use crate::view::{BLOCKED_TEXT, View, ViewItem};
use crate::world::{EngineError, World};

/// Runtime form of an action's effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Arrive at another location.
    Travel { to: String },
    /// A direction with nowhere to go.
    Blocked { message: Option<String> },
    Narrate { text: String },
    SetFlag { flag: String, text: String },
    IfFlag {
        flag: String,
        then: Box<Effect>,
        otherwise: Box<Effect>,
    },
    /// Pick up an item once; later attempts only remind the player.
    TakeItem { item: String, text: String },
    /// Run the effect of one of the listed phrases, picked uniformly.
    Wander { options: Vec<String> },
    GameOver { text: String },
    Sequence { steps: Vec<Effect> },
}

impl From<&EffectDef> for Effect {
    fn from(def: &EffectDef) -> Self {
        match def {
            EffectDef::Travel { to } => Effect::Travel { to: to.clone() },
            EffectDef::Blocked { message } => Effect::Blocked {
                message: message.clone(),
            },
            EffectDef::Narrate { text } => Effect::Narrate { text: text.clone() },
            EffectDef::SetFlag { flag, text } => Effect::SetFlag {
                flag: flag.clone(),
                text: text.clone(),
            },
            EffectDef::IfFlag { flag, then, otherwise } => Effect::IfFlag {
                flag: flag.clone(),
                then: Box::new(Effect::from(then.as_ref())),
                otherwise: Box::new(Effect::from(otherwise.as_ref())),
            },
            EffectDef::TakeItem { item, text } => Effect::TakeItem {
                item: item.clone(),
                text: text.clone(),
            },
            EffectDef::Wander { options } => Effect::Wander {
                options: options.clone(),
            },
            EffectDef::GameOver { text } => Effect::GameOver { text: text.clone() },
            EffectDef::Sequence { steps } => Effect::Sequence {
                steps: steps.iter().map(Effect::from).collect(),
            },
        }
    }
}

/// Run an effect on behalf of the location `origin`.
///
/// # Errors
/// - if `origin`, a travel destination, or a wander option does not exist. Worlds built
///   through `WorldBuilder` are validated, so this signals a broken invariant.
pub fn dispatch_effect(world: &mut World, view: &mut View, origin: &str, effect: &Effect) -> Result<(), EngineError> {
    match effect {
        Effect::Travel { to } => {
            info!("└─ effect: Travel({to})");
            world.arrive_at(to, view)?;
        },
        Effect::Blocked { message } => {
            info!("└─ effect: Blocked");
            let text = message.clone().unwrap_or_else(|| BLOCKED_TEXT.to_string());
            view.push(ViewItem::Narration(text));
        },
        Effect::Narrate { text } => view.push(ViewItem::Narration(text.clone())),
        Effect::SetFlag { flag, text } => {
            info!("└─ effect: SetFlag({flag})");
            world.location_mut(origin)?.set_flag(flag);
            view.push(ViewItem::Narration(text.clone()));
        },
        Effect::IfFlag { flag, then, otherwise } => {
            let branch = if world.location_ref(origin)?.has_flag(flag) {
                then
            } else {
                otherwise
            };
            dispatch_effect(world, view, origin, branch)?;
        },
        Effect::TakeItem { item, text } => take_item(world, view, origin, item, text)?,
        Effect::Wander { options } => wander(world, view, origin, options)?,
        Effect::GameOver { text } => {
            info!("└─ effect: GameOver");
            view.push(ViewItem::Narration(text.clone()));
            view.push(ViewItem::GameOver);
            world.playing = false;
        },
        Effect::Sequence { steps } => {
            for step in steps {
                dispatch_effect(world, view, origin, step)?;
            }
        },
    }
    Ok(())
}

fn take_item(world: &mut World, view: &mut View, origin: &str, item: &str, text: &str) -> Result<(), EngineError> {
    let flag = taken_flag(item);
    let location = world.location_mut(origin)?;
    if location.has_flag(&flag) {
        info!("└─ effect: TakeItem({item}) refused, already taken");
        view.push(ViewItem::Narration(format!("You already took the {item}.")));
        return Ok(());
    }
    location.set_flag(&flag);
    world.inventory.add(item);
    info!("└─ effect: TakeItem({item})");
    view.push(ViewItem::ItemTaken {
        item: item.to_string(),
        text: text.to_string(),
    });
    Ok(())
}

fn wander(world: &mut World, view: &mut View, origin: &str, options: &[String]) -> Result<(), EngineError> {
    if options.is_empty() {
        return Ok(());
    }
    let pick = world.chooser.choose(options.len()) % options.len();
    let phrase = &options[pick];
    info!("└─ effect: Wander picked '{phrase}' ({pick} of {})", options.len());
    let next = world
        .location_ref(origin)?
        .action(phrase)
        .map(|action| action.effect.clone())
        .ok_or_else(|| EngineError::UnknownPhrase {
            location: origin.to_string(),
            phrase: phrase.clone(),
        })?;
    dispatch_effect(world, view, origin, &next)
}
