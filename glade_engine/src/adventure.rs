//! The built-in adventure: a clearing in the woods, a goblin camp to the east, and an
//! abandoned cabin to the north.

use glade_data::{ActionDef, EffectDef, LocationDef, WorldDef};

pub const CLEARING: &str = "clearing";
pub const GOBLIN_CAMP: &str = "goblin camp";
pub const CABIN: &str = "cabin";

/// Local flag set on the cabin once the player has gone in.
pub const ENTERED: &str = "entered";

/// Directions the clearing's wander actions pick from.
const WANDER_OPTIONS: [&str; 4] = ["go north", "go south", "go east", "go west"];

/// Content definition of the built-in adventure.
pub fn builtin_world() -> WorldDef {
    WorldDef {
        title: "The Clearing".to_string(),
        start: CLEARING.to_string(),
        locations: vec![clearing(), goblin_camp(), cabin()],
    }
}

fn travel(to: &str) -> EffectDef {
    EffectDef::Travel { to: to.to_string() }
}

fn narrate(text: &str) -> EffectDef {
    EffectDef::Narrate { text: text.to_string() }
}

fn blocked() -> EffectDef {
    EffectDef::Blocked { message: None }
}

fn if_entered(then: EffectDef, otherwise: EffectDef) -> EffectDef {
    EffectDef::IfFlag {
        flag: ENTERED.to_string(),
        then: Box::new(then),
        otherwise: Box::new(otherwise),
    }
}

fn wander() -> EffectDef {
    EffectDef::Sequence {
        steps: vec![
            narrate("You wander aimlessly between the trees until you lose track of which way you were heading."),
            EffectDef::Wander {
                options: WANDER_OPTIONS.iter().map(|option| (*option).to_string()).collect(),
            },
        ],
    }
}

fn clearing() -> LocationDef {
    LocationDef {
        id: CLEARING.to_string(),
        name: Some("The Clearing".to_string()),
        first_arrival_text: Some(
            "You wake up in a small clearing in the woods. You have no memory of who you are or how you got \
             there. You don't seem to have anything on you except for some simple clothes."
                .to_string(),
        ),
        arrival_text: Some("You return to the clearing where you first woke up.".to_string()),
        actions: vec![
            ActionDef::new("go north", travel(CABIN)),
            ActionDef::new("go south", blocked()),
            ActionDef::new("go east", travel(GOBLIN_CAMP)),
            ActionDef::new("go west", blocked()),
            ActionDef::new("go into woods", wander()),
            ActionDef::new("leave", wander()),
        ],
    }
}

fn goblin_camp() -> LocationDef {
    LocationDef {
        id: GOBLIN_CAMP.to_string(),
        name: Some("Goblin Camp".to_string()),
        first_arrival_text: Some(
            "You follow a thin trail of smoke until the trees open onto a goblin camp. A dozen goblins squat \
             around a cookfire, gnawing on bones. None of them has noticed you yet."
                .to_string(),
        ),
        arrival_text: Some(
            "You creep back to the edge of the goblin camp. The goblins are still busy with their fire.".to_string(),
        ),
        actions: vec![
            ActionDef::new("go west", travel(CLEARING)),
            ActionDef::new(
                "watch the goblins",
                narrate(
                    "From behind a fallen log you watch the goblins argue over a charred haunch of something. \
                     There are far too many of them to fight.",
                ),
            ),
            ActionDef::new(
                "attack goblin",
                EffectDef::GameOver {
                    text: "You attack a goblin and slay it. Shortly after, the remaining goblins surround you and \
                           you are unable to escape. You try your best to fight them off but you are outnumbered \
                           and are killed."
                        .to_string(),
                },
            ),
        ],
    }
}

fn cabin() -> LocationDef {
    LocationDef {
        id: CABIN.to_string(),
        name: Some("Abandoned Cabin".to_string()),
        first_arrival_text: Some(
            "The trees thin around a small, weathered cabin. Its door hangs open on a single hinge.".to_string(),
        ),
        arrival_text: Some("You are back at the weathered cabin.".to_string()),
        actions: vec![
            ActionDef::new("go south", travel(CLEARING)),
            ActionDef::new(
                "go inside",
                if_entered(
                    narrate("You are already inside the cabin."),
                    EffectDef::SetFlag {
                        flag: ENTERED.to_string(),
                        text: "You step through the doorway. Dust hangs in the air, and a sword rests against the \
                               far wall."
                            .to_string(),
                    },
                ),
            ),
            ActionDef::new(
                "take the sword",
                if_entered(
                    EffectDef::TakeItem {
                        item: "sword".to_string(),
                        text: "You lift the sword. It is heavier than it looks, but it feels right in your hand."
                            .to_string(),
                    },
                    narrate("You don't see a sword here."),
                ),
            ),
            ActionDef::new(
                "look around",
                if_entered(
                    narrate("A single room with a cold hearth and a collapsed cot. Daylight leaks through gaps in the planks."),
                    narrate("Moss covers the roof and the windows are dark. Whoever lived here left in a hurry."),
                ),
            ),
        ],
    }
}
