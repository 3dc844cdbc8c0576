//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location,
//! and the random events that can happen along the way.

use crate::{
    Dice, QuestWorld, View, ViewItem, WorldError, repl::ReplControl, spinners::SpinnerType, style::GameStyle,
};

use anyhow::Result;
use log::info;

/// Things that can happen on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelEvent {
    SupplyCache,
    TripAndFall,
    RainShower,
    DistantNoises,
    Shortcut,
}

impl TravelEvent {
    pub const ALL: [TravelEvent; 5] = [
        TravelEvent::SupplyCache,
        TravelEvent::TripAndFall,
        TravelEvent::RainShower,
        TravelEvent::DistantNoises,
        TravelEvent::Shortcut,
    ];

    pub fn narration(self) -> &'static str {
        match self {
            TravelEvent::SupplyCache => "You find a small cache of supplies hidden under some rocks.",
            TravelEvent::TripAndFall => "You trip and fall, taking minor damage.",
            TravelEvent::RainShower => "A sudden rain shower passes overhead.",
            TravelEvent::DistantNoises => "You hear strange noises in the distance.",
            TravelEvent::Shortcut => "You discover a shortcut that will make future travel easier.",
        }
    }
}

/// Move the player to a neighboring location, if it is one of the current exits.
///
/// # Errors
/// - if the player's current room, or the exit's destination, is missing from the world
pub fn move_to_handler(
    world: &mut QuestWorld,
    view: &mut View,
    dice: &mut impl Dice,
    destination: &str,
) -> Result<ReplControl> {
    if !world.player_room_ref()?.has_exit(destination) {
        view.push(ViewItem::ActionFailure(format!(
            "You can't go to {} from here.",
            destination.error_style()
        )));
        info!(
            "{} tried to go to '{destination}' from {}",
            world.player.name, world.location
        );
        return Ok(ReplControl::Continue);
    }
    if world.room(destination).is_none() {
        return Err(WorldError::UnknownLocation(destination.to_string()).into());
    }

    let leaving = std::mem::replace(&mut world.location, destination.to_string());
    let points = world.rules.move_points;
    world.player.award(points);
    info!("{} moved from {leaving} to {destination}", world.player.name);

    let travel_verb = world.spin_spinner(SpinnerType::Travel, "You travel to");
    view.push(ViewItem::TransitionMessage(format!("{travel_verb} the {destination}.")));
    view.push(ViewItem::PointsAwarded {
        amount: points,
        reason: format!("Reached the {destination}"),
    });

    if dice.chance(world.rules.random_event_chance) {
        return Ok(random_event(world, view, dice));
    }
    Ok(ReplControl::Continue)
}

/// Pick and apply one travel event.
pub fn random_event(world: &mut QuestWorld, view: &mut View, dice: &mut impl Dice) -> ReplControl {
    let Some(&event) = dice.choose(&TravelEvent::ALL) else {
        return ReplControl::Continue;
    };
    info!("random event: {event:?}");
    view.push(ViewItem::RandomEvent(event.narration().to_string()));

    match event {
        TravelEvent::SupplyCache => {
            let Some(found) = dice.choose(&world.catalog.supplies).cloned() else {
                return ReplControl::Continue;
            };
            world.player.add_item(&found);
            info!("{} found '{found}' in a supply cache", world.player.name);
            view.push(ViewItem::ItemFound {
                item: found,
                source: "You found".to_string(),
            });
        },
        TravelEvent::TripAndFall => {
            let damage = dice.between(world.rules.fall_damage_min, world.rules.fall_damage_max);
            let health = world.player.adjust_health(-damage);
            view.push(ViewItem::CharacterHarmed {
                cause: "You trip and fall.".to_string(),
                amount: damage,
                health,
            });
            if world.player.is_defeated() {
                info!("{} died from a fall", world.player.name);
                view.push(ViewItem::PlayerDefeated("Your injuries are too severe...".to_string()));
                return ReplControl::GameOver;
            }
        },
        TravelEvent::RainShower | TravelEvent::DistantNoises | TravelEvent::Shortcut => {},
    }
    ReplControl::Continue
}
