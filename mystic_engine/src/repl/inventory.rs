//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::{QuestWorld, View, ViewItem, style::GameStyle};

use anyhow::Result;
use log::info;

/// Removes an item from the current room and adds it to inventory.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn take_handler(world: &mut QuestWorld, view: &mut View, item: &str) -> Result<()> {
    let location = world.location.clone();
    let Some(taken) = world.remove_item(&location, item)? else {
        view.push(ViewItem::ActionFailure(format!(
            "There is no {} here to take.",
            item.error_style()
        )));
        return Ok(());
    };

    world.player.add_item(&taken);
    let points = world.rules.take_points;
    world.player.award(points);
    info!("{} took the {taken} from {location}", world.player.name);
    view.push(ViewItem::ActionSuccess(format!("You picked up the {}.", taken.item_style())));
    view.push(ViewItem::PointsAwarded {
        amount: points,
        reason: format!("Picked up the {taken}"),
    });

    if let Some(heal) = world.catalog.heal_on_take(&taken) {
        let health = world.player.adjust_health(heal);
        view.push(ViewItem::CharacterHealed {
            cause: format!("You eat some of the {taken}. They're delicious and nutritious!"),
            amount: heal,
            health,
        });
    }

    if world.catalog.is_artifact(&taken) {
        let bonus = world.rules.artifact_bonus;
        world.player.award(bonus);
        info!("{} found the artifact ({taken})", world.player.name);
        view.push(ViewItem::ArtifactFound(taken));
        view.push(ViewItem::PointsAwarded {
            amount: bonus,
            reason: "Found the legendary artifact".to_string(),
        });
    }
    Ok(())
}

/// Show the player's inventory.
pub fn inv_handler(world: &QuestWorld, view: &mut View) {
    view.push(ViewItem::Inventory(world.player.inventory.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    #[test]
    fn take_moves_item_into_inventory_once() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "stick").unwrap();
        assert_eq!(world.player.inventory, vec!["stick"]);
        assert!(!world.room("forest").unwrap().has_item("stick"));
        assert_eq!(world.player.score, 10);
        assert!(view.contains(ViewItem::is_action_success));
    }

    #[test]
    fn taking_an_absent_item_changes_nothing() {
        let mut world = load_world().unwrap();
        let before = world.clone();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "torch").unwrap();
        assert_eq!(world.player, before.player);
        assert_eq!(world.rooms, before.rooms);
        assert!(view.contains(ViewItem::is_action_failure));
    }

    #[test]
    fn berries_heal_ten() {
        let mut world = load_world().unwrap();
        world.player.health = 90;
        let mut view = View::new();
        take_handler(&mut world, &mut view, "berries").unwrap();
        assert_eq!(world.player.health, 100);
        assert!(!world.room("forest").unwrap().has_item("berries"));
        assert_eq!(world.player.inventory, vec!["berries"]);
        assert!(view.contains(ViewItem::is_character_healed));
    }

    #[test]
    fn artifact_awards_bonus_and_flourish() {
        let mut world = load_world().unwrap();
        world.location = "summit".into();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "mystical orb").unwrap();
        assert_eq!(world.player.score, 110);
        assert!(world.player.has_item("mystical orb"));
        assert!(view.contains(ViewItem::is_artifact_found));
    }

    #[test]
    fn inventory_lists_contents() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        inv_handler(&world, &mut view);
        assert!(view.contains(|item| matches!(item, ViewItem::Inventory(items) if items.is_empty())));
        world.player.add_item("torch");
        inv_handler(&world, &mut view);
        assert!(view.contains(|item| matches!(item, ViewItem::Inventory(items) if items == &["torch"])));
    }
}
