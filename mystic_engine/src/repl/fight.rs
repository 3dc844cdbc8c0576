//! `repl::fight` module
//!
//! Handler for fighting an enemy in the current room.

use crate::{Dice, QuestWorld, View, ViewItem, combat::CombatRoll, repl::ReplControl, style::GameStyle};

use anyhow::Result;
use log::info;

/// Fight an enemy in the current location.
///
/// The first weapon in the player's inventory is used, or bare hands. A win
/// removes the enemy for good and may drop loot; a loss costs health and may
/// end the game. Fighting never triggers travel events.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn fight_handler(
    world: &mut QuestWorld,
    view: &mut View,
    dice: &mut impl Dice,
    enemy: &str,
) -> Result<ReplControl> {
    if !world.player_room_ref()?.has_enemy(enemy) {
        view.push(ViewItem::ActionFailure(format!(
            "There is no {} here to fight.",
            enemy.error_style()
        )));
        return Ok(ReplControl::Continue);
    }

    let weapon = world
        .catalog
        .first_weapon(&world.player.inventory)
        .map(|(name, power)| (name.to_string(), power));
    let player_power = weapon.as_ref().map_or(world.rules.unarmed_power, |(_, power)| *power);
    let enemy_power = world
        .catalog
        .enemy_strength(enemy)
        .unwrap_or(world.rules.default_enemy_strength);

    let roll = CombatRoll::roll(dice, world.rules.combat_die, player_power, enemy_power);
    info!(
        "{} fights {enemy} with {}: {} (power {player_power}) vs {} (power {enemy_power})",
        world.player.name,
        weapon.as_ref().map_or("bare hands", |(name, _)| name.as_str()),
        roll.player_roll,
        roll.enemy_roll
    );
    view.push(ViewItem::CombatRound {
        enemy: enemy.to_string(),
        weapon: weapon.map(|(name, _)| name),
        player_roll: roll.player_roll,
        enemy_roll: roll.enemy_roll,
    });

    if roll.player_wins() {
        enemy_defeated(world, view, dice, enemy)?;
        return Ok(ReplControl::Continue);
    }

    let damage = world.rules.combat_damage(enemy_power);
    let health = world.player.adjust_health(-damage);
    view.push(ViewItem::CharacterHarmed {
        cause: format!("The {enemy} wounds you!"),
        amount: damage,
        health,
    });
    if world.player.is_defeated() {
        info!("{} was killed by the {enemy}", world.player.name);
        view.push(ViewItem::PlayerDefeated("You have been defeated...".to_string()));
        return Ok(ReplControl::GameOver);
    }
    view.push(ViewItem::EnemyRetreats(enemy.to_string()));
    Ok(ReplControl::Continue)
}

fn enemy_defeated(world: &mut QuestWorld, view: &mut View, dice: &mut impl Dice, enemy: &str) -> Result<()> {
    let location = world.location.clone();
    world.remove_enemy(&location, enemy)?;
    let points = world.rules.victory_points;
    world.player.award(points);
    info!("{} defeated the {enemy} in {location}", world.player.name);
    view.push(ViewItem::EnemyDefeated {
        enemy: enemy.to_string(),
        flavor: world.catalog.defeat_text(enemy).map(str::to_string),
    });
    view.push(ViewItem::PointsAwarded {
        amount: points,
        reason: format!("Defeated the {enemy}"),
    });

    if !dice.chance(world.rules.loot_chance) {
        return Ok(());
    }
    if let Some(loot) = dice.choose(&world.catalog.loot).cloned() {
        world.player.add_item(&loot);
        info!("the {enemy} dropped '{loot}'");
        view.push(ViewItem::ItemFound {
            item: loot,
            source: format!("The {enemy} dropped"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoadedDice, load_world};

    #[test]
    fn absent_enemy_changes_nothing() {
        let mut world = load_world().unwrap();
        let before = world.clone();
        let mut view = View::new();
        let mut dice = LoadedDice::new().with_rolls([20, 1]);
        let control = fight_handler(&mut world, &mut view, &mut dice, "dragon").unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(world.player, before.player);
        assert_eq!(world.rooms, before.rooms);
        assert_eq!(dice.remaining(), 2);
    }

    #[test]
    fn winning_removes_enemy_and_scores() {
        let mut world = load_world().unwrap();
        world.player.add_item("stick");
        let mut view = View::new();
        // 15 + 10 = 25 vs 1 + 20 = 21; no loot
        let mut dice = LoadedDice::new().with_rolls([15, 1]).with_chances([false]);
        let control = fight_handler(&mut world, &mut view, &mut dice, "wolf").unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert!(!world.room("forest").unwrap().has_enemy("wolf"));
        assert_eq!(world.player.score, 20);
        assert_eq!(world.player.inventory, vec!["stick"]);
        assert!(view.contains(|item| {
            matches!(item, ViewItem::EnemyDefeated { flavor: Some(_), .. })
        }));
    }

    #[test]
    fn winning_can_drop_loot() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        // bare hands: 20 + 5 = 25 vs 1 + 20 = 21; loot face 3 = magic dust
        let mut dice = LoadedDice::new().with_rolls([20, 1, 3]).with_chances([true]);
        fight_handler(&mut world, &mut view, &mut dice, "wolf").unwrap();
        assert_eq!(world.player.inventory, vec!["magic dust"]);
    }

    #[test]
    fn losing_costs_a_third_of_enemy_power() {
        let mut world = load_world().unwrap();
        let mut view = View::new();
        // 1 + 5 = 6 vs 20 + 20 = 40
        let mut dice = LoadedDice::new().with_rolls([1, 20]);
        let control = fight_handler(&mut world, &mut view, &mut dice, "wolf").unwrap();
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(world.player.health, 94);
        assert!(world.room("forest").unwrap().has_enemy("wolf"));
        assert!(view.contains(ViewItem::is_enemy_retreats));
    }

    #[test]
    fn fatal_loss_ends_the_game() {
        let mut world = load_world().unwrap();
        world.player.health = 6;
        let mut view = View::new();
        let mut dice = LoadedDice::new().with_rolls([1, 20]);
        let control = fight_handler(&mut world, &mut view, &mut dice, "wolf").unwrap();
        assert_eq!(control, ReplControl::GameOver);
        assert_eq!(world.player.health, 0);
        assert!(view.contains(ViewItem::is_player_defeated));
    }

    #[test]
    fn first_weapon_in_inventory_is_used() {
        let mut world = load_world().unwrap();
        world.player.add_item("torch");
        world.player.add_item("stick");
        world.player.add_item("jeweled sword");
        let mut view = View::new();
        let mut dice = LoadedDice::new().with_rolls([10, 10]);
        fight_handler(&mut world, &mut view, &mut dice, "wolf").unwrap();
        assert!(view.contains(|item| {
            matches!(item, ViewItem::CombatRound { weapon: Some(w), player_roll: 20, enemy_roll: 30, .. } if w == "stick")
        }));
    }

    #[test]
    fn unlisted_enemy_uses_default_strength() {
        let mut world = load_world().unwrap();
        world.player_room_mut().unwrap().enemies.push("goblin".into());
        let mut view = View::new();
        let mut dice = LoadedDice::new().with_rolls([1, 1]);
        fight_handler(&mut world, &mut view, &mut dice, "goblin").unwrap();
        // 1 + 5 = 6 vs 1 + 15 = 16, loses 15 / 3 = 5
        assert_eq!(world.player.health, 95);
    }
}
