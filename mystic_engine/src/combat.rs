//! Combat module
//!
//! One exchange of blows is a single opposed roll: each side rolls the combat
//! die and adds its power. Ties go to the player.

use crate::Dice;

/// Result of one opposed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRoll {
    pub player_roll: i32,
    pub enemy_roll: i32,
}

impl CombatRoll {
    /// Roll for both sides, player first.
    pub fn roll(dice: &mut impl Dice, die: u32, player_power: i32, enemy_power: i32) -> CombatRoll {
        let player_roll = roll_die(dice, die).saturating_add(player_power);
        let enemy_roll = roll_die(dice, die).saturating_add(enemy_power);
        CombatRoll {
            player_roll,
            enemy_roll,
        }
    }

    pub fn player_wins(&self) -> bool {
        self.player_roll >= self.enemy_roll
    }
}

fn roll_die(dice: &mut impl Dice, die: u32) -> i32 {
    i32::try_from(dice.roll(die)).unwrap_or(i32::MAX)
}
