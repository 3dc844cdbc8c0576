//! Rules module
//!
//! Flat tuning constants for scoring, health and chance. These are fixed for a
//! session; nothing here is read from outside the binary.

/// Numbers that drive scoring, combat and random events.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub starting_health: i32,
    /// Awarded for each successful move.
    pub move_points: usize,
    /// Awarded for each item picked up.
    pub take_points: usize,
    /// Extra award for picking up the artifact.
    pub artifact_bonus: usize,
    /// Awarded for each enemy defeated.
    pub victory_points: usize,
    pub random_event_chance: f64,
    pub loot_chance: f64,
    /// Sides on the combat die.
    pub combat_die: u32,
    pub unarmed_power: i32,
    /// Strength assumed for an enemy missing from the catalog.
    pub default_enemy_strength: i32,
    /// Losing a fight costs `enemy strength / damage_divisor` health.
    pub damage_divisor: i32,
    pub fall_damage_min: i32,
    pub fall_damage_max: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_health: 100,
            move_points: 5,
            take_points: 10,
            artifact_bonus: 100,
            victory_points: 20,
            random_event_chance: 0.3,
            loot_chance: 0.5,
            combat_die: 20,
            unarmed_power: 5,
            default_enemy_strength: 15,
            damage_divisor: 3,
            fall_damage_min: 5,
            fall_damage_max: 10,
        }
    }
}

impl Rules {
    /// Health lost when an enemy of the given strength wins a fight.
    pub fn combat_damage(&self, enemy_strength: i32) -> i32 {
        enemy_strength.div_euclid(self.damage_divisor)
    }
}
