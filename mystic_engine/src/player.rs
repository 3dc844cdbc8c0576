//! Player -- the adventurer and their belongings.

use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    /// May dip below zero; anything at or under zero is defeat.
    pub health: i32,
    /// Item names in pickup order. Duplicates are allowed.
    pub inventory: Vec<String>,
    pub score: usize,
}

impl Default for Player {
    fn default() -> Player {
        Self {
            name: "Adventurer".into(),
            health: 100,
            inventory: Vec::new(),
            score: 0,
        }
    }
}

impl Player {
    /// Create a player with a name and starting health.
    pub fn new(name: &str, health: i32) -> Player {
        Self {
            name: name.to_string(),
            health,
            ..Player::default()
        }
    }

    pub fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|held| held == item)
    }

    /// Apply a signed change to health and return the new value.
    pub fn adjust_health(&mut self, delta: i32) -> i32 {
        self.health = self.health.saturating_add(delta);
        info!("{} health {delta:+} -> {}", self.name, self.health);
        self.health
    }

    /// Apply a signed change to the score. The score never drops below zero.
    pub fn adjust_score(&mut self, delta: isize) -> usize {
        self.score = self.score.saturating_add_signed(delta);
        self.score
    }

    /// Add points to the score.
    pub fn award(&mut self, points: usize) -> usize {
        self.score = self.score.saturating_add(points);
        self.score
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}
