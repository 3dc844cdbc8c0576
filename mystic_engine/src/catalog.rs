//! Catalog module
//!
//! Static lookup tables for the world: item descriptions and weapon power,
//! enemy strength and defeat flavor, plus the loot and supply tables.

use std::collections::HashMap;

use serde::Deserialize;

/// Catalog entry for an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub description: String,
    /// Present only for items that can be swung in a fight.
    #[serde(default)]
    pub weapon_power: Option<i32>,
    /// Health restored when the item is picked up (it gets eaten on the spot).
    #[serde(default)]
    pub heal_on_take: Option<i32>,
}

/// Catalog entry for an enemy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemyEntry {
    pub name: String,
    pub strength: i32,
    #[serde(default)]
    pub defeat_text: Option<String>,
}

/// All static, name-keyed data the handlers consult.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: HashMap<String, ItemEntry>,
    pub enemies: HashMap<String, EnemyEntry>,
    /// Items an enemy may drop when defeated.
    pub loot: Vec<String>,
    /// Items a supply cache may contain.
    pub supplies: Vec<String>,
    /// The item the player is looking for.
    pub artifact: String,
}

impl Catalog {
    /// Description for `item`, or a generic one for anything not in the catalog.
    pub fn describe_item(&self, item: &str) -> String {
        self.items
            .get(item)
            .map_or_else(|| format!("It's just an ordinary {item}."), |entry| entry.description.clone())
    }

    /// Power of `item` when used as a weapon, if it is one.
    pub fn weapon_power(&self, item: &str) -> Option<i32> {
        self.items.get(item).and_then(|entry| entry.weapon_power)
    }

    /// First weapon found in `inventory` order, with its power.
    pub fn first_weapon<'a>(&self, inventory: &'a [String]) -> Option<(&'a str, i32)> {
        inventory
            .iter()
            .find_map(|item| self.weapon_power(item).map(|power| (item.as_str(), power)))
    }

    /// Health restored by picking up `item`, if any.
    pub fn heal_on_take(&self, item: &str) -> Option<i32> {
        self.items.get(item).and_then(|entry| entry.heal_on_take)
    }

    /// Strength of `enemy`, if listed.
    pub fn enemy_strength(&self, enemy: &str) -> Option<i32> {
        self.enemies.get(enemy).map(|entry| entry.strength)
    }

    /// Extra narration shown when `enemy` is beaten.
    pub fn defeat_text(&self, enemy: &str) -> Option<&str> {
        self.enemies.get(enemy).and_then(|entry| entry.defeat_text.as_deref())
    }

    pub fn is_artifact(&self, item: &str) -> bool {
        self.artifact == item
    }
}
