//! Room loading logic.
//!
//! Raw rooms carry names only; exits are checked against the full room set by
//! `QuestWorld::validate` once every room is known.

use serde::Deserialize;

use crate::Room;

/// Raw room data as written in the world definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoom {
    name: String,
    description: String,
    #[serde(default)]
    items: Vec<String>,
    #[serde(default)]
    enemies: Vec<String>,
    #[serde(default)]
    exits: Vec<String>,
}

impl RawRoom {
    /// Converts `RawRoom` to a `Room`, giving it its own item and enemy lists.
    pub fn into_room(self) -> Room {
        Room {
            name: self.name,
            description: self.description,
            items: self.items,
            enemies: self.enemies,
            exits: self.exits,
        }
    }
}
