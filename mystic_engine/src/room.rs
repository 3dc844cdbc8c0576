//! Room module
//!
//! A room is one named location in the world graph. It owns the lists of
//! items and enemies currently inside it.

use crate::view::{View, ViewItem};

/// A location the player can stand in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub items: Vec<String>,
    pub enemies: Vec<String>,
    /// Names of neighboring rooms, in display order.
    pub exits: Vec<String>,
}

impl Room {
    pub fn has_exit(&self, destination: &str) -> bool {
        self.exits.iter().any(|exit| exit == destination)
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|here| here == item)
    }

    pub fn has_enemy(&self, enemy: &str) -> bool {
        self.enemies.iter().any(|here| here == enemy)
    }

    /// Remove the first `item` from the room, returning it if it was here.
    pub fn take_item(&mut self, item: &str) -> Option<String> {
        let idx = self.items.iter().position(|here| here == item)?;
        Some(self.items.remove(idx))
    }

    /// Remove the first `enemy` from the room, returning it if it was here.
    pub fn remove_enemy(&mut self, enemy: &str) -> Option<String> {
        let idx = self.enemies.iter().position(|here| here == enemy)?;
        Some(self.enemies.remove(idx))
    }

    /// Push the room's description and visible contents to the view.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.clone()));
        }
        if !self.enemies.is_empty() {
            view.push(ViewItem::RoomEnemies(self.enemies.clone()));
        }
        view.push(ViewItem::RoomExits(self.exits.clone()));
    }
}
