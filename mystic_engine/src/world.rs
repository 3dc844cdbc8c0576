//! Data structures representing the game world.
//!
//! This module defines [`QuestWorld`], which holds every room, the player and
//! the static catalog for the running game. Handlers receive it by `&mut`.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use gametools::Spinner;
use log::info;
use thiserror::Error;

use crate::spinners::SpinnerType;
use crate::{Catalog, Player, Room, Rules};

/// Structural problems with a world definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no location named '{0}'")]
    UnknownLocation(String),
    #[error("exit from '{from}' leads to unknown location '{to}'")]
    DanglingExit { from: String, to: String },
    #[error("location '{0}' is defined more than once")]
    DuplicateLocation(String),
    #[error("start location '{0}' does not exist")]
    MissingStart(String),
    #[error("artifact '{0}' is not placed in any location")]
    ArtifactNotPlaced(String),
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default)]
pub struct QuestWorld {
    pub title: String,
    pub rooms: HashMap<String, Room>,
    pub player: Player,
    /// Name of the room the player is standing in.
    pub location: String,
    pub catalog: Catalog,
    pub rules: Rules,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
    pub turn_count: usize,
}

impl QuestWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> QuestWorld {
        let world = Self {
            title: String::new(),
            rooms: HashMap::new(),
            player: Player::default(),
            location: String::new(),
            catalog: Catalog::default(),
            rules: Rules::default(),
            spinners: HashMap::new(),
            turn_count: 0,
        };
        info!("new, empty 'QuestWorld' created");
        world
    }

    /// Returns a random line from the selected spinner type, or a supplied default.
    pub fn spin_spinner(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(Spinner::spin)
            .unwrap_or(default.to_string())
    }

    /// Look up a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Every room, item and enemy name in the world, sorted and deduplicated.
    pub fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .rooms
            .values()
            .flat_map(|room| {
                std::iter::once(&room.name)
                    .chain(room.items.iter())
                    .chain(room.enemies.iter())
            })
            .chain(self.catalog.loot.iter())
            .chain(self.catalog.supplies.iter())
            .cloned()
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's location is not a known room
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.location)
            .ok_or_else(|| anyhow!("player's location ({}) not found in world", self.location))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's location is not a known room
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        self.rooms
            .get_mut(&self.location)
            .ok_or_else(|| anyhow!("player's location ({}) not found in world", self.location))
    }

    /// Remove `item` from the room called `location`.
    ///
    /// Returns `Ok(None)` if the room exists but the item isn't there.
    /// # Errors
    /// - if `location` is not a known room
    pub fn remove_item(&mut self, location: &str, item: &str) -> Result<Option<String>, WorldError> {
        self.rooms
            .get_mut(location)
            .map(|room| room.take_item(item))
            .ok_or_else(|| WorldError::UnknownLocation(location.to_string()))
    }

    /// Remove `enemy` from the room called `location`.
    ///
    /// Returns `Ok(None)` if the room exists but the enemy isn't there.
    /// # Errors
    /// - if `location` is not a known room
    pub fn remove_enemy(&mut self, location: &str, enemy: &str) -> Result<Option<String>, WorldError> {
        self.rooms
            .get_mut(location)
            .map(|room| room.remove_enemy(enemy))
            .ok_or_else(|| WorldError::UnknownLocation(location.to_string()))
    }

    /// Check that the world graph is closed and the player can start somewhere real.
    /// Returns every problem found.
    pub fn validate(&self) -> Vec<WorldError> {
        let mut errors = Vec::new();
        if !self.rooms.contains_key(&self.location) {
            errors.push(WorldError::MissingStart(self.location.clone()));
        }
        let mut room_names: Vec<&String> = self.rooms.keys().collect();
        room_names.sort();
        for name in room_names {
            let room = &self.rooms[name];
            for exit in &room.exits {
                if !self.rooms.contains_key(exit) {
                    errors.push(WorldError::DanglingExit {
                        from: room.name.clone(),
                        to: exit.clone(),
                    });
                }
            }
        }
        let artifact = &self.catalog.artifact;
        if !artifact.is_empty() && !self.rooms.values().any(|room| room.has_item(artifact)) {
            errors.push(WorldError::ArtifactNotPlaced(artifact.clone()));
        }
        errors
    }
}
