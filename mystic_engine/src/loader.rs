//! Loader utilities for building a `QuestWorld` from the bundled world definition.
//!
//! The world is authored in TOML and compiled into the binary, then
//! deserialized into raw definitions and validated before play begins.

pub mod rooms;

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;

use crate::catalog::{Catalog, EnemyEntry, ItemEntry};
use crate::spinners::default_spinners;
use crate::world::WorldError;
use crate::{Player, QuestWorld, Rules};
use rooms::RawRoom;

/// The bundled world definition.
pub const WORLD_TOML: &str = include_str!("../data/world.toml");

/// Top-level layout of a world definition.
#[derive(Debug, Deserialize)]
pub struct RawWorld {
    pub title: String,
    pub start: String,
    pub artifact: String,
    #[serde(default)]
    pub loot: Vec<String>,
    #[serde(default)]
    pub supplies: Vec<String>,
    pub rooms: Vec<RawRoom>,
    #[serde(default)]
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub enemies: Vec<EnemyEntry>,
}

/// Load the bundled Mystic Quest world.
///
/// # Errors
/// Errors bubble up from deserialization or a world that fails validation.
pub fn load_world() -> Result<QuestWorld> {
    load_world_from_str(WORLD_TOML).context("while loading the bundled world")
}

/// Build and validate a `QuestWorld` from a TOML world definition.
///
/// # Errors
/// - on malformed TOML
/// - on duplicate rooms, dangling exits, a missing start room or an unplaced artifact
pub fn load_world_from_str(toml_src: &str) -> Result<QuestWorld> {
    let raw: RawWorld = toml::from_str(toml_src).context("while parsing world TOML")?;
    build_world(raw)
}

/// Convert a raw definition into a playable world.
///
/// # Errors
/// - if the resulting world fails validation
pub fn build_world(raw: RawWorld) -> Result<QuestWorld> {
    let mut world = QuestWorld::new_empty();
    let mut problems = Vec::new();

    for raw_room in raw.rooms {
        let room = raw_room.into_room();
        if world.rooms.contains_key(&room.name) {
            problems.push(WorldError::DuplicateLocation(room.name));
            continue;
        }
        world.rooms.insert(room.name.clone(), room);
    }
    info!("{} rooms added to QuestWorld", world.rooms.len());

    world.catalog = Catalog {
        items: index_by_name(raw.items, |item| item.name.clone()),
        enemies: index_by_name(raw.enemies, |enemy| enemy.name.clone()),
        loot: raw.loot,
        supplies: raw.supplies,
        artifact: raw.artifact,
    };
    info!(
        "catalog built: {} items, {} enemies, {} loot, {} supplies",
        world.catalog.items.len(),
        world.catalog.enemies.len(),
        world.catalog.loot.len(),
        world.catalog.supplies.len()
    );

    world.title = raw.title;
    world.rules = Rules::default();
    world.player = Player::new("Adventurer", world.rules.starting_health);
    world.location = raw.start;
    world.spinners = default_spinners();

    problems.extend(world.validate());
    if !problems.is_empty() {
        let details = problems
            .into_iter()
            .map(|err| format!("- {err}"))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("world validation failed:\n{details}");
    }
    info!("world \"{}\" loaded, player starts in {}", world.title, world.location);
    Ok(world)
}

fn index_by_name<T>(entries: Vec<T>, name: impl Fn(&T) -> String) -> HashMap<String, T> {
    entries.into_iter().map(|entry| (name(&entry), entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_WORLD: &str = r#"
        title = "TINY"
        start = "hut"
        artifact = "gem"
        loot = ["coin"]

        [[rooms]]
        name = "hut"
        description = "A hut."
        items = ["gem"]
        exits = ["yard"]

        [[rooms]]
        name = "yard"
        description = "A yard."
        enemies = ["goose"]
        exits = ["hut"]

        [[items]]
        name = "gem"
        description = "Shiny."

        [[enemies]]
        name = "goose"
        strength = 12
    "#;

    #[test]
    fn bundled_world_loads() {
        let world = load_world().unwrap();
        assert_eq!(world.title, "THE MYSTIC QUEST");
        assert_eq!(world.location, "forest");
        assert_eq!(world.rooms.len(), 7);
        assert_eq!(world.player.health, 100);
        assert_eq!(world.catalog.artifact, "mystical orb");
        assert_eq!(world.catalog.weapon_power("jeweled sword"), Some(40));
        assert_eq!(world.catalog.enemy_strength("dragon"), Some(70));
        assert_eq!(world.catalog.loot.len(), 3);
        assert_eq!(world.catalog.supplies.len(), 3);
    }

    #[test]
    fn bundled_exits_are_closed_and_reciprocal() {
        let world = load_world().unwrap();
        for room in world.rooms.values() {
            for exit in &room.exits {
                let neighbor = world.room(exit).expect("exit must name a room");
                assert!(neighbor.has_exit(&room.name), "{} -> {exit} is one-way", room.name);
            }
        }
    }

    #[test]
    fn tiny_world_parses_with_defaults() {
        let world = load_world_from_str(TINY_WORLD).unwrap();
        let yard = world.room("yard").unwrap();
        assert!(yard.items.is_empty());
        assert_eq!(yard.enemies, vec!["goose"]);
        assert_eq!(world.catalog.defeat_text("goose"), None);
        assert!(world.catalog.supplies.is_empty());
    }

    #[test]
    fn dangling_exit_fails_validation() {
        let broken = TINY_WORLD.replace(r#"exits = ["hut"]"#, r#"exits = ["hut", "barn"]"#);
        let err = load_world_from_str(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("unknown location 'barn'"));
    }

    #[test]
    fn duplicate_room_fails_validation() {
        let doubled = TINY_WORLD.replacen(
            "[[items]]",
            "[[rooms]]\nname = \"hut\"\ndescription = \"Again.\"\n\n[[items]]",
            1,
        );
        let err = load_world_from_str(&doubled).unwrap_err();
        assert!(format!("{err:#}").contains("defined more than once"));
    }
}
