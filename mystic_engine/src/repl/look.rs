//! `repl::look` module
//!
//! Handlers that show the player where they are and what things look like.

use crate::{QuestWorld, View, ViewItem, style::GameStyle};

use anyhow::Result;

/// Show the status line and the current room.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn status_handler(world: &QuestWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::StatusLine {
        name: world.player.name.clone(),
        health: world.player.health,
        score: world.player.score,
        inventory: world.player.inventory.clone(),
    });
    room.show(view);
    Ok(())
}

/// Describe an item the player is carrying or can see in the room.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn examine_handler(world: &QuestWorld, view: &mut View, item: &str) -> Result<()> {
    let room = world.player_room_ref()?;
    if world.player.has_item(item) || room.has_item(item) {
        view.push(ViewItem::ItemDescription {
            name: item.to_string(),
            description: world.catalog.describe_item(item),
        });
    } else {
        view.push(ViewItem::ActionFailure(format!(
            "You don't see any {} to examine.",
            item.error_style()
        )));
    }
    Ok(())
}
