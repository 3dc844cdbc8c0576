//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are about the game itself
//! rather than the world: help, quitting, and the closing summary.

use crate::{QuestWorld, View, ViewItem, helpers::name_list, repl::ReplControl};

use log::info;

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Quit the game.
pub fn quit_handler(world: &QuestWorld) -> ReplControl {
    info!(
        "{} quit on turn {} with a score of {}",
        world.player.name, world.turn_count, world.player.score
    );
    ReplControl::GameOver
}

/// Push the end-of-game summary.
pub fn summary_handler(world: &QuestWorld, view: &mut View) {
    let player = &world.player;
    let defeated = player.is_defeated();
    let artifact = player
        .has_item(&world.catalog.artifact)
        .then(|| world.catalog.artifact.clone());
    info!(
        "game over for {} ({}): score {}, health {}, artifact {}",
        player.name,
        if defeated { "defeated" } else { "alive" },
        player.score,
        player.health,
        if artifact.is_some() { "found" } else { "not found" }
    );
    info!("ending inventory: {}", name_list(&player.inventory));

    view.push(ViewItem::GameSummary {
        title: world.title.clone(),
        player_name: player.name.clone(),
        defeated,
        score: player.score,
        items_collected: player.inventory.len(),
        artifact,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_world;

    fn summary(view: &View) -> ViewItem {
        view.items
            .iter()
            .map(|entry| entry.view_item.clone())
            .find(ViewItem::is_game_summary)
            .expect("summary pushed")
    }

    #[test]
    fn quit_signals_game_over() {
        let world = load_world().unwrap();
        assert_eq!(quit_handler(&world), ReplControl::GameOver);
    }

    #[test]
    fn summary_thanks_a_living_player() {
        let mut world = load_world().unwrap();
        world.player.add_item("stick");
        world.player.add_item("torch");
        world.player.award(25);
        let mut view = View::new();
        summary_handler(&world, &mut view);
        assert_eq!(
            summary(&view),
            ViewItem::GameSummary {
                title: "THE MYSTIC QUEST".into(),
                player_name: "Adventurer".into(),
                defeated: false,
                score: 25,
                items_collected: 2,
                artifact: None,
            }
        );
    }

    #[test]
    fn summary_reports_defeat_and_artifact() {
        let mut world = load_world().unwrap();
        world.player.add_item("mystical orb");
        world.player.health = -4;
        let mut view = View::new();
        summary_handler(&world, &mut view);
        assert!(matches!(
            summary(&view),
            ViewItem::GameSummary { defeated: true, artifact: Some(ref a), .. } if a == "mystical orb"
        ));
    }
}
