#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const MYSTIC_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod catalog;
pub mod combat;
pub mod command;
pub mod dice;
pub mod helpers;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod rules;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use catalog::{Catalog, EnemyEntry, ItemEntry};
pub use dice::{Dice, LoadedDice, RandomDice};
pub use loader::load_world;
pub use player::Player;
pub use repl::{ReplControl, SessionEnd, run_repl, step};
pub use room::Room;
pub use rules::Rules;
pub use view::{View, ViewItem};
pub use world::{QuestWorld, WorldError};
