//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`QuestWorld`].
//!
//! The loop is a two-state machine: it keeps running until a handler reports
//! [`ReplControl::GameOver`], then shows the end-of-game summary.

pub mod fight;
pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use fight::*;
pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::dice::Dice;
use crate::spinners::SpinnerType;
use crate::style::GameStyle;
use crate::world::QuestWorld;
use crate::{View, ViewItem};

use anyhow::{Context, Result};
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    GameOver,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached game over and the summary was shown.
    Finished,
    /// The player interrupted the game at the prompt.
    Interrupted,
}

/// Run the main read–eval–print loop until the game ends.
///
/// Each pass shows the player's status and surroundings, reads one command and
/// dispatches it. Returns `SessionEnd::Interrupted` without a summary if the
/// player presses Ctrl-C at the prompt.
///
/// # Errors
/// - on a failed read from stdin
/// - on a handler failure, such as the player standing in an unknown room
pub fn run_repl(world: &mut QuestWorld, dice: &mut impl Dice, input: &mut InputManager) -> Result<SessionEnd> {
    let mut view = View::new();
    loop {
        world.turn_count += 1;
        info!("================> BEGIN TURN {} <================", world.turn_count);

        status_handler(world, &mut view)?;
        view.flush();

        let prompt = format!(
            "[Turn: {}|Score: {}] What would you like to do? ",
            world.turn_count, world.player.score
        )
        .prompt_style()
        .to_string();

        let line = match input.read_line(&prompt).context("while reading a command")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("end of input reached, treating as quit");
                view.push(ViewItem::EngineMessage("End of input. Ending the game.".to_string()));
                "quit".to_string()
            },
            InputEvent::Interrupted => {
                info!("player interrupted the game on turn {}", world.turn_count);
                return Ok(SessionEnd::Interrupted);
            },
        };

        if step(world, &mut view, dice, &line)? == ReplControl::GameOver {
            summary_handler(world, &mut view);
            view.flush();
            return Ok(SessionEnd::Finished);
        }
        view.flush();
    }
}

/// Parse and run a single line of player input.
///
/// # Errors
/// - propagates failures from the command handlers
pub fn step(world: &mut QuestWorld, view: &mut View, dice: &mut impl Dice, line: &str) -> Result<ReplControl> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    let command = parse_command(line);
    info!("{} entered \"{}\" -> {command:?}", world.player.name, line.trim());
    let control = match &command {
        Empty => {
            view.push(ViewItem::Error(
                world.spin_spinner(SpinnerType::EmptyInput, "Please enter a command."),
            ));
            ReplControl::Continue
        },
        Help => {
            help_handler(view);
            ReplControl::Continue
        },
        MoveTo(destination) => move_to_handler(world, view, dice, destination)?,
        Take(item) => {
            take_handler(world, view, item)?;
            ReplControl::Continue
        },
        Inventory => {
            inv_handler(world, view);
            ReplControl::Continue
        },
        Examine(item) => {
            examine_handler(world, view, item)?;
            ReplControl::Continue
        },
        Fight(enemy) => fight_handler(world, view, dice, enemy)?,
        Quit => quit_handler(world),
        Unknown => {
            let complaint = world.spin_spinner(SpinnerType::UnrecognizedCommand, "I don't understand that command.");
            view.push(ViewItem::Error(format!(
                "{complaint} Type '{}' for commands.",
                "help".error_style()
            )));
            ReplControl::Continue
        },
    };
    Ok(control)
}
