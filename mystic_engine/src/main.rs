#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** The Mystic Quest **
//! Find the legendary orb, and try not to get eaten on the way.

use mystic_engine::repl::input::{InputEvent, InputManager};
use mystic_engine::style::{GameStyle, normal_block};
use mystic_engine::{MYSTIC_VERSION, RandomDice, SessionEnd, load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::fill;

use std::io::Write;

const FAREWELL: &str = "\n\nGame terminated by user. Thanks for playing!";

fn main() -> Result<()> {
    env_logger::init();
    // rustyline reads Ctrl-C as a key; this covers plain stdin and output between prompts
    ctrlc::set_handler(|| {
        info!("interrupt signal received");
        println!("{FAREWELL}");
        std::process::exit(0);
    })
    .context("while installing the interrupt handler")?;
    info!("Start: loading Mystic Quest world (engine v{MYSTIC_VERSION})...");
    let mut world = load_world().context("while loading QuestWorld")?;
    info!("QuestWorld loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^84}", format!("=== {} ===", world.title).bright_yellow().underline());
    let intro = "You awaken in a strange forest with no memory of how you got here. \
                 Your goal is to explore this mysterious land and find the legendary mystic orb.";
    println!("\n{}", fill(intro, normal_block()).description_style());

    let mut input = InputManager::new(&world.known_names());
    let name = match input
        .read_line(&"\nWhat is your name, adventurer? ".prompt_style().to_string())
        .context("while reading the player's name")?
    {
        InputEvent::Line(line) if !line.trim().is_empty() => line.trim().to_string(),
        InputEvent::Line(_) | InputEvent::Eof => world.player.name.clone(),
        InputEvent::Interrupted => {
            println!("{FAREWELL}");
            return Ok(());
        },
    };
    info!("player name set to '{name}'");
    println!("\nWelcome, {}. Your adventure begins now...\n", name.bold().bright_blue());
    world.player.name = name;

    match run_repl(&mut world, &mut RandomDice::new(), &mut input)? {
        SessionEnd::Finished => info!("game finished after {} turns", world.turn_count),
        SessionEnd::Interrupted => println!("{FAREWELL}"),
    }
    Ok(())
}
