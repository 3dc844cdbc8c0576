//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly;

/// Command reference shown by `help`, in display order.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("go [location]", "Move to a new location"),
    ("take [item]", "Pick up an item"),
    ("inventory/inv", "Show your inventory"),
    ("examine [item]", "Look closely at an item"),
    ("fight [enemy]", "Fight an enemy"),
    ("help/?", "Show this help menu"),
    ("quit/exit", "End the game"),
];

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Empty,
    Examine(String),
    Fight(String),
    Help,
    Inventory,
    MoveTo(String),
    Quit,
    Take(String),
    Unknown,
}

/// Parses an input line and returns the corresponding `Command`.
///
/// Input is lowercased and split on whitespace, and the first word picks the
/// command. Everything after the verb is the argument, so names with spaces
/// ("treasure room") survive intact. Verbs without arguments ignore the rest.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        [] => Command::Empty,
        ["help" | "?", ..] => Command::Help,
        ["inventory" | "inv", ..] => Command::Inventory,
        ["quit" | "exit", ..] => Command::Quit,
        ["go", rest @ ..] if !rest.is_empty() => Command::MoveTo(rest.join(" ")),
        ["take", rest @ ..] if !rest.is_empty() => Command::Take(rest.join(" ")),
        ["examine", rest @ ..] if !rest.is_empty() => Command::Examine(rest.join(" ")),
        ["fight", rest @ ..] if !rest.is_empty() => Command::Fight(rest.join(" ")),
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_verbs() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("INVENTORY"), Command::Inventory);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("exit\n"), Command::Quit);
    }

    #[test]
    fn joins_multi_word_arguments() {
        assert_eq!(
            parse_command("go   Treasure   Room"),
            Command::MoveTo("treasure room".into())
        );
        assert_eq!(parse_command("take old coin"), Command::Take("old coin".into()));
        assert_eq!(
            parse_command("fight giant spider"),
            Command::Fight("giant spider".into())
        );
        assert_eq!(
            parse_command("examine Mystical Orb"),
            Command::Examine("mystical orb".into())
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   \t \n"), Command::Empty);
    }

    #[test]
    fn missing_argument_or_unknown_verb_is_unknown() {
        assert_eq!(parse_command("go"), Command::Unknown);
        assert_eq!(parse_command("take"), Command::Unknown);
        assert_eq!(parse_command("dance wildly"), Command::Unknown);
    }

    #[test]
    fn bare_verbs_ignore_trailing_words() {
        assert_eq!(parse_command("quit now"), Command::Quit);
        assert_eq!(parse_command("exit the game"), Command::Quit);
        assert_eq!(parse_command("help me"), Command::Help);
        assert_eq!(parse_command("inv please"), Command::Inventory);
        assert_eq!(parse_command("Inventory all"), Command::Inventory);
    }

    #[test]
    fn help_table_lists_every_alias() {
        for alias in ["help/?", "quit/exit", "inventory/inv"] {
            assert!(COMMAND_HELP.iter().any(|(usage, _)| *usage == alias), "missing {alias}");
        }
    }
}
