//! Spinners supply varied flavor lines so repeated actions don't read identically.

use std::collections::HashMap;

use gametools::spinners::{Spinner, Wedge};
use log::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpinnerType {
    EmptyInput,
    Travel,
    UnrecognizedCommand,
}

impl SpinnerType {
    /// Built-in lines for this spinner.
    pub fn default_lines(self) -> &'static [&'static str] {
        match self {
            SpinnerType::EmptyInput => &[
                "Please enter a command.",
                "The forest waits. Please enter a command.",
                "Say something, adventurer. Please enter a command.",
            ],
            SpinnerType::Travel => &["You travel to", "You make your way to", "You set off toward"],
            SpinnerType::UnrecognizedCommand => &[
                "I don't understand that command.",
                "That makes no sense here.",
                "Your words echo, but nothing happens.",
            ],
        }
    }
}

pub trait SpinnerExt {
    fn from_strs(words: &[&'static str]) -> Self;
}
impl SpinnerExt for Spinner<String> {
    fn from_strs(words: &[&'static str]) -> Self {
        let wedges = words.iter().map(|w| Wedge::new((*w).to_string())).collect::<Vec<_>>();
        Spinner::new(wedges)
    }
}

/// Build the spinner map with every built-in spinner.
pub fn default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    let spinners: HashMap<_, _> = [SpinnerType::EmptyInput, SpinnerType::Travel, SpinnerType::UnrecognizedCommand]
        .into_iter()
        .map(|kind| (kind, Spinner::from_strs(kind.default_lines())))
        .collect();
    info!("{} spinners created", spinners.len());
    spinners
}
