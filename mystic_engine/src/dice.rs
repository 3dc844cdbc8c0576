//! Dice module
//!
//! Every random decision in the game (combat rolls, random events, loot) goes
//! through the [`Dice`] trait so a session can be replayed with scripted values.

use std::collections::VecDeque;

use log::warn;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of randomness for the game.
pub trait Dice {
    /// Roll a die with `sides` faces, returning a value in `1..=sides`.
    fn roll(&mut self, sides: u32) -> u32;

    /// Returns true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Pick an index into a collection of `len` elements, or `None` if it is empty.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let sides = u32::try_from(len).unwrap_or(u32::MAX);
        Some((self.roll(sides) - 1) as usize)
    }

    /// Pick one entry from `table`.
    fn choose<'a, T>(&mut self, table: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        self.pick(table.len()).and_then(|index| table.get(index))
    }

    /// Random integer in `low..=high`.
    fn between(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = u32::try_from(high - low + 1).unwrap_or(u32::MAX);
        low.saturating_add_unsigned(self.roll(span) - 1)
    }
}

/// Dice backed by the thread-local generator from `rand`.
#[derive(Debug, Default)]
pub struct RandomDice {
    rng: ThreadRng,
}

impl RandomDice {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

/// Dice that replay a fixed script of results.
///
/// Rolls and chance checks are drawn from separate queues. An exhausted roll
/// queue yields 1 and an exhausted chance queue yields `false`. Scripted rolls
/// larger than the die are clamped to its size.
#[derive(Debug, Default, Clone)]
pub struct LoadedDice {
    rolls: VecDeque<u32>,
    chances: VecDeque<bool>,
}

impl LoadedDice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue die results, in order.
    #[must_use]
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue chance results, in order.
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len() + self.chances.len()
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        match self.rolls.pop_front() {
            Some(value) if (1..=sides).contains(&value) => value,
            Some(value) => {
                warn!("loaded roll {value} out of range for d{sides}, clamping");
                value.clamp(1, sides)
            },
            None => 1,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_dice_replay_in_order() {
        let mut dice = LoadedDice::new().with_rolls([3, 17]).with_chances([true, false]);
        assert_eq!(dice.roll(20), 3);
        assert!(dice.chance(0.3));
        assert_eq!(dice.roll(20), 17);
        assert!(!dice.chance(0.3));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn exhausted_dice_fall_back() {
        let mut dice = LoadedDice::new();
        assert_eq!(dice.roll(20), 1);
        assert!(!dice.chance(1.0));
    }

    #[test]
    fn loaded_rolls_clamp_to_die() {
        let mut dice = LoadedDice::new().with_rolls([25, 0]);
        assert_eq!(dice.roll(20), 20);
        assert_eq!(dice.roll(20), 1);
    }

    #[test]
    fn pick_and_between_map_rolls() {
        let mut dice = LoadedDice::new().with_rolls([1, 3, 1, 6]);
        assert_eq!(dice.pick(3), Some(0));
        assert_eq!(dice.pick(3), Some(2));
        assert_eq!(dice.between(5, 10), 5);
        assert_eq!(dice.between(5, 10), 10);
    }

    #[test]
    fn empty_tables_yield_nothing() {
        let mut dice = LoadedDice::new().with_rolls([1, 2]);
        assert_eq!(dice.pick(0), None);
        assert_eq!(dice.choose::<String>(&[]), None);
        assert_eq!(dice.remaining(), 2);
        assert_eq!(dice.choose(&["wolf", "bat"]), Some(&"wolf"));
        assert_eq!(dice.choose(&["wolf", "bat"]), Some(&"bat"));
    }

    #[test]
    fn random_dice_stay_in_range() {
        let mut dice = RandomDice::new();
        for _ in 0..200 {
            let roll = dice.roll(20);
            assert!((1..=20).contains(&roll));
            let fall = dice.between(5, 10);
            assert!((5..=10).contains(&fall));
            assert!(dice.pick(3).is_some_and(|index| index < 3));
        }
        assert!(dice.chance(1.0));
        assert!(!dice.chance(0.0));
    }
}
