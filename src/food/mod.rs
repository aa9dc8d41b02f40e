//! Food kinds, their roll thresholds and scores, and reject-sampling spawn.

use bevy::prelude::Color;
use rand::prelude::*;

use crate::game::{
    COMMON_FOOD_COLOR, COMMON_FOOD_SCORE, COMMON_FOOD_THRESHOLD, Cell, INVINCIBILITY_FOOD_COLOR,
    INVINCIBILITY_FOOD_SCORE, SPEED_FOOD_COLOR, SPEED_FOOD_SCORE, SPEED_FOOD_THRESHOLD,
};

/// What a food item does when the bike drives over it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FoodKind {
    Common,
    Speed,
    Invincibility,
}

impl FoodKind {
    /// Maps a uniform roll in `[0, 1)` onto a kind: 70% common, 25% speed, 5% invincibility.
    pub fn from_roll(roll: f64) -> FoodKind {
        if roll < COMMON_FOOD_THRESHOLD {
            FoodKind::Common
        } else if roll < SPEED_FOOD_THRESHOLD {
            FoodKind::Speed
        } else {
            FoodKind::Invincibility
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            FoodKind::Common => COMMON_FOOD_SCORE,
            FoodKind::Speed => SPEED_FOOD_SCORE,
            FoodKind::Invincibility => INVINCIBILITY_FOOD_SCORE,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FoodKind::Common => COMMON_FOOD_COLOR,
            FoodKind::Speed => SPEED_FOOD_COLOR,
            FoodKind::Invincibility => INVINCIBILITY_FOOD_COLOR,
        }
    }
}

/// A food item on the arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Food {
    pub cell: Cell,
    pub kind: FoodKind,
}

/// Spawns food at a random cell that doesn't overlap with the bike.
///
/// Each rejected draw discards the whole item, so the kind is rolled again
/// together with the position. Loops forever on a completely full grid.
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    width: i32,
    height: i32,
    occupied: impl Fn(&Cell) -> bool,
) -> Food {
    loop {
        let kind = FoodKind::from_roll(rng.random::<f64>());
        let cell = Cell {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
        };

        if !occupied(&cell) {
            return Food { cell, kind };
        }
    }
}
