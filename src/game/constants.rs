//! Game constants for arena size, timing, colors, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::{Cell, Direction};

// Arena dimensions
pub const ARENA_WIDTH: i32 = 40;
pub const ARENA_HEIGHT: i32 = 30;

// Visual settings
pub const CELL_SIZE: f32 = 20.0;
pub const CORNER_RADIUS: f32 = 3.0;

// Timing
pub const MOVE_INTERVAL: Duration = Duration::from_millis(150);
pub const SPEED_BOOST_FACTOR: f64 = 0.85;
pub const EFFECT_DURATION: Duration = Duration::from_millis(5000);
/// "3, 2, 1" at one second each, then half a second of "GO!".
pub const COUNTDOWN_STEPS: u32 = 3;
pub const COUNTDOWN_STEP: Duration = Duration::from_millis(1000);
pub const COUNTDOWN_GO: Duration = Duration::from_millis(500);

// Initial bike, head first
pub const INITIAL_BIKE: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Food roll thresholds (cumulative) and score values
pub const COMMON_FOOD_THRESHOLD: f64 = 0.70;
pub const SPEED_FOOD_THRESHOLD: f64 = 0.95;
pub const COMMON_FOOD_SCORE: u32 = 10;
pub const SPEED_FOOD_SCORE: u32 = 15;
pub const INVINCIBILITY_FOOD_SCORE: u32 = 20;

// Colors
pub const COMMON_FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const SPEED_FOOD_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
pub const INVINCIBILITY_FOOD_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgb(0.17, 0.24, 0.31);

// Z-index constants for rendering layers
pub const Z_ARENA: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_TRAIL: f32 = 1.5;
pub const Z_BIKE: f32 = 2.0;
