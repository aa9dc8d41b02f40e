//! Game events (messages) emitted by the simulation driver.

use bevy::prelude::*;

use crate::engine::{Collision, Effect};
use crate::food::Food;

/// Message triggered when the countdown finishes and the bike starts moving.
#[derive(Message)]
pub struct RunStartedEvent;

/// Message triggered when food is eaten.
#[derive(Message)]
pub struct FoodEatenEvent {
    pub food: Food,
    pub score: u32,
}

/// Message triggered when the bike hits a wall or its own body.
#[derive(Message)]
pub struct BikeCrashedEvent {
    pub collision: Collision,
    pub score: u32,
}

/// Message triggered when a timed effect runs out.
#[derive(Message)]
pub struct EffectEndedEvent {
    pub effect: Effect,
}
