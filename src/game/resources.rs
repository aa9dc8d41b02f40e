//! Game resources (singleton state).

use bevy::prelude::*;

use crate::engine::Engine;

/// The running simulation, owned by the Bevy world.
#[derive(Resource, Deref, DerefMut)]
pub struct Simulation(pub Engine);

/// Repeating timer that delivers ticks at the engine's effective interval.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl TickTimer {
    pub fn for_engine(engine: &Engine) -> Self {
        TickTimer(Timer::new(engine.tick_interval(), TimerMode::Repeating))
    }
}
