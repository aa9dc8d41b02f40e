//! Bike plugin - feeds keyboard input, elapsed time and ticks into the simulation.

use bevy::prelude::*;

use crate::engine::{Phase, TickOutcome};
use crate::game::{
    BikeCrashedEvent, Direction, EffectEndedEvent, FoodEatenEvent, RunStartedEvent, Simulation,
    TickTimer,
};

/// Plugin for the systems that drive the simulation.
///
/// Expects a [`Simulation`] resource to be inserted before startup.
pub struct BikePlugin;

impl Plugin for BikePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RunStartedEvent>()
            .add_message::<FoodEatenEvent>()
            .add_message::<BikeCrashedEvent>()
            .add_message::<EffectEndedEvent>()
            .add_systems(Startup, setup_tick_timer)
            .add_systems(
                Update,
                (bike_input, advance_clock, bike_movement, log_run_events).chain(),
            );
    }
}

fn setup_tick_timer(mut commands: Commands, simulation: Res<Simulation>) {
    commands.insert_resource(TickTimer::for_engine(&simulation));
}

/// System to read keyboard input: pause, restart and steering.
fn bike_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut simulation: ResMut<Simulation>,
    mut tick_timer: ResMut<TickTimer>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        match simulation.toggle_pause() {
            Phase::Paused => info!("Paused"),
            Phase::Running => info!("Resumed"),
            _ => {}
        }
    }

    if keyboard_input.just_pressed(KeyCode::Enter) && simulation.restart() {
        // Drop whatever was left of the previous run's tick schedule.
        *tick_timer = TickTimer::for_engine(&simulation);
        info!("Restarting");
    }

    if let Some(direction) = Direction::from_input(&keyboard_input) {
        simulation.set_pending_direction(direction);
    }
}

/// System to run the countdown and effect expiries on frame time.
fn advance_clock(
    time: Res<Time>,
    mut simulation: ResMut<Simulation>,
    mut tick_timer: ResMut<TickTimer>,
    mut started_writer: MessageWriter<RunStartedEvent>,
    mut ended_writer: MessageWriter<EffectEndedEvent>,
) {
    let report = simulation.advance_clock(time.delta());

    if report.started {
        tick_timer.0.reset();
        started_writer.write(RunStartedEvent);
    }
    for effect in report.expired {
        ended_writer.write(EffectEndedEvent { effect });
    }
}

/// System to step the bike whenever the tick timer fires.
fn bike_movement(
    time: Res<Time>,
    mut simulation: ResMut<Simulation>,
    mut tick_timer: ResMut<TickTimer>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut crashed_writer: MessageWriter<BikeCrashedEvent>,
) {
    // Paused, counting down or over: the tick schedule stands still.
    if simulation.phase() != Phase::Running {
        return;
    }

    let interval = simulation.tick_interval();
    if tick_timer.0.duration() != interval {
        tick_timer.0.set_duration(interval);
    }
    tick_timer.0.tick(time.delta());

    for _ in 0..tick_timer.0.times_finished_this_tick() {
        match simulation.tick() {
            TickOutcome::Ate(food) => {
                food_eaten_writer.write(FoodEatenEvent {
                    food,
                    score: simulation.score(),
                });
            }
            TickOutcome::Crashed(collision) => {
                crashed_writer.write(BikeCrashedEvent {
                    collision,
                    score: simulation.score(),
                });
                break;
            }
            TickOutcome::Moved | TickOutcome::Idle => {}
        }
    }
}

fn log_run_events(
    mut started_reader: MessageReader<RunStartedEvent>,
    mut food_eaten_reader: MessageReader<FoodEatenEvent>,
    mut crashed_reader: MessageReader<BikeCrashedEvent>,
    mut ended_reader: MessageReader<EffectEndedEvent>,
) {
    for _ in started_reader.read() {
        info!("GO!");
    }
    for event in food_eaten_reader.read() {
        info!("Ate {:?} food, score {}", event.food.kind, event.score);
    }
    for event in ended_reader.read() {
        info!("{:?} wore off", event.effect);
    }
    for event in crashed_reader.read() {
        info!(
            "Game Over ({:?})! Final score: {}. Press ENTER to restart",
            event.collision, event.score
        );
    }
}
