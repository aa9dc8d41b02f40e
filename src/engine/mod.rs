//! Simulation engine: the tick-driven state machine behind a run of Battle Bikes.
//!
//! The engine knows nothing about Bevy scheduling. The host feeds it three
//! things: direction input, elapsed time ([`Engine::advance_clock`]) and tick
//! signals at [`Engine::tick_interval`]. It reads results back through
//! [`Engine::snapshot`].

mod effects;
mod trail;

pub use effects::{ActivationToken, Effect, ExpiryScheduler, StatusEffects};
pub use trail::{CornerShape, TrailGlyph, TrailSegment};

use rand::prelude::*;
use std::{collections::VecDeque, time::Duration};
use tracing::{debug, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::food::{Food, FoodKind, spawn_food};
use crate::game::{
    COUNTDOWN_GO, COUNTDOWN_STEP, COUNTDOWN_STEPS, Cell, Direction, EFFECT_DURATION, INITIAL_BIKE,
    INITIAL_DIRECTION, SPEED_BOOST_FACTOR,
};

/// Run phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown before the bike starts moving.
    Starting,
    Running,
    Paused,
    /// Terminal until restarted.
    GameOver,
}

/// What the bike ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Bike,
}

/// Result of a single [`Engine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Idle,
    Moved,
    Ate(Food),
    Crashed(Collision),
}

/// What happened while the clock moved forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockReport {
    /// The countdown finished during this advance.
    pub started: bool,
    pub expired: Vec<Effect>,
}

/// One step of the pre-run countdown, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    Number(u32),
    Go,
}

/// Read-only copy of the run state for renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub grid_width: i32,
    pub grid_height: i32,
    pub phase: Phase,
    /// Remaining countdown while `Starting`.
    pub countdown: Option<Duration>,
    /// Head first.
    pub bike: Vec<Cell>,
    pub direction: Direction,
    /// Newest first; `trail[i]` sits on `bike[i + 1]`.
    pub trail: Vec<TrailSegment>,
    pub food: Food,
    pub score: u32,
    pub speed_boost: Option<Duration>,
    pub invincibility: Option<Duration>,
    pub tick_interval: Duration,
}

impl WorldSnapshot {
    pub fn head(&self) -> Cell {
        self.bike[0]
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn countdown_step(&self) -> Option<CountdownStep> {
        let remaining = self.countdown?;
        if remaining <= COUNTDOWN_GO {
            return Some(CountdownStep::Go);
        }
        let step_ms = COUNTDOWN_STEP.as_millis();
        let left_ms = (remaining - COUNTDOWN_GO).as_millis();
        Some(CountdownStep::Number(left_ms.div_ceil(step_ms) as u32))
    }
}

/// The Battle Bikes simulation.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
    phase: Phase,
    countdown: Duration,
    bike: VecDeque<Cell>,
    trail: VecDeque<TrailSegment>,
    direction: Direction,
    pending_direction: Direction,
    food: Food,
    score: u32,
    effects: StatusEffects,
    ticks: u64,
}

impl Engine {
    /// Creates an engine seeded from `config.seed`, or from the OS when unset.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Engine {
            config,
            rng,
            phase: Phase::Starting,
            countdown: Duration::ZERO,
            bike: VecDeque::new(),
            trail: VecDeque::new(),
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            // Overwritten by reset_run
            food: Food {
                cell: Cell::new(0, 0),
                kind: FoodKind::Common,
            },
            score: 0,
            effects: StatusEffects::new(EFFECT_DURATION),
            ticks: 0,
        };
        engine.reset_run();
        Ok(engine)
    }

    /// Replaces the whole run state with a fresh one in the `Starting` phase.
    /// Pending effect expiries go with it.
    fn reset_run(&mut self) {
        self.phase = Phase::Starting;
        self.countdown = COUNTDOWN_STEP * COUNTDOWN_STEPS + COUNTDOWN_GO;
        self.bike = INITIAL_BIKE.into_iter().collect();
        self.trail = INITIAL_BIKE
            .iter()
            .skip(1)
            .map(|&cell| TrailSegment::straight(cell, INITIAL_DIRECTION))
            .collect();
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = INITIAL_DIRECTION;
        self.score = 0;
        self.effects = StatusEffects::new(EFFECT_DURATION);
        self.ticks = 0;
        self.respawn_food();
    }

    fn respawn_food(&mut self) {
        let bike = &self.bike;
        self.food = spawn_food(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            |cell| bike.contains(cell),
        );
        trace!(food = ?self.food, "food spawned");
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Cell {
        self.bike[0]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Food {
        self.food
    }

    /// Number of ticks applied since the run began.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_active(&self, effect: Effect) -> bool {
        self.effects.is_active(effect)
    }

    /// Current effective tick interval: the base interval, or 85% of it
    /// (rounded to whole milliseconds) while the speed boost is active.
    pub fn tick_interval(&self) -> Duration {
        if self.effects.is_active(Effect::SpeedBoost) {
            let base_ms = self.config.base_tick.as_millis() as f64;
            Duration::from_millis((base_ms * SPEED_BOOST_FACTOR).round() as u64)
        } else {
            self.config.base_tick
        }
    }

    /// Queues a heading for the next tick. Reversals of the current heading are
    /// rejected, and input is dropped while paused or after game over.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if matches!(self.phase, Phase::Paused | Phase::GameOver) {
            return false;
        }
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Advances engine time. Runs the countdown and fires effect expiries;
    /// expiries keep firing while paused.
    pub fn advance_clock(&mut self, dt: Duration) -> ClockReport {
        let expired = self.effects.advance(dt);
        for effect in &expired {
            debug!(?effect, "effect ended");
        }

        let mut started = false;
        if self.phase == Phase::Starting {
            self.countdown = self.countdown.saturating_sub(dt);
            if self.countdown.is_zero() {
                self.phase = Phase::Running;
                started = true;
                debug!("run started");
            }
        }

        ClockReport { started, expired }
    }

    /// Advances the bike one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }
        self.ticks += 1;

        let previous = self.direction;
        self.direction = self.pending_direction;

        let old_head = self.head();
        let new_head = old_head.step(self.direction);

        if !new_head.is_within(self.config.grid_width, self.config.grid_height) {
            return self.crash(Collision::Wall);
        }
        if !self.effects.is_active(Effect::Invincibility) && self.bike.contains(&new_head) {
            return self.crash(Collision::Bike);
        }

        self.bike.push_front(new_head);

        let last_laid = self.trail.front().map_or(previous, |segment| segment.direction);
        let segment = if self.direction != last_laid {
            TrailSegment::corner(old_head, last_laid, self.direction)
        } else {
            TrailSegment::straight(old_head, self.direction)
        };
        self.trail.push_front(segment);

        if new_head == self.food.cell {
            let food = self.food;
            self.eat(food);
            self.respawn_food();
            TickOutcome::Ate(food)
        } else {
            self.bike.pop_back();
            self.trail.pop_back();
            trace!(head = ?new_head, "moved");
            TickOutcome::Moved
        }
    }

    fn eat(&mut self, food: Food) {
        self.score += food.kind.score();
        match food.kind {
            FoodKind::Common => {}
            FoodKind::Speed => {
                if self.effects.activate_speed_boost() {
                    debug!(interval = ?self.tick_interval(), "speed boost started");
                }
            }
            FoodKind::Invincibility => {
                self.effects.arm_invincibility();
                debug!("invincibility armed");
            }
        }
        debug!(kind = ?food.kind, score = self.score, "food eaten");
    }

    fn crash(&mut self, collision: Collision) -> TickOutcome {
        self.phase = Phase::GameOver;
        debug!(?collision, score = self.score, "game over");
        TickOutcome::Crashed(collision)
    }

    /// Flips between `Running` and `Paused`; ignored in other phases.
    pub fn toggle_pause(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
        self.phase
    }

    /// Starts a fresh run after game over. Returns whether a restart happened.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.reset_run();
        debug!("run restarted");
        true
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
            phase: self.phase,
            countdown: (self.phase == Phase::Starting).then_some(self.countdown),
            bike: self.bike.iter().copied().collect(),
            direction: self.direction,
            trail: self.trail.iter().copied().collect(),
            food: self.food,
            score: self.score,
            speed_boost: self.effects.remaining(Effect::SpeedBoost),
            invincibility: self.effects.remaining(Effect::Invincibility),
            tick_interval: self.tick_interval(),
        }
    }
}
