//! Battle Bikes: a grid snake variant where the bike leaves a trail behind it.
//!
//! [`engine`] holds the deterministic simulation. The Bevy plugins in [`bike`],
//! [`rendering`] and [`ui`] drive and draw it.

pub mod bike;
pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod rendering;
pub mod ui;

pub use config::{BikeColor, ConfigError, EngineConfig, Settings};
pub use engine::{Engine, Phase, TickOutcome, WorldSnapshot};
