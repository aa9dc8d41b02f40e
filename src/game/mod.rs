//! Core game module containing shared grid types, resources, events, and constants.

mod constants;
mod events;
mod grid;
mod resources;

pub use constants::*;
pub use events::*;
pub use grid::*;
pub use resources::*;
