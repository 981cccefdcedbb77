//! Core engine types: players, coordinates, configuration, errors.
//!
//! Everything above the board model builds on these. Nothing here knows
//! about cascades or turn order.

pub mod player;
pub mod coord;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use coord::Coord;
pub use config::{
    GameConfig, SizeClass, MAX_DIMENSION, MAX_PLAYERS, MIN_DIMENSION, MIN_PLAYERS,
};
pub use error::{ConfigError, GameError, IllegalMoveReason, Result};
