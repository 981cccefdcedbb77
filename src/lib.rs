//! # chain-reaction
//!
//! Rules engine for Chain Reaction: players take turns dropping markers
//! onto a grid, a cell that reaches its capacity explodes into its
//! neighbors and captures them, and explosions cascade until the board
//! settles (or provably never will). The last player holding markers wins.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same moves always give the same waves, in the
//!    same order.
//!
//! 2. **Structured output**: a placement returns every wave of the
//!    cascade with a board snapshot, so a front end never re-derives rules.
//!
//! 3. **Transactional commands**: a rejected command changes nothing.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: boards are `im` vectors, so per-wave
//!   snapshots and the undo stack share structure instead of copying.
//!
//! - **No global state**: a `GameSession` is an ordinary value.
//!
//! ## Modules
//!
//! - `core`: Player IDs, coordinates, configuration, errors
//! - `board`: Cells, capacities, adjacency
//! - `resolve`: The wave-by-wave chain reaction resolver
//! - `rules`: Turn order, elimination, win detection
//! - `history`: Undo stack
//! - `session`: Command surface and read models

pub mod core;
pub mod board;
pub mod resolve;
pub mod rules;
pub mod history;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Coord,
    GameConfig, SizeClass,
    GameError, ConfigError, IllegalMoveReason, Result,
};

pub use crate::board::{Board, BoardError, Cell};

pub use crate::resolve::{Cascade, Explosion, Wave, WaveList};

pub use crate::rules::{GameStatus, PlayerStatus, TurnManager, TurnOutcome};

pub use crate::history::{History, MoveRecord};

pub use crate::session::{GameSession, PlayerView, StateSnapshot};
