//! Error taxonomy for the command surface.
//!
//! Every error is a clean rejection: the session is left exactly as it was
//! before the call.

use super::coord::Coord;
use super::player::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// Rejected command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("illegal move at {coord}: {reason}")]
    IllegalMove {
        coord: Coord,
        reason: IllegalMoveReason,
    },

    #[error("game over: {winner} has won")]
    GameOver { winner: PlayerId },

    #[error("nothing to undo")]
    NothingToUndo,
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveReason {
    #[error("outside the {width}x{height} board")]
    OutOfBounds { width: usize, height: usize },

    #[error("cell is held by {0}")]
    OccupiedBy(PlayerId),
}

/// Bad new-game parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("player count {0} is outside the supported range 2-8")]
    PlayerCount(usize),

    #[error("unknown board size class '{0}'")]
    UnknownSizeClass(String),

    #[error("board dimensions {width}x{height} are outside the supported range 3-64")]
    Dimensions { width: usize, height: usize },
}
