//! Read model handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameConfig, PlayerId};
use crate::rules::GameStatus;

/// One player's standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    /// Still in the turn rotation.
    pub active: bool,
    /// Has placed at least once.
    pub has_moved: bool,
    /// Markers currently held.
    pub markers: u32,
}

/// Everything needed to draw the game, detached from the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub config: GameConfig,
    pub board: Board,
    pub status: GameStatus,
    /// Players still in the rotation, in turn order.
    pub active_players: Vec<PlayerId>,
    /// Every seated player, in turn order.
    pub players: Vec<PlayerView>,
    /// Completed placements since the game started.
    pub move_number: u32,
}

impl StateSnapshot {
    /// Player to move, `None` once the game has ended.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.status.current()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.status.winner()
    }
}
