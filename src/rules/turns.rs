//! Turn manager.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, PlayerMap};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    /// Waiting for this player to place.
    Active(PlayerId),
    /// Only this player is left.
    Ended(PlayerId),
}

impl GameStatus {
    /// Player to move, if the game is still on.
    #[must_use]
    pub fn current(self) -> Option<PlayerId> {
        match self {
            GameStatus::Active(player) => Some(player),
            GameStatus::Ended(_) => None,
        }
    }

    /// Winner, once the game is over.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Active(_) => None,
            GameStatus::Ended(player) => Some(player),
        }
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

/// Per-player bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Still in the turn rotation.
    pub active: bool,
    /// Has made at least one placement.
    pub has_moved: bool,
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self {
            active: true,
            has_moved: false,
        }
    }
}

/// What changed when a move was settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Players knocked out by this move, in turn order.
    pub eliminated: Vec<PlayerId>,
    /// Status after the move.
    pub status: GameStatus,
}

/// Tracks the rotation, eliminations, and the move counter.
///
/// ## Example
///
/// ```
/// use chain_reaction::board::Board;
/// use chain_reaction::core::{Coord, PlayerId};
/// use chain_reaction::rules::{GameStatus, TurnManager};
///
/// let mut board = Board::new(3, 3);
/// let mut turns = TurnManager::new(2);
/// let a = PlayerId::new(0);
///
/// chain_reaction::resolve::place(&mut board, a, Coord::new(1, 1)).unwrap();
/// turns.record_move(a);
/// let outcome = turns.settle(&board);
///
/// assert_eq!(outcome.status, GameStatus::Active(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnManager {
    players: PlayerMap<PlayerStatus>,
    status: GameStatus,
    move_number: u32,
}

impl TurnManager {
    /// Seat `player_count` players with player 0 to move.
    ///
    /// # Panics
    ///
    /// If `player_count` is zero or above `MAX_PLAYERS`.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerMap::with_default(player_count),
            status: GameStatus::Active(PlayerId::new(0)),
            move_number: 0,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player to move, `None` once the game has ended.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.status.current()
    }

    /// Completed placements since the game started.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> PlayerStatus {
        self.players[player]
    }

    /// All players with their status, in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, PlayerStatus)> + '_ {
        self.players.iter().map(|(player, status)| (player, *status))
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.players.contains(player) && self.players[player].active
    }

    /// Players still in the rotation, in turn order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, status)| status.active)
            .map(|(player, _)| player)
            .collect()
    }

    /// Note that `player` has placed a marker.
    pub fn record_move(&mut self, player: PlayerId) {
        self.players[player].has_moved = true;
        self.move_number += 1;
    }

    /// Players who would be knocked out on `board`: active, have moved,
    /// and hold no markers.
    #[must_use]
    pub fn wiped_out(&self, board: &Board) -> Vec<PlayerId> {
        let totals = board.marker_totals(self.player_count());
        self.players
            .iter()
            .filter(|(player, status)| status.active && status.has_moved && totals[*player] == 0)
            .map(|(player, _)| player)
            .collect()
    }

    /// Apply eliminations for `board`, then either end the game or pass
    /// the turn to the next active player.
    pub fn settle(&mut self, board: &Board) -> TurnOutcome {
        let eliminated = self.wiped_out(board);
        for &player in &eliminated {
            self.players[player].active = false;
        }

        let active = self.active_players();
        self.status = match (active.as_slice(), self.status) {
            ([winner], _) => GameStatus::Ended(*winner),
            (_, GameStatus::Active(mover)) => GameStatus::Active(self.next_after(mover)),
            (_, ended) => ended,
        };

        TurnOutcome {
            eliminated,
            status: self.status,
        }
    }

    /// Next active player after `player`, wrapping around.
    fn next_after(&self, player: PlayerId) -> PlayerId {
        let count = self.player_count();
        (1..=count)
            .map(|step| PlayerId::new(((player.index() + step) % count) as u8))
            .find(|&next| self.players[next].active)
            .unwrap_or(player)
    }
}
