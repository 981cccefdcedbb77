//! The live session.

use tracing::{debug, info};

use super::snapshot::{PlayerView, StateSnapshot};
use crate::board::Board;
use crate::core::{Coord, GameConfig, GameError, Result};
use crate::history::{History, MoveRecord};
use crate::resolve::{self, WaveList};
use crate::rules::{GameStatus, TurnManager};

/// One game in progress.
///
/// ## Example
///
/// ```
/// use chain_reaction::core::{Coord, GameConfig, SizeClass};
/// use chain_reaction::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::new(SizeClass::Compact)).unwrap();
///
/// let waves = session.place(Coord::new(0, 0)).unwrap();
/// assert!(waves.is_empty());
///
/// let state = session.query_state();
/// assert_eq!(state.move_number, 1);
/// assert_eq!(state.current_player().map(|p| p.index()), Some(1));
///
/// session.undo().unwrap();
/// assert_eq!(session.query_state().move_number, 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    turns: TurnManager,
    history: History,
}

impl GameSession {
    /// Start a session with `config`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Build a session from an already validated config.
    fn fresh(config: GameConfig) -> Self {
        debug!(
            size = %config.size,
            players = config.player_count,
            "new game"
        );
        Self {
            config,
            board: Board::new(config.size.width(), config.size.height()),
            turns: TurnManager::new(config.player_count),
            history: History::new(),
        }
    }

    /// Throw away the current game and start a new one.
    ///
    /// An invalid `config` is rejected and the current game carries on.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            debug!(%err, "new game rejected");
            return Err(err.into());
        }
        *self = Self::fresh(config);
        Ok(())
    }

    /// [`new_game`](Self::new_game) with a size class name such as
    /// `"compact"` or `"extended"`.
    pub fn new_game_from_str(&mut self, size: &str, player_count: usize) -> Result<()> {
        let config = match GameConfig::parse(size, player_count) {
            Ok(config) => config,
            Err(err) => {
                debug!(%err, "new game rejected");
                return Err(err.into());
            }
        };
        self.new_game(config)
    }

    /// The current player drops a marker at `coord`.
    ///
    /// Returns the waves of the resulting chain reaction, empty if nothing
    /// exploded. The cascade runs until the board settles; a cascade that
    /// would loop forever stops at its first repeated board, which by then
    /// belongs entirely to the mover.
    pub fn place(&mut self, coord: impl Into<Coord>) -> Result<WaveList> {
        let coord = coord.into();
        let player = match self.turns.status() {
            GameStatus::Active(player) => player,
            GameStatus::Ended(winner) => {
                debug!(%coord, %winner, "placement after game over");
                return Err(GameError::GameOver { winner });
            }
        };

        if let Err(err) = resolve::check_placement(&self.board, player, coord) {
            debug!(%player, %err, "placement rejected");
            return Err(err);
        }

        let record = MoveRecord {
            board: self.board.clone(),
            turns: self.turns.clone(),
        };
        let waves = resolve::place(&mut self.board, player, coord)?;

        self.history.push(record);
        self.turns.record_move(player);
        let outcome = self.turns.settle(&self.board);

        debug!(
            %player,
            %coord,
            waves = waves.len(),
            move_number = self.turns.move_number(),
            "placement resolved"
        );
        for eliminated in &outcome.eliminated {
            debug!(player = %eliminated, by = %player, "player eliminated");
        }
        if let GameStatus::Ended(winner) = outcome.status {
            info!(%winner, moves = self.turns.move_number(), "game over");
        }

        Ok(waves)
    }

    /// Roll back the most recent placement, eliminations included.
    pub fn undo(&mut self) -> Result<StateSnapshot> {
        let Some(record) = self.history.pop() else {
            debug!("nothing to undo");
            return Err(GameError::NothingToUndo);
        };
        self.board = record.board;
        self.turns = record.turns;

        debug!(
            move_number = self.turns.move_number(),
            remaining = self.history.len(),
            "move undone"
        );
        Ok(self.query_state())
    }

    /// Snapshot of the current game.
    #[must_use]
    pub fn query_state(&self) -> StateSnapshot {
        let totals = self.board.marker_totals(self.turns.player_count());
        let players = self
            .turns
            .players()
            .map(|(id, status)| PlayerView {
                id,
                active: status.active,
                has_moved: status.has_moved,
                markers: totals[id],
            })
            .collect();

        StateSnapshot {
            config: self.config,
            board: self.board.clone(),
            status: self.turns.status(),
            active_players: self.turns.active_players(),
            players,
            move_number: self.turns.move_number(),
        }
    }

    /// Cells the current player may place into; empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        let Some(player) = self.turns.current() else {
            return Vec::new();
        };
        self.board
            .cells()
            .filter(|(_, cell)| !cell.is_held_against(player))
            .map(|(coord, _)| coord)
            .collect()
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.turns.status()
    }

    #[must_use]
    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    /// Placements that can still be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for GameSession {
    /// Two players on the compact board.
    fn default() -> Self {
        Self::fresh(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, IllegalMoveReason, PlayerId, SizeClass};

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(GameConfig::new(SizeClass::Extended).with_players(4)).unwrap();
        let state = session.query_state();

        assert_eq!((state.board.width(), state.board.height()), (10, 18));
        assert_eq!(state.status, GameStatus::Active(p(0)));
        assert_eq!(state.active_players.len(), 4);
        assert_eq!(state.players.len(), 4);
        assert_eq!(state.move_number, 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let err = GameSession::new(GameConfig::default().with_players(1)).unwrap_err();
        assert_eq!(err, GameError::InvalidConfiguration(ConfigError::PlayerCount(1)));
    }

    #[test]
    fn test_rejected_new_game_keeps_state() {
        let mut session = GameSession::default();
        session.place((3, 3)).unwrap();
        let before = session.query_state();

        assert!(session.new_game_from_str("gigantic", 2).is_err());
        assert!(session.new_game(GameConfig::default().with_players(12)).is_err());

        assert_eq!(session.query_state(), before);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut session = GameSession::default();
        session.place((0, 0)).unwrap();
        session.place((5, 5)).unwrap();

        session.new_game_from_str("extended", 3).unwrap();

        let state = session.query_state();
        assert_eq!(state.board.total_markers(), 0);
        assert_eq!(state.config.size, SizeClass::Extended);
        assert_eq!(state.status, GameStatus::Active(p(0)));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_rejected_placement_keeps_state() {
        let mut session = GameSession::default();
        session.place((0, 0)).unwrap();
        let before = session.query_state();

        let err = session.place((0, 0)).unwrap_err();
        assert_eq!(err, GameError::IllegalMove {
            coord: Coord::new(0, 0),
            reason: IllegalMoveReason::OccupiedBy(p(0)),
        });

        let err = session.place((11, 0)).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { .. }));

        assert_eq!(session.query_state(), before);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_legal_moves() {
        let mut session = GameSession::new(GameConfig::custom(3, 3)).unwrap();
        assert_eq!(session.legal_moves().len(), 9);

        session.place((1, 1)).unwrap();
        let moves = session.legal_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_player_views_track_markers() {
        let mut session = GameSession::new(GameConfig::custom(4, 4).with_players(3)).unwrap();
        session.place((0, 0)).unwrap();
        session.place((3, 3)).unwrap();

        let state = session.query_state();
        assert_eq!(state.players[0].markers, 1);
        assert_eq!(state.players[1].markers, 1);
        assert_eq!(state.players[2], PlayerView {
            id: p(2),
            active: true,
            has_moved: false,
            markers: 0,
        });
    }
}
