//! Session bindings for Python.

use pyo3::prelude::*;

use crate::core::Coord;
use crate::session::GameSession;

use super::py_core::PyPlayerId;
use super::{to_json, to_py_err};

/// One chain reaction game.
#[pyclass(name = "ChainReaction")]
pub struct PyChainReaction {
    session: GameSession,
}

#[pymethods]
impl PyChainReaction {
    /// Start a game.
    ///
    /// # Arguments
    /// - size: "compact" (6x11) or "extended" (10x18)
    /// - players: Number of players (2-8)
    #[new]
    #[pyo3(signature = (size = "compact", players = 2))]
    fn new(size: &str, players: usize) -> PyResult<Self> {
        let mut session = GameSession::default();
        session.new_game_from_str(size, players).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Replace the current game with a new one.
    fn new_game(&mut self, size: &str, players: usize) -> PyResult<()> {
        self.session.new_game_from_str(size, players).map_err(to_py_err)
    }

    /// Place a marker for the current player.
    ///
    /// Returns the wave list as JSON (`[]` when nothing exploded).
    fn place(&mut self, row: usize, column: usize) -> PyResult<String> {
        let waves = self
            .session
            .place(Coord::new(row, column))
            .map_err(to_py_err)?;
        to_json(&waves)
    }

    /// Undo the last placement. Returns the restored state as JSON.
    fn undo(&mut self) -> PyResult<String> {
        let state = self.session.undo().map_err(to_py_err)?;
        to_json(&state)
    }

    /// Current state as JSON.
    fn state(&self) -> PyResult<String> {
        to_json(&self.session.query_state())
    }

    /// Cells the current player may place into, as (row, column) pairs.
    fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.session
            .legal_moves()
            .into_iter()
            .map(|coord| (coord.row, coord.col))
            .collect()
    }

    fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[getter]
    fn current_player(&self) -> Option<PyPlayerId> {
        self.session.status().current().map(PyPlayerId)
    }

    #[getter]
    fn winner(&self) -> Option<PyPlayerId> {
        self.session.status().winner().map(PyPlayerId)
    }

    #[getter]
    fn move_number(&self) -> u32 {
        self.session.turns().move_number()
    }

    fn __repr__(&self) -> String {
        let config = self.session.config();
        let status = match self.session.status().winner() {
            Some(winner) => format!("won by P{}", winner.0),
            None => "ongoing".to_string(),
        };
        format!(
            "ChainReaction(size={}, players={}, move={}, status={})",
            config.size,
            config.player_count,
            self.session.turns().move_number(),
            status
        )
    }
}
