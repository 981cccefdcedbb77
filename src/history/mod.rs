//! Undo history.
//!
//! Before every accepted placement the session pushes a `MoveRecord`
//! holding the whole pre-move state. `undo` pops it back. There is no redo.
//!
//! Records share structure with the live board through `im`, so a deep
//! history costs little more than the cells that actually changed.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::TurnManager;

/// Full session state captured just before a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: Board,
    /// Turn pointer, active set, and move counter.
    pub turns: TurnManager,
}

/// LIFO stack of move records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vector<MoveRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Remove and return the most recent record.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Most recent record, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
