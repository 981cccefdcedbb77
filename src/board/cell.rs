//! A single grid position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;

/// Markers resting in one cell and who holds them.
///
/// Invariant: `owner.is_none() == (count == 0)`. All mutation goes through
/// methods that keep the two fields in step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CellRepr")]
pub struct Cell {
    count: u32,
    owner: Option<PlayerId>,
}

/// A decoded cell whose owner and count disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell with {count} markers cannot have owner {owner:?}")]
pub struct InconsistentCell {
    pub count: u32,
    pub owner: Option<PlayerId>,
}

#[derive(Deserialize)]
struct CellRepr {
    count: u32,
    owner: Option<PlayerId>,
}

impl TryFrom<CellRepr> for Cell {
    type Error = InconsistentCell;

    fn try_from(CellRepr { count, owner }: CellRepr) -> Result<Self, Self::Error> {
        let cell = Cell { count, owner };
        if cell.is_consistent() {
            Ok(cell)
        } else {
            Err(InconsistentCell { count, owner })
        }
    }
}

impl Cell {
    /// An empty, unowned cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            count: 0,
            owner: None,
        }
    }

    /// A cell holding `count` markers for `owner`. A zero count yields an
    /// empty cell regardless of `owner`.
    #[must_use]
    pub const fn occupied(count: u32, owner: PlayerId) -> Self {
        if count == 0 {
            Self::empty()
        } else {
            Self {
                count,
                owner: Some(owner),
            }
        }
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// True when the cell is held by a player other than `player`.
    #[must_use]
    pub fn is_held_against(&self, player: PlayerId) -> bool {
        matches!(self.owner, Some(owner) if owner != player)
    }

    /// True when the cell has reached `capacity` and must explode.
    #[must_use]
    pub const fn is_critical(&self, capacity: u32) -> bool {
        self.count >= capacity
    }

    /// Markers held beyond `capacity`.
    #[must_use]
    pub const fn excess(&self, capacity: u32) -> u32 {
        self.count.saturating_sub(capacity)
    }

    /// Drop one marker in and hand the cell to `player`.
    pub(crate) fn receive(&mut self, player: PlayerId) {
        self.count += 1;
        self.owner = Some(player);
    }

    /// Remove `capacity` markers. Residual markers stay with the current
    /// owner; an emptied cell becomes unowned.
    pub(crate) fn discharge(&mut self, capacity: u32) {
        debug_assert!(self.count >= capacity, "discharging a non-critical cell");
        self.count -= capacity;
        if self.count == 0 {
            self.owner = None;
        }
    }

    /// Check the owner/count invariant (used when decoding boards).
    #[must_use]
    pub(crate) const fn is_consistent(&self) -> bool {
        self.owner.is_none() == (self.count == 0)
    }
}
