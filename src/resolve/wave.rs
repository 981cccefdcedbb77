//! Wave records produced by the resolver.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Coord, PlayerId};

/// One cell going off inside a wave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explosion {
    /// Where it happened.
    pub coord: Coord,
    /// Markers in the cell just before it went off.
    pub count: u32,
    /// Player whose markers were scattered.
    pub owner: PlayerId,
}

/// Cells that exploded together, and the board once they had.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wave {
    /// Exploded cells, row-major.
    pub explosions: Vec<Explosion>,
    /// Board immediately after every explosion in this wave was applied.
    pub board: Board,
}

/// Every wave triggered by one placement, in order. Empty when the
/// placement set nothing off.
pub type WaveList = Vec<Wave>;

impl Wave {
    /// Coordinates that exploded.
    pub fn exploded(&self) -> impl Iterator<Item = Coord> + '_ {
        self.explosions.iter().map(|explosion| explosion.coord)
    }

    /// Number of cells that exploded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.explosions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explosions.is_empty()
    }

    /// Every marker that moved in this wave, as `(from, to)` pairs.
    pub fn flights(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.exploded().flat_map(move |from| {
            self.board
                .neighbors(from)
                .into_iter()
                .map(move |to| (from, to))
        })
    }
}
