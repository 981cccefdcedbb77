//! Chain reaction resolver.
//!
//! Placing a marker may push a cell to capacity. The resolver then runs
//! the board to a fixed point in synchronized waves:
//!
//! 1. Collect every critical cell (`count >= capacity`).
//! 2. Explode them all at once: each sheds `capacity` markers, one to each
//!    neighbor, and every neighbor is captured by the exploding player.
//! 3. Re-check the updated board and repeat until nothing is critical.
//!
//! Not every board settles. Once a wave reproduces a board seen earlier in
//! the same cascade the loop is proven endless and resolution stops there,
//! leaving critical cells in place (see [`Cascade::cycled`]).
//!
//! Each wave is recorded with its exploded cells (and their pre-explosion
//! counts) and a snapshot of the board after the wave, which is what a
//! front end needs to animate markers flying outward one wave at a time.
//!
//! ## Example
//!
//! ```
//! use chain_reaction::board::Board;
//! use chain_reaction::core::{Coord, PlayerId};
//! use chain_reaction::resolve;
//!
//! let mut board = Board::new(6, 11);
//! let a = PlayerId::new(0);
//!
//! assert!(resolve::place(&mut board, a, Coord::new(0, 0)).unwrap().is_empty());
//! let waves = resolve::place(&mut board, a, Coord::new(0, 0)).unwrap();
//!
//! assert_eq!(waves.len(), 1);
//! assert_eq!(board.markers_owned_by(a), 2);
//! assert_eq!(board.cell(Coord::new(0, 0)).count(), 0);
//! ```

mod cascade;
mod wave;

pub use cascade::Cascade;
pub use wave::{Explosion, Wave, WaveList};

use crate::board::Board;
use crate::core::{Coord, GameError, IllegalMoveReason, PlayerId, Result};

/// Check that `player` may drop a marker at `coord`.
///
/// Empty cells and the player's own cells are always open; cells held by
/// anyone else are not.
pub fn check_placement(board: &Board, player: PlayerId, coord: Coord) -> Result<()> {
    if !board.contains(coord) {
        return Err(GameError::IllegalMove {
            coord,
            reason: IllegalMoveReason::OutOfBounds {
                width: board.width(),
                height: board.height(),
            },
        });
    }
    match board.cell(coord).owner() {
        Some(owner) if owner != player => Err(GameError::IllegalMove {
            coord,
            reason: IllegalMoveReason::OccupiedBy(owner),
        }),
        _ => Ok(()),
    }
}

/// Drop one marker for `player` at `coord` and [`resolve`] the board.
///
/// On error the board is untouched.
pub fn place(board: &mut Board, player: PlayerId, coord: Coord) -> Result<WaveList> {
    check_placement(board, player, coord)?;
    board.receive(coord, player);
    Ok(resolve(board))
}

/// Resolve every critical cell until the board is stable or a wave
/// repeats an earlier board.
///
/// Staying within [`Board::stable_limit`] markers is necessary for the
/// board to settle but not sufficient: a board at or under the limit can
/// still cycle forever. Such cascades end at the first repeated board.
pub fn resolve(board: &mut Board) -> WaveList {
    Cascade::new(board).collect()
}
