//! Wave-by-wave cascade iterator.

use std::iter::FusedIterator;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::wave::{Explosion, Wave};
use crate::board::Board;

/// Resolves a board one wave at a time.
///
/// Each call to `next` snapshots every critical cell, then explodes them
/// all: each loses `capacity` markers (residuals stay) and each neighbor
/// gains one marker and changes hands to the exploding cell's owner. Cells
/// pushed over capacity during a wave wait for the next one.
///
/// Iteration ends once the board is stable, or once a wave leaves the board
/// in a state it already passed through. Waves are a pure function of the
/// board, so a repeated state means the cascade would loop forever; the
/// board is left where the loop closes and [`Cascade::cycled`] reports it.
///
/// Markers are only moved, never created or destroyed.
#[derive(Debug)]
pub struct Cascade<'a> {
    board: &'a mut Board,
    markers: u32,
    waves: usize,
    seen: FxHashSet<Board>,
    cycled: bool,
}

impl<'a> Cascade<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        let markers = board.total_markers();
        let mut seen = FxHashSet::default();
        seen.insert(board.clone());
        Self {
            board,
            markers,
            waves: 0,
            seen,
            cycled: false,
        }
    }

    /// Board as it stands after the waves produced so far.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Waves produced so far.
    #[must_use]
    pub fn waves(&self) -> usize {
        self.waves
    }

    /// True once the cascade has been cut off at a repeated board. The
    /// board then never settles and still holds critical cells.
    #[must_use]
    pub fn cycled(&self) -> bool {
        self.cycled
    }
}

impl Iterator for Cascade<'_> {
    type Item = Wave;

    fn next(&mut self) -> Option<Wave> {
        if self.cycled {
            return None;
        }

        let explosions: Vec<Explosion> = self
            .board
            .critical_cells()
            .into_iter()
            .filter_map(|coord| {
                let cell = self.board.cell(coord);
                cell.owner().map(|owner| Explosion {
                    coord,
                    count: cell.count(),
                    owner,
                })
            })
            .collect();

        if explosions.is_empty() {
            return None;
        }

        for explosion in &explosions {
            self.board.discharge(explosion.coord);
            for neighbor in self.board.neighbors(explosion.coord) {
                self.board.receive(neighbor, explosion.owner);
            }
        }

        debug_assert_eq!(
            self.board.total_markers(),
            self.markers,
            "cascade created or destroyed markers"
        );

        self.waves += 1;
        trace!(
            wave = self.waves,
            exploded = explosions.len(),
            excess = self.board.excess(),
            "wave resolved"
        );

        if !self.seen.insert(self.board.clone()) {
            self.cycled = true;
            debug!(
                waves = self.waves,
                markers = self.markers,
                "cascade revisited a board, stopping"
            );
        }

        Some(Wave {
            explosions,
            board: self.board.clone(),
        })
    }
}

impl FusedIterator for Cascade<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::core::{Coord, PlayerId};

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    #[test]
    fn test_stable_board_yields_nothing() {
        let mut board = Board::new(3, 3);
        board.set_cell(Coord::new(1, 1), Cell::occupied(3, p(0)));

        let mut cascade = Cascade::new(&mut board);
        assert!(cascade.next().is_none());
        assert!(cascade.next().is_none());
        assert_eq!(cascade.waves(), 0);
    }

    #[test]
    fn test_simultaneous_cells_share_a_wave() {
        let mut board = Board::new(3, 3);
        board.set_cell(Coord::new(0, 0), Cell::occupied(2, p(0)));
        board.set_cell(Coord::new(2, 2), Cell::occupied(2, p(0)));

        let waves: Vec<_> = Cascade::new(&mut board).collect();

        assert_eq!(waves.len(), 1);
        let exploded: Vec<_> = waves[0].exploded().collect();
        assert_eq!(exploded, vec![Coord::new(0, 0), Coord::new(2, 2)]);
        assert_eq!(waves[0].flights().count(), 4);
    }

    #[test]
    fn test_residual_markers_stay_until_next_wave() {
        // Two exploding corners feed the same edge cell in one wave: it
        // climbs from 2 to 4 and only goes off in the following wave,
        // keeping one residual marker.
        let mut board = Board::new(3, 3);
        board.set_cell(Coord::new(0, 0), Cell::occupied(2, p(0)));
        board.set_cell(Coord::new(0, 2), Cell::occupied(2, p(0)));
        board.set_cell(Coord::new(0, 1), Cell::occupied(2, p(1)));

        let mut cascade = Cascade::new(&mut board);
        let first = cascade.next().unwrap();
        assert_eq!(first.board.cell(Coord::new(0, 1)), Cell::occupied(4, p(0)));

        let second = cascade.next().unwrap();
        assert_eq!(second.explosions, vec![Explosion {
            coord: Coord::new(0, 1),
            count: 4,
            owner: p(0),
        }]);
        assert_eq!(second.board.cell(Coord::new(0, 1)), Cell::occupied(1, p(0)));
    }

    #[test]
    fn test_conserves_markers() {
        let mut board = Board::new(4, 4);
        board.set_cell(Coord::new(1, 1), Cell::occupied(4, p(0)));
        board.set_cell(Coord::new(1, 2), Cell::occupied(3, p(1)));
        board.set_cell(Coord::new(2, 1), Cell::occupied(3, p(1)));
        let before = board.total_markers();

        let count = Cascade::new(&mut board).count();

        assert!(count > 1);
        assert_eq!(board.total_markers(), before);
        assert!(board.is_stable());
    }

    #[test]
    fn test_settling_cascade_is_not_cycled() {
        let mut board = Board::new(3, 3);
        board.set_cell(Coord::new(0, 0), Cell::occupied(2, p(0)));

        let mut cascade = Cascade::new(&mut board);
        assert_eq!(cascade.by_ref().count(), 1);
        assert!(!cascade.cycled());
        assert!(cascade.board().is_stable());
    }

    #[test]
    fn test_overfull_board_stops_at_a_repeat() {
        // One marker past every cell's resting maximum: no stable board
        // exists, so the only way out is the repeat check.
        let mut board = Board::new(3, 3);
        for coord in board.coords().collect::<Vec<_>>() {
            let capacity = board.capacity(coord);
            board.set_cell(coord, Cell::occupied(capacity - 1, p(0)));
        }
        board.set_cell(Coord::new(1, 1), Cell::occupied(4, p(0)));
        let markers = board.total_markers();
        assert!(markers > board.stable_limit());

        let mut cascade = Cascade::new(&mut board);
        let waves: Vec<_> = cascade.by_ref().collect();

        assert!(cascade.cycled());
        assert!(cascade.next().is_none());
        assert!(!waves.is_empty());
        assert_eq!(waves.len(), cascade.waves());
        assert_eq!(&waves[waves.len() - 1].board, cascade.board());
        assert!(!board.is_stable());
        assert_eq!(board.total_markers(), markers);
        assert_eq!(board.sole_owner(), Some(p(0)));
    }

    #[test]
    fn test_mixed_owners_overfull_board_terminates() {
        let mut board = Board::new(3, 3);
        for coord in board.coords().collect::<Vec<_>>() {
            let owner = if coord.col == 0 { p(1) } else { p(0) };
            board.set_cell(coord, Cell::occupied(board.capacity(coord), owner));
        }
        let markers = board.total_markers();

        let mut cascade = Cascade::new(&mut board);
        let count = cascade.by_ref().count();

        assert!(count > 0);
        assert!(cascade.cycled());
        assert_eq!(board.total_markers(), markers);
    }
}
