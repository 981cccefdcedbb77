//! Resolver integration tests.
//!
//! These run the standalone resolver on hand-built boards, without a
//! session or turn order.

use chain_reaction::board::{Board, Cell};
use chain_reaction::core::{Coord, PlayerId};
use chain_reaction::resolve::{self, Cascade};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

/// Fill every cell to one below capacity for `player`.
fn primed(width: usize, height: usize, player: PlayerId) -> Board {
    let mut board = Board::new(width, height);
    let coords: Vec<Coord> = board.coords().collect();
    for coord in coords {
        let capacity = board.capacity(coord);
        board.set_cell(coord, Cell::occupied(capacity - 1, player));
    }
    board
}

/// A primed board is as full as a stable board can be.
#[test]
fn test_primed_board_sits_at_the_limit() {
    let board = primed(4, 4, p(0));

    assert!(board.is_stable());
    assert_eq!(board.total_markers(), board.stable_limit());
}

/// Touching off one end of a primed top row runs the row wave by wave.
#[test]
fn test_cascade_front_spreads() {
    let mut board = Board::new(5, 5);
    for col in 0..5 {
        let coord = Coord::new(0, col);
        board.set_cell(coord, Cell::occupied(board.capacity(coord) - 1, p(0)));
    }

    let waves = resolve::place(&mut board, p(0), Coord::new(0, 0)).unwrap();

    let exploded: Vec<Vec<Coord>> = waves.iter().map(|w| w.exploded().collect()).collect();
    let expected: Vec<Vec<Coord>> = (0..5).map(|col| vec![Coord::new(0, col)]).collect();
    assert_eq!(exploded, expected);
    assert!(board.is_stable());
    assert_eq!(board.total_markers(), 9);
    assert_eq!(board.markers_owned_by(p(0)), 9);
}

/// A cell fed from several sides can go off again in a later wave.
#[test]
fn test_cell_can_explode_in_several_waves() {
    let mut board = Board::new(3, 3);
    board.set_cell(Coord::new(0, 0), Cell::occupied(1, p(0)));
    board.set_cell(Coord::new(0, 1), Cell::occupied(2, p(0)));
    board.set_cell(Coord::new(1, 0), Cell::occupied(2, p(0)));

    let waves = resolve::place(&mut board, p(0), Coord::new(0, 0)).unwrap();

    let corner_waves: Vec<usize> = waves
        .iter()
        .enumerate()
        .filter(|(_, wave)| wave.exploded().any(|c| c == Coord::new(0, 0)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(corner_waves, vec![0, 2]);
    assert!(board.is_stable());
}

/// Captures go through third parties' cells too.
#[test]
fn test_capture_from_several_opponents() {
    let mut board = Board::new(3, 3);
    board.set_cell(Coord::new(1, 1), Cell::occupied(3, p(0)));
    board.set_cell(Coord::new(0, 1), Cell::occupied(1, p(1)));
    board.set_cell(Coord::new(1, 0), Cell::occupied(1, p(2)));
    board.set_cell(Coord::new(2, 1), Cell::occupied(1, p(3)));

    let waves = resolve::place(&mut board, p(0), Coord::new(1, 1)).unwrap();

    assert_eq!(waves.len(), 1);
    assert_eq!(board.cell(Coord::new(1, 1)), Cell::empty());
    for coord in [Coord::new(0, 1), Coord::new(1, 0), Coord::new(2, 1)] {
        assert_eq!(board.cell(coord), Cell::occupied(2, p(0)));
    }
    assert_eq!(board.cell(Coord::new(1, 2)), Cell::occupied(1, p(0)));
    for other in 1..=3 {
        assert_eq!(board.markers_owned_by(p(other)), 0);
    }
}

/// Per-wave boards form a consistent history ending at the final board.
#[test]
fn test_wave_boards_chain() {
    let mut board = primed(4, 3, p(1));
    board.set_cell(Coord::new(0, 0), Cell::occupied(1, p(0)));
    // Keep fewer markers than the board has edges so the cascade settles.
    board.set_cell(Coord::new(2, 3), Cell::empty());
    board.set_cell(Coord::new(1, 2), Cell::empty());
    board.set_cell(Coord::new(1, 1), Cell::empty());
    let total = board.total_markers() + 1;

    let mut cascade_board = board.clone();
    cascade_board.set_cell(Coord::new(0, 0), Cell::occupied(2, p(0)));
    let mut cascade = Cascade::new(&mut cascade_board);
    let mut waves = Vec::new();
    while let Some(wave) = cascade.next() {
        assert_eq!(wave.board.total_markers(), total);
        assert_eq!(&wave.board, cascade.board());
        waves.push(wave);
        assert!(waves.len() < 10_000);
    }

    let direct = resolve::place(&mut board, p(0), Coord::new(0, 0)).unwrap();
    assert_eq!(direct, waves);
    assert_eq!(board, cascade_board);
}
