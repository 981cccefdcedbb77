//! The grid itself.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::{Coord, PlayerId, PlayerMap};

/// Orthogonal neighbors of a coordinate, 2 to 4 of them.
pub type Neighbors = SmallVec<[Coord; 4]>;

/// Rectangular grid of cells with per-coordinate capacities.
///
/// Coordinates outside `[0, height) x [0, width)` are a programming error:
/// every accessor panics on them. Callers taking coordinates from the
/// outside world check `contains` first.
///
/// ## Example
///
/// ```
/// use chain_reaction::board::Board;
/// use chain_reaction::core::Coord;
///
/// let board = Board::new(6, 11);
/// assert_eq!(board.capacity(Coord::new(0, 0)), 2);
/// assert_eq!(board.capacity(Coord::new(0, 3)), 3);
/// assert_eq!(board.capacity(Coord::new(5, 3)), 4);
/// assert_eq!(board.neighbors(Coord::new(10, 5)).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BoardRepr", try_from = "BoardRepr")]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vector<Cell>,
    /// Row-major, fixed at construction.
    capacities: Vector<u32>,
}

/// Why a grid of cells could not be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 2x2, got {width}x{height}")]
    TooSmall { width: usize, height: usize },

    #[error("row {row} has {len} cells, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },

    #[error("cell at {0} has an owner without markers or markers without an owner")]
    Inconsistent(Coord),

    #[error("declared size {width}x{height} does not match the rows")]
    SizeMismatch { width: usize, height: usize },
}

impl Board {
    /// Create an empty `width x height` board.
    ///
    /// # Panics
    ///
    /// If either side is shorter than 2.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width >= 2 && height >= 2,
            "board must be at least 2x2, got {width}x{height}"
        );

        let mut board = Self {
            width,
            height,
            cells: Vector::new(),
            capacities: Vector::new(),
        };
        let capacities: Vector<u32> = board
            .coords()
            .map(|coord| board.neighbors(coord).len() as u32)
            .collect();
        board.capacities = capacities;
        board.cells = std::iter::repeat(Cell::empty()).take(width * height).collect();
        board
    }

    /// Build a board from explicit rows of cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width < 2 || height < 2 {
            return Err(BoardError::TooSmall { width, height });
        }

        let mut board = Self::new(width, height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::Ragged {
                    row,
                    len: cells.len(),
                    width,
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                let coord = Coord::new(row, col);
                if !cell.is_consistent() {
                    return Err(BoardError::Inconsistent(coord));
                }
                board.set_cell(coord, cell);
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check whether `coord` lies on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} outside {}x{} board",
            self.width,
            self.height
        );
        coord.row * self.width + coord.col
    }

    /// In-bounds orthogonal neighbors, in up, down, left, right order.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        let _ = self.index(coord);
        let Coord { row, col } = coord;

        let mut out = Neighbors::new();
        if row > 0 {
            out.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.height {
            out.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            out.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.width {
            out.push(Coord::new(row, col + 1));
        }
        out
    }

    /// Markers a cell holds when it explodes.
    #[must_use]
    pub fn capacity(&self, coord: Coord) -> u32 {
        self.capacities[self.index(coord)]
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Overwrite a cell.
    pub fn set_cell(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells.set(idx, cell);
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.area()).map(move |i| Coord::new(i / width, i % width))
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    /// Cells grouped by row.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .iter()
            .copied()
            .collect::<Vec<_>>()
            .chunks(self.width)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    // === Marker accounting ===

    /// Markers on the whole board.
    #[must_use]
    pub fn total_markers(&self) -> u32 {
        self.cells.iter().map(Cell::count).sum()
    }

    /// Markers held by `player`.
    #[must_use]
    pub fn markers_owned_by(&self, player: PlayerId) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .map(Cell::count)
            .sum()
    }

    /// Markers held by each of `player_count` players.
    #[must_use]
    pub fn marker_totals(&self, player_count: usize) -> PlayerMap<u32> {
        let mut totals = PlayerMap::with_value(player_count, 0);
        for cell in self.cells.iter() {
            if let Some(owner) = cell.owner() {
                if totals.contains(owner) {
                    totals[owner] += cell.count();
                }
            }
        }
        totals
    }

    /// The only player holding markers, if exactly one does.
    #[must_use]
    pub fn sole_owner(&self) -> Option<PlayerId> {
        let mut owners = self.cells.iter().filter_map(Cell::owner);
        let first = owners.next()?;
        owners.all(|owner| owner == first).then_some(first)
    }

    // === Stability ===

    /// Cells at or above capacity, row-major.
    #[must_use]
    pub fn critical_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|&(coord, cell)| cell.is_critical(self.capacity(coord)))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// True when no cell is critical.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.cells
            .iter()
            .zip(self.capacities.iter())
            .all(|(cell, &capacity)| !cell.is_critical(capacity))
    }

    /// Sum over all cells of markers held beyond capacity.
    #[must_use]
    pub fn excess(&self) -> u32 {
        self.cells
            .iter()
            .zip(self.capacities.iter())
            .map(|(cell, &capacity)| cell.excess(capacity))
            .sum()
    }

    /// Most markers the board can hold with every cell below capacity.
    ///
    /// A board carrying more than this can never come to rest; staying at
    /// or under it does not guarantee that it will.
    #[must_use]
    pub fn stable_limit(&self) -> u32 {
        self.capacities.iter().map(|capacity| capacity - 1).sum()
    }

    // === Mutation (resolver only) ===

    pub(crate) fn receive(&mut self, coord: Coord, player: PlayerId) {
        let idx = self.index(coord);
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.receive(player);
        }
    }

    pub(crate) fn discharge(&mut self, coord: Coord) {
        let idx = self.index(coord);
        let capacity = self.capacities[idx];
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.discharge(capacity);
        }
    }
}

impl std::fmt::Display for Board {
    /// One line per row; `.` for an empty cell, otherwise count and owner
    /// glyph (`2a` is two markers held by player 0).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| match cell.owner() {
                    Some(owner) => format!("{}{}", cell.count(), owner.glyph()),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Serialized form: dimensions plus a grid of `{count, owner}` rows.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            rows: board.rows(),
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Board::from_rows(repr.rows)?;
        if board.width != repr.width || board.height != repr.height {
            return Err(BoardError::SizeMismatch {
                width: repr.width,
                height: repr.height,
            });
        }
        Ok(board)
    }
}
