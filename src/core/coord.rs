//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) position on the board.
///
/// Rows grow downward, columns grow rightward, both from 0. Whether a
/// coordinate is in range depends on the board it is used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_from_tuple() {
        assert_eq!(Coord::from((2, 5)), Coord::new(2, 5));
        assert_eq!(format!("{}", Coord::new(2, 5)), "(2, 5)");
    }

    #[test]
    fn test_coord_orders_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 3), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(coords, vec![Coord::new(0, 1), Coord::new(0, 3), Coord::new(1, 0)]);
    }
}
