//! Cell coordinates on an n×n board.

use std::fmt::{self, Display};

/// A cell position identified by its row and column.
///
/// Positions are independent of the board size; the size is supplied
/// whenever a position is converted to or from a row-major index.
///
/// # Examples
///
/// ```
/// use lightsout_core::Position;
///
/// let pos = Position::from_index(7, 3);
/// assert_eq!(pos, Position::new(2, 1));
/// assert_eq!(pos.index(3), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major index into a position on a board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the row-major index of this position on a board of the given size.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Returns `true` if the position lies on a board of the given size.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns the orthogonal neighbors (up, down, left, right) that lie on a
    /// board of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::Position;
    ///
    /// // A corner has two neighbors, the center of a 3x3 board has four.
    /// assert_eq!(Position::new(0, 0).neighbors(3).count(), 2);
    /// assert_eq!(Position::new(1, 1).neighbors(3).count(), 4);
    /// ```
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Self> {
        let Self { row, col } = self;
        [
            row.checked_sub(1).map(|r| Self::new(r, col)),
            Some(Self::new(row + 1, col)),
            col.checked_sub(1).map(|c| Self::new(row, c)),
            Some(Self::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(move |pos| pos.is_within(size))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
