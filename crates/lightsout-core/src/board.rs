//! Mutable Lights Out board used to replay presses.

use std::fmt::{self, Display};

use crate::{Grid, GridError, Position};

/// A Lights Out board that can be pressed.
///
/// Pressing a cell toggles it together with its up, down, left and right
/// neighbors that lie on the board. Presses commute, and pressing the same
/// cell twice is a no-op.
///
/// The board is solved when every light is on.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Board, Grid, Position};
///
/// let mut board = Board::new(&Grid::all_lit(3));
/// assert!(board.is_solved());
///
/// board.press(Position::new(0, 0));
/// assert_eq!(board.grid().to_string(), "001 011 111");
///
/// board.press(Position::new(0, 0));
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self { grid }
    }
}

impl Board {
    /// Creates a board seeded with a copy of the grid.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        Self::from(grid.clone())
    }

    /// Creates a board from `0`/`1` values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if the number of values is not a
    /// perfect square, or [`GridError::InvalidCell`] for values other than
    /// `0` and `1`.
    pub fn from_values(values: &[u8]) -> Result<Self, GridError> {
        Grid::from_values(values).map(Self::from)
    }

    /// Returns the side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the current state of the lights.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the board and returns the current state of the lights.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Presses the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn press(&mut self, pos: Position) {
        let size = self.size();
        assert!(
            pos.is_within(size),
            "press at {pos} out of range for {size}x{size} board"
        );
        self.grid.toggle(pos.index(size));
        for neighbor in pos.neighbors(size) {
            self.grid.toggle(neighbor.index(size));
        }
    }

    /// Presses the cell at the row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than the number of cells.
    pub fn press_index(&mut self, index: usize) {
        let cell_count = self.grid.cell_count();
        assert!(
            index < cell_count,
            "press index {index} out of range for board of {cell_count} cells"
        );
        self.press(Position::from_index(index, self.size()));
    }

    /// Returns `true` if every light is on.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_all_lit()
    }
}

/// Writes one row per line.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
