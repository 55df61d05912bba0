//! Square bit grids in row-major order.
//!
//! A [`Grid`] is the "vectorized" form of an n×n Lights Out board: `n²` cells
//! stored row by row, where a set bit means the light is on.
//!
//! # Text notation
//!
//! Grids can be written as strings for fixtures and diagnostics:
//! - `1` or `#` is a lit cell
//! - `0` or `.` is an unlit cell
//! - Whitespace is ignored
//!
//! [`Display`] writes the rows separated by single spaces, so its output parses
//! back into the same grid.
//!
//! ```
//! use lightsout_core::Grid;
//!
//! let grid: Grid = "
//!     010
//!     111
//!     010
//! "
//! .parse()?;
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.to_string(), "010 111 010");
//! # Ok::<(), lightsout_core::GridError>(())
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use fixedbitset::FixedBitSet;

use crate::{GridError, Position};

/// An n×n grid of lights.
///
/// A grid is read-only outside this crate. [`Board`](crate::Board) owns a copy
/// and toggles its cells when pressed.
///
/// The only shape invariant enforced here is that the number of cells is a
/// non-zero perfect square. Restricting the side length to a playable range is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: FixedBitSet,
}

/// Returns the side length of a square with `len` cells.
fn square_side(len: usize) -> Result<usize, GridError> {
    let size = len.isqrt();
    if size == 0 || size * size != len {
        return Err(GridError::InvalidShape { len });
    }
    Ok(size)
}

impl Grid {
    /// Creates a grid with every light off.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn all_unlit(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: FixedBitSet::with_capacity(size * size),
        }
    }

    /// Creates a grid with every light on, i.e. an already solved grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn all_lit(size: usize) -> Self {
        let mut grid = Self::all_unlit(size);
        grid.cells.insert_range(..);
        grid
    }

    /// Builds a grid from cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if the number of cells is not a
    /// non-zero perfect square.
    pub fn from_bits<I>(bits: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = bool>,
    {
        let bits = bits.into_iter().collect::<Vec<_>>();
        let size = square_side(bits.len())?;
        let mut cells = FixedBitSet::with_capacity(bits.len());
        for (index, lit) in bits.into_iter().enumerate() {
            cells.set(index, lit);
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid from `0`/`1` values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if the number of values is not a
    /// non-zero perfect square, or [`GridError::InvalidCell`] if a value is
    /// neither `0` nor `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::{Grid, GridError};
    ///
    /// let grid = Grid::from_values(&[1, 0, 1, 0, 0, 0, 1, 0, 1])?;
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.lit_count(), 4);
    ///
    /// assert_eq!(
    ///     Grid::from_values(&[1, 0, 1]),
    ///     Err(GridError::InvalidShape { len: 3 })
    /// );
    /// # Ok::<(), GridError>(())
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, GridError> {
        square_side(values.len())?;
        let bits = values
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(GridError::InvalidCell { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bits(bits)
    }

    /// Builds a grid from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if there are no rows or the row
    /// lengths differ from the row count, and [`GridError::InvalidCell`] if a
    /// value is neither `0` nor `1`.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        let size = rows.len();
        if rows.iter().any(|row| row.as_ref().len() != size) {
            let len = rows.iter().map(|row| row.as_ref().len()).sum();
            return Err(GridError::InvalidShape { len });
        }
        let values = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect::<Vec<_>>();
        Self::from_values(&values)
    }

    /// Returns the side length `n` of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, `n²`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the light at the row-major index is on.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        assert!(
            index < self.cell_count(),
            "cell index {index} out of range for {n}x{n} grid",
            n = self.size
        );
        self.cells.contains(index)
    }

    /// Returns `true` if the light at the position is on.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_lit_at(&self, pos: Position) -> bool {
        assert!(
            pos.is_within(self.size),
            "position {pos} out of range for {n}x{n} grid",
            n = self.size
        );
        self.cells.contains(pos.index(self.size))
    }

    /// Returns the number of lights that are on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.count_ones(..)
    }

    /// Returns `true` if every row has all of its `n` lights on.
    #[must_use]
    pub fn is_all_lit(&self) -> bool {
        let n = self.size;
        (0..n).all(|row| self.cells.count_ones(row * n..(row + 1) * n) == n)
    }

    /// Returns the underlying cell bits in row-major order.
    #[must_use]
    pub fn as_bits(&self) -> &FixedBitSet {
        &self.cells
    }

    /// Returns an iterator over the cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.cell_count()).map(|index| self.cells.contains(index))
    }

    /// Returns the cells as `0`/`1` values in row-major order.
    #[must_use]
    pub fn to_values(&self) -> Vec<u8> {
        self.iter().map(u8::from).collect()
    }

    /// Returns the cells as `0`/`1` values, one vector per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use lightsout_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[0_u8, 1], [1, 1]])?;
    /// assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![1, 1]]);
    /// # Ok::<(), lightsout_core::GridError>(())
    /// ```
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.to_values()
            .chunks(self.size)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Flips one light. Only [`Board`](crate::Board) mutates a grid.
    pub(crate) fn toggle(&mut self, index: usize) {
        self.cells.toggle(index);
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                f.write_str(" ")?;
            }
            for col in 0..self.size {
                let lit = self.cells.contains(Position::new(row, col).index(self.size));
                f.write_str(if lit { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                '1' | '#' => Ok(true),
                '0' | '.' => Ok(false),
                _ => Err(GridError::InvalidCharacter { ch }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bits(bits)
    }
}
