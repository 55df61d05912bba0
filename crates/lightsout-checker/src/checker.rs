use lightsout_core::{Board, Grid};

use crate::CheckError;

/// Verifies press lists by replaying them on a fresh [`Board`].
///
/// The checker is independent of any solver: it accepts a press list exactly
/// when pressing the listed cells, in order and once per occurrence, lights
/// every cell of the grid.
///
/// # Examples
///
/// ```
/// use lightsout_checker::{CheckError, SolutionChecker};
/// use lightsout_core::Grid;
///
/// let grid: Grid = "101 000 101".parse()?;
/// let checker = SolutionChecker::new();
///
/// assert_eq!(checker.check(&grid, &[4]), Ok(()));
/// assert_eq!(checker.check(&grid, &[4, 4]), Err(CheckError::NotASolution));
/// # Ok::<(), lightsout_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionChecker;

impl SolutionChecker {
    /// Creates a checker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Replays `presses` on `grid` and checks that every cell ends up lit.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NotASolution`] if any cell is unlit afterwards.
    ///
    /// # Panics
    ///
    /// Panics if a press index is not smaller than the number of cells.
    pub fn check(&self, grid: &Grid, presses: &[usize]) -> Result<(), CheckError> {
        let mut board = Board::new(grid);
        for &index in presses {
            board.press_index(index);
        }

        let size = grid.size();
        if !board.is_solved() {
            log::debug!(
                "rejected {} presses on {size}x{size} grid: {} of {} cells lit",
                presses.len(),
                board.grid().lit_count(),
                grid.cell_count()
            );
            return Err(CheckError::NotASolution);
        }
        log::trace!("accepted {} presses on {size}x{size} grid", presses.len());
        Ok(())
    }
}
