//! Verification of submitted Lights Out solutions.
//!
//! A press list is accepted when replaying it on the initial grid lights every
//! cell. Order does not matter and pressing a cell twice cancels out, but the
//! checker replays the list exactly as given rather than normalizing it.
//!
//! # Examples
//!
//! ```
//! use lightsout_checker::{CheckError, check_solution};
//!
//! let grid = [1, 0, 1, 0, 0, 0, 1, 0, 1];
//! assert_eq!(check_solution(&grid, &[4; 7]), Ok(()));
//! assert_eq!(check_solution(&grid, &[4, 4]), Err(CheckError::NotASolution));
//! ```

pub use self::{checker::*, error::*};

mod checker;
mod error;

/// Checks a press list against a grid given as `0`/`1` values in row-major
/// order.
///
/// # Errors
///
/// Returns [`CheckError::InvalidGrid`] if the values do not form a square
/// `0`/`1` grid, or [`CheckError::NotASolution`] if the presses leave a cell
/// unlit.
///
/// # Panics
///
/// Panics if a press index is not smaller than the number of cells.
pub fn check_solution(cells: &[u8], presses: &[usize]) -> Result<(), CheckError> {
    let grid = lightsout_core::Grid::from_values(cells)?;
    SolutionChecker::new().check(&grid, presses)
}
