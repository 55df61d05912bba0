//! Lights Out solver.
//!
//! A Lights Out grid is solved by a set of presses `x` with `A·x = y (mod 2)`,
//! where `A` is the [adjacency matrix](adjacency_matrix) of the board and `y`
//! marks the cells that are still unlit. This crate provides:
//!
//! - [`Mod2Matrix`]: a GF(2) linear system solver that can search for the
//!   minimum-weight solution ([`SolveMode::Optimal`])
//! - [`PressSolver`]: builds the system for a [`Grid`] and decodes the solution
//!   into a list of cells to press
//!
//! # Examples
//!
//! ```
//! use lightsout_solver::{SolverError, solve};
//!
//! assert_eq!(solve(&[1, 0, 1, 0, 0, 0, 1, 0, 1])?, vec![4]);
//!
//! let unsolvable = [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0];
//! assert_eq!(solve(&unsolvable), Err(SolverError::Unsolvable));
//! # Ok::<(), SolverError>(())
//! ```

use lightsout_core::Grid;

pub use self::{error::*, mod2_matrix::*, press_solver::*};

mod error;
mod mod2_matrix;
mod press_solver;

/// Returns the minimum-weight press list for a grid given as `0`/`1` values in
/// row-major order.
///
/// # Errors
///
/// Returns [`SolverError::InvalidGrid`] if the values do not form a square
/// `0`/`1` grid, or [`SolverError::Unsolvable`] if no press sequence lights
/// every cell.
pub fn solve(cells: &[u8]) -> Result<Vec<usize>, SolverError> {
    let grid = Grid::from_values(cells)?;
    let solution = PressSolver::default().solve(&grid)?;
    Ok(solution.into_presses())
}

#[cfg(test)]
mod tests {
    use lightsout_core::GridError;

    use super::*;

    #[test]
    fn test_solve_rejects_invalid_shape() {
        assert_eq!(
            solve(&[0, 1, 0, 1, 0]),
            Err(SolverError::InvalidGrid(GridError::InvalidShape { len: 5 }))
        );
    }

    #[test]
    fn test_solve_rejects_invalid_cell() {
        assert_eq!(
            solve(&[0, 1, 0, 5]),
            Err(SolverError::InvalidGrid(GridError::InvalidCell { index: 3, value: 5 }))
        );
    }

    #[test]
    fn test_solve_returns_ascending_presses() {
        let presses = solve(&[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(presses, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SolverError::Unsolvable.to_string(), "puzzle has no solution");
        assert_eq!(
            SolverError::from(GridError::InvalidShape { len: 10 }).to_string(),
            "invalid grid: grid of 10 cells is not square"
        );
    }
}
