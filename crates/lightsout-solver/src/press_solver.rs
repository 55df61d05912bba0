use std::time::{Duration, Instant};

use fixedbitset::FixedBitSet;
use lightsout_core::{Grid, Position};

use crate::{Mod2Matrix, SolveMode, SolverError};

/// Builds the coefficient matrix for an n×n board.
///
/// Entry `(i, j)` is set when pressing cell `j` toggles cell `i`, i.e. when the
/// two cells are equal or orthogonally adjacent. The matrix is symmetric and
/// depends only on the board size.
///
/// # Examples
///
/// ```
/// use lightsout_solver::adjacency_matrix;
///
/// let matrix = adjacency_matrix(3);
/// assert_eq!(matrix.size(), 9);
/// // The center cell is toggled by itself and its four neighbors.
/// assert_eq!((0..9).filter(|&j| matrix.get(4, j)).count(), 5);
/// ```
#[must_use]
pub fn adjacency_matrix(size: usize) -> Mod2Matrix {
    Mod2Matrix::from_fn(size * size, |i, j| {
        let a = Position::from_index(i, size);
        let b = Position::from_index(j, size);
        a.manhattan_distance(b) <= 1
    })
}

/// Returns the right-hand side `y` for a grid: the cells that still have to
/// be toggled to light the whole board.
#[must_use]
pub fn target_vector(grid: &Grid) -> FixedBitSet {
    let mut y = FixedBitSet::with_capacity(grid.cell_count());
    for (i, lit) in grid.iter().enumerate() {
        y.set(i, !lit);
    }
    y
}

/// Diagnostics collected while solving one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    elapsed: Duration,
    free_variables: usize,
    candidates_examined: usize,
}

impl SolveStats {
    /// Returns the wall-clock time spent building and solving the system.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the number of free variables of the system.
    ///
    /// This is `0` whenever the solution is unique.
    #[must_use]
    pub fn free_variables(&self) -> usize {
        self.free_variables
    }

    /// Returns the number of candidate solutions compared.
    #[must_use]
    pub fn candidates_examined(&self) -> usize {
        self.candidates_examined
    }
}

/// The presses that light every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressSolution {
    presses: Vec<usize>,
    stats: SolveStats,
}

impl PressSolution {
    /// Returns the cells to press as row-major indices, in ascending order.
    #[must_use]
    pub fn presses(&self) -> &[usize] {
        &self.presses
    }

    /// Consumes the solution and returns the press list.
    #[must_use]
    pub fn into_presses(self) -> Vec<usize> {
        self.presses
    }

    /// Returns the number of presses.
    #[must_use]
    pub fn press_count(&self) -> usize {
        self.presses.len()
    }

    /// Returns the solve diagnostics.
    #[must_use]
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}

/// Solves Lights Out grids by linear algebra over GF(2).
///
/// Each call builds the adjacency matrix for the grid size, solves
/// `A·x = y` where `y` marks the unlit cells, and decodes `x` into a press list.
///
/// # Examples
///
/// ```
/// use lightsout_core::{Board, Grid};
/// use lightsout_solver::PressSolver;
///
/// let grid: Grid = "000 010 000".parse()?;
/// let solution = PressSolver::default().solve(&grid)?;
///
/// let mut board = Board::new(&grid);
/// for &index in solution.presses() {
///     board.press_index(index);
/// }
/// assert!(board.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressSolver {
    mode: SolveMode,
}

impl PressSolver {
    /// Creates a solver returning solutions of the given kind.
    #[must_use]
    pub const fn new(mode: SolveMode) -> Self {
        Self { mode }
    }

    /// Returns the configured solve mode.
    #[must_use]
    pub const fn mode(&self) -> SolveMode {
        self.mode
    }

    /// Finds the presses that light every cell of `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if no press sequence lights the grid.
    pub fn solve(&self, grid: &Grid) -> Result<PressSolution, SolverError> {
        let start = Instant::now();
        let size = grid.size();
        let result = adjacency_matrix(size).solve_for(&target_vector(grid), self.mode);
        let elapsed = start.elapsed();
        let millis = elapsed.as_secs_f64() * 1000.0;

        let solution = match result {
            Ok(solution) => solution,
            Err(err) => {
                log::debug!("{size}x{size} grid is unsolvable (checked in {millis:.3} ms)");
                return Err(err);
            }
        };

        let stats = SolveStats {
            elapsed,
            free_variables: solution.free_variables(),
            candidates_examined: solution.candidates_examined(),
        };
        let presses = solution.vector().ones().collect::<Vec<_>>();
        log::debug!(
            "solved {size}x{size} grid in {millis:.3} ms with {} presses",
            presses.len()
        );
        Ok(PressSolution { presses, stats })
    }
}

#[cfg(test)]
mod tests {
    use lightsout_core::Board;
    use proptest::prelude::*;

    use super::*;

    fn replay(grid: &Grid, presses: &[usize]) -> Board {
        let mut board = Board::new(grid);
        for &index in presses {
            board.press_index(index);
        }
        board
    }

    #[test]
    fn test_adjacency_matrix_shape() {
        for size in 3..=8 {
            let matrix = adjacency_matrix(size);
            let cells = size * size;
            assert_eq!(matrix.size(), cells);
            for i in 0..cells {
                for j in 0..cells {
                    assert_eq!(
                        matrix.get(i, j),
                        matrix.get(j, i),
                        "symmetric at ({i}, {j})"
                    );
                }
                assert!(matrix.get(i, i));
            }
        }
    }

    #[test]
    fn test_adjacency_matrix_row_weights() {
        let matrix = adjacency_matrix(4);
        let weight = |i: usize| (0..16).filter(|&j| matrix.get(i, j)).count();
        assert_eq!(weight(0), 3, "corner");
        assert_eq!(weight(1), 4, "edge");
        assert_eq!(weight(5), 5, "interior");
        assert!(matrix.get(3, 7));
        assert!(!matrix.get(3, 4), "row wrap is not adjacency");
    }

    #[test]
    fn test_target_vector_is_complement() {
        let grid: Grid = "101 000 101".parse().unwrap();
        let y = target_vector(&grid);
        assert_eq!(y.ones().collect::<Vec<_>>(), vec![1, 3, 4, 5, 7]);
    }

    #[test]
    fn test_single_lit_center() {
        let grid: Grid = "000 010 000".parse().unwrap();
        let solution = PressSolver::default().solve(&grid).unwrap();
        assert_eq!(solution.presses(), &[0, 1, 2, 3, 5, 6, 7, 8]);
        assert!(replay(&grid, solution.presses()).is_solved());
    }

    #[test]
    fn test_unsolvable_grid() {
        let grid: Grid = "0010 1000 0001 0100".parse().unwrap();
        let result = PressSolver::default().solve(&grid);
        assert_eq!(result, Err(SolverError::Unsolvable));
        let result = PressSolver::new(SolveMode::Any).solve(&grid);
        assert_eq!(result, Err(SolverError::Unsolvable));
    }

    #[test]
    fn test_corner_pattern_needs_center_only() {
        let grid: Grid = "101 000 101".parse().unwrap();
        let solution = PressSolver::default().solve(&grid).unwrap();
        assert_eq!(solution.presses(), &[4]);
    }

    #[test]
    fn test_all_lit_needs_no_presses() {
        for size in 3..=8 {
            let solution = PressSolver::default().solve(&Grid::all_lit(size)).unwrap();
            assert!(solution.presses().is_empty());
            assert_eq!(solution.press_count(), 0);
        }
    }

    #[test]
    fn test_all_unlit_is_solvable() {
        let expected_weights = [(3, 5), (4, 4), (5, 15), (6, 28), (7, 33), (8, 40)];
        for (size, weight) in expected_weights {
            let grid = Grid::all_unlit(size);
            let solution = PressSolver::default().solve(&grid).unwrap();
            assert_eq!(solution.press_count(), weight, "{size}x{size}");
            assert!(replay(&grid, solution.presses()).is_solved());
        }
    }

    #[test]
    fn test_free_variables_per_size() {
        // Only 4x4 and 5x5 have a singular adjacency matrix in this range.
        let expected = [(3, 0), (4, 4), (5, 2), (6, 0), (7, 0), (8, 0)];
        for (size, free) in expected {
            let solution = PressSolver::default().solve(&Grid::all_lit(size)).unwrap();
            assert_eq!(solution.stats().free_variables(), free, "{size}x{size}");
            assert_eq!(solution.stats().candidates_examined(), 1 << free);
        }
    }

    #[test]
    fn test_optimal_beats_any_on_4x4() {
        let grid = Grid::all_unlit(4);
        let optimal = PressSolver::new(SolveMode::Optimal).solve(&grid).unwrap();
        let any = PressSolver::new(SolveMode::Any).solve(&grid).unwrap();
        assert_eq!(optimal.presses(), &[1, 7, 8, 14]);
        assert_eq!(any.press_count(), 10);
        assert!(replay(&grid, any.presses()).is_solved());
        assert_eq!(any.stats().candidates_examined(), 1);
    }

    #[test]
    fn test_solver_mode() {
        assert_eq!(PressSolver::default().mode(), SolveMode::Optimal);
        assert!(PressSolver::new(SolveMode::Any).mode().is_any());
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (3usize..=8)
            .prop_flat_map(|n| prop::collection::vec(any::<bool>(), n * n))
            .prop_map(|bits| Grid::from_bits(bits).unwrap())
    }

    proptest! {
        #[test]
        fn test_solution_lights_every_cell(grid in arb_grid()) {
            if let Ok(solution) = PressSolver::default().solve(&grid) {
                prop_assert!(replay(&grid, solution.presses()).is_solved());
                prop_assert!(solution.presses().is_sorted());
            }
        }

        #[test]
        fn test_optimal_weight_at_most_any(grid in arb_grid()) {
            let optimal = PressSolver::new(SolveMode::Optimal).solve(&grid);
            let any = PressSolver::new(SolveMode::Any).solve(&grid);
            match (optimal, any) {
                (Ok(optimal), Ok(any)) => {
                    prop_assert!(optimal.press_count() <= any.press_count());
                    prop_assert!(replay(&grid, any.presses()).is_solved());
                }
                (Err(a), Err(b)) => {
                    prop_assert_eq!(a, SolverError::Unsolvable);
                    prop_assert_eq!(b, SolverError::Unsolvable);
                }
                (optimal, any) => {
                    prop_assert!(false, "modes disagree: {optimal:?} vs {any:?}");
                }
            }
        }

        #[test]
        fn test_solution_matches_system(grid in arb_grid()) {
            let size = grid.size();
            if let Ok(solution) = PressSolver::default().solve(&grid) {
                let mut x = FixedBitSet::with_capacity(size * size);
                for &index in solution.presses() {
                    x.insert(index);
                }
                prop_assert_eq!(adjacency_matrix(size).mul_vec(&x), target_vector(&grid));
            }
        }
    }
}
