//! Linear systems over GF(2).
//!
//! [`Mod2Matrix`] solves `A·x = y (mod 2)` for a square bit matrix `A` by
//! Gaussian elimination with diagonal pivots. Columns that cannot be given a
//! pivot are free variables; in [`SolveMode::Optimal`] every assignment of the
//! trailing free variables is tried and the solution with the fewest set bits
//! wins.

use fixedbitset::FixedBitSet;

use crate::SolverError;

/// Selects which solution [`Mod2Matrix::solve_for`] returns when several exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SolveMode {
    /// Any solution: every free variable is set to zero.
    Any,
    /// A solution with minimum Hamming weight.
    ///
    /// Ties are broken by the first candidate found, where candidates are
    /// enumerated by counting from `0` to `2^k - 1` with the first free
    /// variable as the most significant bit.
    #[default]
    Optimal,
}

/// A square matrix over GF(2).
///
/// # Examples
///
/// ```
/// use fixedbitset::FixedBitSet;
/// use lightsout_solver::{Mod2Matrix, SolveMode};
///
/// // x0 + x1 = 1
/// //      x1 = 1
/// let matrix = Mod2Matrix::from_fn(2, |row, col| row <= col);
/// let y = FixedBitSet::with_capacity_and_blocks(2, [0b11]);
///
/// let solution = matrix.solve_for(&y, SolveMode::Optimal)?;
/// assert_eq!(solution.vector().ones().collect::<Vec<_>>(), vec![1]);
/// # Ok::<(), lightsout_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod2Matrix {
    rows: Vec<FixedBitSet>,
}

impl Mod2Matrix {
    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if any row length differs from the number of rows.
    #[must_use]
    pub fn from_rows(rows: Vec<FixedBitSet>) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "matrix with {size} rows must have {size} columns"
        );
        Self { rows }
    }

    /// Creates a `size`×`size` matrix whose entry at `(row, col)` is `f(row, col)`.
    #[must_use]
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let rows = (0..size)
            .map(|row| {
                let mut bits = FixedBitSet::with_capacity(size);
                for col in 0..size {
                    bits.set(col, f(row, col));
                }
                bits
            })
            .collect();
        Self { rows }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        let size = self.size();
        assert!(
            row < size && col < size,
            "entry ({row}, {col}) out of range for {size}x{size} matrix"
        );
        self.rows[row].contains(col)
    }

    /// Computes the product `A·x (mod 2)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one bit per column.
    #[must_use]
    pub fn mul_vec(&self, x: &FixedBitSet) -> FixedBitSet {
        assert_eq!(x.len(), self.size(), "vector length must match matrix size");
        let mut y = FixedBitSet::with_capacity(self.size());
        for (i, row) in self.rows.iter().enumerate() {
            y.set(i, row.intersection_count(x) % 2 == 1);
        }
        y
    }

    /// Solves `A·x = y (mod 2)`.
    ///
    /// The matrix is consumed: elimination rewrites its rows in place.
    ///
    /// Pivots are only taken on the diagonal, so the matrix must reduce to a
    /// leading block with a full diagonal followed by zero rows. Every free
    /// variable then comes after every pivot. Lights Out adjacency matrices
    /// up to 8×8 boards have this shape.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the system has no solution.
    ///
    /// # Panics
    ///
    /// Panics if `y` does not have one bit per row, if elimination leaves an
    /// unpivoted column before the last pivot or a non-zero row after it, or if
    /// optimal mode would have to enumerate 64 or more free variables.
    pub fn solve_for(
        self,
        y: &FixedBitSet,
        mode: SolveMode,
    ) -> Result<Mod2Solution, SolverError> {
        assert_eq!(y.len(), self.size(), "vector length must match matrix size");
        let echelon = EchelonForm::reduce(self.rows, y.clone());
        assert!(
            echelon.has_trailing_free_variables(),
            "free variables of the reduced matrix must trail its pivots"
        );
        if !echelon.is_consistent() {
            return Err(SolverError::Unsolvable);
        }
        Ok(echelon.solve(mode))
    }
}

/// A solution of a GF(2) system together with search statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod2Solution {
    vector: FixedBitSet,
    free_variables: usize,
    candidates_examined: usize,
}

impl Mod2Solution {
    /// Returns the solution vector `x`.
    #[must_use]
    pub fn vector(&self) -> &FixedBitSet {
        &self.vector
    }

    /// Consumes the solution and returns the vector `x`.
    #[must_use]
    pub fn into_vector(self) -> FixedBitSet {
        self.vector
    }

    /// Returns the Hamming weight (number of set bits) of `x`.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.vector.count_ones(..)
    }

    /// Returns the number of unpivoted trailing columns found during elimination.
    #[must_use]
    pub fn free_variables(&self) -> usize {
        self.free_variables
    }

    /// Returns how many back substitutions were run to pick the solution.
    #[must_use]
    pub fn candidates_examined(&self) -> usize {
        self.candidates_examined
    }
}

/// A system reduced to row-echelon form, with the right-hand side reduced alongside.
#[derive(Debug)]
struct EchelonForm {
    rows: Vec<FixedBitSet>,
    rhs: FixedBitSet,
}

impl EchelonForm {
    fn reduce(mut rows: Vec<FixedBitSet>, mut rhs: FixedBitSet) -> Self {
        let size = rows.len();
        let mut col = 0;
        while col < size {
            if rows[col].contains(col) {
                let (pivot, below) = rows.split_at_mut(col + 1);
                let pivot = &pivot[col];
                let pivot_rhs = rhs.contains(col);
                for (offset, row) in below.iter_mut().enumerate() {
                    if row.contains(col) {
                        row.symmetric_difference_with(pivot);
                        let i = col + 1 + offset;
                        rhs.set(i, rhs.contains(i) ^ pivot_rhs);
                    }
                }
                col += 1;
            } else if let Some(i) = (col + 1..size).find(|&i| rows[i].contains(col)) {
                // retry the same column with the pivot swapped in
                rows.swap(col, i);
                let (a, b) = (rhs.contains(col), rhs.contains(i));
                rhs.set(col, b);
                rhs.set(i, a);
            } else {
                col += 1;
            }
        }
        Self { rows, rhs }
    }

    /// Rows without a pivot, scanning up from the bottom until the first pivot,
    /// must reduce to `0 = 0`.
    fn is_consistent(&self) -> bool {
        for (i, row) in self.rows.iter().enumerate().rev() {
            if row.contains(i) {
                return true;
            }
            if self.rhs.contains(i) {
                return false;
            }
        }
        true
    }

    /// Rows up to the last pivot all have a diagonal pivot, and the rows after
    /// it have no coefficients left.
    fn has_trailing_free_variables(&self) -> bool {
        let pivots = self.substitution_start().map_or(0, |start| start + 1);
        let (leading, trailing) = self.rows.split_at(pivots);
        leading.iter().enumerate().all(|(i, row)| row.contains(i))
            && trailing.iter().all(FixedBitSet::is_clear)
    }

    /// Highest row with a pivot on the diagonal.
    fn substitution_start(&self) -> Option<usize> {
        (0..self.rows.len()).rev().find(|&i| self.rows[i].contains(i))
    }

    /// Resolves `x` from the start row upwards.
    ///
    /// `x` holds the reduced right-hand side on entry; positions after `start`
    /// are taken as already resolved.
    fn back_substitute(&self, mut x: FixedBitSet, start: Option<usize>) -> FixedBitSet {
        let Some(start) = start else {
            return x;
        };
        for i in (0..=start).rev() {
            // entries left of the diagonal are zero after reduction
            let parity = self.rows[i].intersection_count(&x) % 2 == 1;
            x.set(i, parity);
        }
        x
    }

    fn solve(&self, mode: SolveMode) -> Mod2Solution {
        let size = self.rows.len();
        let start = self.substitution_start();
        let free_variables = size - start.map_or(0, |start| start + 1);

        if mode.is_any() || free_variables == 0 {
            return Mod2Solution {
                vector: self.back_substitute(self.rhs.clone(), start),
                free_variables,
                candidates_examined: 1,
            };
        }

        assert!(
            free_variables < 64,
            "too many free variables to enumerate: {free_variables}"
        );
        let candidate = |assignment: u64| {
            let mut x = self.rhs.clone();
            for p in 0..free_variables {
                let bit = (assignment >> (free_variables - 1 - p)) & 1 == 1;
                x.set(size - free_variables + p, bit);
            }
            self.back_substitute(x, start)
        };

        let count = 1_u64 << free_variables;
        let mut best = candidate(0);
        let mut best_weight = best.count_ones(..);
        for assignment in 1..count {
            let x = candidate(assignment);
            let weight = x.count_ones(..);
            if weight < best_weight {
                best = x;
                best_weight = weight;
            }
        }

        Mod2Solution {
            vector: best,
            free_variables,
            candidates_examined: usize::try_from(count).unwrap_or(usize::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[u8]]) -> Mod2Matrix {
        Mod2Matrix::from_fn(rows.len(), |row, col| rows[row][col] == 1)
    }

    fn vector(values: &[u8]) -> FixedBitSet {
        let mut bits = FixedBitSet::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            bits.set(i, value == 1);
        }
        bits
    }

    fn ones(bits: &FixedBitSet) -> Vec<usize> {
        bits.ones().collect()
    }

    #[test]
    fn test_identity_returns_rhs() {
        let a = Mod2Matrix::from_fn(5, |row, col| row == col);
        let y = vector(&[1, 0, 1, 1, 0]);
        let solution = a.solve_for(&y, SolveMode::Any).unwrap();
        assert_eq!(solution.vector(), &y);
        assert_eq!(solution.free_variables(), 0);
        assert_eq!(solution.candidates_examined(), 1);
    }

    #[test]
    fn test_unique_solution_satisfies_system() {
        let a = matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]]);
        // rank 2: row 3 = row 1 + row 2
        let y = vector(&[1, 0, 1]);
        let solution = a.clone().solve_for(&y, SolveMode::Optimal).unwrap();
        assert_eq!(a.mul_vec(solution.vector()), y);

        let a = matrix(&[&[1, 1, 0], &[0, 1, 1], &[1, 0, 0]]);
        let y = vector(&[0, 1, 1]);
        let solution = a.clone().solve_for(&y, SolveMode::Optimal).unwrap();
        assert_eq!(ones(solution.vector()), vec![0, 1]);
        assert_eq!(a.mul_vec(solution.vector()), y);
    }

    #[test]
    fn test_inconsistent_system_is_unsolvable() {
        let a = matrix(&[&[1, 1], &[1, 1]]);
        let result = a.solve_for(&vector(&[1, 0]), SolveMode::Optimal);
        assert_eq!(result, Err(SolverError::Unsolvable));
    }

    #[test]
    fn test_zero_pivot_swaps_rows() {
        let a = matrix(&[&[0, 1], &[1, 0]]);
        let solution = a.solve_for(&vector(&[1, 0]), SolveMode::Any).unwrap();
        assert_eq!(ones(solution.vector()), vec![1]);
    }

    #[test]
    fn test_any_mode_zeroes_free_variables() {
        let a = matrix(&[&[1, 0, 1], &[0, 1, 1], &[0, 0, 0]]);
        let y = vector(&[1, 1, 0]);
        let solution = a.solve_for(&y, SolveMode::Any).unwrap();
        assert_eq!(ones(solution.vector()), vec![0, 1]);
        assert_eq!(solution.free_variables(), 1);
    }

    #[test]
    fn test_optimal_mode_minimizes_weight() {
        let a = matrix(&[&[1, 0, 1], &[0, 1, 1], &[0, 0, 0]]);
        let y = vector(&[1, 1, 0]);
        let solution = a.clone().solve_for(&y, SolveMode::Optimal).unwrap();
        assert_eq!(ones(solution.vector()), vec![2]);
        assert_eq!(solution.weight(), 1);
        assert_eq!(solution.candidates_examined(), 2);
        assert_eq!(a.mul_vec(solution.vector()), y);
    }

    #[test]
    fn test_optimal_mode_tie_break_order() {
        // Assignments (x2, x3) = (0, 1) and (1, 0) both give weight 1.
        // The first free variable is the most significant bit, so (0, 1) wins.
        let a = matrix(&[&[1, 0, 1, 1], &[0, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        let y = vector(&[1, 1, 0, 0]);
        let solution = a.solve_for(&y, SolveMode::Optimal).unwrap();
        assert_eq!(ones(solution.vector()), vec![3]);
        assert_eq!(solution.free_variables(), 2);
        assert_eq!(solution.candidates_examined(), 4);
    }

    #[test]
    fn test_zero_matrix() {
        let a = Mod2Matrix::from_fn(3, |_, _| false);
        let solution = a
            .clone()
            .solve_for(&vector(&[0, 0, 0]), SolveMode::Optimal)
            .unwrap();
        assert_eq!(solution.weight(), 0);
        assert_eq!(solution.free_variables(), 3);
        assert_eq!(solution.candidates_examined(), 8);

        let result = a.solve_for(&vector(&[1, 0, 0]), SolveMode::Optimal);
        assert_eq!(result, Err(SolverError::Unsolvable));
    }

    #[test]
    fn test_mul_vec() {
        let a = matrix(&[&[1, 1, 0], &[0, 1, 1], &[1, 1, 1]]);
        assert_eq!(a.mul_vec(&vector(&[1, 1, 0])), vector(&[0, 1, 0]));
        assert_eq!(a.mul_vec(&vector(&[0, 0, 0])), vector(&[0, 0, 0]));
    }

    #[test]
    #[should_panic(expected = "free variables of the reduced matrix must trail")]
    fn test_unpivoted_column_before_last_pivot_panics() {
        // x1 has no pivot but x2 does; the last two rows disagree on x2.
        let a = matrix(&[&[1, 1, 0], &[0, 0, 1], &[0, 0, 1]]);
        let _ = a.solve_for(&vector(&[0, 0, 1]), SolveMode::Optimal);
    }

    #[test]
    #[should_panic(expected = "free variables of the reduced matrix must trail")]
    fn test_off_diagonal_rows_without_pivot_panic() {
        // Solvable by x = (0, 1, 1), but no row has a diagonal pivot.
        let a = matrix(&[&[0, 1, 0], &[0, 0, 1], &[0, 0, 0]]);
        let _ = a.solve_for(&vector(&[1, 1, 0]), SolveMode::Any);
    }

    #[test]
    fn test_trailing_free_variables_reach_zero_rows() {
        let a = matrix(&[&[1, 1, 0, 1], &[1, 0, 1, 0], &[0, 1, 1, 1], &[0, 0, 0, 0]]);
        let y = vector(&[1, 0, 1, 0]);
        let solution = a.clone().solve_for(&y, SolveMode::Optimal).unwrap();
        assert_eq!(solution.free_variables(), 2);
        assert_eq!(a.mul_vec(solution.vector()), y);

        let result = a.solve_for(&vector(&[1, 0, 0, 0]), SolveMode::Optimal);
        assert_eq!(result, Err(SolverError::Unsolvable));
    }

    #[test]
    #[should_panic(expected = "out of range for 2x2 matrix")]
    fn test_get_rejects_out_of_range_column() {
        let a = Mod2Matrix::from_fn(2, |row, col| row == col);
        let _ = a.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "must have 2 columns")]
    fn test_from_rows_rejects_non_square() {
        let _ = Mod2Matrix::from_rows(vec![FixedBitSet::with_capacity(3); 2]);
    }

    #[test]
    #[should_panic(expected = "vector length must match")]
    fn test_solve_for_rejects_length_mismatch() {
        let a = Mod2Matrix::from_fn(2, |row, col| row == col);
        let _ = a.solve_for(&vector(&[1, 0, 1]), SolveMode::Any);
    }
}
