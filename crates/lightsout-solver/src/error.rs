use lightsout_core::GridError;

/// Errors that can occur while solving a puzzle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The input could not be turned into a square grid.
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] GridError),
    /// No sequence of presses lights every cell.
    #[display("puzzle has no solution")]
    Unsolvable,
}
