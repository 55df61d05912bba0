//! Core data structures for the Lights Out puzzle.
//!
//! This crate provides the types shared by the solver and the solution checker:
//!
//! - [`position`]: `(row, col)` coordinates and their row-major index mapping
//! - [`grid`]: [`Grid`], an immutable n×n bit grid stored in row-major order
//!   (the "vectorized grid")
//! - [`board`]: [`Board`], a mutable simulator implementing the press operation
//!
//! A cell value of `1` means the light is on. A board is solved when every
//! light is on.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Board, Grid, Position};
//!
//! let grid: Grid = "101 000 101".parse()?;
//! let mut board = Board::new(&grid);
//! assert!(!board.is_solved());
//!
//! board.press(Position::new(1, 1));
//! assert!(board.is_solved());
//! # Ok::<(), lightsout_core::GridError>(())
//! ```

pub mod board;
mod error;
pub mod grid;
pub mod position;

pub use self::{board::Board, error::GridError, grid::Grid, position::Position};
