/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The number of cells is not a perfect square, or the rows do not form a square.
    #[display("grid of {len} cells is not square")]
    InvalidShape {
        /// Number of cells supplied.
        len: usize,
    },
    /// A cell value is neither `0` nor `1`.
    #[display("invalid cell value {value} at index {index}")]
    InvalidCell {
        /// Row-major index of the offending cell.
        index: usize,
        /// The value found there.
        value: u8,
    },
    /// The text notation contains a character that is not a cell.
    #[display("invalid grid character: {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}
