use lightsout_core::GridError;

/// Errors returned when a submitted solution is rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum CheckError {
    /// The initial grid could not be decoded.
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] GridError),
    /// Replaying the presses leaves at least one cell unlit.
    #[display("presses do not light every cell")]
    NotASolution,
}
