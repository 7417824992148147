use thiserror::Error;

/// Errors surfaced by the fallible grid and viewport operations.
///
/// Both variants are programmer-error conditions: with a correctly wired
/// embedding layer they never occur, but they are surfaced (not swallowed)
/// so misuse shows up immediately and tests can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Cell index outside the grid's flat storage.
    #[error("cell index {index} out of range for grid of {len} cells")]
    OutOfRange { index: usize, len: usize },

    /// Viewport dimension of zero, or larger than the grid side.
    #[error("viewport dimension {dimension} invalid for grid side {side}")]
    InvalidViewport { dimension: usize, side: usize },
}
