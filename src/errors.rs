//! Errors signalling misuse of the board's loading operations.
#[cfg(doc)]
use crate::Board;

/// Error for [`Board::new`]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("side length {0} is not a positive perfect square")]
pub struct InvalidSizeError(
    /// The rejected side length.
    pub u8,
);

/// Error for [`Board::place`] and [`Board::place_row`]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum PlaceError {
    /// The addressed cell lies outside the grid.
    #[error("cell ({row}, {col}) lies outside the {size}x{size} board")]
    CellOutOfBounds {
        /// Row index passed by the caller.
        row: u8,
        /// Column index passed by the caller.
        col: u8,
        /// Side length of the board.
        size: u8,
    },
    /// The addressed row lies outside the grid.
    #[error("row {row} lies outside the {size}x{size} board")]
    RowOutOfBounds {
        /// Row index passed by the caller.
        row: u8,
        /// Side length of the board.
        size: u8,
    },
    /// The value does not fit the board's `1..=size` domain.
    #[error("value {value} is outside the board's range 1..={size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Side length of the board.
        size: u8,
    },
    /// The target cell already holds a clue.
    #[error("cell ({row}, {col}) already holds a value")]
    Occupied {
        /// Row index of the occupied cell.
        row: u8,
        /// Column index of the occupied cell.
        col: u8,
    },
    /// A bulk-loaded row did not contain exactly `size` values.
    #[error("row of {found} values loaded into a board with rows of {expected}")]
    RowLengthMismatch {
        /// Number of values a full row requires.
        expected: usize,
        /// Number of values actually supplied.
        found: usize,
    },
}
