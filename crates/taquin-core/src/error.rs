//! Error types for grid construction and indexing.

use crate::Tile;

/// Error returned when a cell index is outside the 4×4 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell index out of range: {index} (expected 0-15)")]
pub struct OutOfRangeError {
    /// The rejected index.
    pub index: usize,
}

/// Error returned when a cell arrangement is not a valid puzzle grid.
///
/// A valid grid holds each of the 15 tiles exactly once plus a single empty
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidGridError {
    /// A tile value appears in more than one cell.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// The duplicated tile.
        tile: Tile,
    },
    /// The arrangement does not contain exactly one empty cell.
    #[display("expected exactly one empty cell, found {count}")]
    EmptyCellCount {
        /// Number of empty cells found.
        count: usize,
    },
}
