//! Error types for game sessions.

use taquin_core::OutOfRangeError;

/// Error returned when a move request cannot be processed.
///
/// A rejected-but-legal request is not an error: sliding a non-adjacent
/// cell reports [`MoveOutcome::NotAdjacent`](crate::MoveOutcome::NotAdjacent)
/// instead. Errors are reserved for requests the presentation layer should
/// never produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum GameError {
    /// The cell index is outside the 4×4 grid.
    #[display("{_0}")]
    OutOfRange(#[from] OutOfRangeError),
    /// The puzzle is already solved; only a new game accepts moves.
    #[display("the puzzle is already solved")]
    SessionOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::from(OutOfRangeError { index: 40 });
        assert_eq!(err.to_string(), "cell index out of range: 40 (expected 0-15)");

        assert_eq!(
            GameError::SessionOver.to_string(),
            "the puzzle is already solved"
        );
    }
}
