//! Session phases and move outcomes.

/// Phase of a puzzle session.
///
/// A session starts in [`Playing`](Self::Playing) right after the shuffle,
/// even in the astronomically unlikely case the shuffle lands on the goal;
/// only an accepted move triggers the victory check. [`Solved`](Self::Solved)
/// is terminal for the session: further moves are rejected and a fresh
/// shuffle is the only way back to [`Playing`](Self::Playing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GamePhase {
    /// Moves are accepted.
    #[display("playing")]
    Playing,
    /// The goal arrangement has been reached; the session is over.
    #[display("solved")]
    Solved,
}

/// Outcome of a well-formed call to [`Game::attempt_move`](crate::Game::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile slid into the empty cell.
    Slid,
    /// The chosen cell does not neighbor the empty cell; nothing changed.
    NotAdjacent,
}
