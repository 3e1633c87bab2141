//! The puzzle session.

use taquin_advisor::{Hint, HintAdvisor};
use taquin_core::{CellIndex, TileGrid};
use taquin_shuffler::ShuffledGrid;

use crate::{GameError, GamePhase, MoveOutcome};

/// A 15-puzzle game session.
///
/// Owns the grid for one round of play and tracks whether the round is
/// still going. Handlers receive the session and the clicked cell index
/// explicitly; the session holds no other state.
///
/// # Example
///
/// ```
/// use taquin_game::{Game, GamePhase};
/// use taquin_shuffler::Shuffler;
///
/// let game = Game::new(Shuffler::new().shuffle());
/// assert_eq!(game.phase(), GamePhase::Playing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    grid: TileGrid,
    phase: GamePhase,
}

impl Game {
    /// Creates a new game session from a shuffled grid.
    ///
    /// The session always starts in [`GamePhase::Playing`], even if the
    /// shuffle happened to land on the goal arrangement; the victory check
    /// runs only after an accepted move.
    ///
    /// # Example
    ///
    /// ```
    /// use taquin_game::Game;
    /// use taquin_shuffler::{ShuffleSeed, Shuffler};
    ///
    /// let shuffler = Shuffler::new();
    /// let seed = ShuffleSeed::from_phrase("opening position");
    /// let game = Game::new(shuffler.shuffle_with_seed(seed));
    /// ```
    #[must_use]
    pub fn new(shuffled: ShuffledGrid) -> Self {
        let ShuffledGrid { grid, seed: _ } = shuffled;
        Self::from_grid(grid)
    }

    /// Creates a game session from an explicit grid arrangement.
    #[must_use]
    pub const fn from_grid(grid: TileGrid) -> Self {
        Self {
            grid,
            phase: GamePhase::Playing,
        }
    }

    /// Returns the current grid arrangement.
    ///
    /// The presentation layer re-reads this after every call to
    /// [`attempt_move`](Self::attempt_move) to refresh its cell labels.
    #[must_use]
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Returns the current session phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Attempts to slide the tile at the given cell into the empty cell.
    ///
    /// On success the phase flips to [`GamePhase::Solved`] the instant the
    /// slid grid matches the goal arrangement. Clicking a cell that does
    /// not neighbor the empty cell is an ordinary rejected move, not an
    /// error, and leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `index` is 16 or greater, and
    /// [`GameError::SessionOver`] if the puzzle is already solved.
    ///
    /// # Example
    ///
    /// ```
    /// use taquin_core::TileGrid;
    /// use taquin_game::{Game, MoveOutcome};
    ///
    /// let mut game = Game::from_grid(TileGrid::solved());
    /// // Tile 1 is nowhere near the empty corner
    /// assert_eq!(game.attempt_move(0)?, MoveOutcome::NotAdjacent);
    /// // Tile 15 slides right
    /// assert_eq!(game.attempt_move(14)?, MoveOutcome::Slid);
    /// # Ok::<(), taquin_game::GameError>(())
    /// ```
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let index = CellIndex::try_new(index)?;
        if self.phase.is_solved() {
            return Err(GameError::SessionOver);
        }
        if !self.grid.try_slide(index) {
            return Ok(MoveOutcome::NotAdjacent);
        }
        if self.grid.is_solved() {
            self.phase = GamePhase::Solved;
        }
        Ok(MoveOutcome::Slid)
    }

    /// Returns whether the grid matches the goal arrangement.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Checks the current answer.
    ///
    /// Same predicate as [`is_solved`](Self::is_solved), exposed as its own
    /// entry point because the player triggers it explicitly and the
    /// presentation layer shows a different message for each result.
    #[must_use]
    pub fn check_answer(&self) -> bool {
        self.is_solved()
    }

    /// Recommends a move for the current arrangement.
    ///
    /// Delegates to [`HintAdvisor`]; the session state is unaffected.
    /// Returns `None` only for a degenerate grid with no legal moves,
    /// which a well-formed session never produces.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        HintAdvisor::new().suggest(&self.grid)
    }

    /// Starts a new round with a fresh shuffled grid.
    ///
    /// This is the only way back to [`GamePhase::Playing`] once a session
    /// is solved.
    pub fn start_new_game(&mut self, shuffled: ShuffledGrid) {
        *self = Self::new(shuffled);
    }
}
