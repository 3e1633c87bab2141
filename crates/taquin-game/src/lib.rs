//! Game sessions for the 15-puzzle (taquin).
//!
//! This crate is the boundary a presentation layer talks to. A [`Game`]
//! owns one shuffled [`TileGrid`](taquin_core::TileGrid) and a
//! [`GamePhase`]; the presentation layer forwards each clicked cell to
//! [`Game::attempt_move`], re-renders from [`Game::grid`], and asks for
//! hints and answer checks on demand.
//!
//! # Examples
//!
//! ```
//! use taquin_game::{Game, MoveOutcome};
//! use taquin_shuffler::Shuffler;
//!
//! let mut game = Game::new(Shuffler::new().shuffle());
//!
//! // Ask for a hint and play it
//! let hint = game.hint().expect("a move always exists");
//! assert_eq!(game.attempt_move(hint.index.index().into())?, MoveOutcome::Slid);
//! # Ok::<(), taquin_game::GameError>(())
//! ```

pub mod error;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use self::{
    error::GameError,
    game::Game,
    session::{GamePhase, MoveOutcome},
};
