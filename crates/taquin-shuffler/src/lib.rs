//! Randomized initial arrangements for the 15-puzzle (taquin).
//!
//! This crate produces the starting grid of a puzzle session. Shuffles are
//! driven by a 32-byte [`ShuffleSeed`], so every arrangement can be recorded
//! and replayed: the same seed always yields the same grid.
//!
//! # Overview
//!
//! 1. **Seeds** - [`seed`]: [`ShuffleSeed`], randomly drawn or derived from
//!    a phrase, rendered as 64 hexadecimal characters
//! 2. **Shuffling** - [`shuffler`]: [`Shuffler`], a uniform Fisher-Yates
//!    shuffle of the 16 cell values, with an opt-in [`ShufflePolicy`] that
//!    restricts the draw to solvable arrangements
//!
//! # Solvability
//!
//! The default policy draws uniformly from all 16! arrangements, about half
//! of which cannot reach the goal by legal slides. Pass
//! [`ShufflePolicy::SolvableOnly`] to redraw until the inversion-parity
//! test admits a solution.
//!
//! # Examples
//!
//! ```
//! use taquin_shuffler::{ShuffleSeed, Shuffler};
//!
//! let shuffler = Shuffler::new();
//!
//! // Same seed, same grid
//! let seed = ShuffleSeed::from_phrase("opening position");
//! let a = shuffler.shuffle_with_seed(seed);
//! let b = shuffler.shuffle_with_seed(seed);
//! assert_eq!(a.grid, b.grid);
//! ```

pub mod seed;
pub mod shuffler;

// Re-export commonly used types
pub use self::{
    seed::{ParseSeedError, ShuffleSeed},
    shuffler::{ShufflePolicy, ShuffledGrid, Shuffler},
};
