//! Grid analysis for the 15-puzzle (taquin).
//!
//! This crate evaluates [`TileGrid`](taquin_core::TileGrid) arrangements
//! without mutating them. It provides three views on a grid:
//!
//! 1. **Distance** - [`evaluation`]: the total Manhattan distance between
//!    every tile and its goal cell, a proxy for "closeness to solved"
//! 2. **Hints** - [`advisor`]: [`HintAdvisor`], a greedy one-ply lookahead
//!    that recommends the legal slide minimizing the post-slide distance
//! 3. **Solvability** - [`solvability`]: whether the goal arrangement is
//!    reachable from a grid by legal slides, decided by inversion parity
//!
//! # Examples
//!
//! ```
//! use taquin_advisor::{HintAdvisor, total_manhattan_distance};
//! use taquin_core::TileGrid;
//!
//! let grid = TileGrid::from_values([
//!     1, 2, 3, 4, //
//!     5, 6, 7, 8, //
//!     9, 10, 11, 12, //
//!     13, 14, 0, 15,
//! ])?;
//! assert_eq!(total_manhattan_distance(&grid), 1);
//!
//! // The advisor recommends sliding tile 15 into the empty cell
//! let hint = HintAdvisor::new().suggest(&grid).expect("a move exists");
//! assert_eq!(hint.tile.value(), 15);
//! assert_eq!(hint.projected_distance, 0);
//! # Ok::<(), taquin_core::InvalidGridError>(())
//! ```

pub mod advisor;
pub mod evaluation;
pub mod solvability;

// Re-export commonly used items
pub use self::{
    advisor::{Hint, HintAdvisor},
    evaluation::{tile_distance, total_manhattan_distance},
    solvability::{count_inversions, is_solvable},
};
