//! Core data structures for the 15-puzzle (taquin).
//!
//! This crate provides the fundamental types for representing and manipulating
//! a 4×4 sliding tile puzzle. These structures are shared by the shuffling,
//! hint, and game session components.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Value types**
//!    - [`tile`]: Type-safe representation of tile values 1-15
//!    - [`cell_index`]: Validated row-major indices into the 4×4 grid,
//!      including adjacency and Manhattan-distance geometry
//!
//! 2. **The grid** - [`grid`]: [`TileGrid`], a 16-cell arrangement holding
//!    each tile exactly once plus a single empty cell, with sliding moves as
//!    the only user-facing mutation
//!
//! 3. **Errors** - [`error`]: Construction and indexing failures
//!
//! # Examples
//!
//! ```
//! use taquin_core::{CellIndex, TileGrid};
//!
//! let mut grid = TileGrid::solved();
//! assert!(grid.is_solved());
//!
//! // Slide tile 15 into the empty corner
//! let moved = grid.try_slide(CellIndex::new(14));
//! assert!(moved);
//! assert!(!grid.is_solved());
//! assert_eq!(grid.empty_index(), CellIndex::new(14));
//!
//! // Slide it back
//! assert!(grid.try_slide(CellIndex::new(15)));
//! assert!(grid.is_solved());
//! ```

pub mod cell_index;
pub mod error;
pub mod grid;
pub mod tile;

// Re-export commonly used types
pub use self::{
    cell_index::CellIndex,
    error::{InvalidGridError, OutOfRangeError},
    grid::TileGrid,
    tile::Tile,
};
