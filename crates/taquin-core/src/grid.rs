//! The 4×4 sliding tile grid.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{CellIndex, InvalidGridError, Tile};

/// A 4×4 sliding tile grid.
///
/// The grid holds the 15 tiles and one empty cell in row-major order; the
/// empty cell is represented as `None`. Two invariants hold at all times:
///
/// - every tile appears exactly once alongside a single empty cell, and
/// - the cached empty-cell index always points at the `None` cell.
///
/// Construction validates the first invariant and locates the empty cell;
/// every mutation preserves both. The only user-facing mutation is
/// [`try_slide`](Self::try_slide), which moves a tile into the empty cell
/// when the two are orthogonal neighbors and reports whether anything
/// changed.
///
/// The type is small and `Copy`, so hypothetical arrangements are scored on
/// copies via [`with_swapped`](Self::with_swapped) without touching the
/// original.
///
/// # Examples
///
/// ```
/// use taquin_core::{CellIndex, TileGrid};
///
/// let mut grid = TileGrid::solved();
///
/// // Tile 12 sits above the empty corner and may slide down
/// assert!(grid.try_slide(CellIndex::new(11)));
/// assert_eq!(grid.empty_index(), CellIndex::new(11));
///
/// // Tile 1 is nowhere near the empty cell; the grid is untouched
/// assert!(!grid.try_slide(CellIndex::new(0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGrid {
    cells: [Option<Tile>; CellIndex::COUNT],
    empty_index: CellIndex,
}

impl TileGrid {
    const SOLVED_CELLS: [Option<Tile>; CellIndex::COUNT] = {
        let mut cells = [None; CellIndex::COUNT];
        let mut i = 0;
        while i < Tile::ALL.len() {
            cells[i] = Some(Tile::ALL[i]);
            i += 1;
        }
        cells
    };

    /// Returns the goal arrangement: tiles 1-15 in order with the empty cell
    /// in the bottom-right corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::TileGrid;
    ///
    /// let grid = TileGrid::solved();
    /// assert!(grid.is_solved());
    /// ```
    #[must_use]
    pub const fn solved() -> Self {
        Self {
            cells: Self::SOLVED_CELLS,
            empty_index: CellIndex::new(15),
        }
    }

    /// Builds a grid from an arrangement of 16 cells.
    ///
    /// The arrangement must hold each of the 15 tiles exactly once plus a
    /// single `None`. The empty-cell cache is located during validation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError::DuplicateTile`] if a tile appears in more
    /// than one cell, or [`InvalidGridError::EmptyCellCount`] if the number
    /// of `None` cells is not exactly one.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{CellIndex, Tile, TileGrid};
    ///
    /// let mut cells = [None; CellIndex::COUNT];
    /// for (cell, tile) in cells.iter_mut().zip(Tile::ALL) {
    ///     *cell = Some(tile);
    /// }
    /// let grid = TileGrid::from_cells(cells)?;
    /// assert_eq!(grid, TileGrid::solved());
    /// # Ok::<(), taquin_core::InvalidGridError>(())
    /// ```
    pub fn from_cells(cells: [Option<Tile>; CellIndex::COUNT]) -> Result<Self, InvalidGridError> {
        let mut seen = [false; Tile::ALL.len()];
        let mut empty_index = None;
        let mut empty_count = 0_usize;
        for index in CellIndex::ALL {
            match cells[usize::from(index.index())] {
                Some(tile) => {
                    let slot = &mut seen[usize::from(tile.value() - 1)];
                    if *slot {
                        return Err(InvalidGridError::DuplicateTile { tile });
                    }
                    *slot = true;
                }
                None => {
                    empty_index = Some(index);
                    empty_count += 1;
                }
            }
        }
        match (empty_index, empty_count) {
            (Some(empty_index), 1) => Ok(Self { cells, empty_index }),
            _ => Err(InvalidGridError::EmptyCellCount { count: empty_count }),
        }
    }

    /// Builds a grid from 16 numeric cell values, with 0 marking the empty
    /// cell.
    ///
    /// This is a convenience over [`from_cells`](Self::from_cells) for
    /// callers that model the arrangement as raw numbers.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`from_cells`](Self::from_cells).
    ///
    /// # Panics
    ///
    /// Panics if any value is 16 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::TileGrid;
    ///
    /// let grid = TileGrid::from_values([
    ///     1, 2, 3, 4, //
    ///     5, 6, 7, 8, //
    ///     9, 10, 11, 12, //
    ///     13, 14, 15, 0,
    /// ])?;
    /// assert!(grid.is_solved());
    /// # Ok::<(), taquin_core::InvalidGridError>(())
    /// ```
    pub fn from_values(values: [u8; CellIndex::COUNT]) -> Result<Self, InvalidGridError> {
        let mut cells = [None; CellIndex::COUNT];
        for (cell, value) in cells.iter_mut().zip(values) {
            *cell = (value != 0).then(|| Tile::from_value(value));
        }
        Self::from_cells(cells)
    }

    /// Returns the tile at `index`, or `None` for the empty cell.
    #[must_use]
    pub fn tile(&self, index: CellIndex) -> Option<Tile> {
        self.cells[usize::from(index.index())]
    }

    /// Returns the cached index of the empty cell.
    ///
    /// The cache is established at construction and kept in sync by every
    /// mutation, so no scan is needed.
    #[must_use]
    pub const fn empty_index(&self) -> CellIndex {
        self.empty_index
    }

    /// Returns whether the tile at `index` may slide into the empty cell.
    ///
    /// Only the orthogonal neighbors of the empty cell may slide. The empty
    /// cell's own index is not slidable.
    #[must_use]
    pub const fn is_slidable(&self, index: CellIndex) -> bool {
        index.is_adjacent(self.empty_index)
    }

    /// Attempts to slide the tile at `index` into the empty cell.
    ///
    /// Returns `true` when `index` is an orthogonal neighbor of the empty
    /// cell; the tile and the empty cell then exchange places. Returns
    /// `false` and leaves the grid untouched otherwise, including when
    /// `index` is the empty cell itself.
    ///
    /// Every slide is its own inverse: sliding the tile back from the cell
    /// it just vacated restores the previous arrangement.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{CellIndex, TileGrid};
    ///
    /// let mut grid = TileGrid::solved();
    /// assert!(grid.try_slide(CellIndex::new(14)));
    /// assert_eq!(grid.tile(CellIndex::new(15)).map(u8::from), Some(15));
    /// assert!(!grid.is_solved());
    /// ```
    pub fn try_slide(&mut self, index: CellIndex) -> bool {
        if !self.is_slidable(index) {
            return false;
        }
        self.swap(index, self.empty_index);
        true
    }

    /// Exchanges the contents of two cells.
    ///
    /// This is the low-level primitive behind
    /// [`try_slide`](Self::try_slide); it performs no adjacency check. The
    /// empty-cell cache follows the empty cell wherever it moves, so both
    /// grid invariants hold for any pair of indices.
    pub fn swap(&mut self, a: CellIndex, b: CellIndex) {
        self.cells
            .swap(usize::from(a.index()), usize::from(b.index()));
        if self.tile(a).is_none() {
            self.empty_index = a;
        } else if self.tile(b).is_none() {
            self.empty_index = b;
        }
    }

    /// Returns a copy of the grid with the contents of two cells exchanged.
    ///
    /// The original grid is left untouched, which makes this the safe way to
    /// score hypothetical moves.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{CellIndex, TileGrid};
    ///
    /// let grid = TileGrid::solved();
    /// let swapped = grid.with_swapped(CellIndex::new(14), CellIndex::new(15));
    /// assert!(grid.is_solved());
    /// assert!(!swapped.is_solved());
    /// ```
    #[must_use]
    pub fn with_swapped(mut self, a: CellIndex, b: CellIndex) -> Self {
        self.swap(a, b);
        self
    }

    /// Returns whether every tile is on its goal cell.
    ///
    /// The goal arrangement is tiles 1-15 in row-major order with the empty
    /// cell last. Comparison stops at the first out-of-place cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::TileGrid;
    ///
    /// assert!(TileGrid::solved().is_solved());
    ///
    /// // A single transposition is not solved
    /// let grid = TileGrid::from_values([
    ///     2, 1, 3, 4, //
    ///     5, 6, 7, 8, //
    ///     9, 10, 11, 12, //
    ///     13, 14, 15, 0,
    /// ])?;
    /// assert!(!grid.is_solved());
    /// # Ok::<(), taquin_core::InvalidGridError>(())
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells == Self::SOLVED_CELLS
    }
}

impl Index<CellIndex> for TileGrid {
    type Output = Option<Tile>;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index.index())]
    }
}

impl Display for TileGrid {
    /// Renders the grid as four lines of right-aligned cell values, with `.`
    /// marking the empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..CellIndex::SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for column in 0..CellIndex::SIDE {
                if column > 0 {
                    write!(f, " ")?;
                }
                match self[CellIndex::from_row_column(row, column)] {
                    Some(tile) => write!(f, "{:>2}", tile.value())?,
                    None => write!(f, "{:>2}", '.')?,
                }
            }
        }
        Ok(())
    }
}
