//! Grid cell indexing for the 4×4 board.

use std::fmt::{self, Display};

use crate::OutOfRangeError;

/// A row-major cell index in the range 0-15.
///
/// This type represents a valid cell of the 4×4 grid. It ensures at
/// construction time that the index is within range, so downstream code can
/// index 16-element containers without bounds checks of its own.
///
/// Cell 0 is the top-left corner; indices increase left to right, then top to
/// bottom. Cell `i` sits at row `i / 4`, column `i % 4`.
///
/// # Examples
///
/// ```
/// use taquin_core::CellIndex;
///
/// let index = CellIndex::new(6);
/// assert_eq!(index.row(), 1);
/// assert_eq!(index.column(), 2);
///
/// // Orthogonal neighbors are exactly the cells at Manhattan distance 1
/// assert!(index.is_adjacent(CellIndex::new(5)));
/// assert!(index.is_adjacent(CellIndex::new(10)));
/// assert!(!index.is_adjacent(CellIndex::new(9))); // diagonal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex {
    index: u8,
}

impl CellIndex {
    /// Number of cells in the grid.
    pub const COUNT: usize = 16;

    /// Side length of the square grid.
    pub const SIDE: u8 = 4;

    /// Array containing all 16 cell indices in ascending order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self { index: 0 }; Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Creates a new cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-15.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < Self::SIDE * Self::SIDE);
        Self { index }
    }

    /// Creates a cell index from an untrusted `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `index` is 16 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::CellIndex;
    ///
    /// assert_eq!(CellIndex::try_new(15), Ok(CellIndex::new(15)));
    /// assert!(CellIndex::try_new(16).is_err());
    /// ```
    pub fn try_new(index: usize) -> Result<Self, OutOfRangeError> {
        Self::ALL.get(index).copied().ok_or(OutOfRangeError { index })
    }

    /// Returns the underlying index value (0-15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row of this cell (0-3, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / Self::SIDE
    }

    /// Returns the column of this cell (0-3, left to right).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.index % Self::SIDE
    }

    /// Creates a cell index from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-3.
    #[must_use]
    pub const fn from_row_column(row: u8, column: u8) -> Self {
        assert!(row < Self::SIDE && column < Self::SIDE);
        Self {
            index: row * Self::SIDE + column,
        }
    }

    /// Returns the Manhattan distance between two cells.
    ///
    /// This is the sum of the absolute row and column differences, i.e. the
    /// number of orthogonal steps separating the cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::CellIndex;
    ///
    /// let corner = CellIndex::new(0);
    /// assert_eq!(corner.manhattan_distance(CellIndex::new(0)), 0);
    /// assert_eq!(corner.manhattan_distance(CellIndex::new(5)), 2);
    /// assert_eq!(corner.manhattan_distance(CellIndex::new(15)), 6);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u8 {
        self.row().abs_diff(other.row()) + self.column().abs_diff(other.column())
    }

    /// Returns whether two cells are orthogonal neighbors.
    ///
    /// Adjacency is 4-connected: cells at Manhattan distance exactly 1.
    /// Horizontally consecutive indices on different rows (such as 3 and 4)
    /// are not adjacent, and no cell is adjacent to itself.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns an iterator over the orthogonal neighbors of this cell.
    ///
    /// Corner cells have 2 neighbors, edge cells 3, interior cells 4.
    /// Neighbors are yielded in ascending index order (up, left, right, down).
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::CellIndex;
    ///
    /// let neighbors: Vec<_> = CellIndex::new(0).neighbors().collect();
    /// assert_eq!(neighbors, [CellIndex::new(1), CellIndex::new(4)]);
    ///
    /// assert_eq!(CellIndex::new(5).neighbors().count(), 4);
    /// ```
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        let row = self.row();
        let column = self.column();
        let up = (row > 0).then(|| Self::from_row_column(row - 1, column));
        let left = (column > 0).then(|| Self::from_row_column(row, column - 1));
        let right = (column < Self::SIDE - 1).then(|| Self::from_row_column(row, column + 1));
        let down = (row < Self::SIDE - 1).then(|| Self::from_row_column(row + 1, column));
        [up, left, right, down].into_iter().flatten()
    }
}

/// Returns cell 0 (the top-left corner).
///
/// This exists so the type can be stored in fixed-capacity containers that
/// require `Default` items, such as `tinyvec` arrays.
impl Default for CellIndex {
    fn default() -> Self {
        Self { index: 0 }
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.index, f)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = OutOfRangeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::try_new(index)
    }
}
