//! Tile value representation.

use std::fmt::{self, Display};

use crate::CellIndex;

/// A puzzle tile in the range 1-15.
///
/// This enum provides type-safe representation of tile values, preventing
/// invalid values at compile time. Each variant corresponds to exactly one
/// tile. The empty cell is not a tile; containers represent it as
/// `Option::<Tile>::None`.
///
/// # Examples
///
/// ```
/// use taquin_core::Tile;
///
/// let tile = Tile::T5;
/// assert_eq!(tile.value(), 5);
///
/// // Create from a u8 value
/// let tile = Tile::from_value(12);
/// assert_eq!(tile, Tile::T12);
///
/// // Iterate over all tiles
/// for tile in Tile::ALL {
///     println!("{}", tile);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tile {
    /// Tile 1.
    T1 = 1,
    /// Tile 2.
    T2 = 2,
    /// Tile 3.
    T3 = 3,
    /// Tile 4.
    T4 = 4,
    /// Tile 5.
    T5 = 5,
    /// Tile 6.
    T6 = 6,
    /// Tile 7.
    T7 = 7,
    /// Tile 8.
    T8 = 8,
    /// Tile 9.
    T9 = 9,
    /// Tile 10.
    T10 = 10,
    /// Tile 11.
    T11 = 11,
    /// Tile 12.
    T12 = 12,
    /// Tile 13.
    T13 = 13,
    /// Tile 14.
    T14 = 14,
    /// Tile 15.
    T15 = 15,
}

impl Tile {
    /// Array containing all tiles from 1 to 15, in goal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// assert_eq!(Tile::ALL.len(), 15);
    /// assert_eq!(Tile::ALL[0], Tile::T1);
    /// assert_eq!(Tile::ALL[14], Tile::T15);
    /// ```
    pub const ALL: [Self; 15] = [
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
        Self::T9,
        Self::T10,
        Self::T11,
        Self::T12,
        Self::T13,
        Self::T14,
        Self::T15,
    ];

    /// Creates a tile from a u8 value in the range 1-15.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-15.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// let tile = Tile::from_value(1);
    /// assert_eq!(tile, Tile::T1);
    /// ```
    ///
    /// ```should_panic
    /// use taquin_core::Tile;
    ///
    /// // This will panic: 0 is the empty cell, not a tile
    /// let _ = Tile::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::T1,
            2 => Self::T2,
            3 => Self::T3,
            4 => Self::T4,
            5 => Self::T5,
            6 => Self::T6,
            7 => Self::T7,
            8 => Self::T8,
            9 => Self::T9,
            10 => Self::T10,
            11 => Self::T11,
            12 => Self::T12,
            13 => Self::T13,
            14 => Self::T14,
            15 => Self::T15,
            _ => panic!("Invalid tile value: {value}"),
        }
    }

    /// Returns the numeric value of this tile (1-15).
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::Tile;
    ///
    /// assert_eq!(Tile::T1.value(), 1);
    /// assert_eq!(Tile::T15.value(), 15);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the cell this tile occupies in the goal arrangement.
    ///
    /// Tile `n` belongs at cell `n - 1`; the goal leaves the last cell empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{CellIndex, Tile};
    ///
    /// assert_eq!(Tile::T1.goal_index(), CellIndex::new(0));
    /// assert_eq!(Tile::T15.goal_index(), CellIndex::new(14));
    /// ```
    #[must_use]
    pub const fn goal_index(&self) -> CellIndex {
        CellIndex::new(self.value() - 1)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.value()
    }
}
