//! Manhattan-distance evaluation of grid arrangements.

use taquin_core::{CellIndex, Tile, TileGrid};

/// Returns the Manhattan distance between a tile's cell and its goal cell.
///
/// # Examples
///
/// ```
/// use taquin_advisor::tile_distance;
/// use taquin_core::{CellIndex, Tile};
///
/// // Tile 1 on its goal cell
/// assert_eq!(tile_distance(CellIndex::new(0), Tile::T1), 0);
///
/// // Tile 1 in the opposite corner
/// assert_eq!(tile_distance(CellIndex::new(15), Tile::T1), 6);
/// ```
#[must_use]
pub fn tile_distance(index: CellIndex, tile: Tile) -> u32 {
    u32::from(index.manhattan_distance(tile.goal_index()))
}

/// Returns the sum of every tile's Manhattan distance to its goal cell.
///
/// The empty cell contributes nothing. The result is `0` exactly when the
/// grid is solved: a grid placing every tile on its goal cell has nowhere
/// left to put the empty cell but the bottom-right corner.
///
/// # Examples
///
/// ```
/// use taquin_advisor::total_manhattan_distance;
/// use taquin_core::TileGrid;
///
/// assert_eq!(total_manhattan_distance(&TileGrid::solved()), 0);
///
/// // Swapping tiles 1 and 2 displaces each by one cell
/// let grid = TileGrid::from_values([
///     2, 1, 3, 4, //
///     5, 6, 7, 8, //
///     9, 10, 11, 12, //
///     13, 14, 15, 0,
/// ])?;
/// assert_eq!(total_manhattan_distance(&grid), 2);
/// # Ok::<(), taquin_core::InvalidGridError>(())
/// ```
#[must_use]
pub fn total_manhattan_distance(grid: &TileGrid) -> u32 {
    CellIndex::ALL
        .into_iter()
        .filter_map(|index| grid[index].map(|tile| tile_distance(index, tile)))
        .sum()
}
