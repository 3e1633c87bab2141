//! Solvability analysis by inversion parity.

use taquin_core::{CellIndex, TileGrid};

/// Returns the number of inversions in the row-major tile reading.
///
/// An inversion is a pair of tiles whose numeric order is reversed in the
/// row-major reading of the grid; the empty cell is skipped. The goal
/// arrangement has zero inversions.
///
/// # Examples
///
/// ```
/// use taquin_advisor::count_inversions;
/// use taquin_core::TileGrid;
///
/// assert_eq!(count_inversions(&TileGrid::solved()), 0);
/// ```
#[must_use]
pub fn count_inversions(grid: &TileGrid) -> u32 {
    let mut inversions = 0;
    for (position, index) in CellIndex::ALL.into_iter().enumerate() {
        let Some(tile) = grid[index] else {
            continue;
        };
        for later in &CellIndex::ALL[position + 1..] {
            if grid[*later].is_some_and(|other| other < tile) {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Returns whether the goal arrangement is reachable by legal slides.
///
/// Legal slides preserve the parity of `inversions + empty row`, and on a
/// 4-wide grid that sum is odd for the goal arrangement (zero inversions,
/// empty cell on row 3). Exactly half of all arrangements satisfy it; a
/// uniformly shuffled grid is therefore unsolvable half the time.
///
/// # Examples
///
/// ```
/// use taquin_advisor::is_solvable;
/// use taquin_core::TileGrid;
///
/// assert!(is_solvable(&TileGrid::solved()));
///
/// // Sam Loyd's puzzle: swap tiles 14 and 15 and the goal is unreachable
/// let grid = TileGrid::from_values([
///     1, 2, 3, 4, //
///     5, 6, 7, 8, //
///     9, 10, 11, 12, //
///     13, 15, 14, 0,
/// ])?;
/// assert!(!is_solvable(&grid));
/// # Ok::<(), taquin_core::InvalidGridError>(())
/// ```
#[must_use]
pub fn is_solvable(grid: &TileGrid) -> bool {
    (count_inversions(grid) + u32::from(grid.empty_index().row())) % 2 == 1
}
