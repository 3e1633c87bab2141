//! Greedy one-ply move suggestion.

use taquin_core::{CellIndex, Tile, TileGrid};
use tinyvec::ArrayVec;

use crate::evaluation;

/// A recommended slide, produced by [`HintAdvisor::suggest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// Cell of the tile to slide.
    pub index: CellIndex,
    /// The tile occupying that cell.
    pub tile: Tile,
    /// Total Manhattan distance of the grid after the slide.
    pub projected_distance: u32,
}

/// A greedy one-ply hint advisor.
///
/// The advisor scores every legal slide by the total Manhattan distance of
/// the arrangement it would produce and recommends the best one. Candidates
/// are visited in ascending cell order and only a strictly smaller distance
/// displaces the current best, so ties go to the lowest cell index.
///
/// Scoring works on copies of the grid, never on the caller's value, so any
/// number of calls leaves the grid untouched.
///
/// This is a single-step heuristic, not a solver: it does not plan ahead,
/// does not guarantee progress toward the goal, and can recommend moves
/// that cycle. It is deterministic for any given arrangement.
///
/// # Examples
///
/// ```
/// use taquin_advisor::HintAdvisor;
/// use taquin_core::TileGrid;
///
/// let grid = TileGrid::from_values([
///     1, 2, 3, 4, //
///     5, 6, 7, 8, //
///     9, 10, 11, 12, //
///     13, 14, 0, 15,
/// ])?;
///
/// let hint = HintAdvisor::new().suggest(&grid).expect("a move exists");
/// assert_eq!(hint.tile.value(), 15);
/// assert_eq!(hint.projected_distance, 0);
/// # Ok::<(), taquin_core::InvalidGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HintAdvisor;

impl HintAdvisor {
    /// Creates a new `HintAdvisor`.
    #[must_use]
    pub const fn new() -> Self {
        HintAdvisor
    }

    /// Returns the cells whose tile may slide into the empty cell.
    ///
    /// These are the orthogonal neighbors of the empty cell, in ascending
    /// index order. A well-formed grid always yields 2 to 4 of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_advisor::HintAdvisor;
    /// use taquin_core::{CellIndex, TileGrid};
    ///
    /// // The empty cell is in the bottom-right corner
    /// let moves = HintAdvisor::new().legal_moves(&TileGrid::solved());
    /// assert_eq!(&moves[..], [CellIndex::new(11), CellIndex::new(14)]);
    /// ```
    #[must_use]
    pub fn legal_moves(&self, grid: &TileGrid) -> ArrayVec<[CellIndex; 4]> {
        let mut moves = ArrayVec::new();
        for index in CellIndex::ALL {
            if grid.is_slidable(index) {
                moves.push(index);
            }
        }
        moves
    }

    /// Recommends the legal slide minimizing the post-slide total Manhattan
    /// distance.
    ///
    /// Returns `None` only when no cell neighbors the empty cell, which
    /// cannot happen on a well-formed grid; the case is handled rather than
    /// assumed away so a degenerate grid cannot cause a panic.
    #[must_use]
    pub fn suggest(&self, grid: &TileGrid) -> Option<Hint> {
        let empty_index = grid.empty_index();
        let mut best: Option<Hint> = None;
        for index in self.legal_moves(grid) {
            let Some(tile) = grid[index] else {
                continue;
            };
            let projected_distance =
                evaluation::total_manhattan_distance(&grid.with_swapped(index, empty_index));
            if best
                .as_ref()
                .is_none_or(|hint| projected_distance < hint.projected_distance)
            {
                best = Some(Hint {
                    index,
                    tile,
                    projected_distance,
                });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid_from_values(values: [u8; 16]) -> TileGrid {
        TileGrid::from_values(values).expect("valid arrangement")
    }

    #[test]
    fn test_legal_moves_are_empty_cell_neighbors() {
        let advisor = HintAdvisor::new();

        // Empty in a corner: 2 moves
        let moves = advisor.legal_moves(&TileGrid::solved());
        assert_eq!(&moves[..], [CellIndex::new(11), CellIndex::new(14)]);

        // Empty in the interior: 4 moves, ascending
        let grid = grid_from_values([
            1, 2, 3, 4, //
            5, 0, 6, 8, //
            9, 10, 7, 12, //
            13, 14, 11, 15,
        ]);
        let moves = advisor.legal_moves(&grid);
        assert_eq!(
            &moves[..],
            [
                CellIndex::new(1),
                CellIndex::new(4),
                CellIndex::new(6),
                CellIndex::new(9),
            ]
        );
    }

    #[test]
    fn test_suggest_on_transposed_grid() {
        // Tiles 1 and 2 swapped, empty in the corner: cells 11 and 14 are
        // the legal moves and both project to distance 3, so 11 wins the tie
        let grid = grid_from_values([
            2, 1, 3, 4, //
            5, 6, 7, 8, //
            9, 10, 11, 12, //
            13, 14, 15, 0,
        ]);
        assert_eq!(evaluation::total_manhattan_distance(&grid), 2);

        let hint = HintAdvisor::new().suggest(&grid).expect("moves exist");
        assert_eq!(hint.index, CellIndex::new(11));
        assert_eq!(hint.tile, Tile::T12);
        assert_eq!(hint.projected_distance, 3);
    }

    #[test]
    fn test_suggest_finds_solving_move() {
        let grid = grid_from_values([
            1, 2, 3, 4, //
            5, 6, 7, 8, //
            9, 10, 11, 12, //
            13, 14, 0, 15,
        ]);

        let hint = HintAdvisor::new().suggest(&grid).expect("moves exist");
        assert_eq!(hint.index, CellIndex::new(15));
        assert_eq!(hint.tile, Tile::T15);
        assert_eq!(hint.projected_distance, 0);
    }

    #[test]
    fn test_suggest_breaks_ties_by_lowest_index() {
        // On the solved grid both legal moves worsen the distance equally,
        // so the lower index wins
        let hint = HintAdvisor::new()
            .suggest(&TileGrid::solved())
            .expect("moves exist");
        assert_eq!(hint.index, CellIndex::new(11));
        assert_eq!(hint.tile, Tile::T12);
        assert_eq!(hint.projected_distance, 1);
    }

    #[test]
    fn test_suggest_leaves_grid_untouched() {
        let grid = grid_from_values([
            5, 1, 2, 4, //
            9, 6, 3, 8, //
            13, 10, 7, 11, //
            14, 0, 15, 12,
        ]);
        let before = grid;

        let advisor = HintAdvisor::new();
        for _ in 0..10 {
            let _ = advisor.suggest(&grid);
        }
        assert_eq!(grid, before);
    }

    fn arb_grid() -> impl Strategy<Value = TileGrid> {
        Just((0..16_u8).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|values| {
                let mut array = [0_u8; 16];
                array.copy_from_slice(&values);
                TileGrid::from_values(array).expect("permutation is valid")
            })
    }

    proptest! {
        #[test]
        fn prop_suggestion_is_a_legal_move(grid in arb_grid()) {
            let hint = HintAdvisor::new().suggest(&grid).expect("a 4x4 grid always has moves");
            prop_assert!(hint.index.is_adjacent(grid.empty_index()));
            prop_assert_eq!(grid[hint.index], Some(hint.tile));
        }

        #[test]
        fn prop_suggestion_is_minimal_and_first(grid in arb_grid()) {
            let advisor = HintAdvisor::new();
            let hint = advisor.suggest(&grid).expect("a 4x4 grid always has moves");

            let empty_index = grid.empty_index();
            for index in advisor.legal_moves(&grid) {
                let projected = evaluation::total_manhattan_distance(
                    &grid.with_swapped(index, empty_index),
                );
                // No candidate beats the suggestion, and earlier candidates
                // do not even match it
                prop_assert!(projected >= hint.projected_distance);
                if index < hint.index {
                    prop_assert!(projected > hint.projected_distance);
                }
            }
        }

        #[test]
        fn prop_accepting_the_hint_reaches_the_projection(grid in arb_grid()) {
            let hint = HintAdvisor::new().suggest(&grid).expect("a 4x4 grid always has moves");
            let mut grid = grid;
            prop_assert!(grid.try_slide(hint.index));
            prop_assert_eq!(
                evaluation::total_manhattan_distance(&grid),
                hint.projected_distance
            );
        }
    }
}
