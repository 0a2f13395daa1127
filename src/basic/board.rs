use itertools::Itertools;
use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{BoardDim, Cell};

/// Sorted, deduplicated list of the given cells that lie on the board
pub fn get_occupied_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>, board_dim: BoardDim) -> Vec<Cell> {
    cells
        .into_iter()
        .copied()
        .filter(|cell| board_dim.contains(*cell))
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Uniformly pick a cell that is not in `occupied_cells` (which must be
/// sorted and deduplicated, see `get_occupied_cells`), None if the
/// board is full. Draws once, never retries.
pub fn random_free_spot(occupied_cells: &[Cell], board_dim: BoardDim, rng: &mut impl Rng) -> Option<Cell> {
    let free_spaces = board_dim.cell_count() - occupied_cells.len();
    if free_spaces == 0 {
        return None;
    }

    // the n-th free cell, skip over every occupied index at or before it
    let mut new_idx = (0..free_spaces).sample_single(rng);
    for cell in occupied_cells {
        if board_dim.index_of(*cell) <= new_idx {
            new_idx += 1;
        }
    }

    debug_assert!(new_idx < board_dim.cell_count());
    Some(board_dim.cell_at(new_idx))
}
