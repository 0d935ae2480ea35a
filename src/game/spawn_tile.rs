use crate::game::board::Board;
use crate::game::get_empty_cells::get_empty_cells;
use crate::{GameError, Result};
use rand::{Rng, RngExt};

/// Spawn one tile in a uniformly chosen empty cell: value 4 one time in ten,
/// value 2 otherwise. Empty cells are enumerated up front so a near-full
/// board never degenerates into retry loops. Returns the placed coordinate
/// and value, or `BoardFull` when no cell is empty.
pub fn spawn_tile<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(usize, usize, u32)> {
    let empty_cells = get_empty_cells(board);
    if empty_cells.is_empty() {
        return Err(GameError::BoardFull);
    }

    let (row, col) = empty_cells[rng.random_range(0..empty_cells.len())];
    let value = if rng.random_range(0..10) == 0 { 4 } else { 2 };
    board.set(row, col, value)?;
    Ok((row, col, value))
}
