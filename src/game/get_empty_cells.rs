use crate::game::board::Board;

/// Returns the coordinates of all empty cells on the board, row-major.
pub fn get_empty_cells(board: &Board) -> Vec<(usize, usize)> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(index, &value)| {
            if value == 0 {
                Some((index / board.width(), index % board.width()))
            } else {
                None
            }
        })
        .collect()
}
