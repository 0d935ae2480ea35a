use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::Result;

/// Starting coordinate of every traversal line for a direction: one per line,
/// on the edge the tiles slide toward. Lines then walk the direction's offset
/// away from that edge.
pub fn starting_tiles(board: &Board, direction: Direction) -> Vec<(usize, usize)> {
    match direction {
        Direction::Up => (0..board.width()).map(|col| (0, col)).collect(),
        Direction::Down => (0..board.width())
            .map(|col| (board.height() - 1, board.width() - 1 - col))
            .collect(),
        Direction::Left => (0..board.height()).map(|row| (row, 0)).collect(),
        Direction::Right => (0..board.height())
            .map(|row| (row, board.width() - 1))
            .collect(),
    }
}

/// Number of cells in one traversal line.
pub fn run_length(board: &Board, direction: Direction) -> usize {
    match direction {
        Direction::Up | Direction::Down => board.height(),
        Direction::Left | Direction::Right => board.width(),
    }
}

/// Collect the tile values of one line, walking `run_length` steps along the
/// direction's offset from the starting coordinate.
pub fn read_line(board: &Board, start: (usize, usize), direction: Direction) -> Result<Vec<u32>> {
    let (row_step, col_step) = direction.offset();
    let mut values = Vec::with_capacity(run_length(board, direction));
    for step in 0..run_length(board, direction) as isize {
        let row = (start.0 as isize + step * row_step) as usize;
        let col = (start.1 as isize + step * col_step) as usize;
        values.push(board.get(row, col)?);
    }
    Ok(values)
}
