use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::game::merge_line::merge_line;
use crate::game::traversal::{read_line, starting_tiles};
use crate::Result;

/// Slide and merge every tile toward the given edge.
///
/// Each traversal line is read from the board, merged independently, and
/// written back along the same coordinates. Returns whether any line changed
/// at any position; only a changed board warrants spawning a new tile.
pub fn move_tiles(board: &mut Board, direction: Direction) -> Result<bool> {
    let (row_step, col_step) = direction.offset();
    let mut changed = false;

    for start in starting_tiles(board, direction) {
        let line = read_line(board, start, direction)?;
        let merged = merge_line(&line);
        if merged != line {
            changed = true;
            for (step, &value) in merged.iter().enumerate() {
                let row = (start.0 as isize + step as isize * row_step) as usize;
                let col = (start.1 as isize + step as isize * col_step) as usize;
                board.set(row, col, value)?;
            }
        }
    }

    Ok(changed)
}
