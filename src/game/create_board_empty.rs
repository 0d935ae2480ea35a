use crate::game::board::Board;
use crate::{GameError, Result};

/// Create an all-empty board with the given dimensions.
pub fn create_board_empty(height: usize, width: usize) -> Result<Board> {
    if height == 0 || width == 0 {
        return Err(GameError::InvalidDimensions { height, width });
    }
    Ok(Board {
        height,
        width,
        cells: vec![0; height * width],
    })
}
