use crate::game::board::Board;
use crate::game::get_empty_cells::get_empty_cells;
use serde::{Deserialize, Serialize};

/// How adjacency is judged when deciding that no merge opportunity remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOverRule {
    /// Compare raw stored values, zero included: two neighboring empty cells
    /// count as a pending match, and an isolated empty cell does not keep the
    /// game alive. This reproduces the reference behavior verbatim; see
    /// `Strict` for conventional semantics.
    #[default]
    Literal,
    /// Conventional semantics: the game continues while any cell is empty or
    /// any two neighboring nonzero tiles are equal.
    Strict,
}

/// Whether no legal merge opportunity remains anywhere on the board.
pub fn is_game_over(board: &Board, rule: GameOverRule) -> bool {
    match rule {
        GameOverRule::Literal => !has_adjacent_equal_pair(board, false),
        GameOverRule::Strict => {
            get_empty_cells(board).is_empty() && !has_adjacent_equal_pair(board, true)
        }
    }
}

/// Scan every horizontally and vertically adjacent cell pair for equality.
/// With `nonzero_only` set, empty pairs are ignored.
fn has_adjacent_equal_pair(board: &Board, nonzero_only: bool) -> bool {
    let cells = board.cells();
    let width = board.width();
    for row in 0..board.height() {
        for col in 0..width {
            let value = cells[row * width + col];
            if nonzero_only && value == 0 {
                continue;
            }
            if col + 1 < width && cells[row * width + col + 1] == value {
                return true;
            }
            if row + 1 < board.height() && cells[(row + 1) * width + col] == value {
                return true;
            }
        }
    }
    false
}
