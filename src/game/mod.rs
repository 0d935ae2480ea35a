pub mod board;
pub mod create_board_empty;
pub mod direction;
pub mod get_empty_cells;
pub mod is_game_over;
pub mod merge_line;
pub mod move_tiles;
pub mod spawn_tile;
pub mod traversal;

pub use board::Board;
pub use create_board_empty::create_board_empty;
pub use direction::Direction;
pub use get_empty_cells::get_empty_cells;
pub use is_game_over::{is_game_over, GameOverRule};
pub use move_tiles::move_tiles;
pub use spawn_tile::spawn_tile;
