//! # Sliding-Tile Merge Puzzle Engine
//!
//! Rule engine for a 2048-style sliding-tile merge puzzle on a rectangular
//! grid. Tiles hold powers of two; a directional move slides every tile
//! toward one edge, merges adjacent equal tiles once per move, and spawns a
//! new tile whenever the board changed.
//!
//! ## Features
//!
//! - **Board**: rectangular grid with checked tile access
//! - **Move engine**: four-direction traversal with strip/merge/pad line logic
//! - **Tile spawner**: uniform pick among empty cells, value 2 or 4 (9:1)
//! - **Game-over detection**: literal or strict adjacency semantics
//! - **Sessions**: deterministic, seedable game sessions for replay and tests
//!
//! ## Usage
//!
//! ```rust
//! use twenty_forty_eight::{new_session_seeded, play_move, Direction};
//!
//! let mut session = new_session_seeded(4, 4, 42).unwrap();
//! let changed = play_move(&mut session, Direction::Left).unwrap();
//! println!("board changed: {changed}");
//! ```

/// Core game logic and rules
pub mod game;

/// Game session lifecycle and the public move/spawn flow
pub mod session;

/// Logging setup
pub mod logging;

pub use game::*;
pub use session::*;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the puzzle engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("invalid direction index {0}, expected 0..=3")]
    InvalidDirection(u8),

    #[error("invalid board dimensions {height}x{width}, both must be positive")]
    InvalidDimensions { height: usize, width: usize },

    #[error("no empty cell left to spawn a tile")]
    BoardFull,

    #[error("board serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GameError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
