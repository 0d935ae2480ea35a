// Session layer: the composition root owning one board, one seedable RNG,
// and the configured game-over rule. Pure functions over `GameSession`.

use crate::game::board::Board;
use crate::game::create_board_empty::create_board_empty;
use crate::game::direction::Direction;
use crate::game::is_game_over::{is_game_over, GameOverRule};
use crate::game::move_tiles::move_tiles;
use crate::game::spawn_tile::spawn_tile;
use crate::{GameError, Result};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// One running game: a board, its random source, and the terminal flag. The
/// flag is set only by the game-over detector and cleared only by `reset`.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub rule: GameOverRule,
    pub game_over: bool,
    rng: SmallRng,
}

/// Create a session with an entropy-seeded random source. The board starts
/// all zero and receives two spawned tiles.
pub fn new_session(height: usize, width: usize) -> Result<GameSession> {
    new_session_with_rng(height, width, SmallRng::from_rng(&mut rand::rng()))
}

/// Create a session with a fixed seed, for reproducible runs and tests.
pub fn new_session_seeded(height: usize, width: usize, seed: u64) -> Result<GameSession> {
    new_session_with_rng(height, width, SmallRng::seed_from_u64(seed))
}

fn new_session_with_rng(height: usize, width: usize, rng: SmallRng) -> Result<GameSession> {
    let mut session = GameSession {
        board: create_board_empty(height, width)?,
        rule: GameOverRule::default(),
        game_over: false,
        rng,
    };
    spawn_tile(&mut session.board, &mut session.rng)?;
    spawn_tile(&mut session.board, &mut session.rng)?;
    session.game_over = is_game_over(&session.board, session.rule);
    Ok(session)
}

/// Apply one directional move. When the board changed, exactly one new tile
/// is spawned; the terminal flag is refreshed either way. Returns whether the
/// board changed.
pub fn play_move(session: &mut GameSession, direction: Direction) -> Result<bool> {
    let changed = move_tiles(&mut session.board, direction)?;
    if changed {
        let (row, col, value) = spawn_tile(&mut session.board, &mut session.rng)?;
        debug!("spawned {value} at ({row}, {col}) after {direction:?} move");
    }
    session.game_over = is_game_over(&session.board, session.rule);
    Ok(changed)
}

/// Direct board read for inspection and test setup.
pub fn get_tile(session: &GameSession, row: usize, col: usize) -> Result<u32> {
    session.board.get(row, col)
}

/// Direct board write for test setup. Does not touch the terminal flag.
pub fn set_tile(session: &mut GameSession, row: usize, col: usize, value: u32) -> Result<()> {
    session.board.set(row, col, value)
}

pub fn is_session_over(session: &GameSession) -> bool {
    session.game_over
}

/// Reinitialize the board to the `new_session` state: all cells zeroed, two
/// tiles spawned, terminal flag recomputed. Dimensions, rule, and the RNG
/// stream are kept.
pub fn reset(session: &mut GameSession) -> Result<()> {
    session.board = create_board_empty(session.board.height(), session.board.width())?;
    spawn_tile(&mut session.board, &mut session.rng)?;
    spawn_tile(&mut session.board, &mut session.rng)?;
    session.game_over = is_game_over(&session.board, session.rule);
    Ok(())
}

/// Snapshot the board as a JSON string, the form front ends ship around.
pub fn board_to_json(session: &GameSession) -> Result<String> {
    serde_json::to_string(&session.board)
        .map_err(|error| GameError::Serialization(error.to_string()))
}

/// Restore a board snapshot produced by `board_to_json`.
pub fn board_from_json(json: &str) -> Result<Board> {
    serde_json::from_str(json).map_err(|error| GameError::Serialization(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn nonzero_count(session: &GameSession) -> usize {
        session
            .board
            .cells()
            .iter()
            .filter(|&&value| value != 0)
            .count()
    }

    #[test]
    fn new_session_spawns_exactly_two_tiles() {
        let session = new_session_seeded(4, 4, 1).unwrap();
        assert_eq!(nonzero_count(&session), 2);
        assert!(session
            .board
            .cells()
            .iter()
            .all(|&value| value == 0 || value == 2 || value == 4));
    }

    #[test]
    fn seeded_sessions_replay_identically() {
        let first = new_session_seeded(4, 4, 99).unwrap();
        let second = new_session_seeded(4, 4, 99).unwrap();
        assert_eq!(first.board, second.board);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert_matches!(
            new_session_seeded(0, 4, 1),
            Err(GameError::InvalidDimensions { .. })
        );
    }

    #[test]
    fn changed_move_spawns_one_tile() {
        let mut session = new_session_seeded(4, 4, 3).unwrap();
        // Force a board where a Left move must change something.
        session.board = create_board_empty(4, 4).unwrap();
        set_tile(&mut session, 0, 3, 2).unwrap();
        set_tile(&mut session, 1, 3, 4).unwrap();
        let changed = play_move(&mut session, Direction::Left).unwrap();
        assert!(changed);
        assert_eq!(nonzero_count(&session), 3);
        assert_eq!(get_tile(&session, 0, 0).unwrap(), 2);
        assert_eq!(get_tile(&session, 1, 0).unwrap(), 4);
    }

    #[test]
    fn unchanged_move_spawns_nothing() {
        let mut session = new_session_seeded(4, 4, 3).unwrap();
        session.board = create_board_empty(4, 4).unwrap();
        set_tile(&mut session, 0, 0, 2).unwrap();
        set_tile(&mut session, 1, 0, 4).unwrap();
        let before = session.board.clone();
        let changed = play_move(&mut session, Direction::Left).unwrap();
        assert!(!changed);
        assert_eq!(session.board, before);
    }

    #[test]
    fn reset_returns_to_a_fresh_two_tile_board() {
        let mut session = new_session_seeded(3, 3, 5).unwrap();
        play_move(&mut session, Direction::Down).unwrap();
        reset(&mut session).unwrap();
        assert_eq!(nonzero_count(&session), 2);
        assert_eq!(session.board.height(), 3);
        assert_eq!(session.board.width(), 3);
        assert!(!is_session_over(&session));
    }

    #[test]
    fn board_snapshot_round_trips_through_json() {
        let mut session = new_session_seeded(3, 3, 11).unwrap();
        set_tile(&mut session, 2, 2, 64).unwrap();
        let json = board_to_json(&session).unwrap();
        let restored = board_from_json(&json).unwrap();
        assert_eq!(restored, session.board);
    }

    #[test]
    fn malformed_snapshot_is_a_serialization_error() {
        assert_matches!(
            board_from_json("not json"),
            Err(GameError::Serialization(_))
        );
    }
}
