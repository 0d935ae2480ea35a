use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// The four move directions. A move slides every tile toward the named edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step walked along a traversal line, as (row, col) deltas. Lines
    /// start on the edge the tiles slide toward and walk away from it, so the
    /// offset points opposite to the slide: `Up` walks downward, `Left` walks
    /// rightward, and so on.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }

    /// Convert a numeric index (0=Up, 1=Down, 2=Left, 3=Right) into a
    /// direction. Anything outside 0..=3 is an `InvalidDirection` error.
    pub fn from_index(index: u8) -> Result<Direction> {
        match index {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            other => Err(GameError::InvalidDirection(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn index_round_trip() {
        for (index, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(index as u8).unwrap(), *direction);
        }
    }

    #[test]
    fn unknown_index_is_invalid() {
        assert_matches!(Direction::from_index(4), Err(GameError::InvalidDirection(4)));
        assert_matches!(
            Direction::from_index(255),
            Err(GameError::InvalidDirection(255))
        );
    }

    #[test]
    fn offsets_point_away_from_the_target_edge() {
        assert_eq!(Direction::Up.offset(), (1, 0));
        assert_eq!(Direction::Down.offset(), (-1, 0));
        assert_eq!(Direction::Left.offset(), (0, 1));
        assert_eq!(Direction::Right.offset(), (0, -1));
    }
}
