//! Connect 4 rules for a client that plays against a remote engine.
//! Boards are plain `Copy` values: every accepted move returns a fresh
//! snapshot, so a rejected move can never leave a half-applied board behind.
//! Move *selection* for the computer side lives elsewhere; this crate only
//! applies moves, detects the end of the game and speaks the engine's wire
//! format.
mod board;
mod game;
mod protocol;
mod settings;

pub use board::{Board, Coord, Outcome, Placement, WinningRun};
pub use game::{Game, GameStatus};
pub use protocol::{MoveQuery, MoveResponse, WireError};
pub use settings::{parse_side, side_name, Algorithm, Difficulty, MatchSettings, SettingsError};

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;
pub const CELLS: usize = WIDTH * HEIGHT;
pub const RUN_LEN: usize = 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Cell value used on the board and on the wire.
    pub fn value(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    pub fn from_value(value: i8) -> Option<Player> {
        match value {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("the game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_values_are_opposite_signs() {
        assert_eq!(Player::One.value(), 1);
        assert_eq!(Player::Two.value(), -1);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::from_value(-1), Some(Player::Two));
        assert_eq!(Player::from_value(0), None);
    }
}
