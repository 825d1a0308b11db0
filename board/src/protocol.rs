//! Wire format of the remote move endpoint:
//! `GET <endpoint>?board=<csv>&algorithm=<mcts|ab>&difficulty=<1-5>` answered
//! by `{"action": <column>}`. The board is sent row-major, top row first,
//! with a comma after every row (so after every value).
use serde::Deserialize;
use thiserror::Error;

use crate::{Algorithm, Board, Difficulty, MatchSettings, CELLS, HEIGHT, WIDTH};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("expected {expected} board values, found {found}")]
    ValueCount { expected: usize, found: usize },
    #[error("invalid board value {token:?} at index {index}")]
    InvalidToken { index: usize, token: String },
    #[error("board value {value} at index {index} is not -1, 0 or 1")]
    ValueOutOfRange { index: usize, value: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveQuery {
    pub board: String,
    pub algorithm: Algorithm,
    pub difficulty: Difficulty,
}

impl MoveQuery {
    pub fn new(board: &Board, settings: &MatchSettings) -> Self {
        Self {
            board: board.to_wire(),
            algorithm: settings.algorithm,
            difficulty: settings.difficulty,
        }
    }

    /// Query string pairs in the order the endpoint documents them.
    pub fn pairs(&self) -> [(&'static str, String); 3] {
        [
            ("board", self.board.clone()),
            ("algorithm", self.algorithm.as_str().to_string()),
            ("difficulty", self.difficulty.level().to_string()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MoveResponse {
    pub action: usize,
}

impl Board {
    pub fn to_wire(&self) -> String {
        let mut out = String::with_capacity(CELLS * 3);
        for row in self.rows() {
            for value in row {
                out.push_str(&value.to_string());
                out.push(',');
            }
        }
        out
    }

    /// Parses the wire format. The empty field after the trailing comma is
    /// ignored, a missing trailing comma is tolerated.
    pub fn from_wire(text: &str) -> Result<Board, WireError> {
        let text = text.trim();
        let text = text.strip_suffix(',').unwrap_or(text);
        let tokens: Vec<&str> = if text.is_empty() {
            Vec::new()
        } else {
            text.split(',').collect()
        };
        if tokens.len() != CELLS {
            return Err(WireError::ValueCount {
                expected: CELLS,
                found: tokens.len(),
            });
        }

        let mut cells = [[0i8; WIDTH]; HEIGHT];
        for (index, token) in tokens.iter().enumerate() {
            let value: i64 = token.trim().parse().map_err(|_| WireError::InvalidToken {
                index,
                token: token.to_string(),
            })?;
            if !(-1..=1).contains(&value) {
                return Err(WireError::ValueOutOfRange { index, value });
            }
            cells[index / WIDTH][index % WIDTH] = value as i8;
        }
        Board::from_rows(cells)
    }
}
