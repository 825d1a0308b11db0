use std::fmt;

use once_cell::sync::Lazy;

use crate::protocol::WireError;
use crate::{MoveError, Player, HEIGHT, RUN_LEN, WIDTH};

/// Every line of four on the board, in the order the detector reports them:
/// horizontal, vertical, down-right diagonal, down-left diagonal.
static RUNS: Lazy<Vec<WinningRun>> = Lazy::new(generate_runs);

/// Row 0 is the top of the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

pub type WinningRun = [Coord; RUN_LEN];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win { player: Player, run: WinningRun },
    Tie,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Tie => None,
        }
    }
}

/// Result of a successful gravity drop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub board: Board,
    pub row: usize,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[i8; WIDTH]; HEIGHT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from raw cell values. Gravity is not enforced, the
    /// engine's wire format does not enforce it either.
    pub fn from_rows(cells: [[i8; WIDTH]; HEIGHT]) -> Result<Self, WireError> {
        for (row, line) in cells.iter().enumerate() {
            for (column, &value) in line.iter().enumerate() {
                if !(-1..=1).contains(&value) {
                    return Err(WireError::ValueOutOfRange {
                        index: row * WIDTH + column,
                        value: value.into(),
                    });
                }
            }
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> &[[i8; WIDTH]; HEIGHT] {
        &self.cells
    }

    pub fn value(&self, coord: Coord) -> i8 {
        self.cells[coord.row][coord.column]
    }

    pub fn cell(&self, coord: Coord) -> Option<Player> {
        Player::from_value(self.value(coord))
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    pub fn column_is_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| !self.column_is_full(col)).collect()
    }

    /// Lowest empty row of `column`, scanning from the bottom up.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.cells[row][column] == 0)
    }

    /// Drops a token for `player`. The receiver is never modified: a legal
    /// move yields a new board, an illegal one an error.
    pub fn drop_token(&self, column: usize, player: Player) -> Result<Placement, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::ColumnOutOfBounds { column });
        }
        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        let mut board = *self;
        board.cells[row][column] = player.value();
        Ok(Placement { board, row })
    }

    /// First line of four whose values sum to ±4.
    pub fn winning_run(&self) -> Option<WinningRun> {
        RUNS.iter()
            .find(|run| {
                let sum: i32 = run.iter().map(|&c| i32::from(self.value(c))).sum();
                sum.abs() == RUN_LEN as i32
            })
            .copied()
    }

    /// `None` while the game can continue.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(run) = self.winning_run() {
            let player = self.cell(run[0])?;
            return Some(Outcome::Win { player, run });
        }
        if self.is_full() {
            return Some(Outcome::Tie);
        }
        None
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let row: String = line
                .iter()
                .map(|&v| match v {
                    1 => 'X',
                    -1 => 'O',
                    _ => '.',
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

fn generate_runs() -> Vec<WinningRun> {
    let mut runs = Vec::new();
    // Horizontal
    for row in 0..HEIGHT {
        for col in 0..=WIDTH - RUN_LEN {
            runs.push(run_from(row, col, 0, 1));
        }
    }
    // Vertical
    for row in 0..=HEIGHT - RUN_LEN {
        for col in 0..WIDTH {
            runs.push(run_from(row, col, 1, 0));
        }
    }
    // Diagonal \
    for row in 0..=HEIGHT - RUN_LEN {
        for col in 0..=WIDTH - RUN_LEN {
            runs.push(run_from(row, col, 1, 1));
        }
    }
    // Diagonal /
    for row in 0..=HEIGHT - RUN_LEN {
        for col in RUN_LEN - 1..WIDTH {
            runs.push(run_from(row, col, 1, -1));
        }
    }
    runs
}

fn run_from(row: usize, col: usize, d_row: usize, d_col: isize) -> WinningRun {
    std::array::from_fn(|offset| {
        let column = col as isize + d_col * offset as isize;
        Coord::new(row + d_row * offset, column as usize)
    })
}
