use crate::board::{Board, Coord, Outcome, WinningRun};
use crate::{MoveError, Player};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GameStatus {
    #[default]
    Running,
    Stopped,
}

/// Snapshot of a game between two moves.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
    winning: Option<WinningRun>,
    ply: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, player one to move.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            turn: Player::One,
            status: GameStatus::Running,
            winning: None,
            ply: 0,
        }
    }

    /// Resumes from an arbitrary position. The side to move is derived from
    /// the token count, player one moving on even counts.
    pub fn from_board(board: Board) -> Self {
        let filled = board.filled();
        let turn = if filled % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };
        let outcome = board.outcome();
        Self {
            board,
            turn,
            status: status_for(outcome.as_ref()),
            winning: winning_for(outcome.as_ref()),
            ply: filled as u32,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Number of accepted moves.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The four winning coordinates, or empty for a tie or a running game.
    pub fn winning_cells(&self) -> &[Coord] {
        match &self.winning {
            Some(run) => run.as_slice(),
            None => &[],
        }
    }

    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winning_cells().contains(&coord)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_running() {
            return None;
        }
        match self.winning {
            Some(run) => self
                .board
                .cell(run[0])
                .map(|player| Outcome::Win { player, run }),
            None => Some(Outcome::Tie),
        }
    }

    /// Plays `column` for the side to move and returns the next snapshot.
    /// The turn passes to the opponent even when the move ends the game.
    pub fn play(&self, column: usize) -> Result<Game, MoveError> {
        if !self.is_running() {
            return Err(MoveError::GameOver);
        }
        let placement = self.board.drop_token(column, self.turn)?;
        let outcome = placement.board.outcome();
        Ok(Game {
            board: placement.board,
            turn: self.turn.opponent(),
            status: status_for(outcome.as_ref()),
            winning: winning_for(outcome.as_ref()),
            ply: self.ply + 1,
        })
    }
}

fn status_for(outcome: Option<&Outcome>) -> GameStatus {
    match outcome {
        Some(_) => GameStatus::Stopped,
        None => GameStatus::Running,
    }
}

fn winning_for(outcome: Option<&Outcome>) -> Option<WinningRun> {
    match outcome {
        Some(Outcome::Win { run, .. }) => Some(*run),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};

    fn play_all(columns: &[usize]) -> Game {
        columns
            .iter()
            .fold(Game::new(), |game, &col| game.play(col).unwrap())
    }

    #[test]
    fn turn_alternates_after_each_move() {
        let mut game = Game::new();
        let mut expected = 1;
        for col in [3, 3, 2, 4, 0, 6] {
            assert_eq!(game.turn().value(), expected);
            game = game.play(col).unwrap();
            expected = -expected;
        }
        assert_eq!(game.ply(), 6);
        assert_eq!(game.turn().value(), 1);
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let game = play_all(&[0, 0, 0, 0, 0, 0]);
        assert_eq!(game.play(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(game.turn(), Player::One);
        assert_eq!(game.ply(), 6);
    }

    #[test]
    fn vertical_win_stops_the_game() {
        // X plays column 3, O answers in column 0 each time.
        let game = play_all(&[3, 0, 3, 0, 3, 0, 3]);
        assert_eq!(game.status(), GameStatus::Stopped);
        assert_eq!(
            game.winning_cells(),
            &[Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3), Coord::new(5, 3)]
        );
        assert_eq!(game.outcome().and_then(|o| o.winner()), Some(Player::One));
        // turn still flips on the final move
        assert_eq!(game.turn(), Player::Two);
        assert_eq!(game.play(1), Err(MoveError::GameOver));
    }

    #[test]
    fn filling_the_board_without_a_run_ties() {
        // Column pairs filled in a pattern that never lines up four.
        let order = [0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6];
        let game = play_all(&order);
        assert!(game.board().is_full());
        assert_eq!(game.board().filled(), WIDTH * HEIGHT);
        assert_eq!(game.status(), GameStatus::Stopped);
        assert!(game.winning_cells().is_empty());
        assert_eq!(game.outcome(), Some(Outcome::Tie));
    }

    #[test]
    fn resuming_derives_turn_and_status() {
        let played = play_all(&[3, 0, 3, 0, 3, 0, 3]);
        let resumed = Game::from_board(*played.board());
        assert_eq!(resumed.turn(), Player::Two);
        assert_eq!(resumed.ply(), 7);
        assert_eq!(resumed.winning_cells(), played.winning_cells());
        assert!(!resumed.is_running());
        assert!(Game::from_board(Board::empty()).is_running());
    }
}
