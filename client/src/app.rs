use board::{Game, MatchSettings, MoveQuery, Outcome, Player, WIDTH};
use tracing::{debug, info, warn};

use crate::remote::{RemoteMove, Ticket};

const START_COLUMN: usize = WIDTH / 2;

/// Everything that can change the app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    CursorLeft,
    CursorRight,
    DropSelected,
    DropInColumn(usize),
    CycleEnginePlayer,
    ToggleAlgorithm,
    RaiseDifficulty,
    LowerDifficulty,
    Reset,
    Quit,
    Remote(RemoteMove),
}

/// Side effects the runtime carries out after a state change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    RequestMove { ticket: Ticket, query: MoveQuery },
    CancelMove,
}

pub struct App {
    game: Game,
    game_id: u64,
    settings: MatchSettings,
    selected_column: usize,
    awaiting: Option<Ticket>,
    should_quit: bool,
}

impl App {
    pub fn new(settings: MatchSettings) -> Self {
        Self {
            game: Game::new(),
            game_id: 0,
            settings,
            selected_column: START_COLUMN,
            awaiting: None,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            game: self.game_id,
            ply: self.game.ply(),
        }
    }

    /// Ticket of the engine request the app is waiting on, if any.
    pub fn awaiting(&self) -> Option<Ticket> {
        self.awaiting
    }

    pub fn is_engine_turn(&self) -> bool {
        self.game.is_running() && self.settings.is_engine(self.game.turn())
    }

    pub fn accepts_human_input(&self) -> bool {
        self.game.is_running() && !self.settings.is_engine(self.game.turn())
    }

    /// Effects needed right after construction, e.g. when the engine
    /// plays first.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.sync_engine(&mut effects);
        effects
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match intent {
            Intent::CursorLeft => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            Intent::CursorRight => {
                self.selected_column = (self.selected_column + 1).min(WIDTH - 1);
            }
            Intent::DropSelected => self.human_move(self.selected_column),
            Intent::DropInColumn(column) => {
                if column < WIDTH {
                    self.selected_column = column;
                }
                self.human_move(column);
            }
            Intent::CycleEnginePlayer => {
                self.settings.cycle_ai_player();
                info!(ai_player = board::side_name(self.settings.ai_player), "engine side changed");
            }
            Intent::ToggleAlgorithm => {
                self.settings.algorithm = self.settings.algorithm.toggled();
                info!(algorithm = %self.settings.algorithm, "algorithm changed");
            }
            Intent::RaiseDifficulty => {
                self.settings.difficulty = self.settings.difficulty.raised();
            }
            Intent::LowerDifficulty => {
                self.settings.difficulty = self.settings.difficulty.lowered();
            }
            Intent::Reset => self.reset(),
            Intent::Quit => {
                self.should_quit = true;
                if self.awaiting.take().is_some() {
                    effects.push(Effect::CancelMove);
                }
                return effects;
            }
            Intent::Remote(remote) => self.engine_move(remote),
        }
        self.sync_engine(&mut effects);
        effects
    }

    pub fn status_message(&self) -> String {
        match self.game.outcome() {
            Some(Outcome::Tie) => "Tie".to_string(),
            Some(Outcome::Win { player, .. }) => match self.settings.ai_player {
                Some(engine) if engine == player => "I win".to_string(),
                Some(_) => "You win".to_string(),
                None => format!("Player {} wins", player.number()),
            },
            None => {
                let turn = self.game.turn();
                match self.settings.ai_player {
                    Some(engine) if engine == turn => "I am thinking...".to_string(),
                    Some(_) => "Your turn, human".to_string(),
                    None => format!("Player {} to move", turn.number()),
                }
            }
        }
    }

    fn human_move(&mut self, column: usize) {
        if !self.accepts_human_input() {
            debug!(column, "ignoring input outside the human's turn");
            return;
        }
        match self.game.play(column) {
            Ok(next) => {
                debug!(column, ply = next.ply(), "human move");
                self.advance(next);
            }
            Err(err) => debug!(column, error = %err, "illegal move ignored"),
        }
    }

    fn engine_move(&mut self, remote: RemoteMove) {
        if self.awaiting != Some(remote.ticket) || remote.ticket != self.ticket() {
            debug!(
                game = remote.ticket.game,
                ply = remote.ticket.ply,
                "dropping stale engine move"
            );
            return;
        }
        // An illegal answer keeps the ticket claimed so the same position is
        // not requested again.
        match self.game.play(remote.column) {
            Ok(next) => {
                self.awaiting = None;
                self.advance(next);
            }
            Err(err) => {
                warn!(
                    column = remote.column,
                    legal = ?self.game.board().legal_columns(),
                    error = %err,
                    "engine chose an illegal move"
                );
                debug!(board = %self.game.board(), "position sent to the engine");
            }
        }
    }

    fn advance(&mut self, next: Game) {
        self.game = next;
        if let Some(outcome) = self.game.outcome() {
            match outcome.winner() {
                Some(player) => info!(winner = player.number(), ply = self.game.ply(), "game won"),
                None => info!("game tied"),
            }
        }
    }

    fn reset(&mut self) {
        self.game = Game::new();
        self.game_id += 1;
        self.selected_column = START_COLUMN;
        info!(game = self.game_id, "new game");
    }

    /// Keeps exactly one engine request alive while it is the engine's
    /// turn, and none otherwise.
    fn sync_engine(&mut self, effects: &mut Vec<Effect>) {
        let wanted = self.is_engine_turn().then(|| self.ticket());
        if self.awaiting == wanted {
            return;
        }
        if self.awaiting.take().is_some() {
            effects.push(Effect::CancelMove);
        }
        if let Some(ticket) = wanted {
            effects.push(Effect::RequestMove {
                ticket,
                query: MoveQuery::new(self.game.board(), &self.settings),
            });
            self.awaiting = Some(ticket);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MatchSettings::default())
    }
}

/// Which token the human controls, when exactly one side is human.
pub fn human_player(settings: &MatchSettings) -> Option<Player> {
    settings.ai_player.map(Player::opponent)
}
