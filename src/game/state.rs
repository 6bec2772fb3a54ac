use log::{debug, info};

use super::board::{Board, COLS};
use super::detector::{self, Outcome};
use super::player::{Mark, Player};
use crate::error::MoveError;

/// Where the turn loop stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove(Mark),
    Won(Mark),
    Tied,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }

    /// The player expected to move, if the game is still running
    pub fn active(self) -> Option<Mark> {
        match self {
            TurnState::AwaitingMove(mark) => Some(mark),
            _ => None,
        }
    }
}

/// What happened on one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Mark,
    /// 0-based column the piece went into
    pub column: usize,
    /// Row the piece landed on, 0 is the bottom
    pub row: usize,
    pub outcome: Outcome,
    pub state: TurnState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    state: TurnState,
    moves: usize,
}

impl Game {
    /// Start a game on an empty board; `first` moves first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::with_board(Board::new(), first, second, Mark::A)
    }

    /// Start from an existing position with `to_move` on turn.
    pub fn with_board(
        board: Board,
        first: impl Into<String>,
        second: impl Into<String>,
        to_move: Mark,
    ) -> Self {
        Game {
            board,
            players: [Player::new(first, Mark::A), Player::new(second, Mark::B)],
            state: TurnState::AwaitingMove(to_move),
            moves: 0,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[mark.index()]
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves accepted since the game started
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            TurnState::Won(mark) => Some(self.player(mark)),
            _ => None,
        }
    }

    /// Clear the board and hand the first move back to the first player.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.state = TurnState::AwaitingMove(Mark::A);
        self.moves = 0;
    }

    /// Play the active player's piece into column `choice` (1 to 7).
    ///
    /// A rejected move leaves the game untouched, including whose turn it
    /// is, so the caller can ask the same player again.
    pub fn step(&mut self, choice: usize) -> Result<MoveReport, MoveError> {
        let mover = self.state.active().ok_or(MoveError::GameOver)?;

        if !(1..=COLS).contains(&choice) {
            debug!("rejected column {choice} from {}", self.player(mover).name());
            return Err(MoveError::InvalidColumn);
        }
        let column = choice - 1;

        let row = match self.board.drop_piece(column, mover) {
            Ok(row) => row,
            Err(err) => {
                debug!("rejected column {choice} from {}: {err}", self.player(mover).name());
                return Err(err);
            }
        };
        self.moves += 1;

        let outcome = detector::evaluate(self.board.snapshot(), mover);
        self.state = match outcome {
            Outcome::WonBy(mark) => TurnState::Won(mark),
            Outcome::Tie => TurnState::Tied,
            Outcome::InProgress => TurnState::AwaitingMove(mover.other()),
        };

        debug!(
            "move {}: {} -> column {choice}, row {}",
            self.moves,
            self.player(mover).name(),
            row + 1
        );
        match outcome {
            Outcome::WonBy(mark) => {
                info!("{} won after {} moves", self.player(mark).name(), self.moves)
            }
            Outcome::Tie => info!("tie after {} moves", self.moves),
            Outcome::InProgress => {}
        }

        Ok(MoveReport {
            mover,
            column,
            row,
            outcome,
            state: self.state,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new("player 1", "player 2")
    }
}
