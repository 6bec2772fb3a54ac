//! Core Connect Four game logic: board representation, players, win and tie
//! detection, and the turn state machine.

mod board;
pub mod detector;
mod player;
mod state;

pub use board::{Board, Cell, Column, Grid, COLS, ROWS};
pub use detector::{evaluate, Outcome};
pub use player::{Mark, Player};
pub use state::{Game, MoveReport, TurnState};

/// A complete game in which nobody ever connects four.
#[cfg(test)]
pub(crate) const DRAWN_GAME: [usize; 42] = [
    5, 4, 7, 1, 2, 5, 6, 6, 2, 2, 6, 1, 2, 7, 1, 2, 6, 6, 2, 1, 5,
    7, 4, 3, 7, 7, 1, 5, 7, 6, 3, 1, 5, 3, 5, 3, 3, 3, 4, 4, 4, 4,
];
