//! Core Connect Four game logic: board representation, seats, and the
//! round state machine.

mod board;
mod state;

pub use board::{Board, Cell, Disc, MoveError, COLS, CONNECT, ROWS};
pub use state::{GameOutcome, GameState};
