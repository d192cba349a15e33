//! Player roles. The controller only depends on "produce a valid column
//! given a board", so non-human variants can slot in without touching it.

mod human;

pub use human::HumanPlayer;

use std::io;

use crate::console::Console;
use crate::game::{Board, Disc};

/// A seat at the board: anything that can choose a column for its disc.
pub trait Player {
    /// The disc this player drops.
    fn disc(&self) -> Disc;

    /// Choose a column for the next move. Implementations return a column
    /// that is valid for `board` at the time of the call; I/O errors on
    /// the console are the only failure mode.
    fn make_move(&mut self, board: &Board, console: &mut dyn Console) -> io::Result<usize>;
}
