use std::io;

use super::Player;
use crate::console::Console;
use crate::game::{Board, Disc, COLS};

/// A human player reading 1-based column choices from the console.
pub struct HumanPlayer {
    disc: Disc,
    symbol: char,
}

impl HumanPlayer {
    /// `symbol` is the glyph used in this player's prompts (it matches how
    /// the view renders their discs).
    pub fn new(disc: Disc, symbol: char) -> Self {
        HumanPlayer { disc, symbol }
    }
}

impl Player for HumanPlayer {
    fn disc(&self) -> Disc {
        self.disc
    }

    /// Prompt until the input parses as an in-range column that still has
    /// room. Blocking, no timeout.
    fn make_move(&mut self, board: &Board, console: &mut dyn Console) -> io::Result<usize> {
        loop {
            console.print_line(&format!(
                "Player {}, enter your column choice (1-{}):",
                self.symbol, COLS
            ))?;
            let input = console.read_line()?;

            let Some(col) = parse_column(&input) else {
                console.print_line("Invalid input. Please enter a number corresponding to a column.")?;
                continue;
            };
            if !board.can_place(col) {
                console.print_line("That column is full. Please try a different column.")?;
                continue;
            }
            return Ok(col);
        }
    }
}

/// Parse a 1-based column entry into a 0-based index. Surrounding
/// whitespace is tolerated; non-numeric text and out-of-range numbers are
/// rejected.
fn parse_column(input: &str) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=COLS).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}
