use crate::config::DisplayConfig;
use crate::game::{Board, Cell, Disc, COLS, ROWS};

/// Renders board state and user-facing messages with the configured
/// glyphs. Purely presentational.
pub struct GameView {
    red_symbol: char,
    yellow_symbol: char,
    empty_symbol: char,
}

impl GameView {
    pub fn new(display: &DisplayConfig) -> Self {
        GameView {
            red_symbol: display.red_symbol,
            yellow_symbol: display.yellow_symbol,
            empty_symbol: display.empty_symbol,
        }
    }

    /// The glyph used for a seat's discs.
    pub fn symbol(&self, disc: Disc) -> char {
        match disc {
            Disc::Red => self.red_symbol,
            Disc::Yellow => self.yellow_symbol,
        }
    }

    fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty_symbol,
            Cell::Red => self.red_symbol,
            Cell::Yellow => self.yellow_symbol,
        }
    }

    /// The board as rows of glyphs with the 1-based column legend beneath.
    pub fn render_board(&self, board: &Board) -> String {
        let mut out = String::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                if col > 0 {
                    out.push(' ');
                }
                out.push(self.glyph(board.get(row, col)));
            }
            out.push('\n');
        }
        for col in 1..=COLS {
            if col > 1 {
                out.push(' ');
            }
            out.push_str(&col.to_string());
        }
        out
    }

    pub fn welcome(&self) -> String {
        "Welcome to Connect Four!\nDrop discs by column; four in a row wins.\n".to_string()
    }

    pub fn turn_banner(&self, disc: Disc) -> String {
        format!("It is Player {}'s turn.", self.symbol(disc))
    }

    pub fn winner(&self, disc: Disc) -> String {
        format!("Congratulations! Player {} has won the game!", self.symbol(disc))
    }

    pub fn draw(&self) -> String {
        "The game is a draw. There are no more moves possible.".to_string()
    }

    pub fn invalid_move(&self) -> String {
        "Invalid move. Please try again.".to_string()
    }

    pub fn restart_prompt(&self) -> String {
        "Game over. Would you like to play again? (y/1 or n/0)".to_string()
    }

    pub fn farewell(&self) -> String {
        "Thank you for playing! Bye.".to_string()
    }
}
