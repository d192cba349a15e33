use super::{Board, Disc, MoveError};

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Disc),
    Draw,
}

/// The round state machine: in progress while `outcome` is `None`, won or
/// drawn once it is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Disc,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial state with an empty board; Red moves first.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current: Disc::Red,
            outcome: None,
        }
    }

    /// Get current seat
    pub fn current_player(&self) -> Disc {
        self.current
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the outcome if the round is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the round is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's disc into `column` and advance the state
    /// machine. Returns the landing row. The win check runs before the
    /// draw check so a winning move on the last free cell is never
    /// misclassified as a draw. The turn passes only on a successful,
    /// non-terminal move: a winner stays current for the announcement.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_disc(column, self.current)?;

        if self.board.is_winning_move(column, self.current) {
            self.outcome = Some(GameOutcome::Winner(self.current));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current = self.current.other();
        }

        Ok(row)
    }

    /// Start a fresh round: empty board, no outcome, first seat to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Disc::Red;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
