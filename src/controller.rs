//! Round orchestration: turn order, the retry loop for invalid moves, and
//! the restart/exit prompt between rounds.

use std::io;

use tracing::{debug, info, warn};

use crate::console::Console;
use crate::game::{Disc, GameOutcome, GameState};
use crate::players::Player;
use crate::ui::GameView;

/// Answer to the end-of-round prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartChoice {
    Restart,
    Exit,
}

impl RestartChoice {
    /// Parse a restart/exit answer, case-insensitively. `None` means the
    /// input was not recognized and the prompt should repeat.
    pub fn parse(input: &str) -> Option<RestartChoice> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "yes" | "y" => Some(RestartChoice::Restart),
            "0" | "no" | "n" => Some(RestartChoice::Exit),
            _ => None,
        }
    }
}

/// Drives rounds until the players decline a restart. Owns the game state;
/// players and the view are fixed at construction.
pub struct GameController {
    state: GameState,
    players: [Box<dyn Player>; 2],
    view: GameView,
}

impl GameController {
    /// `first` takes the Red seat and moves first in every round; `second`
    /// takes Yellow.
    pub fn new(view: GameView, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        GameController {
            state: GameState::new(),
            players: [first, second],
            view,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play rounds until the exit choice; returns with success when the
    /// players are done. I/O errors on the console are fatal.
    pub fn run(&mut self, console: &mut dyn Console) -> io::Result<()> {
        console.print_line(&self.view.welcome())?;

        loop {
            self.play_round(console)?;

            match self.prompt_restart(console)? {
                RestartChoice::Restart => {
                    info!("restarting with a fresh board");
                    self.state.reset();
                }
                RestartChoice::Exit => {
                    console.print_line(&self.view.farewell())?;
                    return Ok(());
                }
            }
        }
    }

    /// One round: alternate turns until the state machine reaches a
    /// terminal outcome, then announce it.
    fn play_round(&mut self, console: &mut dyn Console) -> io::Result<()> {
        while !self.state.is_terminal() {
            console.print_line(&self.view.render_board(self.state.board()))?;

            let current = self.state.current_player();
            console.print_line(&self.view.turn_banner(current))?;

            let seat = seat_index(current);
            let column = self.players[seat].make_move(self.state.board(), console)?;

            match self.state.apply_move(column) {
                Ok(row) => {
                    debug!(column, row, player = current.name(), "disc dropped");
                }
                Err(err) => {
                    // Same player retries; the turn does not pass.
                    warn!(column, %err, player = current.name(), "move rejected");
                    console.print_line(&self.view.invalid_move())?;
                }
            }
        }

        console.print_line(&self.view.render_board(self.state.board()))?;
        match self.state.outcome() {
            Some(GameOutcome::Winner(disc)) => {
                info!(winner = disc.name(), "round won");
                console.print_line(&self.view.winner(disc))?;
            }
            Some(GameOutcome::Draw) => {
                info!("round drawn");
                console.print_line(&self.view.draw())?;
            }
            None => {}
        }
        Ok(())
    }

    /// Bounded prompt loop, repeating until the answer is recognized.
    fn prompt_restart(&mut self, console: &mut dyn Console) -> io::Result<RestartChoice> {
        loop {
            console.print_line(&self.view.restart_prompt())?;
            let input = console.read_line()?;
            match RestartChoice::parse(&input) {
                Some(choice) => return Ok(choice),
                None => console.print_line(&self.view.invalid_move())?,
            }
        }
    }
}

fn seat_index(disc: Disc) -> usize {
    match disc {
        Disc::Red => 0,
        Disc::Yellow => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::console::TermConsole;
    use crate::game::Cell;
    use crate::players::HumanPlayer;
    use std::io::Cursor;

    #[test]
    fn test_restart_choice_parsing() {
        for input in ["1", "yes", "Yes", "YES", "y", "Y", " y "] {
            assert_eq!(RestartChoice::parse(input), Some(RestartChoice::Restart));
        }
        for input in ["0", "no", "No", "NO", "n", "N", " n "] {
            assert_eq!(RestartChoice::parse(input), Some(RestartChoice::Exit));
        }
        for input in ["", "maybe", "2", "yy", "nope"] {
            assert_eq!(RestartChoice::parse(input), None);
        }
    }

    fn controller() -> GameController {
        GameController::new(
            GameView::new(&DisplayConfig::default()),
            Box::new(HumanPlayer::new(Disc::Red, 'X')),
            Box::new(HumanPlayer::new(Disc::Yellow, 'O')),
        )
    }

    /// Run a scripted session: 1-based column entries plus restart answers.
    fn run_script(script: &str) -> (GameController, io::Result<()>, String) {
        let mut console = TermConsole::new(Cursor::new(script.to_string()), Vec::new());
        let mut controller = controller();
        let result = controller.run(&mut console);
        let output = String::from_utf8(console.into_writer()).unwrap();
        (controller, result, output)
    }

    #[test]
    fn test_horizontal_win_then_exit() {
        // X at columns 1-4 along the bottom row, O stacked above.
        let (controller, result, output) = run_script("1\n1\n2\n2\n3\n3\n4\nn\n");

        result.unwrap();
        assert!(output.contains("Congratulations! Player X has won the game!"));
        assert!(output.contains("Thank you for playing! Bye."));
        assert_eq!(
            controller.state().outcome(),
            Some(GameOutcome::Winner(Disc::Red))
        );
    }

    #[test]
    fn test_invalid_input_reprompts_same_player() {
        let (_, result, output) = run_script("zzz\n1\n1\n2\n2\n3\n3\n4\nn\n");

        result.unwrap();
        assert!(output.contains("Invalid input"));
        assert!(output.contains("has won the game"));
    }

    #[test]
    fn test_unrecognized_restart_answer_reprompts() {
        let (_, result, output) = run_script("1\n1\n2\n2\n3\n3\n4\nmaybe\nn\n");

        result.unwrap();
        assert_eq!(output.matches("Would you like to play again?").count(), 2);
    }

    #[test]
    fn test_restart_resets_board_and_first_seat() {
        // First round: X wins horizontally. Restart. Second round: X wins
        // vertically in column 1, which only works from an empty board with
        // the first seat to move.
        let (controller, result, output) =
            run_script("1\n1\n2\n2\n3\n3\n4\ny\n1\n2\n1\n2\n1\n2\n1\nn\n");

        result.unwrap();
        assert_eq!(output.matches("has won the game").count(), 2);
        assert_eq!(
            controller.state().outcome(),
            Some(GameOutcome::Winner(Disc::Red))
        );
        // The second round's vertical win: column 0 holds four X discs.
        assert_eq!(controller.state().board().get(2, 0), Cell::Red);
        assert_eq!(controller.state().board().get(5, 1), Cell::Yellow);
    }

    #[test]
    fn test_draw_announcement() {
        // A 42-move draw fill (alternating columns, no four-in-a-row),
        // entered as 1-based columns.
        let plies = [
            0, 2, 2, 0, 0, 2, 2, 0, 0, 2, 2, 0, //
            1, 3, 3, 1, 1, 3, 3, 1, 1, 3, 3, 1, //
            4, 6, 6, 4, 4, 6, 6, 4, 4, 6, 6, 4, //
            5, 5, 5, 5, 5, 5,
        ];
        let mut script = String::new();
        for col in plies {
            script.push_str(&(col + 1).to_string());
            script.push('\n');
        }
        script.push_str("n\n");

        let (controller, result, output) = run_script(&script);

        result.unwrap();
        assert!(output.contains("The game is a draw"));
        assert_eq!(controller.state().outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_eof_mid_game_is_an_error() {
        let (_, result, _) = run_script("1\n1\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
