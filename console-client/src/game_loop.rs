use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_common::games::tictactoe::{GameOutcome, GameSettings, InvalidMove, Mark, TicTacToeGameState};
use tictactoe_common::games::SessionRng;
use tictactoe_common::log;

use crate::input::{Command, parse_command};
use crate::render::render_board;

const HELP_TEXT: &str = "Enter 1-9 to place your mark (1 is top left, 9 is bottom right).\n\
n: new game, q: quit, h: this help";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Mark::Human) => self.wins += 1,
            Some(Mark::Ai) => self.losses += 1,
            None if outcome == GameOutcome::Tie => self.ties += 1,
            None => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Finished(GameOutcome),
    Restart,
    Quit,
}

pub struct ConsoleGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    settings: GameSettings,
    player_name: String,
    rng: SessionRng,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, settings: GameSettings, player_name: String, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            settings,
            player_name,
            rng,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn run(&mut self) -> io::Result<Scoreboard> {
        loop {
            match self.play_one()? {
                GameEnd::Finished(_) => {
                    if !self.ask_play_again()? {
                        break;
                    }
                }
                GameEnd::Restart => {}
                GameEnd::Quit => break,
            }
        }
        Ok(self.scoreboard)
    }

    fn play_one(&mut self) -> io::Result<GameEnd> {
        let mut state = TicTacToeGameState::new(self.settings.first_player, &mut self.rng);
        log!("New game for {} (first: {:?})", self.player_name, state.first_mark());

        let intro = match state.first_mark() {
            Mark::Human => format!("{}, you play O and go first.", self.player_name),
            Mark::Ai => format!("{}, you play O. The computer (X) goes first.", self.player_name),
        };
        writeln!(self.output, "{}", intro)?;

        while !state.is_over() {
            if state.current_mark() == Mark::Ai {
                self.pause_before_ai_move();
                if let Some((index, _)) = state.play_ai_turn(&mut self.rng).map_err(io::Error::other)? {
                    writeln!(self.output, "Computer plays {}", index + 1)?;
                }
                continue;
            }

            writeln!(self.output, "{}", render_board(state.board(), state.outcome()))?;
            write!(self.output, "Your move (1-9, h for help): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(GameEnd::Quit);
            };

            match parse_command(&line) {
                Ok(Command::Place(index)) => {
                    if let Err(err) = state.apply_move(index, Mark::Human) {
                        writeln!(self.output, "{}", describe_rejection(err))?;
                    }
                }
                Ok(Command::NewGame) => {
                    writeln!(self.output, "Starting over.")?;
                    return Ok(GameEnd::Restart);
                }
                Ok(Command::Quit) => return Ok(GameEnd::Quit),
                Ok(Command::Help) => writeln!(self.output, "{}", HELP_TEXT)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        let outcome = state.outcome();
        writeln!(self.output, "{}", render_board(state.board(), outcome))?;
        let verdict = match outcome.winner() {
            Some(Mark::Human) => format!("{} wins!", self.player_name),
            Some(Mark::Ai) => "Computer wins.".to_string(),
            None => "It's a tie.".to_string(),
        };
        writeln!(self.output, "{}", verdict)?;

        self.scoreboard.record(outcome);
        log!("Game over for {}: {:?}", self.player_name, outcome);
        Ok(GameEnd::Finished(outcome))
    }

    fn pause_before_ai_move(&self) {
        if self.settings.ai_move_delay_ms > 0 {
            thread::sleep(Duration::from_millis(self.settings.ai_move_delay_ms));
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        write!(self.output, "Play again? [y/n]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn describe_rejection(err: InvalidMove) -> String {
    match err {
        InvalidMove::CellOccupied(index) => format!("Cell {} is already taken.", index + 1),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::FirstPlayerMode;

    fn run_script(first_player: FirstPlayerMode, script: &str) -> (Scoreboard, String) {
        let settings = GameSettings {
            first_player,
            ai_move_delay_ms: 0,
        };
        let mut output = Vec::new();
        let scoreboard = {
            let mut game = ConsoleGame::new(
                Cursor::new(script.to_string()),
                &mut output,
                settings,
                "Tester".to_string(),
                SessionRng::new(7),
            );
            game.run().unwrap()
        };
        (scoreboard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_scripted_game_never_beats_the_computer() {
        let (scoreboard, output) = run_script(FirstPlayerMode::Human, "1\n2\n3\n4\n5\n6\n7\n8\n9\nn\n");
        assert_eq!(scoreboard.games_played(), 1, "{}", output);
        assert_eq!(scoreboard.wins, 0);
        assert_eq!(scoreboard.losses + scoreboard.ties, 1);
    }

    #[test]
    fn test_quit_stops_immediately() {
        let (scoreboard, output) = run_script(FirstPlayerMode::Human, "q\n");
        assert_eq!(scoreboard, Scoreboard::default());
        assert!(output.contains("you play O and go first"));
    }

    #[test]
    fn test_computer_moves_first_when_configured() {
        let (_, output) = run_script(FirstPlayerMode::Ai, "q\n");
        assert!(output.contains("Computer plays"));
    }

    #[test]
    fn test_bad_input_is_reported_and_game_continues() {
        let (_, output) = run_script(FirstPlayerMode::Human, "banana\n0\nh\n5\n5\nq\n");
        assert!(output.contains("'banana' is not a cell number"));
        assert!(output.contains("Cell number must be between 1 and 9"));
        assert!(output.contains("Enter 1-9"));
        assert!(output.contains("Cell 5 is already taken."));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (scoreboard, _) = run_script(FirstPlayerMode::Human, "");
        assert_eq!(scoreboard.games_played(), 0);
    }

    #[test]
    fn test_scoreboard_records_outcomes() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.record(GameOutcome::Win { line: 0, mark: Mark::Ai });
        scoreboard.record(GameOutcome::Win { line: 4, mark: Mark::Human });
        scoreboard.record(GameOutcome::Tie);
        scoreboard.record(GameOutcome::NoWinner);
        assert_eq!(scoreboard, Scoreboard { wins: 1, losses: 1, ties: 1 });
    }
}
