use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{
    CELL_COUNT, GameOutcome, TicTacToeGameState, is_valid_move,
};
use tictactoe_common::log;

use crate::config::Config;
use crate::render::{render_board, render_outcome};

const HELP: &str = "Type a cell number (1-9) to play, n for a new game, q to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewGame,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "n" | "new" => return Ok(Command::NewGame),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let number: usize = line
        .parse()
        .map_err(|_| format!("Unknown command '{}'", line))?;
    if number == 0 || number > CELL_COUNT {
        return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
    }
    Ok(Command::Place(number - 1))
}

pub struct TerminalSession<'a, W: Write> {
    config: &'a Config,
    state: TicTacToeGameState,
    out: W,
    games_played: u32,
}

impl<'a, W: Write> TerminalSession<'a, W> {
    pub fn new(config: &'a Config, out: W) -> Self {
        Self {
            config,
            state: TicTacToeGameState::new(),
            out,
            games_played: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        writeln!(self.out, "{}", HELP)?;
        self.draw()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }

        log!("Session finished after {} games", self.games_played);
        Ok(())
    }

    pub fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Place(index) => self.place(index),
            Command::NewGame => {
                self.state.reset_game();
                log!("New game started");
                self.draw()
            }
            Command::Help => writeln!(self.out, "{}", HELP),
            Command::Quit => Ok(()),
        }
    }

    fn place(&mut self, index: usize) -> io::Result<()> {
        if self.state.status().is_finished() {
            return writeln!(self.out, "Game is over. Type n for a new game.");
        }
        if !is_valid_move(self.state.board(), index) {
            return writeln!(self.out, "Cell {} is already taken", index + 1);
        }

        let report = self.state.play_turn(index);
        if let Some((ai_index, _)) = report.ai_move {
            writeln!(self.out, "Computer plays {}", ai_index + 1)?;
        }

        if report.outcome() != GameOutcome::InProgress {
            self.games_played += 1;
        }
        self.draw()
    }

    fn draw(&mut self) -> io::Result<()> {
        let outcome = self.state.outcome();
        writeln!(self.out)?;
        writeln!(self.out, "{}", render_board(self.config, self.state.board(), outcome))?;
        writeln!(self.out)?;

        if let Some(message) = render_outcome(outcome) {
            writeln!(self.out, "{}", message)?;
            writeln!(self.out, "Type n to play again or q to quit.")?;
        }
        self.out.flush()
    }
}

pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> io::Result<()> {
    TerminalSession::new(config, output).run(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::games::tictactoe::{Cell, GameStatus, Mark, WinningLine};

    fn play(input: &str) -> (TicTacToeGameState, String) {
        let config = Config::default();
        let mut output = Vec::new();
        let state = {
            let mut session = TerminalSession::new(&config, &mut output);
            session.run(Cursor::new(input)).unwrap();
            session.state().clone()
        };
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5"), Ok(Command::Place(4)));
        assert_eq!(parse_command(" 1 \n"), Ok(Command::Place(0)));
        assert_eq!(parse_command("N"), Ok(Command::NewGame));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("center").is_err());
    }

    #[test]
    fn test_player_move_gets_ai_reply() {
        let (state, output) = play("1\nq\n");

        assert_eq!(state.board().get(0), Some(Cell::Marked(Mark::Player)));
        assert_eq!(state.board().get(4), Some(Cell::Marked(Mark::Ai)));
        assert!(output.contains("Computer plays 5"));
    }

    #[test]
    fn test_taken_cell_is_reported() {
        let (state, output) = play("1\n1\n");

        assert!(output.contains("Cell 1 is already taken"));
        assert_eq!(state.board().count(Mark::Player), 1);
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let (_, output) = play("hello\n");

        assert!(output.contains("Unknown command 'hello'"));
    }

    #[test]
    fn test_losing_game_shows_message_and_new_game_resets() {
        // O answers 1 with 5 and 2 with 3; playing 4 leaves the diagonal 3-5-7 open.
        let (state, output) = play("1\n2\n4\n");

        assert_eq!(
            state.status(),
            GameStatus::Won(WinningLine::new(7, Mark::Ai))
        );
        assert!(output.contains("Computer plays 7"));
        assert!(output.contains("You lose!"));
        assert!(!output.contains("Game is over"));

        let (state, output) = play("1\n2\n4\n5\nn\n");
        assert!(output.contains("Game is over. Type n for a new game."));
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
        assert_eq!(state.board().count(Mark::Player), 0);
    }
}
