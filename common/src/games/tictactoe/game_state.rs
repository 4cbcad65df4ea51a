use crate::log;
use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::types::{GameOutcome, GameStatus, Mark};
use super::win_detector::check_win_with_line;

/// What happened in response to a single player click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player_outcome: GameOutcome,
    pub ai_move: Option<(usize, GameOutcome)>,
}

impl TurnReport {
    pub fn outcome(&self) -> GameOutcome {
        self.ai_move
            .map_or(self.player_outcome, |(_, outcome)| outcome)
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingPlayerMove,
        }
    }

    /// Resumes a game from an arbitrary position. Whose turn it is follows from the mark counts.
    pub fn from_board(board: Board) -> Result<Self, String> {
        let player_count = board.count(Mark::Player);
        let ai_count = board.count(Mark::Ai);

        let to_move = if player_count == ai_count {
            Mark::Player
        } else if player_count == ai_count + 1 {
            Mark::Ai
        } else {
            return Err(format!(
                "Invalid mark counts: {} player marks, {} ai marks",
                player_count, ai_count
            ));
        };

        let player_line = check_win_with_line(&board, Mark::Player);
        let ai_line = check_win_with_line(&board, Mark::Ai);

        // The winner must have made the last move.
        let status = match (player_line, ai_line) {
            (Some(_), Some(_)) => return Err("Both sides cannot have a line".to_string()),
            (Some(line), None) if to_move == Mark::Ai => GameStatus::Won(line),
            (None, Some(line)) if to_move == Mark::Player => GameStatus::Won(line),
            (Some(_), None) | (None, Some(_)) => {
                return Err("Marks were placed after the game was won".to_string());
            }
            (None, None) if board.is_full() => GameStatus::Draw,
            (None, None) => match to_move {
                Mark::Player => GameStatus::AwaitingPlayerMove,
                Mark::Ai => GameStatus::AwaitingAiMove,
            },
        };

        Ok(Self { board, status })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> GameOutcome {
        self.status.outcome()
    }

    pub fn reset_game(&mut self) -> &Board {
        self.board.clear();
        self.status = GameStatus::AwaitingPlayerMove;
        &self.board
    }

    /// Places the player's mark. Invalid requests leave the game untouched
    /// and return the current outcome.
    pub fn request_player_move(&mut self, index: usize) -> GameOutcome {
        match self.place_mark(Mark::Player, index) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("Rejected player move at {}: {}", index, e);
                self.outcome()
            }
        }
    }

    /// Computes and plays the Ai reply. Does nothing unless it is the Ai's turn.
    pub fn request_ai_move(&mut self) -> Option<(usize, GameOutcome)> {
        if self.status != GameStatus::AwaitingAiMove {
            return None;
        }

        let result = calculate_minimax_move(&self.board, Mark::Ai)?;
        log!(
            "Ai plays {} (score {}, {} positions evaluated)",
            result.index,
            result.score,
            result.positions_evaluated
        );

        match self.place_mark(Mark::Ai, result.index) {
            Ok(outcome) => Some((result.index, outcome)),
            Err(e) => {
                log!("Ai move at {} failed: {}", result.index, e);
                None
            }
        }
    }

    /// Player move followed by the automatic Ai reply while the game is still open.
    pub fn play_turn(&mut self, index: usize) -> TurnReport {
        let before = self.status;
        let player_outcome = self.request_player_move(index);

        let ai_move = if before == GameStatus::AwaitingPlayerMove
            && player_outcome == GameOutcome::InProgress
        {
            self.request_ai_move()
        } else {
            None
        };

        TurnReport {
            player_outcome,
            ai_move,
        }
    }

    fn place_mark(&mut self, mark: Mark, index: usize) -> Result<GameOutcome, String> {
        match self.status {
            GameStatus::Won(_) | GameStatus::Draw => {
                return Err("Game is already over".to_string());
            }
            GameStatus::AwaitingPlayerMove if mark != Mark::Player => {
                return Err("Not your turn".to_string());
            }
            GameStatus::AwaitingAiMove if mark != Mark::Ai => {
                return Err("Not your turn".to_string());
            }
            _ => {}
        }

        self.board.place(index, mark)?;

        self.check_game_over(mark);

        if let GameStatus::Won(line) = self.status {
            log!("{:?} won on line {:?}", line.mark, line.cells());
        } else if self.status == GameStatus::Draw {
            log!("Game ended in a draw");
        }

        Ok(self.outcome())
    }

    fn check_game_over(&mut self, mark: Mark) {
        if let Some(line) = check_win_with_line(&self.board, mark) {
            self.status = GameStatus::Won(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return;
        }

        self.status = match mark {
            Mark::Player => GameStatus::AwaitingAiMove,
            Mark::Ai => GameStatus::AwaitingPlayerMove,
        };
    }
}
