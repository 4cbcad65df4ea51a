mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, MoveResult, SearchResult, WIN_SCORE, calculate_minimax_move,
    calculate_move, minimax,
};
pub use game_state::{TicTacToeGameState, TurnReport};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, GameOutcome, GameStatus, Mark, WIN_LINES, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
