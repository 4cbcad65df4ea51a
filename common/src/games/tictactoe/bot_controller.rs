use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win_with_line;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Score of a position from the Ai's point of view, and the move that achieves it.
/// `index` is `None` for positions that are already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub index: Option<usize>,
    pub score: i32,
}

impl MoveResult {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
    pub positions_evaluated: u64,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: Mark::Ai,
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<SearchResult> {
    calculate_minimax_move(&input.board, input.current_mark)
}

/// Best move for `mark`, assuming perfect play from both sides afterwards.
/// Returns `None` when the position is already won or full.
pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Option<SearchResult> {
    let mut board = *board;
    let mut positions_evaluated = 0;

    let result = minimax(&mut board, mark, &mut positions_evaluated);

    result.index.map(|index| SearchResult {
        index,
        score: result.score,
        positions_evaluated,
    })
}

/// Exhaustive search, no pruning and no depth discount.
/// Every simulated placement is undone before returning, so `board` comes back unchanged.
pub fn minimax(board: &mut Board, mark: Mark, positions: &mut u64) -> MoveResult {
    *positions += 1;

    if check_win_with_line(board, Mark::Player).is_some() {
        return MoveResult::terminal(LOSS_SCORE);
    }
    if check_win_with_line(board, Mark::Ai).is_some() {
        return MoveResult::terminal(WIN_SCORE);
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return MoveResult::terminal(DRAW_SCORE);
    }

    let opponent = mark.opponent();
    let mut best: Option<MoveResult> = None;

    for index in available_moves {
        let score = {
            let mut simulated = board.simulate(index, mark);
            minimax(&mut simulated, opponent, positions).score
        };

        let candidate = MoveResult {
            index: Some(index),
            score,
        };

        best = match best {
            None => Some(candidate),
            Some(current) if is_better(mark, candidate.score, current.score) => Some(candidate),
            keep => keep,
        };
    }

    best.unwrap_or(MoveResult::terminal(DRAW_SCORE))
}

// Strict comparison keeps the earliest of equally scored moves.
fn is_better(mark: Mark, candidate: i32, current: i32) -> bool {
    match mark {
        Mark::Ai => candidate > current,
        Mark::Player => candidate < current,
    }
}
