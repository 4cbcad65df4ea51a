use super::board::Board;
use super::types::{Cell, Mark, WIN_LINES, WinningLine};

/// First line of [`WIN_LINES`] fully held by `mark`.
pub fn check_win_with_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let cells = board.cells();
    let held = Cell::Marked(mark);

    WIN_LINES
        .iter()
        .position(|line| line.iter().all(|&index| cells[index] == held))
        .map(|line| WinningLine::new(line, mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    [Mark::Player, Mark::Ai]
        .into_iter()
        .find(|&mark| check_win_with_line(board, mark).is_some())
}
