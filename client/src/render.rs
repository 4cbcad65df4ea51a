use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Cell, GameOutcome, Mark};

use crate::config::Config;

pub fn cell_symbol(config: &Config, board: &Board, index: usize) -> char {
    match board.get(index) {
        Some(Cell::Marked(Mark::Player)) => config.player_symbol,
        Some(Cell::Marked(Mark::Ai)) => config.ai_symbol,
        _ if config.show_cell_numbers => {
            char::from_digit(index as u32 + 1, 10).unwrap_or(config.empty_symbol)
        }
        _ => config.empty_symbol,
    }
}

/// Text grid; cells the outcome highlights are drawn as `[X]`.
pub fn render_board(config: &Config, board: &Board, outcome: GameOutcome) -> String {
    let highlighted = outcome.highlighted_cells();
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for y in 0..BOARD_SIZE {
        let row: Vec<String> = (0..BOARD_SIZE)
            .map(|x| {
                let index = y * BOARD_SIZE + x;
                let symbol = cell_symbol(config, board, index);
                if highlighted.contains(&index) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(row.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_outcome(outcome: GameOutcome) -> Option<String> {
    outcome.message().map(|message| format!("{}!", message))
}
