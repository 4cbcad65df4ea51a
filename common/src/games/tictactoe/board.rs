use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::types::{CELL_COUNT, Cell, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| "Position out of bounds".to_string())?;

        if !cell.is_empty() {
            return Err("Cell is already marked".to_string());
        }

        *cell = Cell::Marked(mark);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Puts `mark` on `index` for as long as the returned guard lives.
    /// The previous cell value comes back when the guard is dropped.
    /// `index` must be below [`CELL_COUNT`].
    pub(super) fn simulate(&mut self, index: usize, mark: Mark) -> SimulatedMove<'_> {
        let previous = self.cells[index];
        self.cells[index] = Cell::Marked(mark);
        SimulatedMove {
            board: self,
            index,
            previous,
        }
    }
}

pub(super) struct SimulatedMove<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Cell,
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = self.previous;
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses nine cells, row-major: `X`, `O`, or one of `.`, `-`, `_`, ` ` for empty.
    /// Line breaks and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r' && *c != '|') {
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = match ch {
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => Mark::from_symbol(other)
                    .map(Cell::Marked)
                    .ok_or_else(|| format!("Unexpected cell symbol '{}'", other))?,
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board needs {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let symbol = cell.mark().map_or('.', |mark| mark.symbol());
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index).is_some_and(|cell| cell.is_empty())
}
