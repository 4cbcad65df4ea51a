pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Every winning configuration, in the order the win detector reports them.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Ai,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Player => Mark::Ai,
            Mark::Ai => Mark::Player,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Ai => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Ai),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

/// A completed line: which entry of [`WIN_LINES`] matched, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub line: usize,
    pub mark: Mark,
}

impl WinningLine {
    pub fn new(line: usize, mark: Mark) -> Self {
        Self { line, mark }
    }

    pub fn cells(&self) -> [usize; 3] {
        WIN_LINES[self.line]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingPlayerMove,
    AwaitingAiMove,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }

    pub fn outcome(&self) -> GameOutcome {
        match self {
            GameStatus::AwaitingPlayerMove | GameStatus::AwaitingAiMove => GameOutcome::InProgress,
            GameStatus::Won(line) => GameOutcome::Won(*line),
            GameStatus::Draw => GameOutcome::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    /// End-of-game panel text, `None` while the game is still running.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Won(line) => match line.mark {
                Mark::Player => Some("You won"),
                Mark::Ai => Some("You lose"),
            },
            GameOutcome::Draw => Some("Draw"),
        }
    }

    /// Cells the view should highlight once the game is over.
    pub fn highlighted_cells(&self) -> Vec<usize> {
        match self {
            GameOutcome::InProgress => Vec::new(),
            GameOutcome::Won(line) => line.cells().to_vec(),
            GameOutcome::Draw => (0..CELL_COUNT).collect(),
        }
    }
}
