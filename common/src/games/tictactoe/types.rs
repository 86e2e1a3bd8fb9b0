use std::fmt;
use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

// Order matters: the lowest complete line is the one reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Ai,
    Human,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Ai => Mark::Human,
            Mark::Human => Mark::Ai,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Ai => 'X',
            Mark::Human => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol.to_ascii_uppercase() {
            'X' => Some(Mark::Ai),
            'O' => Some(Mark::Human),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(*mark),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn symbol(&self) -> Option<char> {
        self.mark().map(|mark| mark.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameOutcome {
    NoWinner,
    Win { line: usize, mark: Mark },
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::NoWinner)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        match self {
            GameOutcome::Win { line, .. } => WIN_LINES.get(*line).copied(),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Ai,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub index: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }

    pub fn new(index: usize, score: i32) -> Self {
        Self {
            index: Some(index),
            score,
        }
    }
}
