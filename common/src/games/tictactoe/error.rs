use thiserror::Error;

use super::types::Mark;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("Cell index {0} is out of range (expected 0..=8)")]
    OutOfRange(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Not {0}'s turn")]
    OutOfTurn(Mark),
}
