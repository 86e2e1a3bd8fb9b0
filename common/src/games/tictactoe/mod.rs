mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{AI_WIN_SCORE, HUMAN_WIN_SCORE, TIE_SCORE, choose_ai_move, search_best_move};
pub use error::InvalidMove;
pub use game_state::{TicTacToeGameState, apply_move, is_board_full, resolve_first_mark};
pub use settings::{GameSettings, MAX_AI_MOVE_DELAY_MS};
pub use types::{
    BOARD_SIDE, CELL_COUNT, Cell, FirstPlayerMode, GameOutcome, Mark, SearchResult, WIN_LINES,
};
pub use win_detector::{check_tie, check_win, check_win_with_line, evaluate_outcome};
