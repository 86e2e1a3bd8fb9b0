use serde::{Deserialize, Serialize};
use tictactoe_common::games::tictactoe::{GameOutcome, Mark};

#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceMarkRequest {
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub id: String,
    pub player_name: String,
    pub cells: Vec<Option<char>>,
    pub current_turn: Mark,
    pub first_player: Mark,
    pub outcome: GameOutcome,
    pub winning_cells: Option<[usize; 3]>,
    pub is_board_full: bool,
    pub last_ai_move: Option<usize>,
    pub ai_move_delay_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
