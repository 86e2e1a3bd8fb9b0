use crate::games::RandomSource;
use super::board::Board;
use super::types::{Mark, SearchResult};
use super::win_detector::check_win;

pub const AI_WIN_SCORE: i32 = 1;
pub const HUMAN_WIN_SCORE: i32 = -1;
pub const TIE_SCORE: i32 = 0;

pub fn choose_ai_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    search_best_move(board, Mark::Ai, rng).index
}

pub fn search_best_move<R: RandomSource + ?Sized>(
    board: &Board,
    to_move: Mark,
    rng: &mut R,
) -> SearchResult {
    let mut working = *board;
    minimax(&mut working, to_move, rng)
}

fn minimax<R: RandomSource + ?Sized>(board: &mut Board, to_move: Mark, rng: &mut R) -> SearchResult {
    if check_win(board, Mark::Human).is_some() {
        return SearchResult::terminal(HUMAN_WIN_SCORE);
    }
    if check_win(board, Mark::Ai).is_some() {
        return SearchResult::terminal(AI_WIN_SCORE);
    }

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return SearchResult::terminal(TIE_SCORE);
    }

    let maximizing = to_move == Mark::Ai;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_moves = Vec::with_capacity(available_moves.len());

    for index in available_moves {
        board
            .place(index, to_move)
            .expect("search candidates come from empty cells");
        let score = minimax(board, to_move.opponent(), rng).score;
        board.undo(index);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };

        if improves {
            best_score = score;
            best_moves.clear();
            best_moves.push(index);
        } else if score == best_score {
            best_moves.push(index);
        }
    }

    let pick = if best_moves.len() == 1 {
        0
    } else {
        rng.choose_index(best_moves.len())
    };

    SearchResult::new(best_moves[pick], best_score)
}
