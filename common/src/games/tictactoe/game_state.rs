use crate::games::RandomSource;
use super::board::Board;
use super::bot_controller::choose_ai_move;
use super::error::InvalidMove;
use super::types::{FirstPlayerMode, GameOutcome, Mark};
use super::win_detector::evaluate_outcome;

pub fn apply_move(board: &mut Board, index: usize, mark: Mark) -> Result<GameOutcome, InvalidMove> {
    board.place(index, mark)?;
    Ok(evaluate_outcome(board, mark))
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

pub fn resolve_first_mark<R: RandomSource + ?Sized>(mode: FirstPlayerMode, rng: &mut R) -> Mark {
    match mode {
        FirstPlayerMode::Human => Mark::Human,
        FirstPlayerMode::Ai => Mark::Ai,
        FirstPlayerMode::Random => {
            if rng.coin_flip() {
                Mark::Ai
            } else {
                Mark::Human
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_mark: Mark,
    current_mark: Mark,
    outcome: GameOutcome,
    history: Vec<(usize, Mark)>,
}

impl TicTacToeGameState {
    pub fn new<R: RandomSource + ?Sized>(first_player_mode: FirstPlayerMode, rng: &mut R) -> Self {
        let first_mark = resolve_first_mark(first_player_mode, rng);
        Self {
            board: Board::new(),
            first_mark,
            current_mark: first_mark,
            outcome: GameOutcome::NoWinner,
            history: Vec::new(),
        }
    }

    pub fn reset<R: RandomSource + ?Sized>(&mut self, first_player_mode: FirstPlayerMode, rng: &mut R) {
        self.board.reset();
        self.first_mark = resolve_first_mark(first_player_mode, rng);
        self.current_mark = self.first_mark;
        self.outcome = GameOutcome::NoWinner;
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn history(&self) -> &[(usize, Mark)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<(usize, Mark)> {
        self.history.last().copied()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn winning_cells(&self) -> Option<[usize; 3]> {
        self.outcome.winning_cells()
    }

    pub fn is_board_full(&self) -> bool {
        is_board_full(&self.board)
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameOutcome, InvalidMove> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        if mark != self.current_mark {
            return Err(InvalidMove::OutOfTurn(mark));
        }

        self.outcome = apply_move(&mut self.board, index, mark)?;
        self.history.push((index, mark));

        if !self.outcome.is_terminal() {
            self.current_mark = mark.opponent();
        }

        Ok(self.outcome)
    }

    pub fn choose_ai_move<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.outcome.is_terminal() {
            return None;
        }
        choose_ai_move(&self.board, rng)
    }

    pub fn play_ai_turn<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<(usize, GameOutcome)>, InvalidMove> {
        if self.outcome.is_terminal() {
            return Ok(None);
        }
        if self.current_mark != Mark::Ai {
            return Err(InvalidMove::OutOfTurn(Mark::Ai));
        }

        match self.choose_ai_move(rng) {
            Some(index) => {
                let outcome = self.apply_move(index, Mark::Ai)?;
                Ok(Some((index, outcome)))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    fn human_first() -> TicTacToeGameState {
        TicTacToeGameState::new(FirstPlayerMode::Human, &mut SessionRng::new(0))
    }

    #[test]
    fn test_first_player_policy() {
        let mut rng = SessionRng::new(10);
        assert_eq!(resolve_first_mark(FirstPlayerMode::Human, &mut rng), Mark::Human);
        assert_eq!(resolve_first_mark(FirstPlayerMode::Ai, &mut rng), Mark::Ai);

        let mut ai_starts = 0;
        for _ in 0..200 {
            if resolve_first_mark(FirstPlayerMode::Random, &mut rng) == Mark::Ai {
                ai_starts += 1;
            }
        }
        assert!(ai_starts > 50 && ai_starts < 150, "ai started {} of 200", ai_starts);
    }

    #[test]
    fn test_apply_move_free_function() {
        let mut board: Board = "XX.|OO.|...".parse().unwrap();
        assert_eq!(apply_move(&mut board, 9, Mark::Ai), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(apply_move(&mut board, 0, Mark::Ai), Err(InvalidMove::CellOccupied(0)));
        assert_eq!(apply_move(&mut board, 6, Mark::Ai), Ok(GameOutcome::NoWinner));
        assert_eq!(
            apply_move(&mut board, 2, Mark::Ai),
            Ok(GameOutcome::Win { line: 0, mark: Mark::Ai })
        );
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_turns_alternate_and_are_enforced() {
        let mut state = human_first();
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.apply_move(4, Mark::Ai), Err(InvalidMove::OutOfTurn(Mark::Ai)));

        assert_eq!(state.apply_move(4, Mark::Human), Ok(GameOutcome::NoWinner));
        assert_eq!(state.current_mark(), Mark::Ai);
        assert_eq!(state.apply_move(4, Mark::Ai), Err(InvalidMove::CellOccupied(4)));
        assert_eq!(state.current_mark(), Mark::Ai);
        assert_eq!(state.last_move(), Some((4, Mark::Human)));
    }

    #[test]
    fn test_win_stops_the_game() {
        let mut state = human_first();
        for (index, mark) in [
            (0, Mark::Human),
            (3, Mark::Ai),
            (1, Mark::Human),
            (4, Mark::Ai),
        ] {
            assert_eq!(state.apply_move(index, mark), Ok(GameOutcome::NoWinner));
        }

        let outcome = state.apply_move(2, Mark::Human).unwrap();
        assert_eq!(outcome, GameOutcome::Win { line: 0, mark: Mark::Human });
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Mark::Human));
        assert_eq!(state.winning_cells(), Some([0, 1, 2]));
        assert_eq!(state.apply_move(5, Mark::Ai), Err(InvalidMove::GameOver));
        assert_eq!(state.play_ai_turn(&mut SessionRng::new(1)), Ok(None));
    }

    #[test]
    fn test_tie_is_reported() {
        let mut state = human_first();
        // O X O / O X X / X O O
        let moves = [
            (0, Mark::Human),
            (1, Mark::Ai),
            (2, Mark::Human),
            (4, Mark::Ai),
            (3, Mark::Human),
            (5, Mark::Ai),
            (7, Mark::Human),
            (6, Mark::Ai),
        ];
        for (index, mark) in moves {
            assert_eq!(state.apply_move(index, mark), Ok(GameOutcome::NoWinner));
        }
        assert_eq!(state.apply_move(8, Mark::Human), Ok(GameOutcome::Tie));
        assert!(state.is_board_full());
        assert_eq!(state.winner(), None);
        assert_eq!(state.history().len(), 9);
    }

    #[test]
    fn test_play_ai_turn_requires_ai_turn() {
        let mut state = human_first();
        let mut rng = SessionRng::new(4);
        assert_eq!(state.play_ai_turn(&mut rng), Err(InvalidMove::OutOfTurn(Mark::Ai)));

        state.apply_move(0, Mark::Human).unwrap();
        let (index, outcome) = state.play_ai_turn(&mut rng).unwrap().unwrap();
        assert_ne!(index, 0);
        assert_eq!(outcome, GameOutcome::NoWinner);
        assert_eq!(state.current_mark(), Mark::Human);
    }

    #[test]
    fn test_reset_starts_a_fresh_game() {
        let mut rng = SessionRng::new(6);
        let mut state = TicTacToeGameState::new(FirstPlayerMode::Ai, &mut rng);
        assert_eq!(state.current_mark(), Mark::Ai);
        state.play_ai_turn(&mut rng).unwrap();
        assert_eq!(state.board().occupied_count(), 1);

        state.reset(FirstPlayerMode::Human, &mut rng);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_mark(), Mark::Human);
        assert_eq!(state.first_mark(), Mark::Human);
        assert_eq!(state.outcome(), GameOutcome::NoWinner);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_ai_never_loses_against_random_human() {
        let mut rng = SessionRng::new(31337);
        let mut human_rng = SessionRng::new(404);

        for _ in 0..15 {
            let mut state = TicTacToeGameState::new(FirstPlayerMode::Human, &mut rng);
            while !state.is_over() {
                if state.current_mark() == Mark::Human {
                    let empty = state.board().empty_cells();
                    let index = empty[human_rng.choose_index(empty.len())];
                    state.apply_move(index, Mark::Human).unwrap();
                } else {
                    state.play_ai_turn(&mut rng).unwrap();
                }
            }
            assert_ne!(state.winner(), Some(Mark::Human));
        }
    }
}
