use super::board::Board;
use super::types::{Cell, GameOutcome, Mark, WIN_LINES};

pub fn check_win(board: &Board, mark: Mark) -> Option<usize> {
    let target = Cell::Occupied(mark);
    WIN_LINES
        .iter()
        .position(|line| line.iter().all(|&index| board.cells()[index] == target))
}

pub fn check_win_with_line(board: &Board, mark: Mark) -> Option<GameOutcome> {
    check_win(board, mark).map(|line| GameOutcome::Win { line, mark })
}

pub fn check_tie(board: &Board) -> bool {
    board.is_full()
        && check_win(board, Mark::Ai).is_none()
        && check_win(board, Mark::Human).is_none()
}

pub fn evaluate_outcome(board: &Board, last_mover: Mark) -> GameOutcome {
    if let Some(outcome) = check_win_with_line(board, last_mover) {
        return outcome;
    }
    if let Some(outcome) = check_win_with_line(board, last_mover.opponent()) {
        return outcome;
    }
    if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::NoWinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board, Mark::Ai), None);
        assert_eq!(check_win(&board, Mark::Human), None);
        assert!(!check_tie(&board));
    }

    #[test]
    fn test_every_line_is_detected() {
        for (line_index, line) in WIN_LINES.iter().enumerate() {
            let mut board = Board::new();
            for &index in line {
                board.place(index, Mark::Human).unwrap();
            }
            assert_eq!(check_win(&board, Mark::Human), Some(line_index));
            assert_eq!(check_win(&board, Mark::Ai), None);
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = parse_board("XX.|OO.|...");
        assert_eq!(check_win(&board, Mark::Ai), None);
        assert_eq!(check_win(&board, Mark::Human), None);
    }

    #[test]
    fn test_lowest_line_reported_when_several_complete() {
        // Row 0, column 0 and the main diagonal are all held by X.
        let rows_and_diagonal = parse_board("XXX|XX.|X.X");
        assert_eq!(check_win(&rows_and_diagonal, Mark::Ai), Some(0));

        // Column 2 (line 5) and the anti-diagonal (line 7).
        let column_and_anti_diagonal = parse_board("..O|.OO|O.O");
        assert_eq!(check_win(&column_and_anti_diagonal, Mark::Human), Some(5));
    }

    #[test]
    fn test_full_board_with_line_is_win_not_tie() {
        let board = parse_board("XXX|OOX|XOO");
        assert!(board.is_full());
        assert_eq!(check_win(&board, Mark::Ai), Some(0));
        assert_eq!(check_win(&board, Mark::Human), None);
        assert!(!check_tie(&board));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = parse_board("XOX|XOO|OXX");
        assert!(check_tie(&board));
        assert_eq!(check_win(&board, Mark::Ai), None);
        assert_eq!(check_win(&board, Mark::Human), None);
    }

    #[test]
    fn test_evaluate_outcome() {
        assert_eq!(
            evaluate_outcome(&parse_board("XX.|OO.|..."), Mark::Human),
            GameOutcome::NoWinner
        );
        assert_eq!(
            evaluate_outcome(&parse_board("XXX|OO.|..."), Mark::Ai),
            GameOutcome::Win { line: 0, mark: Mark::Ai }
        );
        assert_eq!(
            evaluate_outcome(&parse_board("XX.|OOO|X.."), Mark::Ai),
            GameOutcome::Win { line: 1, mark: Mark::Human }
        );
        assert_eq!(
            evaluate_outcome(&parse_board("XOX|XOO|OXX"), Mark::Ai),
            GameOutcome::Tie
        );
    }

    #[test]
    fn test_winners_are_mutually_exclusive_under_legal_play() {
        fn explore(board: &mut Board, to_move: Mark, visited: &mut usize) {
            *visited += 1;
            let ai = check_win(board, Mark::Ai);
            let human = check_win(board, Mark::Human);
            assert!(ai.is_none() || human.is_none(), "both marks won on\n{}", board);
            if ai.is_some() || human.is_some() {
                return;
            }
            for index in board.empty_cells() {
                board.place(index, to_move).unwrap();
                explore(board, to_move.opponent(), visited);
                board.undo(index);
            }
        }

        let mut visited = 0;
        explore(&mut Board::new(), Mark::Ai, &mut visited);
        explore(&mut Board::new(), Mark::Human, &mut visited);
        assert!(visited > 500_000);
    }
}
