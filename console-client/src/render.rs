use tictactoe_common::games::tictactoe::{Board, GameOutcome, BOARD_SIDE};

pub fn render_board(board: &Board, outcome: GameOutcome) -> String {
    let winning_cells = outcome.winning_cells();
    let mut out = String::new();

    for row in 0..BOARD_SIDE {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = (0..BOARD_SIDE)
            .map(|col| {
                let index = row * BOARD_SIDE + col;
                let symbol = board.cells()[index].symbol();
                match symbol {
                    None => format!(" {} ", index + 1),
                    Some(mark) if winning_cells.is_some_and(|cells| cells.contains(&index)) => {
                        format!("[{}]", mark)
                    }
                    Some(mark) if outcome == GameOutcome::Tie => format!("~{}~", mark),
                    Some(mark) => format!(" {} ", mark),
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out
}
