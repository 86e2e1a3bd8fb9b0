use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    choose_ai_move, search_best_move, Board, FirstPlayerMode, Mark, TicTacToeGameState,
};

fn bench_full_game_ai_first() {
    let mut rng = SessionRng::from_random();
    let mut state = TicTacToeGameState::new(FirstPlayerMode::Ai, &mut rng);

    while !state.is_over() {
        if state.current_mark() == Mark::Ai {
            let _ = state.play_ai_turn(&mut rng);
        } else {
            // The human mirrors the engine so the game runs to its drawn end.
            let Some(index) = search_best_move(state.board(), Mark::Human, &mut rng).index else {
                break;
            };
            let _ = state.apply_move(index, Mark::Human);
        }
    }
}

fn bench_single_move_empty_board() {
    let mut rng = SessionRng::from_random();
    choose_ai_move(&Board::new(), &mut rng);
}

fn bench_single_move_mid_game() {
    let board: Board = "O..|.X.|..O".parse().expect("valid board");
    let mut rng = SessionRng::from_random();
    choose_ai_move(&board, &mut rng);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("full_game_ai_first", |b| {
        b.iter(bench_full_game_ai_first)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
