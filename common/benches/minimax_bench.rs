use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{
    Board, BotInput, Mark, TicTacToeGameState, calculate_minimax_move, calculate_move,
};

fn bench_minimax_full_game() {
    let mut state = TicTacToeGameState::new();

    while !state.status().is_finished() {
        let Some(best) = calculate_minimax_move(state.board(), Mark::Player) else {
            break;
        };
        state.play_turn(best.index);
    }
}

fn bench_minimax_single_move_empty_board() {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::Ai,
    };
    black_box(calculate_move(input));
}

fn bench_minimax_single_move_mid_game() {
    let board: Board = "X...O...X".parse().unwrap();
    black_box(calculate_minimax_move(&board, Mark::Ai));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("full_game", |b| {
        b.iter(bench_minimax_full_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
