use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::tictactoe::{
    build_tree, evaluate, select_best_move, select_best_move_for, Board, DepthLimit, Mark,
};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !board.is_terminal() {
        let Some(pos) = select_best_move_for(board, current_mark, DepthLimit::Unbounded) else {
            break;
        };
        board = match board.place(pos, current_mark) {
            Ok(next) => next,
            Err(_) => break,
        };
        current_mark = match current_mark.opponent() {
            Some(next) => next,
            None => break,
        };
    }
}

fn bench_single_move_mid_game() {
    let board: Board = "X.O/.X./..O".parse().unwrap();
    select_best_move(black_box(board));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("build_full_tree", |b| {
        b.iter(|| build_tree(black_box(Board::new()), Mark::X, DepthLimit::Unbounded))
    });

    let tree = build_tree(Board::new(), Mark::X, DepthLimit::Unbounded);
    group.bench_function("evaluate_full_tree", |b| {
        b.iter(|| evaluate(black_box(&tree), tree.root(), true))
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(|| select_best_move(black_box(Board::new())))
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
