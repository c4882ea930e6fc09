use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use rookmate::board::Color;
use rookmate::eval::evaluate;
use rookmate::movegen::legal_moves;
use rookmate::protocol::fen::{parse_fen, STARTING_FEN};
use rookmate::search::{alpha_beta, minimax};

/// A mid-hunt endgame position: the defending king is being herded.
const HUNT_FEN: &str = "8/8/3k4/8/1R6/4K3/7R/8 w - - 0 1";

fn bench_evaluate(c: &mut Criterion) {
    let state = parse_fen(HUNT_FEN).unwrap();
    c.bench_function("evaluate_endgame", |b| {
        b.iter(|| evaluate(black_box(&state), black_box(Color::White)))
    });
}

fn bench_movegen_endgame(c: &mut Criterion) {
    let state = parse_fen(HUNT_FEN).unwrap();
    c.bench_function("movegen_endgame", |b| {
        b.iter(|| legal_moves(black_box(&state)))
    });
}

fn bench_movegen_startpos(c: &mut Criterion) {
    let state = parse_fen(STARTING_FEN).unwrap();
    c.bench_function("movegen_startpos", |b| {
        b.iter(|| legal_moves(black_box(&state)))
    });
}

fn bench_alpha_beta_depth_4(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("alpha_beta_depth_4", |b| {
        let mut state = parse_fen(HUNT_FEN).unwrap();
        b.iter(|| alpha_beta(black_box(&mut state), Color::White, 4))
    });
    group.finish();
}

fn bench_minimax_depth_3(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("minimax_depth_3", |b| {
        let mut state = parse_fen(HUNT_FEN).unwrap();
        b.iter(|| minimax(black_box(&mut state), Color::White, 3))
    });
    group.finish();
}

fn bench_board_state_clone(c: &mut Criterion) {
    let state = parse_fen(HUNT_FEN).unwrap();
    c.bench_function("board_state_clone", |b| {
        b.iter(|| black_box(&state).clone())
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_movegen_endgame,
    bench_movegen_startpos,
    bench_alpha_beta_depth_4,
    bench_minimax_depth_3,
    bench_board_state_clone,
);
criterion_main!(benches);
