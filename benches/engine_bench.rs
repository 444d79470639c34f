use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use teeko::eval::evaluate;
use teeko::movegen::successors;
use teeko::protocol::parse_position;
use teeko::rules::winner;
use teeko::search::{search, SearchConfig};
use teeko::Piece;

/// Mid-drop position: three pieces each, black to drop.
const DROP_POSITION: &str = "...../.rb../.br../..rb./.....";

/// Full board in the move phase with no line completed.
const MOVE_POSITION: &str = "b.r../.rb../..br./.b.r./.....";

fn bench_winner_scan(c: &mut Criterion) {
    let board = parse_position(MOVE_POSITION).unwrap();
    c.bench_function("winner_scan_44_patterns", |b| {
        b.iter(|| winner(black_box(&board)))
    });
}

fn bench_successors(c: &mut Criterion) {
    let drop = parse_position(DROP_POSITION).unwrap();
    let step = parse_position(MOVE_POSITION).unwrap();
    c.bench_function("successors_drop_phase", |b| {
        b.iter(|| successors(black_box(&drop), Piece::Black))
    });
    c.bench_function("successors_move_phase", |b| {
        b.iter(|| successors(black_box(&step), Piece::Red))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = parse_position(MOVE_POSITION).unwrap();
    c.bench_function("evaluate_cluster_distance", |b| {
        b.iter(|| evaluate(black_box(&board), Piece::Black))
    });
}

fn bench_search(c: &mut Criterion) {
    let board = parse_position(MOVE_POSITION).unwrap();
    let mut group = c.benchmark_group("search_depth_4");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    group.bench_function("minimax", |b| {
        let config = SearchConfig { depth: 4, pruning: false };
        b.iter(|| search(black_box(&board), Piece::Black, config))
    });
    group.bench_function("alpha_beta", |b| {
        let config = SearchConfig { depth: 4, pruning: true };
        b.iter(|| search(black_box(&board), Piece::Black, config))
    });
    group.finish();
}

fn bench_drop_search(c: &mut Criterion) {
    let board = parse_position(DROP_POSITION).unwrap();
    let mut group = c.benchmark_group("search_drop_phase");
    group.sample_size(10);

    group.bench_function("alpha_beta_depth_4", |b| {
        let config = SearchConfig { depth: 4, pruning: true };
        b.iter(|| search(black_box(&board), Piece::Black, config))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_winner_scan,
    bench_successors,
    bench_evaluate,
    bench_search,
    bench_drop_search,
);
criterion_main!(benches);
