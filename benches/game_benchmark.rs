//! Benchmarks for running complete games.
//!
//! This benchmarks the self-play game loop - the hot path behind tournaments.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use imperium::game::GameConfig;
use imperium::sim::run_game;

fn bench_single_game(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("single_game_5x5", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config), black_box(1000));
            black_box(result)
        });
    });
}

fn bench_large_grid_game(c: &mut Criterion) {
    let config = GameConfig {
        grid_size: 9,
        ..GameConfig::default()
    };

    c.bench_function("single_game_9x9", |b| {
        b.iter(|| {
            let result = run_game(black_box(42), black_box(&config), black_box(1000));
            black_box(result)
        });
    });
}

fn bench_game_batch(c: &mut Criterion) {
    // Benchmark running 10 games sequentially (without parallel overhead)
    let config = GameConfig::default();

    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let result = run_game(black_box(seed), black_box(&config), black_box(1000));
                let _ = black_box(result);
            }
        });
    });
}

criterion_group!(benches, bench_single_game, bench_large_grid_game, bench_game_batch);
criterion_main!(benches);
