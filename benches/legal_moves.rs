use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jackpot::core::TileBoard;
use jackpot::rules::{combos_that_sum, has_combo};
use jackpot::strategy::{simulate, GreedyPolicy, SimulationConfig};

fn bench_combos(c: &mut Criterion) {
    let nine: Vec<i32> = TileBoard::new(9).open_tiles().collect();
    let twenty: Vec<i32> = TileBoard::new(20).open_tiles().collect();

    c.bench_function("combos_that_sum 9 tiles, 12", |b| {
        b.iter(|| combos_that_sum(black_box(&nine), black_box(12)))
    });
    c.bench_function("has_combo 9 tiles, 12", |b| {
        b.iter(|| has_combo(black_box(&nine), black_box(12)))
    });
    c.bench_function("combos_that_sum 20 tiles, 40", |b| {
        b.iter(|| combos_that_sum(black_box(&twenty), black_box(40)))
    });
}

fn bench_simulation(c: &mut Criterion) {
    let config = SimulationConfig::new().with_games(100).with_seed(1);
    c.bench_function("simulate 100 greedy games", |b| {
        b.iter(|| simulate(black_box(&config), &GreedyPolicy))
    });
}

criterion_group!(benches, bench_combos, bench_simulation);
criterion_main!(benches);
