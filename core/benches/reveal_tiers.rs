use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

/// One mine in the corner, so the first reveal from the opposite corner floods the whole board.
fn flood_game(size: Coord) -> Game<FixedSelector> {
    let config = GameConfig::new(size, 1).expect("valid config");
    Game::with_selector(config, FixedSelector::new(vec![0])).expect("valid config")
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for size in [16, 64, 128, 255] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || flood_game(size),
                |mut game| {
                    let corner = size - 1;
                    black_box(game.reveal((corner, corner)).expect("in bounds"));
                    game
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_random_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_placement");
    for (size, mines) in [(9, 10), (16, 40), (64, 800), (255, 13000)] {
        let config = GameConfig::new(size, mines).expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut game = Game::with_seed(config, seed).expect("valid config");
                black_box(game.reveal((0, 0)).expect("in bounds"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flood_fill, bench_random_placement);
criterion_main!(benches);
