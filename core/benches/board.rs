use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use sweeper_core::*;

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ] {
        let config = difficulty.config();
        let mut seed = 0;
        group.bench_function(format!("{difficulty:?}"), |b| {
            b.iter(|| {
                seed += 1;
                black_box(Board::with_seed(config, seed))
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    // a single corner mine leaves one zero region covering the whole board
    let config = BoardConfig::new(255, 255, 1).unwrap();
    let board = Board::from_generator(config, FixedMineGenerator::new([(254, 254)])).unwrap();

    c.bench_function("flood_fill_255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.reveal((0, 0))),
            BatchSize::LargeInput,
        )
    });
}

fn random_play(c: &mut Criterion) {
    let config = Difficulty::Expert.config();

    c.bench_function("random_play_expert", |b| {
        b.iter_batched(
            || Board::with_seed(config, 3).unwrap(),
            |mut board| {
                let (rows, cols) = board.size();
                'play: for row in 0..rows {
                    for col in 0..cols {
                        if board.tile((row, col)).is_some_and(|tile| !tile.is_mine()) {
                            board.reveal((row, col));
                            board.chord_reveal((row, col));
                        } else {
                            board.toggle_flag((row, col));
                        }
                        if board.is_finished() {
                            break 'play;
                        }
                    }
                }
                black_box(board.status())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, generate, flood_fill, random_play);
criterion_main!(benches);
