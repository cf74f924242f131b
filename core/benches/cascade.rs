use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn bench_cascade(c: &mut Criterion) {
    let open = Board::from_bomb_coords((255, 255), &[(0, 0)]).unwrap();
    c.bench_function("cascade_open_255x255", |b| {
        b.iter_batched(
            || Game::new(open.clone()),
            |mut game| black_box(game.reveal((254, 254))),
            BatchSize::LargeInput,
        )
    });

    let expert = RandomMinefieldGenerator::new(7)
        .generate(GameConfig::EXPERT)
        .unwrap();
    c.bench_function("reveal_all_expert", |b| {
        b.iter_batched(
            || Game::new(expert.clone()),
            |mut game| {
                for pos in expert.iter_coords().filter(|&pos| !expert[pos].is_bomb()) {
                    let _ = black_box(game.reveal(pos));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut seed = 0;
    c.bench_function("generate_expert", |b| {
        b.iter(|| {
            seed += 1;
            black_box(RandomMinefieldGenerator::new(seed).generate(GameConfig::EXPERT))
        })
    });
}

criterion_group!(benches, bench_cascade, bench_generate);
criterion_main!(benches);
