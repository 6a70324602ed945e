use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ds_prob::{chance_of_at_least, DicePool};

fn bench_chance(c: &mut Criterion) {
    c.bench_function("chance_10d6_at_least_3", |b| {
        let pool = DicePool::new(10).wins_needed(3);
        b.iter(|| black_box(chance_of_at_least(black_box(pool)).unwrap()))
    });

    c.bench_function("chance_100d20_at_least_40", |b| {
        let pool = DicePool::new(100).sides(20).winning_sides(7).wins_needed(40);
        b.iter(|| black_box(chance_of_at_least(black_box(pool)).unwrap()))
    });

    c.bench_function("choose_60_30", |b| {
        b.iter(|| black_box(ds_prob::choose::choose(black_box(60), black_box(30))))
    });
}

criterion_group!(benches, bench_chance);
criterion_main!(benches);
