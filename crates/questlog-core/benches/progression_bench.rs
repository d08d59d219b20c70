//! Benchmarks for the award path.

use criterion::{Criterion, criterion_group, criterion_main};
use questlog_core::{Attributes, Character, ScriptRoller, award_xp};
use std::hint::black_box;

fn bench_award_without_level_up(c: &mut Criterion) {
    c.bench_function("award_without_level_up", |b| {
        b.iter(|| {
            let mut character = Character::new("bench", "Tester", Attributes::default());
            let mut roller = ScriptRoller::new(vec![3]);
            let _ = award_xp(&mut character, black_box(10), &mut roller);
        });
    });
}

fn bench_award_cascade(c: &mut Criterion) {
    c.bench_function("award_cascade", |b| {
        b.iter(|| {
            let mut character = Character::new("bench", "Tester", Attributes::default());
            let mut roller = ScriptRoller::new(vec![1, 2, 3, 4, 5]);
            // Large enough to cross a few dozen thresholds.
            let _ = award_xp(&mut character, black_box(10_000_000), &mut roller);
        });
    });
}

criterion_group!(benches, bench_award_without_level_up, bench_award_cascade);
criterion_main!(benches);
