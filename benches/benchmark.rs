use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prize_core::calculator::{compute, compute_batch};
use prize_core::distribution::DistributionTable;
use prize_core::format::{DisplayOptions, PrizeDisplay};
use prize_core::inputs::CalculationInputs;
use prize_core::live::LiveCalculator;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_inputs(n: usize, seed: u64) -> Vec<CalculationInputs> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            CalculationInputs::new(
                rng.gen_range(0.0..500_000.0),
                rng.gen_range(0..256),
                rng.gen_range(0.0..50.0),
                rng.gen_range(1..=30),
            )
        })
        .collect()
}

fn bench_rule_set_lookup(c: &mut Criterion) {
    let table = DistributionTable::global();

    c.bench_function("rule_set_curated", |b| b.iter(|| table.rule_set(black_box(8))));
    c.bench_function("rule_set_synthesized_30", |b| b.iter(|| table.rule_set(black_box(30))));
}

fn bench_compute(c: &mut Criterion) {
    let inputs = CalculationInputs::new(100000.0, 20, 10.0, 8);

    c.bench_function("compute_8_places", |b| b.iter(|| compute(black_box(&inputs))));
}

fn bench_compute_batch(c: &mut Criterion) {
    let inputs = random_inputs(10_000, 42);

    c.bench_function("compute_10000_sequential", |b| {
        b.iter(|| black_box(&inputs).iter().map(compute).collect::<Vec<_>>())
    });

    c.bench_function("compute_10000_batch", |b| b.iter(|| compute_batch(black_box(&inputs))));
}

fn bench_display(c: &mut Criterion) {
    let result = compute(&CalculationInputs::new(250000.0, 128, 10.0, 30)).unwrap();
    let options = DisplayOptions::default();

    c.bench_function("prize_display_30_places", |b| {
        b.iter(|| PrizeDisplay::from_result(black_box(&result), &options))
    });
}

fn bench_live_keystrokes(c: &mut Criterion) {
    // simulates typing a participant count one digit at a time
    let keystrokes = ["1", "12", "128", "12", "1", "10", "100"];

    c.bench_function("live_calculator_keystrokes", |b| {
        b.iter(|| {
            let mut calc = LiveCalculator::default();
            calc.set_field("entry_fee", Some("50000")).unwrap();
            calc.set_field("best_of", Some("8")).unwrap();
            for raw in keystrokes {
                calc.set_field("max_participants", Some(raw)).unwrap();
            }
            calc.display().cloned()
        })
    });
}

criterion_group!(
    benches,
    bench_rule_set_lookup,
    bench_compute,
    bench_compute_batch,
    bench_display,
    bench_live_keystrokes,
);
criterion_main!(benches);
