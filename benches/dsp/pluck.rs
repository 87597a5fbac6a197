//! Benchmarks for the filtered-noise pluck transient.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluck_engine::{
    dsp::{
        filter::OnePole,
        pluck::{PluckTransient, PLUCK_CUTOFF_HZ, PLUCK_TIME},
    },
    SAMPLE_RATE,
};
use rand::{rngs::SmallRng, SeedableRng};

use crate::BLOCK_SIZES;

pub fn bench_pluck(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pluck");
    let alpha = OnePole::alpha_for(PLUCK_CUTOFF_HZ, SAMPLE_RATE);
    let decay = PluckTransient::decay_coeff_for(PLUCK_TIME, SAMPLE_RATE);
    let mut rng = SmallRng::seed_from_u64(7);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Burst from the top each iteration
        let mut pluck = PluckTransient::new(alpha);
        group.bench_with_input(BenchmarkId::new("burst", size), &size, |b, _| {
            b.iter(|| {
                pluck.trigger(decay);
                for out in buffer.iter_mut() {
                    *out = pluck.next_sample(&mut rng);
                }
                black_box(&mut buffer);
            })
        });

        // Spent transient: the per-sample cost once it has frozen at zero
        let mut spent = PluckTransient::new(alpha);
        group.bench_with_input(BenchmarkId::new("spent", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = spent.next_sample(&mut rng);
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
