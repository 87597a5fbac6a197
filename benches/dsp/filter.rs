//! Benchmarks for the one-pole lowpass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluck_engine::{
    dsp::{filter::OnePole, pluck::PLUCK_CUTOFF_HZ},
    SAMPLE_RATE,
};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut filter = OnePole::lowpass(PLUCK_CUTOFF_HZ, SAMPLE_RATE);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("one_pole", size), &size, |b, _| {
            b.iter(|| {
                for (out, &x) in buffer.iter_mut().zip(&input) {
                    *out = filter.process(black_box(x));
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
