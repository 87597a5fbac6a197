//! Benchmarks for the wavetable sine and phase-derived saw.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluck_engine::{
    dsp::oscillator::{phase_increment_for, saw_at, SineTable},
    SAMPLE_RATE,
};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let table = SineTable::new();
    let inc = phase_increment_for(440.0, SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - table lookup, no interpolation
        let mut phase = 0u32;
        group.bench_with_input(BenchmarkId::new("sine_table", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = table.sine_at(phase);
                    phase = phase.wrapping_add(black_box(inc));
                }
                black_box(&mut buffer);
            })
        });

        // Sawtooth - straight from the accumulator
        let mut phase = 0u32;
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| {
                for out in buffer.iter_mut() {
                    *out = saw_at(phase);
                    phase = phase.wrapping_add(black_box(inc));
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
