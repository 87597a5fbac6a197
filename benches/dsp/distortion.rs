//! Benchmarks for the output clippers.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluck_engine::dsp::distortion;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sine-like values, overdriven)
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin() * 1.5).collect();

        // Soft clip - x / (1 + |x|)
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("soft_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::soft_clip_buffer(black_box(&mut buffer));
            })
        });

        // Hard clip - the PCM conversion clamp
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("hard_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for s in buffer.iter_mut() {
                    *s = distortion::hard_clip(*s, black_box(1.0));
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
