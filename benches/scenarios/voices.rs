//! Benchmarks for the polyphonic renderer.
//!
//! Each iteration starts from a freshly triggered pool so voices never
//! decay away mid-measurement.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use pluck_engine::{PartialMode, PolySynth, SynthConfig, NUM_VOICES};

use crate::BLOCK_SIZES;

fn triggered(voices: usize, mode: PartialMode) -> PolySynth {
    let mut synth = PolySynth::new(SynthConfig::default().with_partial_mode(mode));
    for i in 0..voices {
        synth.note_on(40 + (i as u8) * 3, 100);
    }
    synth
}

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // === SINGLE VOICE ===
        // baseline cost of one pluck including the noise burst
        group.bench_with_input(BenchmarkId::new("single", size), &size, |b, _| {
            b.iter_batched_ref(
                || triggered(1, PartialMode::SawLayer),
                |synth| synth.render_block(black_box(&mut buffer)),
                BatchSize::SmallInput,
            )
        });

        // === FULL POOL ===
        // every slot sounding, the worst case per block
        group.bench_with_input(BenchmarkId::new("full_pool", size), &size, |b, _| {
            b.iter_batched_ref(
                || triggered(NUM_VOICES, PartialMode::SawLayer),
                |synth| synth.render_block(black_box(&mut buffer)),
                BatchSize::SmallInput,
            )
        });

        // === FULL POOL, SINE PARTIAL ===
        group.bench_with_input(
            BenchmarkId::new("full_pool_sine_partial", size),
            &size,
            |b, _| {
                b.iter_batched_ref(
                    || triggered(NUM_VOICES, PartialMode::SinePartial),
                    |synth| synth.render_block(black_box(&mut buffer)),
                    BatchSize::SmallInput,
                )
            },
        );

        // === STEAL STORM ===
        // a new note every block into a full pool
        group.bench_with_input(BenchmarkId::new("steal_every_block", size), &size, |b, _| {
            b.iter_batched_ref(
                || triggered(NUM_VOICES, PartialMode::SawLayer),
                |synth| {
                    synth.note_on(black_box(72), 100);
                    synth.render_block(black_box(&mut buffer));
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
