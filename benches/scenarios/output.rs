//! Benchmarks for the block-to-PCM path.

use std::{collections::VecDeque, hint::black_box};

use criterion::{BenchmarkId, Criterion};
use pluck_engine::{
    io::{converter::block_to_pcm, sink::AudioSink},
    Driver, Error, PolySynth,
};

use crate::BLOCK_SIZES;

/// Accepts and forgets every block, so long runs don't grow memory.
struct Discard;

impl AudioSink for Discard {
    fn write_block(&mut self, frames: &[i16]) -> Result<(), Error> {
        black_box(frames);
        Ok(())
    }
}

pub fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/output");

    for &size in BLOCK_SIZES {
        let mono: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin() * 0.8).collect();
        let mut pcm = vec![0i16; size * 2];
        group.bench_with_input(BenchmarkId::new("block_to_pcm", size), &size, |b, _| {
            b.iter(|| {
                block_to_pcm(black_box(&mono), &mut pcm);
                black_box(&mut pcm);
            })
        });

        // drain + render + convert, with a chord arriving over MIDI
        group.bench_with_input(BenchmarkId::new("driver_cycle", size), &size, |b, &size| {
            let mut driver = Driver::new(PolySynth::default(), VecDeque::new(), Discard)
                .block_frames(size);
            b.iter(|| {
                driver.source_mut().extend([0x90, 60, 100, 64, 100, 67, 100]);
                driver.run_cycle()
            })
        });
    }

    group.finish();
}
