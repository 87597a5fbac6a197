//! Benchmarks for the attack/decay envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use pluck_engine::{
    dsp::envelope::{Envelope, ATTACK_COEFF, DECAY_TIME},
    SAMPLE_RATE,
};

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let decay = Envelope::decay_coeff_for(DECAY_TIME, SAMPLE_RATE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Decay phase; retrigger keeps it from going idle across iterations
        let mut env = Envelope::new();
        env.trigger(ATTACK_COEFF, decay);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                if !env.is_active() {
                    env.trigger(ATTACK_COEFF, decay);
                }
                for out in buffer.iter_mut() {
                    env.next_sample();
                    *out = env.level();
                }
                black_box(&mut buffer);
            })
        });

        // Attack phase only
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                let mut env = Envelope::new();
                env.trigger(black_box(ATTACK_COEFF), decay);
                for out in buffer.iter_mut().take(200) {
                    env.next_sample();
                    *out = env.level();
                }
                black_box(&mut buffer);
            })
        });
    }

    group.finish();
}
