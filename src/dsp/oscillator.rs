use std::f64::consts::TAU;

/*
Phase-Accumulator Oscillators
=============================

Every oscillator in the engine is driven by a 32-bit unsigned phase
accumulator. One full cycle of the waveform spans the whole u32 range, so
the accumulator wraps back to zero exactly when the waveform repeats:

    phase      0 ─────────────────────────────→ 2^32 (wraps to 0)
    waveform   start of cycle              end of cycle

Each sample we add a fixed increment. The wrap is plain unsigned overflow
(`wrapping_add`), so there is no branch and no drift:

    phase_inc = freq * 2^32 / sample_rate

Example: 440 Hz at 44.1kHz
  - phase_inc = 440 * 4294967296 / 44100 ≈ 42_852_281
  - 2^32 / 42_852_281 ≈ 100.2 samples per cycle ✓


Sine: Wavetable Lookup
----------------------

The sine is read from a 2048-entry table (2^11). The table index is the top
11 bits of the phase, so no multiply or modulo is needed:

    index = phase >> (32 - 11)

There is no interpolation between entries. At 2048 points per cycle the
stair-stepping sits far below the voice's noise floor.


Sawtooth: Direct Ramp
---------------------

The sawtooth is the phase itself rescaled to [-1, 1]:

    saw = (phase / 2^32) * 2 - 1

This is NOT band-limited. High notes alias. The saw only ever appears as a
quiet layer under the sine, where the aliasing reads as brightness.
*/

/// Wavetable resolution in bits (2^11 = 2048 entries).
pub const TABLE_BITS: u32 = 11;
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;

const PHASE_RANGE: f64 = 4_294_967_296.0; // 2^32

/// One cycle of a sine wave, computed once when the engine is built.
pub struct SineTable {
    table: Box<[f32]>,
}

impl SineTable {
    pub fn new() -> Self {
        let table = (0..TABLE_SIZE)
            .map(|i| (TAU * i as f64 / TABLE_SIZE as f64).sin() as f32)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self { table }
    }

    /// Table lookup indexed by the top `TABLE_BITS` of the phase.
    #[inline]
    pub fn sine_at(&self, phase: u32) -> f32 {
        let index = (phase >> (32 - TABLE_BITS)) as usize;
        self.table[index & (TABLE_SIZE - 1)]
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for SineTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Naive sawtooth: a linear ramp from -1 to 1 over one phase cycle.
#[inline]
pub fn saw_at(phase: u32) -> f32 {
    ((phase as f64 / PHASE_RANGE) * 2.0 - 1.0) as f32
}

/// Phase increment per sample for `freq` Hz.
///
/// Computed in f64 and rounded. Negative frequencies give 0, anything at or
/// above the representable range saturates at `u32::MAX`.
#[inline]
pub fn phase_increment_for(freq: f32, sample_rate: f32) -> u32 {
    let inc = (freq as f64 * (PHASE_RANGE / sample_rate as f64)).round();
    // NaN falls through both bounds and casts to 0
    inc.clamp(0.0, u32::MAX as f64) as u32
}
