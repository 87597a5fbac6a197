//! Pitch, detune and inharmonicity mapping.
//!
//! Each voice carries two oscillators:
//!
//! - the fundamental, detuned by a few cents depending on which pool slot
//!   the voice occupies (an ensemble spread: the same note lands on a
//!   different slot each time it is stolen into a new one)
//! - a partial one octave up, pushed sharp by an amount that grows with
//!   pitch, like the stretched overtones of a stiff string, plus a small
//!   random jitter redrawn on every note

use rand::Rng;

use crate::NUM_VOICES;

/// Maximum slot detune either side of the true pitch.
pub const DETUNE_CENTS: f32 = 4.0;
/// Partial offset at A4.
pub const INHARMONIC_CENTS_BASE: f32 = 1.5;
/// Additional partial offset per octave above A4.
pub const INHARMONIC_CENTS_SLOPE: f32 = 2.0;
/// Half-width of the per-note partial jitter.
pub const INHARMONIC_JITTER_CENTS: f32 = 0.3;

/// Convert MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
///
/// Not range-checked: values above 127 keep following the formula.
#[inline]
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

#[inline]
pub fn cents_to_ratio(cents: f32) -> f32 {
    2.0_f32.powf(cents / 1200.0)
}

/// Detune for a pool slot, spread evenly from -4 cents (slot 0) to +4 cents
/// (last slot).
pub fn slot_detune_cents(slot: usize) -> f32 {
    (slot as f32 / (NUM_VOICES - 1) as f32 - 0.5) * 2.0 * DETUNE_CENTS
}

/// Offset of the octave partial for a fundamental of `freq` Hz.
pub fn inharmonic_cents(freq: f32, jitter: f32) -> f32 {
    INHARMONIC_CENTS_BASE + INHARMONIC_CENTS_SLOPE * (freq / 440.0).log2() + jitter
}

/// Uniform jitter in [-0.3, 0.3] cents.
pub fn random_jitter<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.random::<f32>() - 0.5) * 2.0 * INHARMONIC_JITTER_CENTS
}

/// Frequency of the octave partial, `inh_cents` sharp of 2·freq.
pub fn partial_frequency(freq: f32, inh_cents: f32) -> f32 {
    freq * 2.0 * cents_to_ratio(inh_cents)
}
