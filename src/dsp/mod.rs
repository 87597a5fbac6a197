//! Low-level DSP primitives used by the voice renderer.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They stay focused on the per-sample
//! math; voice bookkeeping lives in `synth`.

/// Soft and hard clipping.
pub mod distortion;
/// Attack/decay envelope generator.
pub mod envelope;
/// One-pole smoothing filter.
pub mod filter;
/// Phase-accumulator oscillators: sine wavetable and naive sawtooth.
pub mod oscillator;
/// Filtered-noise excitation burst.
pub mod pluck;

pub use envelope::EnvelopeState;
