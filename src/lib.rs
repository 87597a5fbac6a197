pub mod dsp; // Oscillators, envelope, pluck transient, clipping
pub mod engine; // Driver loop and the allocator seam it drives
pub mod error;
pub mod io;
pub mod synth; // Voice pool, tuning and the block renderer

/// Voices in the pool. Allocation never grows past this.
pub const NUM_VOICES: usize = 14;
/// Frame rate the engine and the output device run at.
pub const SAMPLE_RATE: f32 = 44_100.0;
/// Frames per block handed to the audio sink.
pub const BLOCK_SIZE: usize = 128;
pub const MAX_BLOCK_SIZE: usize = 2048;

pub use engine::driver::Driver;
pub use error::Error;
pub use synth::{
    config::{PartialMode, SynthConfig},
    message::SynthMessage,
    poly::PolySynth,
    voice::VoiceId,
};
