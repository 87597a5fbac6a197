#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SAMPLE_RATE;

/// How the secondary oscillator is mixed into a voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialMode {
    /// Fixed-weight sawtooth layer, independent of the envelope.
    #[default]
    SawLayer,
    /// Detuned sine partial whose weight follows the envelope.
    SinePartial,
}

/// Engine-wide settings, fixed once the synth is built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    pub sample_rate: f32,
    pub partial_mode: PartialMode,
    /// Seed for the pluck noise and inharmonicity jitter.
    pub noise_seed: u64,
}

impl SynthConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            partial_mode: PartialMode::SawLayer,
            noise_seed: 0x5EED_0F_A11,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_partial_mode(mut self, partial_mode: PartialMode) -> Self {
        self.partial_mode = partial_mode;
        self
    }

    pub fn with_noise_seed(mut self, noise_seed: u64) -> Self {
        self.noise_seed = noise_seed;
        self
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}
