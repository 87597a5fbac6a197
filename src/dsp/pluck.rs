//! Pluck transient - a short burst of low-passed white noise.
//!
//! Layered over the tonal part of a voice to imitate the scrape of a pick or
//! finger at the moment of excitation. The burst has its own exponential
//! envelope (1.4 ms time constant), independent of the amplitude envelope.
//!
//! Once the burst level falls to the threshold it contributes exactly 0 and
//! the filter is no longer clocked: its state stays frozen until the voice is
//! triggered again.

use rand::Rng;

use super::filter::OnePole;

/// Burst time constant in seconds.
pub const PLUCK_TIME: f32 = 0.0014;
/// Cutoff of the noise low-pass. Low enough to sound woody rather than hissy.
pub const PLUCK_CUTOFF_HZ: f32 = 1200.0;
/// The burst is silent at or below this level.
pub const PLUCK_THRESHOLD: f32 = 1e-4;

#[derive(Debug, Clone)]
pub struct PluckTransient {
    level: f32,
    decay_coeff: f32,
    filter: OnePole,
}

impl PluckTransient {
    /// `alpha` is the low-pass coefficient, fixed for the life of the engine.
    pub fn new(alpha: f32) -> Self {
        Self {
            level: 0.0,
            decay_coeff: 0.0,
            filter: OnePole::with_alpha(alpha),
        }
    }

    pub fn decay_coeff_for(pluck_time: f32, sample_rate: f32) -> f32 {
        (-1.0 / (pluck_time * sample_rate)).exp()
    }

    /// Start a new burst at full level with a cleared filter.
    pub fn trigger(&mut self, decay_coeff: f32) {
        self.level = 1.0;
        self.decay_coeff = decay_coeff;
        self.filter.reset();
    }

    /// Next burst sample. Draws from `rng` only while the burst is sounding.
    #[inline]
    pub fn next_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f32 {
        if self.level <= PLUCK_THRESHOLD {
            return 0.0;
        }

        let noise: f32 = rng.random_range(-1.0..=1.0);
        let out = self.filter.process(noise) * self.level;
        self.level *= self.decay_coeff;
        out
    }

    pub fn is_sounding(&self) -> bool {
        self.level > PLUCK_THRESHOLD
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn filter_state(&self) -> f32 {
        self.filter.state()
    }
}
