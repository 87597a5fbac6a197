/*
Attack/Decay Envelope
=====================

A two-stage exponential envelope. There is no sustain stage and nothing
external (no note-off) ever ends it: every note rings out on its own, like a
plucked string.

  Level
    1.0 ┐   ╭╮
        │  ╱  ╲
        │ ╱    ╲__
        │╱        ‾‾‾‾‾─────___
    0.0 └─────────────────────────→ Time
        Attack      Decay

Attack is a one-pole approach toward 1.0:

    level += (1 - level) * attack_coeff

With attack_coeff = 0.02 and a start level of 0.0001 the level passes 0.99
on sample 228 (about 5 ms at 44.1kHz), where the stage flips to Decay.

Decay is a plain exponential:

    level *= decay_coeff,   decay_coeff = exp(-1 / (decay_time * sample_rate))

decay_time is a time constant, not a duration: the level falls by 1/e every
decay_time seconds. Reaching the 1e-4 silence threshold from 0.99 takes about
9.2 time constants.


State Machine
-------------

    ┌─────┐  trigger  ┌────────┐  level > 0.99  ┌───────┐
    │ Off │ ────────→ │ Attack │ ─────────────→ │ Decay │
    └─────┘           └────────┘                └───────┘
       ↑                                            │
       └────────────── level < 1e-4 ────────────────┘

Retriggering from any stage restarts Attack from the start level. The level
stays inside [0, 1] because of the update arithmetic; it is never clamped.
*/

/// Per-sample approach rate during attack.
pub const ATTACK_COEFF: f32 = 0.02;
/// Decay time constant in seconds.
pub const DECAY_TIME: f32 = 0.8;
/// Level a freshly triggered envelope starts from.
pub const START_LEVEL: f32 = 0.0001;
/// Attack hands over to decay once the level exceeds this.
pub const ATTACK_PEAK: f32 = 0.99;
/// Decay ends (and the voice is freed) once the level drops below this.
pub const SILENCE_THRESHOLD: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Off,    // Voice inactive, level = 0
    Attack, // Rising toward 1.0
    Decay,  // Falling toward silence
}

#[derive(Debug, Clone)]
pub struct Envelope {
    attack_coeff: f32,
    decay_coeff: f32,

    stage: EnvelopeState,
    level: f32,
}

impl Envelope {
    pub fn new() -> Self {
        Self {
            attack_coeff: ATTACK_COEFF,
            decay_coeff: 0.0,
            stage: EnvelopeState::Off,
            level: 0.0,
        }
    }

    /// Multiplier that shrinks the level by 1/e every `decay_time` seconds.
    pub fn decay_coeff_for(decay_time: f32, sample_rate: f32) -> f32 {
        (-1.0 / (decay_time * sample_rate)).exp()
    }

    /// Restart from `START_LEVEL` in the attack stage with fresh coefficients.
    pub fn trigger(&mut self, attack_coeff: f32, decay_coeff: f32) {
        self.attack_coeff = attack_coeff;
        self.decay_coeff = decay_coeff;
        self.level = START_LEVEL;
        self.stage = EnvelopeState::Attack;
    }

    /// Advance by one sample.
    ///
    /// Returns `false` on the sample the decay crosses the silence threshold
    /// (level pinned to 0, stage `Off`) and on every call after that.
    #[inline]
    pub fn next_sample(&mut self) -> bool {
        match self.stage {
            EnvelopeState::Off => false,

            EnvelopeState::Attack => {
                self.level += (1.0 - self.level) * self.attack_coeff;
                if self.level > ATTACK_PEAK {
                    self.stage = EnvelopeState::Decay;
                }
                true
            }

            EnvelopeState::Decay => {
                self.level *= self.decay_coeff;
                if self.level < SILENCE_THRESHOLD {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Off;
                    return false;
                }
                true
            }
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeState::Off)
    }

    /// Get the current envelope level (0.0 to 1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }

    pub fn decay_coeff(&self) -> f32 {
        self.decay_coeff
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
