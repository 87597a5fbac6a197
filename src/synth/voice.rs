use rand::Rng;

use crate::dsp::{
    envelope::{Envelope, EnvelopeState, ATTACK_COEFF, DECAY_TIME},
    filter::OnePole,
    oscillator::{saw_at, SineTable},
    pluck::{PluckTransient, PLUCK_CUTOFF_HZ, PLUCK_TIME},
};

use super::config::PartialMode;

/// Index of a voice slot in the pool.
pub type VoiceId = usize;

/// Per-voice output gain before the mix is soft clipped.
pub const VOICE_GAIN: f32 = 0.12;
/// Weight of the pluck burst relative to the tone.
pub const PLUCK_STRENGTH: f32 = 0.3;
/// Weight of the sawtooth layer in `PartialMode::SawLayer`.
pub const SAW_LEVEL: f32 = 0.15;
/// Peak weight of the sine partial in `PartialMode::SinePartial`.
pub const INHARMONIC_LEVEL: f32 = 0.08;

/// Coefficients shared by every voice, derived once from the sample rate.
#[derive(Debug, Clone, Copy)]
pub struct VoiceCoefficients {
    pub attack: f32,
    pub decay: f32,
    pub pluck_decay: f32,
    pub pluck_alpha: f32,
}

impl VoiceCoefficients {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            attack: ATTACK_COEFF,
            decay: Envelope::decay_coeff_for(DECAY_TIME, sample_rate),
            pluck_decay: PluckTransient::decay_coeff_for(PLUCK_TIME, sample_rate),
            pluck_alpha: OnePole::alpha_for(PLUCK_CUTOFF_HZ, sample_rate),
        }
    }
}

/// Oscillator setup for a newly allocated note.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoteStart {
    pub phase_inc: u32,
    pub phase2_inc: u32,
    pub detune_ratio: f32,
    pub age: u64,
}

/// One slot of the voice pool.
#[derive(Debug, Clone)]
pub struct Voice {
    id: VoiceId,
    active: bool,

    // Fundamental (sine), wraps on overflow
    phase: u32,
    phase_inc: u32,
    // Octave partial, wraps on overflow
    phase2: u32,
    phase2_inc: u32,

    envelope: Envelope,
    pluck: PluckTransient,

    age: u64,
    detune_ratio: f32,
}

impl Voice {
    pub fn new(id: VoiceId, coeffs: &VoiceCoefficients) -> Self {
        Self {
            id,
            active: false,
            phase: 0,
            phase_inc: 0,
            phase2: 0,
            phase2_inc: 0,
            envelope: Envelope::new(),
            pluck: PluckTransient::new(coeffs.pluck_alpha),
            age: 0,
            detune_ratio: 1.0,
        }
    }

    /// Overwrite every field for a new note.
    pub(crate) fn start(&mut self, note: NoteStart, coeffs: &VoiceCoefficients) {
        self.phase = 0;
        self.phase_inc = note.phase_inc;
        self.phase2 = 0;
        self.phase2_inc = note.phase2_inc;
        self.detune_ratio = note.detune_ratio;

        self.envelope.trigger(coeffs.attack, coeffs.decay);
        self.pluck.trigger(coeffs.pluck_decay);

        self.age = note.age;
        self.active = true;
    }

    /// Add this voice's next `out.len()` samples into `out`.
    ///
    /// Stops at the sample where the envelope decays into silence; the voice
    /// contributes nothing to the rest of the block.
    pub(crate) fn render_add<R: Rng + ?Sized>(
        &mut self,
        out: &mut [f32],
        table: &SineTable,
        mode: PartialMode,
        rng: &mut R,
    ) {
        for sample in out.iter_mut() {
            let pluck = self.pluck.next_sample(rng);

            let level = self.envelope.level();
            let tone = match mode {
                PartialMode::SawLayer => table.sine_at(self.phase) + SAW_LEVEL * saw_at(self.phase2),
                PartialMode::SinePartial => {
                    let partial_level = INHARMONIC_LEVEL * (0.4 + 0.6 * level);
                    table.sine_at(self.phase) + table.sine_at(self.phase2) * partial_level
                }
            };

            *sample += (tone * level + pluck * PLUCK_STRENGTH) * VOICE_GAIN;

            self.phase = self.phase.wrapping_add(self.phase_inc);
            self.phase2 = self.phase2.wrapping_add(self.phase2_inc);

            if !self.envelope.next_sample() {
                self.active = false;
                break;
            }
        }
    }

    pub fn id(&self) -> VoiceId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn envelope_level(&self) -> f32 {
        self.envelope.level()
    }

    pub fn envelope_state(&self) -> EnvelopeState {
        self.envelope.state()
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn detune_ratio(&self) -> f32 {
        self.detune_ratio
    }

    pub fn phase_inc(&self) -> u32 {
        self.phase_inc
    }

    pub fn phase2_inc(&self) -> u32 {
        self.phase2_inc
    }

    pub fn pluck_level(&self) -> f32 {
        self.pluck.level()
    }
}
