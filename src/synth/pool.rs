use rand::Rng;

use crate::{dsp::oscillator::phase_increment_for, NUM_VOICES};

use super::{
    tuning::{
        cents_to_ratio, inharmonic_cents, midi_note_to_freq, partial_frequency, random_jitter,
        slot_detune_cents,
    },
    voice::{NoteStart, Voice, VoiceCoefficients, VoiceId},
};

/// Fixed pool of voice slots.
///
/// Responsibilities:
/// - pick a slot for every note-on (stealing when full, so it never fails)
/// - reinitialize the slot's oscillators, envelope and pluck burst
/// - hand out strictly increasing ages
///
/// Does NOT:
/// - deactivate voices (the renderer does, when a decay runs out)
/// - allocate memory after construction
pub struct VoicePool {
    voices: [Voice; NUM_VOICES],
    coeffs: VoiceCoefficients,
    sample_rate: f32,
    next_age: u64,
}

impl VoicePool {
    pub fn new(sample_rate: f32) -> Self {
        let coeffs = VoiceCoefficients::new(sample_rate);
        let voices = std::array::from_fn(|id| Voice::new(id, &coeffs));

        Self {
            voices,
            coeffs,
            sample_rate,
            next_age: 0,
        }
    }

    /// Start `note` on a voice and return its slot.
    ///
    /// `velocity` is accepted for interface compatibility but does not affect
    /// the amplitude.
    pub fn allocate<R: Rng + ?Sized>(&mut self, note: u8, velocity: u8, rng: &mut R) -> VoiceId {
        let _ = velocity;
        let id = self.slot_to_steal();

        let victim = &self.voices[id];
        if victim.is_active() {
            log::trace!(
                "stealing voice {id} (age {}, level {:.5}) for note {note}",
                victim.age(),
                victim.envelope_level()
            );
        }

        let freq = midi_note_to_freq(note);
        let detune_ratio = cents_to_ratio(slot_detune_cents(id));
        let inh_cents = inharmonic_cents(freq, random_jitter(rng));

        let start = NoteStart {
            phase_inc: phase_increment_for(freq * detune_ratio, self.sample_rate),
            phase2_inc: phase_increment_for(partial_frequency(freq, inh_cents), self.sample_rate),
            detune_ratio,
            age: self.next_age,
        };
        self.next_age += 1;

        self.voices[id].start(start, &self.coeffs);
        id
    }

    /// Slot the next note-on will take.
    ///
    /// The lowest-index free slot if there is one; otherwise the quietest
    /// voice, the oldest of them when several share the lowest level.
    pub fn slot_to_steal(&self) -> VoiceId {
        if let Some(id) = self.voices.iter().position(|v| !v.is_active()) {
            return id;
        }

        self.voices
            .iter()
            .min_by(|a, b| {
                a.envelope_level()
                    .total_cmp(&b.envelope_level())
                    .then(a.age().cmp(&b.age()))
            })
            .map(Voice::id)
            .unwrap_or(0)
    }

    pub fn voice(&self, id: VoiceId) -> Option<&Voice> {
        self.voices.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Voice> {
        self.voices.iter_mut()
    }

    /// Number of currently active voices.
    pub fn active_count(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}
