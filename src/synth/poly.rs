use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    dsp::{distortion::soft_clip_buffer, oscillator::SineTable},
    synth::{
        config::SynthConfig,
        message::{MessageReceiver, SynthMessage},
        pool::VoicePool,
        voice::VoiceId,
    },
};

/// The synthesis engine: voice pool, wavetable and noise source.
///
/// Two operations mutate voice state, and the caller must never interleave
/// them: `submit_trigger` (allocation) and `render_block` (per-sample
/// updates and deactivation). Everything here is owned by one instance;
/// there are no globals.
pub struct PolySynth {
    config: SynthConfig,
    pool: VoicePool,
    table: SineTable,
    rng: SmallRng,
}

impl PolySynth {
    pub fn new(config: SynthConfig) -> Self {
        Self {
            pool: VoicePool::new(config.sample_rate),
            table: SineTable::new(),
            rng: SmallRng::seed_from_u64(config.noise_seed),
            config,
        }
    }

    /// Hand one trigger to the voice pool.
    ///
    /// A note-on with velocity 0 is accepted and ignored. Anything else
    /// always gets a voice, stealing one if the pool is full.
    pub fn submit_trigger(&mut self, message: SynthMessage) -> Option<VoiceId> {
        match message {
            SynthMessage::NoteOn { velocity: 0, .. } => None,
            SynthMessage::NoteOn { note, velocity } => {
                Some(self.pool.allocate(note, velocity, &mut self.rng))
            }
        }
    }

    pub fn note_on(&mut self, note: u8, velocity: u8) -> Option<VoiceId> {
        self.submit_trigger(SynthMessage::NoteOn { note, velocity })
    }

    /// Submit every pending message. Returns how many were popped.
    pub fn drain<R: MessageReceiver + ?Sized>(&mut self, rx: &mut R) -> usize {
        let mut count = 0;
        while let Some(message) = rx.pop() {
            self.submit_trigger(message);
            count += 1;
        }
        count
    }

    /// Render `out.len()` mono samples, soft clipped into (-1, 1).
    pub fn render_block(&mut self, out: &mut [f32]) {
        out.fill(0.0);

        let Self {
            config,
            pool,
            table,
            rng,
        } = self;

        for voice in pool.iter_mut().filter(|v| v.is_active()) {
            voice.render_add(out, table, config.partial_mode, rng);
        }

        soft_clip_buffer(out);
    }

    pub fn pool(&self) -> &VoicePool {
        &self.pool
    }

    pub fn active_voices(&self) -> usize {
        self.pool.active_count()
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }
}

impl Default for PolySynth {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}
