use crate::synth::{message::SynthMessage, poly::PolySynth};

/// What the driver needs from a synth: take triggers, produce blocks.
pub trait VoiceAllocator {
    fn handle_event(&mut self, event: SynthMessage);
    fn render(&mut self, out: &mut [f32]);
    /// Rate the voice coefficients were computed for.
    fn sample_rate(&self) -> f32;
}

impl VoiceAllocator for PolySynth {
    fn handle_event(&mut self, event: SynthMessage) {
        self.submit_trigger(event);
    }

    fn render(&mut self, out: &mut [f32]) {
        self.render_block(out);
    }

    fn sample_rate(&self) -> f32 {
        self.pool().sample_rate()
    }
}
