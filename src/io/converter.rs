use crate::{dsp::distortion::hard_clip, io::midi::MidiEvent, synth::message::SynthMessage};

/// Full-scale float maps to this PCM value, leaving headroom below i16::MAX.
pub const PCM_SCALE: f32 = 12_000.0;
/// Interleaved channels per output frame.
pub const OUTPUT_CHANNELS: usize = 2;

/// Translate a decoded MIDI event into a synth trigger.
///
/// Only note-on becomes a trigger. `channel_filter` of `None` listens on
/// every channel. Velocity 0 is passed through; the synth ignores it.
pub fn midi_to_synth(midi: MidiEvent, channel_filter: Option<u8>) -> Option<SynthMessage> {
    match midi {
        MidiEvent::NoteOn {
            channel,
            key,
            velocity,
        } if channel_filter.map_or(true, |c| c == channel) => Some(SynthMessage::NoteOn {
            note: key,
            velocity,
        }),
        other => {
            log::trace!("discarding {other:?}");
            None
        }
    }
}

/// Convert a mono float block to interleaved stereo PCM.
///
/// Each sample is clamped to [-1, 1], scaled by `PCM_SCALE` and truncated
/// toward zero; left and right get the same value. Converts
/// `min(mono.len(), out.len() / 2)` frames.
pub fn block_to_pcm(mono: &[f32], out: &mut [i16]) {
    for (frame, &sample) in out.chunks_exact_mut(OUTPUT_CHANNELS).zip(mono) {
        let value = (hard_clip(sample, 1.0) * PCM_SCALE) as i16;
        frame.fill(value);
    }
}
