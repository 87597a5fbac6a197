/// Polyphony over an SPSC message queue, without MIDI framing
use rtrb::RingBuffer;
use pluck_engine::{PolySynth, SynthConfig, SynthMessage, BLOCK_SIZE, NUM_VOICES};

fn main() {
    println!("=== Simple Polyphony Example ===\n");

    let (mut tx, mut rx) = RingBuffer::<SynthMessage>::new(64);
    let mut poly = PolySynth::new(SynthConfig::default());

    println!("Playing C major chord:");
    for note in [60u8, 64, 67] {
        println!("  Note On: {note}");
        let _ = tx.push(SynthMessage::NoteOn {
            note,
            velocity: 100,
        });
    }

    let drained = poly.drain(&mut rx);
    let mut buffer = vec![0.0; BLOCK_SIZE];
    poly.render_block(&mut buffer);

    let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    println!("\nDrained {drained} messages, {} voices active", poly.active_voices());
    println!("Peak of first block: {peak:.4}");

    println!("\nFilling the pool and stealing:");
    for note in 40..40 + NUM_VOICES as u8 + 2 {
        if let Some(id) = poly.note_on(note, 100) {
            println!("  note {note} -> voice {id}");
        }
        poly.render_block(&mut buffer);
    }
    println!("{} voices active", poly.active_voices());
}
