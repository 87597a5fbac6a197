//! Render a short strummed phrase to `pluck_bounce.wav` without an audio device.
use std::collections::VecDeque;

use pluck_engine::{io::sink::WavSink, Driver, PolySynth, SynthConfig, BLOCK_SIZE, SAMPLE_RATE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pluck_bounce.wav".to_string());
    let synth = PolySynth::new(SynthConfig::default());
    // header rate follows the synth so the bounce plays at pitch
    let sink = WavSink::create_with_rate(&path, synth.pool().sample_rate() as u32)?;
    let mut driver = Driver::new(synth, VecDeque::new(), sink);

    // E minor strum, one string every 30 ms, then let it ring
    let strum = [40u8, 47, 52, 55, 59, 64];
    let blocks_per_string = (0.03 * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;
    for (i, &note) in strum.iter().enumerate() {
        // first byte carries the status, the rest ride on running status
        if i == 0 {
            driver.source_mut().push_back(0x90);
        }
        driver.source_mut().extend([note, 96]);
        driver.run_blocks(blocks_per_string.max(1))?;
    }
    let tail_blocks = (4.0 * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;
    driver.run_blocks(tail_blocks)?;

    let (_, _, mut sink) = driver.into_parts();
    sink.close()?;
    println!("Wrote {path}");
    Ok(())
}
