//! Pluck - main application builder and runner

use std::{thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    FromSample, SampleFormat, SizedSample, StreamConfig,
};
use rtrb::{Consumer, Producer, RingBuffer};

use pluck_engine::{
    io::sink::AudioSink, Driver, Error, PolySynth, SynthConfig, BLOCK_SIZE, SAMPLE_RATE,
};

use super::sequencer::Arpeggio;

/// Blocks of PCM the device ring can hold before the driver waits.
const RING_BLOCKS: usize = 8;
const MIDI_RING: usize = 256;

/// Main application builder
pub struct Pluck {
    bpm: f64,
    steps_per_beat: u32,
    config: SynthConfig,
}

impl Pluck {
    pub fn new() -> Self {
        Self {
            bpm: 120.0,
            steps_per_beat: 4,
            config: SynthConfig::default(),
        }
    }

    /// Set the tempo in beats per minute
    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Notes played per beat
    pub fn steps_per_beat(mut self, steps: u32) -> Self {
        self.steps_per_beat = steps.max(1);
        self
    }

    /// Run the application (takes over, plays audio)
    pub fn run(self, arpeggio: Arpeggio) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let supported = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        // The engine's rate is fixed; ask the device for it directly.
        let config = StreamConfig {
            channels: 2,
            sample_rate: cpal::SampleRate(SAMPLE_RATE as u32),
            buffer_size: cpal::BufferSize::Default,
        };

        let (pcm_tx, pcm_rx) = RingBuffer::<i16>::new(BLOCK_SIZE * 2 * RING_BLOCKS);
        let stream = match supported.sample_format() {
            SampleFormat::I16 => build_stream::<i16>(&device, &config, pcm_rx),
            SampleFormat::F32 => build_stream::<f32>(&device, &config, pcm_rx),
            SampleFormat::I32 => build_stream::<i32>(&device, &config, pcm_rx),
            other => Err(eyre!("unsupported sample format {other:?}")),
        }?;
        stream.play().wrap_err("failed to start output stream")?;

        log::info!(
            "playing at {} bpm, {} Hz, {} voices. Press Ctrl+C to stop",
            self.bpm,
            SAMPLE_RATE,
            pluck_engine::NUM_VOICES
        );

        let (midi_tx, midi_rx) = RingBuffer::<u8>::new(MIDI_RING);
        let step = Duration::from_secs_f64(60.0 / self.bpm / f64::from(self.steps_per_beat));
        thread::Builder::new()
            .name("sequencer".into())
            .spawn(move || arpeggio.play(midi_tx, step))
            .wrap_err("failed to spawn sequencer thread")?;

        let sink = CpalSink { tx: pcm_tx };
        let mut driver = Driver::new(PolySynth::new(self.config), midi_rx, sink);
        driver.run().wrap_err("audio output stopped")
    }
}

impl Default for Pluck {
    fn default() -> Self {
        Self::new()
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut rx: Consumer<i16>,
) -> EyreResult<cpal::Stream>
where
    T: SizedSample + FromSample<i16>,
{
    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for out in data.iter_mut() {
                    // underrun plays silence
                    let sample = rx.pop().unwrap_or(0);
                    *out = T::from_sample(sample);
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")
}

/// Hands PCM to the device callback through an SPSC ring.
///
/// `write_block` waits while the ring is full; that wait paces the driver
/// to the device clock.
struct CpalSink {
    tx: Producer<i16>,
}

impl AudioSink for CpalSink {
    fn write_block(&mut self, frames: &[i16]) -> Result<(), Error> {
        for chunk in frames.chunks(BLOCK_SIZE) {
            // The callback thread is cpal's and must not unpark us, so poll.
            // One millisecond is well under a block period (2.9 ms).
            while self.tx.slots() < chunk.len() {
                if self.tx.is_abandoned() {
                    return Err(Error::SinkClosed);
                }
                thread::sleep(Duration::from_millis(1));
            }
            let written = self
                .tx
                .write_chunk_uninit(chunk.len())
                .map_err(|e| Error::OutputDeviceError(Box::new(e)))?
                .fill_from_iter(chunk.iter().copied());
            debug_assert_eq!(written, chunk.len());
        }
        Ok(())
    }
}
