#[cfg(feature = "wav")]
use std::{fs::File, io::BufWriter, path::Path};

#[cfg(feature = "wav")]
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::{error::Error, io::converter::OUTPUT_CHANNELS, SAMPLE_RATE};

// -------------------------------------------------------------------------------------------------

/// Destination for finished blocks of interleaved 16-bit stereo frames.
///
/// `write_block` blocks until the whole block has been accepted. That wait
/// is what keeps the driver from running ahead of playback.
pub trait AudioSink {
    fn write_block(&mut self, frames: &[i16]) -> Result<(), Error>;

    /// Output frame rate in Hz.
    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE as u32
    }

    /// Interleaved channels per frame.
    fn channel_count(&self) -> usize {
        OUTPUT_CHANNELS
    }
}

// -------------------------------------------------------------------------------------------------

/// Collects every written sample in memory. Never blocks.
#[derive(Debug, Default)]
pub struct MemorySink {
    samples: Vec<i16>,
    blocks: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn blocks_written(&self) -> usize {
        self.blocks
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

impl AudioSink for MemorySink {
    fn write_block(&mut self, frames: &[i16]) -> Result<(), Error> {
        self.samples.extend_from_slice(frames);
        self.blocks += 1;
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

/// Writes blocks into a 16-bit stereo WAV file.
#[cfg(feature = "wav")]
pub struct WavSink {
    writer: Option<WavWriter<BufWriter<File>>>,
    sample_rate: u32,
}

#[cfg(feature = "wav")]
impl WavSink {
    /// Create (or truncate) `file_path` at the engine's frame rate.
    pub fn create<P: AsRef<Path>>(file_path: P) -> Result<Self, Error> {
        Self::create_with_rate(file_path, SAMPLE_RATE as u32)
    }

    pub fn create_with_rate<P: AsRef<Path>>(file_path: P, sample_rate: u32) -> Result<Self, Error> {
        let spec = WavSpec {
            channels: OUTPUT_CHANNELS as u16,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let writer = WavWriter::create(file_path.as_ref(), spec)?;
        log::debug!("opened wav sink {}", file_path.as_ref().display());

        Ok(Self {
            writer: Some(writer),
            sample_rate,
        })
    }

    /// Flush and finalize the file header. Later writes fail with `SinkClosed`.
    pub fn close(&mut self) -> Result<(), Error> {
        if let Some(writer) = self.writer.take() {
            writer.finalize()?;
            log::debug!("finalized wav sink");
        }
        Ok(())
    }
}

#[cfg(feature = "wav")]
impl AudioSink for WavSink {
    fn write_block(&mut self, frames: &[i16]) -> Result<(), Error> {
        let writer = self.writer.as_mut().ok_or(Error::SinkClosed)?;
        for &sample in frames {
            writer.write_sample(sample)?;
        }
        Ok(())
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(feature = "wav")]
impl Drop for WavSink {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!("Failed to finalize WAV file: {err}");
        }
    }
}
