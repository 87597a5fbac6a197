use crate::{
    engine::allocator::VoiceAllocator,
    error::Error,
    io::{
        converter::{block_to_pcm, midi_to_synth, OUTPUT_CHANNELS},
        midi::MidiParser,
        sink::AudioSink,
        source::ByteSource,
    },
    BLOCK_SIZE, MAX_BLOCK_SIZE,
};

/// The top-level loop: drain pending triggers, render one block, hand it off.
///
/// The two phases never overlap, so the synth needs no locking. The only
/// wait is inside `AudioSink::write_block`; that is the loop's pacing.
pub struct Driver<A, S, K> {
    synth: A,
    source: S,
    sink: K,
    parser: MidiParser,
    channel_filter: Option<u8>,
    mix: Vec<f32>,
    pcm: Vec<i16>,
    blocks_rendered: u64,
}

impl<A, S, K> Driver<A, S, K>
where
    A: VoiceAllocator,
    S: ByteSource,
    K: AudioSink,
{
    /// Wire up a driver. A synth rendering at a different rate than the sink
    /// plays is accepted but logged, since the output would be off-pitch.
    pub fn new(synth: A, source: S, sink: K) -> Self {
        let driver = Self {
            synth,
            source,
            sink,
            parser: MidiParser::new(),
            channel_filter: None,
            mix: vec![0.0; BLOCK_SIZE],
            pcm: vec![0; BLOCK_SIZE * OUTPUT_CHANNELS],
            blocks_rendered: 0,
        };
        if !driver.sample_rates_match() {
            log::warn!(
                "synth renders at {} Hz but the sink plays {} Hz",
                driver.synth.sample_rate(),
                driver.sink.sample_rate()
            );
        }
        driver
    }

    /// Whether the synth's rate, rounded to whole Hz, is the sink's rate.
    pub fn sample_rates_match(&self) -> bool {
        self.synth.sample_rate().round() as u32 == self.sink.sample_rate()
    }

    /// Render blocks of `frames` instead of the default 128, up to
    /// `MAX_BLOCK_SIZE`.
    pub fn block_frames(mut self, frames: usize) -> Self {
        let frames = frames.clamp(1, MAX_BLOCK_SIZE);
        self.mix = vec![0.0; frames];
        self.pcm = vec![0; frames * OUTPUT_CHANNELS];
        self
    }

    /// Only react to note-ons on this MIDI channel (0-15).
    pub fn channel(mut self, channel: u8) -> Self {
        self.channel_filter = Some(channel);
        self
    }

    /// Parse every pending byte and submit the resulting triggers.
    ///
    /// Returns the number of triggers submitted.
    pub fn drain_events(&mut self) -> usize {
        let mut triggers = 0;
        while let Some(byte) = self.source.read_byte() {
            let Some(event) = self.parser.feed(byte) else {
                continue;
            };
            if let Some(message) = midi_to_synth(event, self.channel_filter) {
                self.synth.handle_event(message);
                triggers += 1;
            }
        }
        triggers
    }

    /// Render one block and block until the sink accepts it.
    pub fn render_next(&mut self) -> Result<(), Error> {
        self.synth.render(&mut self.mix);
        block_to_pcm(&self.mix, &mut self.pcm);
        self.sink.write_block(&self.pcm)?;
        self.blocks_rendered += 1;
        Ok(())
    }

    pub fn run_cycle(&mut self) -> Result<(), Error> {
        self.drain_events();
        self.render_next()
    }

    pub fn run_blocks(&mut self, blocks: usize) -> Result<(), Error> {
        for _ in 0..blocks {
            self.run_cycle()?;
        }
        Ok(())
    }

    /// Loop forever. Only returns when the sink fails.
    pub fn run(&mut self) -> Result<(), Error> {
        log::debug!(
            "driver running: {} frames per block at {} Hz",
            self.mix.len(),
            self.sink.sample_rate()
        );
        loop {
            self.run_cycle()?;
        }
    }

    pub fn blocks_rendered(&self) -> u64 {
        self.blocks_rendered
    }

    pub fn synth(&self) -> &A {
        &self.synth
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_parts(self) -> (A, S, K) {
        (self.synth, self.source, self.sink)
    }
}
