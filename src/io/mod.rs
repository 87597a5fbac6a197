// Purpose - external interfaces, format conversions

pub mod converter;
pub mod midi;
pub mod sink;
pub mod source;

pub use midi::{MidiEvent, MidiParser};
pub use sink::{AudioSink, MemorySink};
pub use source::ByteSource;

#[cfg(feature = "wav")]
pub use sink::WavSink;
