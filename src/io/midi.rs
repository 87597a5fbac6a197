//! MIDI byte-stream decoding.
//!
//! The serial link delivers a raw byte stream that uses running status: once
//! a status byte has been sent, further messages of the same kind may omit
//! it and send only their data bytes.
//!
//!   90 3C 64  40 64  43 64     three note-ons, status sent once
//!   ── ─────  ─────  ─────
//!   status  data   data   data
//!
//! Every channel-voice family is decoded so the framing stays correct, even
//! though the synth only acts on note-on.
//!
//! This is stricter than a bare two-data-bytes-per-status reader: program
//! change and channel pressure take one data byte, and realtime bytes
//! (0xF8-0xFF) pass through without touching running status. With the bare
//! reader, `90 3C F8 64` would produce nothing, and `C0 05 3C 64` would be
//! read as one two-byte message.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    PolyPressure { channel: u8, key: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    PitchBend { channel: u8, value: i16 },
}

/// Incremental running-status parser. Feed it one byte at a time.
#[derive(Debug, Default)]
pub struct MidiParser {
    running_status: Option<u8>,
    first_data: Option<u8>,
    in_sysex: bool,
}

impl MidiParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte; returns an event when it completes a message.
    pub fn feed(&mut self, byte: u8) -> Option<MidiEvent> {
        match byte {
            // Real-time: may arrive anywhere, even mid-message
            0xF8..=0xFF => None,

            0xF0 => {
                self.running_status = None;
                self.first_data = None;
                self.in_sysex = true;
                None
            }

            // System common and end-of-exclusive cancel running status
            0xF1..=0xF7 => {
                self.running_status = None;
                self.first_data = None;
                self.in_sysex = false;
                None
            }

            0x80..=0xEF => {
                self.running_status = Some(byte);
                self.first_data = None;
                self.in_sysex = false;
                None
            }

            _ => self.feed_data(byte),
        }
    }

    fn feed_data(&mut self, data: u8) -> Option<MidiEvent> {
        if self.in_sysex {
            return None;
        }

        let status = match self.running_status {
            Some(status) => status,
            None => {
                log::trace!("dropping data byte {data:#04x} without status");
                return None;
            }
        };

        if data_len(status) == 1 {
            return Some(decode(status, data, 0));
        }

        match self.first_data.take() {
            None => {
                self.first_data = Some(data);
                None
            }
            Some(first) => Some(decode(status, first, data)),
        }
    }

    pub fn running_status(&self) -> Option<u8> {
        self.running_status
    }
}

fn data_len(status: u8) -> usize {
    match status & 0xF0 {
        0xC0 | 0xD0 => 1,
        _ => 2,
    }
}

fn decode(status: u8, data1: u8, data2: u8) -> MidiEvent {
    let channel = status & 0x0F;
    match status & 0xF0 {
        0x80 => MidiEvent::NoteOff {
            channel,
            key: data1,
            velocity: data2,
        },
        0x90 => MidiEvent::NoteOn {
            channel,
            key: data1,
            velocity: data2,
        },
        0xA0 => MidiEvent::PolyPressure {
            channel,
            key: data1,
            pressure: data2,
        },
        0xB0 => MidiEvent::ControlChange {
            channel,
            controller: data1,
            value: data2,
        },
        0xC0 => MidiEvent::ProgramChange {
            channel,
            program: data1,
        },
        0xD0 => MidiEvent::ChannelPressure {
            channel,
            pressure: data1,
        },
        _ => MidiEvent::PitchBend {
            channel,
            value: (((data2 as i16) << 7) | data1 as i16) - 8192,
        },
    }
}
