//! Sequencer - plays an arpeggio as raw MIDI bytes
//!
//! Runs on its own thread and writes running-status note-ons into the SPSC
//! byte ring the driver drains. A full ring drops bytes, like a serial
//! port that overflows.

use std::{
    thread,
    time::{Duration, Instant},
};

use rtrb::Producer;

const NOTE_ON: u8 = 0x90;
/// Resend the status byte this often so a dropped byte cannot desync us.
const STATUS_REFRESH: usize = 16;

pub struct Arpeggio {
    notes: Vec<u8>,
    velocity: u8,
}

impl Arpeggio {
    pub fn new(notes: &[u8]) -> Self {
        Self {
            notes: notes.to_vec(),
            velocity: 100,
        }
    }

    /// Loop the arpeggio forever, one note every `step`.
    pub fn play(self, mut tx: Producer<u8>, step: Duration) {
        let mut dropped = 0usize;
        let mut next = Instant::now();

        for (i, &note) in self.notes.iter().cycle().enumerate() {
            let bytes: &[u8] = if i % STATUS_REFRESH == 0 {
                &[NOTE_ON, note, self.velocity]
            } else {
                &[note, self.velocity]
            };
            for &byte in bytes {
                if tx.push(byte).is_err() {
                    dropped += 1;
                }
            }
            if tx.is_abandoned() {
                log::debug!("driver gone, sequencer stopping ({dropped} bytes dropped)");
                return;
            }

            next += step;
            thread::sleep(next.saturating_duration_since(Instant::now()));
        }
    }
}
