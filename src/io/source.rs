use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Non-blocking byte intake from the note-event transport.
///
/// `read_byte` returns `None` as soon as nothing is pending. Bytes the
/// transport dropped on overflow are simply never seen here.
pub trait ByteSource {
    fn read_byte(&mut self) -> Option<u8>;
}

#[cfg(feature = "rtrb")]
impl ByteSource for Consumer<u8> {
    fn read_byte(&mut self) -> Option<u8> {
        self.pop().ok()
    }
}

impl ByteSource for VecDeque<u8> {
    fn read_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

/// A source that never delivers anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl ByteSource for NoInput {
    fn read_byte(&mut self) -> Option<u8> {
        None
    }
}


#[cfg(all(test, feature = "rtrb"))]
mod ring_tests {
    use rtrb::RingBuffer;

    use super::*;

    #[test]
    fn ring_buffer_source_is_non_blocking() {
        let (mut tx, mut rx) = RingBuffer::<u8>::new(4);
        assert_eq!(rx.read_byte(), None);

        for b in [0x90, 0x3C, 0x64, 0x40] {
            assert!(tx.push(b).is_ok());
        }
        // a full transport drops what it cannot hold
        assert!(tx.push(0x64).is_err());

        let drained: Vec<u8> = std::iter::from_fn(|| rx.read_byte()).collect();
        assert_eq!(drained, vec![0x90, 0x3C, 0x64, 0x40]);
    }
}
