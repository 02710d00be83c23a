//! Line framing for the chat port.
//!
//! Wraps `LinesCodec` so an over-long line becomes an item instead of a
//! stream error. A decode error makes `Framed` stop decoding the bytes it
//! has already buffered, which would leave commands that arrived in the
//! same read as the long line unanswered.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder, LinesCodec, LinesCodecError};

/// One decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Line(String),
    /// A line longer than the limit; its bytes have been discarded.
    TooLong,
}

#[derive(Debug)]
pub struct CommandCodec {
    inner: LinesCodec,
}

impl CommandCodec {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_line_length),
        }
    }
}

fn lift(
    decoded: Result<Option<String>, LinesCodecError>,
) -> Result<Option<Inbound>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(Inbound::Line)),
        // LinesCodec keeps discarding the rest of the line on the next call.
        Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Inbound::TooLong)),
        Err(e) => Err(e),
    }
}

impl Decoder for CommandCodec {
    type Item = Inbound;
    type Error = LinesCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        lift(self.inner.decode(src))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        lift(self.inner.decode_eof(src))
    }
}

impl<T: AsRef<str>> Encoder<T> for CommandCodec {
    type Error = LinesCodecError;

    fn encode(&mut self, line: T, dst: &mut BytesMut) -> Result<(), LinesCodecError> {
        self.inner.encode(line, dst)
    }
}
