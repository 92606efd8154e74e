// Frame format: [Start:1 = 0] [Data:8, LSB first] [Stop:1 = 1]

use tracing::{debug, trace};

use super::bits::{bits_to_char, byte_to_bits_lsb};
use crate::error::{DecodeError, FrameError, Result};
use crate::utils::consts::{BITS_PER_FRAME, START_BIT, STOP_BIT};

/// One validated 10-bit window of the bitstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFrame<'a> {
    bits: &'a [u8],
}

impl<'a> ByteFrame<'a> {
    /// Validates start and stop bit. The start bit is checked first.
    pub fn from_bits(bits: &'a [u8]) -> std::result::Result<Self, FrameError> {
        debug_assert_eq!(bits.len(), BITS_PER_FRAME);

        if bits[0] != START_BIT {
            return Err(FrameError::InvalidStartBit);
        }
        if bits[BITS_PER_FRAME - 1] != STOP_BIT {
            return Err(FrameError::InvalidStopBit);
        }

        Ok(Self { bits })
    }

    pub fn data_bits(&self) -> &'a [u8] {
        &self.bits[1..BITS_PER_FRAME - 1]
    }

    pub fn to_char(&self) -> char {
        bits_to_char(self.data_bits())
    }
}

/// Splits a bitstream into consecutive, gapless 10-bit frames.
pub struct ByteFramer;

impl ByteFramer {
    /// Complete frames only; a trailing partial window is dropped.
    pub fn frames(
        bits: &[u8],
    ) -> impl Iterator<Item = std::result::Result<ByteFrame<'_>, FrameError>> {
        let leftover = bits.len() % BITS_PER_FRAME;
        if leftover != 0 {
            debug!(
                "Dropping {} trailing bit(s) that do not fill a frame",
                leftover
            );
        }
        bits.chunks_exact(BITS_PER_FRAME)
            .map(ByteFrame::from_bits)
    }

    /// Fails on the first invalid frame; no partial message is returned.
    pub fn decode(bits: &[u8]) -> Result<String> {
        let mut message = String::with_capacity(bits.len() / BITS_PER_FRAME);

        for (index, frame) in Self::frames(bits).enumerate() {
            let frame = frame.map_err(|source| {
                debug!("Frame {} rejected: {}", index, source);
                DecodeError::Framing {
                    frame: index,
                    source,
                }
            })?;
            let ch = frame.to_char();
            trace!("Frame {}: {:?}", index, ch);
            message.push(ch);
        }

        Ok(message)
    }
}

pub fn encode_frame(byte: u8) -> [u8; BITS_PER_FRAME] {
    let mut frame = [0u8; BITS_PER_FRAME];
    frame[0] = START_BIT;
    frame[1..BITS_PER_FRAME - 1].copy_from_slice(&byte_to_bits_lsb(byte));
    frame[BITS_PER_FRAME - 1] = STOP_BIT;
    frame
}

/// Frames every character of `text`. Only U+0000..U+00FF fit in 8 data bits.
pub fn encode_text(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_FRAME);
    for ch in text.chars() {
        let byte = u8::try_from(ch).map_err(|_| {
            DecodeError::Config(format!(
                "character {:?} does not fit in 8 data bits",
                ch
            ))
        })?;
        bits.extend_from_slice(&encode_frame(byte));
    }
    Ok(bits)
}
