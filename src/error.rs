//! Error types for the decode pipeline

use thiserror::Error;

/// Result type for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Violation of the start/stop framing of a single 10-bit frame
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid start bit")]
    InvalidStartBit,

    #[error("invalid stop bit")]
    InvalidStopBit,
}

#[derive(Error, Debug)]
pub enum DecodeError {
    /// File missing, unreadable, or truncated mid-stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Container is not a readable RIFF/WAVE file
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Container is valid but not mono 16-bit integer PCM
    #[error(
        "unsupported PCM format: {channels} channel(s), {bits_per_sample}-bit {format}, expected mono 16-bit int"
    )]
    UnsupportedFormat {
        channels: u16,
        bits_per_sample: u16,
        format: String,
    },

    #[error("frame {frame}: {source}")]
    Framing {
        frame: usize,
        #[source]
        source: FrameError,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// The framing violation, if this error came from the byte framer
    pub fn frame_error(&self) -> Option<FrameError> {
        match self {
            DecodeError::Framing { source, .. } => Some(*source),
            _ => None,
        }
    }
}
