pub mod acoustic;
pub mod error;
pub mod phy;
pub mod utils;

pub use acoustic::{Decoded, Decoder, DecoderConfig, decode};
pub use error::{DecodeError, FrameError, Result};
