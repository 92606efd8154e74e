// Waveform access and the decode pipeline

pub mod config;
pub mod decode;
pub mod io;

pub use config::DecoderConfig;
pub use decode::{Decoded, Decoder, decode};
