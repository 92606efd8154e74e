// Physical layer: NRZ line coding and start/stop byte framing

pub mod bits;
pub mod encoder;
pub mod frame;
pub mod line_coding;

pub use encoder::PhyEncoder;
pub use frame::{ByteFrame, ByteFramer};
pub use line_coding::{NrzDecoder, NrzEncoder};
