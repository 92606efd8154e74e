// Bit/byte helpers for LSB-first serial framing

use crate::utils::consts::DATA_BITS;

/// Convert byte to bit array (LSB first)
pub fn byte_to_bits_lsb(byte: u8) -> [u8; DATA_BITS] {
    let mut bits = [0u8; DATA_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> i) & 1;
    }
    bits
}

/// Convert bit array to byte (LSB first)
pub fn bits_to_byte_lsb(bits: &[u8]) -> u8 {
    let mut byte = 0u8;
    for (i, &bit) in bits
        .iter()
        .enumerate()
        .take(DATA_BITS)
    {
        if bit != 0 {
            byte |= 1 << i;
        }
    }
    byte
}

/// Character for 8 data bits; codes above 0x7F map to U+0080..U+00FF.
pub fn bits_to_char(bits: &[u8]) -> char {
    char::from(bits_to_byte_lsb(bits))
}
