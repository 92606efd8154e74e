use crate::error::{DecodeError, Result};
use crate::utils::consts::{BAUD_RATE, SAMPLE_RATE};

/// Rate assumptions of the decoder, derived once at pipeline setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub sample_rate: u32, // assumed sampling frequency [Hz]
    pub baud_rate: u32,   // bits per second

    // computed values
    pub samples_per_bit: usize, // sample_rate / baud_rate
    pub sample_offset: usize,   // midpoint of the first bit period
}

impl DecoderConfig {
    pub fn new(sample_rate: u32, baud_rate: u32) -> Result<Self> {
        if baud_rate == 0 {
            return Err(DecodeError::Config(
                "baud rate must be greater than 0".to_string(),
            ));
        }

        // integer stride; exact for 44100 / 300
        let samples_per_bit = (sample_rate / baud_rate) as usize;
        if samples_per_bit == 0 {
            return Err(DecodeError::Config(format!(
                "baud rate {} exceeds sample rate {}",
                baud_rate, sample_rate
            )));
        }

        Ok(Self {
            sample_rate,
            baud_rate,
            samples_per_bit,
            sample_offset: samples_per_bit / 2,
        })
    }

    /// Index of the k-th sampled amplitude
    pub fn sample_index(&self, bit: usize) -> usize {
        self.sample_offset + bit * self.samples_per_bit
    }

    /// Number of bits that fit into `num_samples` amplitudes
    pub fn bits_in(&self, num_samples: usize) -> usize {
        if num_samples <= self.sample_offset {
            0
        } else {
            (num_samples - self.sample_offset - 1) / self.samples_per_bit + 1
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            baud_rate: BAUD_RATE,
            samples_per_bit: (SAMPLE_RATE / BAUD_RATE) as usize,
            sample_offset: (SAMPLE_RATE / BAUD_RATE) as usize / 2,
        }
    }
}
