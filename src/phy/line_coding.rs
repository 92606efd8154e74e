// NRZ line coding: one fixed level per bit period, no return to zero between bits.

use rand::Rng;

use crate::acoustic::config::DecoderConfig;
use crate::utils::consts::DEFAULT_AMPLITUDE;

pub struct NrzEncoder {
    samples_per_bit: usize,
    amplitude: f32,
}

impl NrzEncoder {
    pub fn new(samples_per_bit: usize) -> Self {
        Self {
            samples_per_bit,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// slice of bits -> NRZ audio samples (0 -> -A, 1 -> +A)
    pub fn encode(&self, bits: &[u8]) -> Vec<f32> {
        let mut samples = Vec::with_capacity(self.samples_for_bits(bits.len()));

        for &bit in bits {
            let level = if bit == 0 {
                -self.amplitude
            } else {
                self.amplitude
            };
            samples.extend(std::iter::repeat_n(level, self.samples_per_bit));
        }

        samples
    }

    pub fn samples_for_bits(&self, num_bits: usize) -> usize {
        num_bits * self.samples_per_bit
    }
}

/// Fixed-offset bit sampler. No clock recovery: bit k is read at
/// `offset + k * samples_per_bit`.
pub struct NrzDecoder {
    samples_per_bit: usize,
    offset: usize,
}

impl NrzDecoder {
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            samples_per_bit: config.samples_per_bit,
            offset: config.sample_offset,
        }
    }

    /// decoded to bits; a negative amplitude is 0, anything else (0.0 included) is 1
    pub fn decode(&self, samples: &[f32]) -> Vec<u8> {
        samples
            .iter()
            .skip(self.offset)
            .step_by(self.samples_per_bit)
            .map(|&amplitude| if amplitude < 0.0 { 0 } else { 1 })
            .collect()
    }
}

/// Adds uniform noise in [-level/2, level/2) and keeps the signal in [-1, 1].
pub fn add_noise(samples: &mut [f32], level: f32) {
    if level <= 0.0 {
        return;
    }
    let mut rng = rand::rng();
    for sample in samples.iter_mut() {
        *sample = (*sample + (rng.random::<f32>() - 0.5) * level).clamp(-1.0, 1.0);
    }
}
