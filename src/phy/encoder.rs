use tracing::debug;

use super::frame::encode_text;
use super::line_coding::NrzEncoder;
use crate::acoustic::config::DecoderConfig;
use crate::error::Result;

/// Text -> framed bitstream -> NRZ waveform at the configured bit period
pub struct PhyEncoder {
    line_code: NrzEncoder,
}

impl PhyEncoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            line_code: NrzEncoder::new(config.samples_per_bit),
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.line_code = self.line_code.with_amplitude(amplitude);
        self
    }

    pub fn encode_text(&self, text: &str) -> Result<Vec<f32>> {
        let bits = encode_text(text)?;
        let samples = self.line_code.encode(&bits);
        debug!(
            "Encoded {} character(s) into {} bits, {} samples",
            text.chars().count(),
            bits.len(),
            samples.len()
        );
        Ok(samples)
    }
}
