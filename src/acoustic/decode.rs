use std::path::Path;

use tracing::{debug, info, warn};

use crate::acoustic::config::DecoderConfig;
use crate::acoustic::io::{SampleSource, WavSource, read_samples};
use crate::error::Result;
use crate::phy::frame::ByteFramer;
use crate::phy::line_coding::NrzDecoder;

/// Output of one decode, with the recovered bitstream kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub message: String,
    pub bits: Vec<u8>,
    pub num_samples: usize,
}

/// Samples -> bits -> frames -> message. Stateless between calls.
pub struct Decoder {
    config: DecoderConfig,
    sampler: NrzDecoder,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            sampler: NrzDecoder::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode_samples(&self, samples: &[f32]) -> Result<Decoded> {
        let bits = self.sampler.decode(samples);
        debug!(
            "Sampled {} bit(s) from {} sample(s) (stride {}, offset {})",
            bits.len(),
            samples.len(),
            self.config.samples_per_bit,
            self.config.sample_offset
        );

        let message = ByteFramer::decode(&bits)?;
        info!("Decoded {} character(s)", message.chars().count());

        Ok(Decoded {
            message,
            bits,
            num_samples: samples.len(),
        })
    }

    pub fn decode_source(&self, source: &mut dyn SampleSource) -> Result<Decoded> {
        if let Some(declared) = source.sample_rate() {
            if declared != self.config.sample_rate {
                warn!(
                    "Container declares {} Hz but decoding assumes {} Hz",
                    declared, self.config.sample_rate
                );
            }
        }
        let samples = read_samples(source)?;
        self.decode_samples(&samples)
    }

    pub fn decode_file(&self, path: &Path) -> Result<Decoded> {
        info!("Decoding {}", path.display());
        let mut source = WavSource::open(path)?;
        self.decode_source(&mut source)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

/// Decodes a WAV file with the default 44100 Hz / 300 baud assumption.
pub fn decode(path: &Path) -> Result<String> {
    Decoder::default()
        .decode_file(path)
        .map(|decoded| decoded.message)
}
