use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::acoustic::config::DecoderConfig;
use crate::acoustic::decode::Decoded;
use crate::error::Result;

/// Snapshot of one decode, written by `--dump` for offline inspection.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeDump {
    pub sample_rate: u32,
    pub baud_rate: u32,
    pub samples_per_bit: usize,
    pub num_samples: usize,
    pub bits: Vec<u8>,
    pub message: String,
}

impl DecodeDump {
    pub fn new(config: &DecoderConfig, decoded: &Decoded) -> Self {
        Self {
            sample_rate: config.sample_rate,
            baud_rate: config.baud_rate,
            samples_per_bit: config.samples_per_bit,
            num_samples: decoded.num_samples,
            bits: decoded.bits.clone(),
            message: decoded.message.clone(),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
