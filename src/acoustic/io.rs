use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::{debug, warn};

use crate::error::{DecodeError, Result};
use crate::utils::consts::PCM_FULL_SCALE;

/// A stream of raw signed 16-bit mono frames.
///
/// `Ok(None)` marks the end of the stream. The underlying handle is released
/// when the source is dropped, including after a failed read.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<i16>>;

    /// Rate declared by the container, if it has a header at all
    fn sample_rate(&self) -> Option<u32> {
        None
    }
}

/// RIFF/WAVE source backed by hound
pub struct WavSource<R: io::Read> {
    reader: hound::WavReader<R>,
}

impl WavSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = hound::WavReader::open(path).map_err(wav_error)?;
        Self::from_reader(reader)
    }
}

impl<R: io::Read> WavSource<R> {
    pub fn new(inner: R) -> Result<Self> {
        let reader = hound::WavReader::new(inner).map_err(wav_error)?;
        Self::from_reader(reader)
    }

    fn from_reader(reader: hound::WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        if spec.channels != 1
            || spec.bits_per_sample != 16
            || spec.sample_format != hound::SampleFormat::Int
        {
            return Err(DecodeError::UnsupportedFormat {
                channels: spec.channels,
                bits_per_sample: spec.bits_per_sample,
                format: format!("{:?}", spec.sample_format).to_lowercase(),
            });
        }
        debug!(
            "WAV: {} Hz, {} frames",
            spec.sample_rate,
            reader.duration()
        );
        Ok(Self { reader })
    }

    /// Frames left according to the header
    pub fn remaining(&self) -> usize {
        self.reader.len() as usize
    }
}

impl<R: io::Read> SampleSource for WavSource<R> {
    fn next_sample(&mut self) -> Result<Option<i16>> {
        self.reader
            .samples::<i16>()
            .next()
            .transpose()
            .map_err(wav_error)
    }

    fn sample_rate(&self) -> Option<u32> {
        Some(self.reader.spec().sample_rate)
    }
}

/// Headerless signed 16-bit little-endian PCM
pub struct RawPcmSource<R: BufRead> {
    reader: R,
}

impl RawPcmSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> RawPcmSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SampleSource for RawPcmSource<R> {
    fn next_sample(&mut self) -> Result<Option<i16>> {
        if self.reader.fill_buf()?.is_empty() {
            return Ok(None);
        }
        // a lone trailing byte surfaces as UnexpectedEof
        let sample = self.reader.read_i16::<LittleEndian>()?;
        Ok(Some(sample))
    }
}

/// Drains a source into the Amplitude Sequence, each frame scaled by 1/32768.
pub fn read_samples(source: &mut dyn SampleSource) -> Result<Vec<f32>> {
    let mut samples = Vec::new();
    while let Some(raw) = source.next_sample()? {
        samples.push(raw as f32 / PCM_FULL_SCALE);
    }
    Ok(samples)
}

pub fn read_wav(filename: &Path) -> Result<Vec<f32>> {
    let mut source = WavSource::open(filename)?;
    read_samples(&mut source)
}

/// Writes mono 16-bit PCM, clamping the signal to [-1.0, 1.0].
pub fn write_wav(
    signal: &[f32],
    sample_rate: u32,
    filename: &Path,
) -> Result<()> {
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec)?;
    let amplitude = i16::MAX as f32;
    let mut clipped = 0usize;
    for &sample in signal {
        if !(-1.0..=1.0).contains(&sample) {
            clipped += 1;
        }
        writer.write_sample((sample.clamp(-1.0, 1.0) * amplitude).round() as i16)?;
    }
    writer.finalize()?;
    if clipped > 0 {
        warn!("{} samples clipped while writing {}", clipped, filename.display());
    }
    Ok(())
}

fn wav_error(err: hound::Error) -> DecodeError {
    match err {
        hound::Error::IoError(err) => DecodeError::Io(err),
        other => DecodeError::Wav(other),
    }
}
