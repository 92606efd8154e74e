use std::path::Path;

use nrz_decoder::acoustic::io::{SampleSource, WavSource, read_samples, write_wav};
use nrz_decoder::phy::PhyEncoder;
use nrz_decoder::phy::frame::encode_frame;
use nrz_decoder::phy::line_coding::{NrzEncoder, add_noise};
use nrz_decoder::{DecodeError, Decoder, DecoderConfig, FrameError, decode};

fn write_message(path: &Path, text: &str) {
    let config = DecoderConfig::default();
    let samples = PhyEncoder::new(config)
        .encode_text(text)
        .expect("text should be encodable");
    write_wav(&samples, config.sample_rate, path).expect("fixture should be written");
}

#[test]
fn wav_file_decodes_to_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.wav");
    let message = "Hello from the other side of the modem. 0123456789 ~!@#";
    write_message(&path, message);

    assert_eq!(decode(&path).unwrap(), message);
}

#[test]
fn decoding_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repeat.wav");
    write_message(&path, "NNN");

    let decoder = Decoder::default();
    let first = decoder.decode_file(&path).unwrap();
    let second = decoder.decode_file(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.message, "NNN");
}

#[test]
fn latin1_characters_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.wav");
    write_message(&path, "caf\u{e9} \u{b0}C \u{ff}");

    assert_eq!(decode(&path).unwrap(), "caf\u{e9} \u{b0}C \u{ff}");
}

#[test]
fn empty_wav_decodes_to_empty_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");
    write_wav(&[], 44100, &path).unwrap();

    let decoded = Decoder::default().decode_file(&path).unwrap();
    assert!(decoded.bits.is_empty());
    assert_eq!(decoded.message, "");
}

#[test]
fn trailing_partial_frame_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trailing.wav");

    let config = DecoderConfig::default();
    let mut bits = encode_frame(b'O').to_vec();
    bits.extend_from_slice(&encode_frame(b'K'));
    bits.extend_from_slice(&[1, 1, 1, 1]);
    let samples = NrzEncoder::new(config.samples_per_bit).encode(&bits);
    write_wav(&samples, config.sample_rate, &path).unwrap();

    assert_eq!(decode(&path).unwrap(), "OK");
}

#[test]
fn bad_stop_bit_fails_without_partial_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_stop.wav");

    let config = DecoderConfig::default();
    let mut bits = encode_frame(b'N').to_vec();
    bits.extend_from_slice(&[0, 0, 1, 1, 1, 0, 0, 1, 0, 0]);
    let samples = NrzEncoder::new(config.samples_per_bit).encode(&bits);
    write_wav(&samples, config.sample_rate, &path).unwrap();

    let err = decode(&path).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Framing {
            frame: 1,
            source: FrameError::InvalidStopBit
        }
    ));
}

#[test]
fn idle_high_line_is_invalid_start_bit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("idle.wav");
    write_wav(&[0.5; 1470], 44100, &path).unwrap();

    let err = decode(&path).unwrap_err();
    assert_eq!(err.frame_error(), Some(FrameError::InvalidStartBit));
    assert_eq!(err.to_string(), "frame 0: invalid start bit");
}

#[test]
fn stereo_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..294 {
        writer.write_sample(-16384i16).unwrap();
    }
    writer.finalize().unwrap();

    assert!(matches!(
        decode(&path),
        Err(DecodeError::UnsupportedFormat { channels: 2, .. })
    ));
}

#[test]
fn non_wav_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.wav");
    std::fs::write(&path, "these are not samples").unwrap();

    assert!(matches!(decode(&path), Err(DecodeError::Wav(_))));
}

#[test]
fn declared_rate_is_not_used_for_stride() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mislabeled.wav");

    // 44100 Hz signal written with a 48000 Hz header
    let samples = PhyEncoder::new(DecoderConfig::default())
        .encode_text("rate")
        .unwrap();
    write_wav(&samples, 48000, &path).unwrap();

    let mut source = WavSource::open(&path).unwrap();
    assert_eq!(source.sample_rate(), Some(48000));
    assert_eq!(read_samples(&mut source).unwrap().len(), samples.len());

    assert_eq!(decode(&path).unwrap(), "rate");
}

#[test]
fn custom_rates_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fast.wav");

    let config = DecoderConfig::new(48000, 1200).unwrap();
    let samples = PhyEncoder::new(config).encode_text("faster").unwrap();
    write_wav(&samples, config.sample_rate, &path).unwrap();

    let decoded = Decoder::new(config).decode_file(&path).unwrap();
    assert_eq!(decoded.message, "faster");
}

#[test]
fn noisy_signal_still_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noisy.wav");

    let config = DecoderConfig::default();
    let message = "Rust makes acoustic links fun!".repeat(4);
    let mut samples = PhyEncoder::new(config)
        .with_amplitude(0.7)
        .encode_text(&message)
        .unwrap();
    add_noise(&mut samples, 0.6);
    write_wav(&samples, config.sample_rate, &path).unwrap();

    assert_eq!(decode(&path).unwrap(), message);
}
