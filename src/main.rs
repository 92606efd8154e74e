use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use nrz_decoder::acoustic::io::{RawPcmSource, WavSource};
use nrz_decoder::error::Result;
use nrz_decoder::utils::consts::{BAUD_RATE, SAMPLE_RATE};
use nrz_decoder::utils::dump::DecodeDump;
use nrz_decoder::utils::logging::init_logging;
use nrz_decoder::{Decoded, Decoder, DecoderConfig};

/// Decode a 300 baud NRZ text message from a 16-bit mono WAV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Waveform to decode
    path: PathBuf,

    /// Treat the input as headerless signed 16-bit little-endian PCM
    #[arg(long)]
    raw: bool,

    /// Assumed sample rate; the rate in the WAV header is not used
    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: u32,

    #[arg(short, long, default_value_t = BAUD_RATE)]
    baud: u32,

    /// Write the recovered bitstream and message as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<String> {
    let config = DecoderConfig::new(cli.sample_rate, cli.baud)?;
    let decoder = Decoder::new(config);

    let decoded: Decoded = if cli.raw {
        let mut source = RawPcmSource::open(&cli.path)?;
        decoder.decode_source(&mut source)?
    } else {
        let mut source = WavSource::open(&cli.path)?;
        decoder.decode_source(&mut source)?
    };

    if let Some(dump_path) = &cli.dump {
        DecodeDump::new(&config, &decoded).write_json(dump_path)?;
        tracing::info!("Dump written to {}", dump_path.display());
    }

    Ok(decoded.message)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(?cli);

    match run(&cli) {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Decoding {} failed: {}", cli.path.display(), err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
