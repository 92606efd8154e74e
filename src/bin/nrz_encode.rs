use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use nrz_decoder::DecoderConfig;
use nrz_decoder::acoustic::io::write_wav;
use nrz_decoder::error::Result;
use nrz_decoder::phy::PhyEncoder;
use nrz_decoder::phy::line_coding::add_noise;
use nrz_decoder::utils::consts::{BAUD_RATE, DEFAULT_AMPLITUDE, SAMPLE_RATE};
use nrz_decoder::utils::logging::init_logging;

/// Write a text message as a start/stop framed NRZ WAV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Message; characters must be in U+0000..U+00FF
    text: String,

    #[arg(short, long)]
    output: PathBuf,

    #[arg(long, default_value_t = SAMPLE_RATE)]
    sample_rate: u32,

    #[arg(short, long, default_value_t = BAUD_RATE)]
    baud: u32,

    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE)]
    amplitude: f32,

    /// Peak-to-peak level of uniform noise added to the signal
    #[arg(long, default_value_t = 0.0)]
    noise: f32,

    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<usize> {
    let config = DecoderConfig::new(cli.sample_rate, cli.baud)?;
    let mut samples = PhyEncoder::new(config)
        .with_amplitude(cli.amplitude)
        .encode_text(&cli.text)?;
    add_noise(&mut samples, cli.noise);
    write_wav(&samples, cli.sample_rate, &cli.output)?;
    Ok(samples.len())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(num_samples) => {
            tracing::info!(
                "Wrote {} samples to {}",
                num_samples,
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
