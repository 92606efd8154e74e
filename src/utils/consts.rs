/// Log level (can be overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "warn";

/// Log level used with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// ============================================================================
// Physical Layer Parameters
// ============================================================================

/// Sample rate (Hz). Assumed, not read from the container header.
pub const SAMPLE_RATE: u32 = 44100;

/// Symbol rate (bits per second)
pub const BAUD_RATE: u32 = 300;

/// Full scale of a signed 16-bit sample
pub const PCM_FULL_SCALE: f32 = 32768.0;

// Frame Parameters
/// Start bit + data bits + stop bit
pub const BITS_PER_FRAME: usize = 10;

/// Data bits per frame, least significant first
pub const DATA_BITS: usize = 8;

/// Level of the start bit
pub const START_BIT: u8 = 0;

/// Level of the stop bit
pub const STOP_BIT: u8 = 1;

/// Default NRZ signal level written by the encoder
pub const DEFAULT_AMPLITUDE: f32 = 0.5;
