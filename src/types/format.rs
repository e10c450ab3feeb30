//! PcmFormat type for the output sample format.
//!
//! Output is always mono 16-bit signed PCM; only the sample rate and the
//! tone amplitude are tunable.

use serde::{Deserialize, Serialize};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default peak amplitude of tone segments, just under `i16::MAX`.
pub const DEFAULT_AMPLITUDE: i16 = 32760;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per output sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Sample format of the rendered audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcmFormat {
    /// Samples per second.
    pub sample_rate: u32,

    /// Peak amplitude of tone segments (1..=32767).
    pub amplitude: i16,
}

impl PcmFormat {
    /// Creates the default format: 44.1kHz, amplitude 32760.
    pub fn cd_mono() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Validates the format.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        if self.amplitude <= 0 {
            return Some(format!(
                "amplitude must be between 1 and {}, got {}",
                i16::MAX,
                self.amplitude
            ));
        }

        None
    }

    /// Number of samples covering `seconds`, truncated toward zero.
    ///
    /// Negative and NaN durations give zero samples; counts too large for
    /// `usize` saturate.
    pub fn samples_for(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate as f64) as usize
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::cd_mono()
    }
}
