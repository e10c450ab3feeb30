//! Render configuration module.
//!
//! Contains the runtime configuration for a batch run: output path, row
//! format and PCM format. Values come from built-in defaults, an optional
//! JSON config file, and command-line flags, in increasing precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BatchError, ErrorCode, Result};
use crate::input::DEFAULT_DELIMITER;
use crate::types::{PcmFormat, DEFAULT_MAX_SEGMENTS};

/// Default output file name, written to the current directory.
pub const DEFAULT_OUTPUT_FILE: &str = "batch_output.wav";

/// Runtime configuration for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path of the WAV file to create.
    pub output_path: PathBuf,

    /// Field delimiter of the input rows.
    pub delimiter: char,

    /// Maximum rhythm segments per row. Extra fields are dropped.
    pub max_segments: usize,

    /// Reject non-numeric fields instead of reading them as zero.
    pub strict: bool,

    /// Suppress per-row diagnostics on stderr.
    pub quiet: bool,

    /// Output sample format.
    pub format: PcmFormat,
}

impl RenderConfig {
    /// Creates a new RenderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a RenderConfig from a JSON file.
    ///
    /// Missing keys fall back to defaults. The result is not validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            BatchError::with_source(
                ErrorCode::ConfigLoadFailed,
                format!("Cannot read config file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text).map_err(|e| {
            BatchError::with_source(
                ErrorCode::ConfigLoadFailed,
                format!("Invalid config file {}: {}", path.display(), e),
                e,
            )
        })
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(reason) = self.format.validate() {
            return Some(reason);
        }

        if self.max_segments == 0 {
            return Some("max_segments must be > 0".to_string());
        }

        // A delimiter that can appear inside a number would split it
        let d = self.delimiter;
        if d.is_ascii_digit() || matches!(d, '.' | '+' | '-' | 'e' | 'E' | '\n' | '\r') {
            return Some(format!("delimiter {:?} cannot be used", d));
        }

        if self.output_path.as_os_str().is_empty() {
            return Some("output_path must not be empty".to_string());
        }

        None
    }

    /// Validates the configuration, converting a failure to an error.
    pub fn validated(self) -> Result<Self> {
        match self.validate() {
            Some(reason) => Err(BatchError::invalid_config(reason)),
            None => Ok(self),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            delimiter: DEFAULT_DELIMITER,
            max_segments: DEFAULT_MAX_SEGMENTS,
            strict: false,
            quiet: false,
            format: PcmFormat::default(),
        }
    }
}
