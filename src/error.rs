//! Error types for batch-tone.
//!
//! Defines the error codes reported by the renderer and decides which of
//! them abort the run and which only skip the offending row.

use std::fmt;

/// Error codes reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Configuration values are out of range.
    /// Trigger: zero sample rate, zero amplitude, numeric delimiter.
    InvalidConfig,

    /// Configuration file could not be read or is not valid JSON.
    ConfigLoadFailed,

    /// Input file could not be opened.
    InputOpenFailed,

    /// Reading the input failed after it was opened.
    InputReadFailed,

    /// Output WAV file could not be created.
    OutputOpenFailed,

    /// Writing or finalizing the output WAV file failed.
    OutputWriteFailed,

    /// The sample buffer for a row could not be allocated.
    /// Trigger: absurdly long durations.
    AllocationFailed,

    /// A field is not a number (strict mode only).
    InvalidField,

    /// The run summary could not be encoded as JSON.
    SummaryEncodeFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::ConfigLoadFailed => "CONFIG_LOAD_FAILED",
            ErrorCode::InputOpenFailed => "INPUT_OPEN_FAILED",
            ErrorCode::InputReadFailed => "INPUT_READ_FAILED",
            ErrorCode::OutputOpenFailed => "OUTPUT_OPEN_FAILED",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
            ErrorCode::AllocationFailed => "ALLOCATION_FAILED",
            ErrorCode::InvalidField => "INVALID_FIELD",
            ErrorCode::SummaryEncodeFailed => "SUMMARY_ENCODE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "Configuration values are out of range",
            ErrorCode::ConfigLoadFailed => "Failed to load the configuration file",
            ErrorCode::InputOpenFailed => "Cannot open the input file",
            ErrorCode::InputReadFailed => "Failed to read from the input file",
            ErrorCode::OutputOpenFailed => "Cannot open the output WAV file",
            ErrorCode::OutputWriteFailed => "Failed to write to the output WAV file",
            ErrorCode::AllocationFailed => "Sample buffer allocation failed",
            ErrorCode::InvalidField => "Field is not a number",
            ErrorCode::SummaryEncodeFailed => "Failed to encode the run summary",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => {
                "Use a positive sample rate, an amplitude between 1 and 32767, \
                 at least one rhythm segment, and a non-numeric delimiter"
            }
            ErrorCode::ConfigLoadFailed => {
                "Check that the config file exists and is a JSON object \
                 (e.g., {\"delimiter\": \";\", \"format\": {\"sample_rate\": 48000}})"
            }
            ErrorCode::InputOpenFailed => "Check the input path and its read permissions",
            ErrorCode::InputReadFailed => {
                "Check that the input file is not truncated or on a failing device"
            }
            ErrorCode::OutputOpenFailed => {
                "Check write permissions for the output directory, or pass --output"
            }
            ErrorCode::OutputWriteFailed => "Check free disk space for the output file",
            ErrorCode::AllocationFailed => {
                "Shorten the durations on this row; durations are in seconds"
            }
            ErrorCode::InvalidField => {
                "Fix the field or drop --strict to read non-numeric fields as zero"
            }
            ErrorCode::SummaryEncodeFailed => {
                "The WAV file was written; rerun without --summary-json to skip the summary"
            }
        }
    }

    /// Returns true if this error only affects a single row.
    ///
    /// Row-level errors skip the row and the run continues.
    pub fn is_row_level(&self) -> bool {
        matches!(self, ErrorCode::AllocationFailed | ErrorCode::InvalidField)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for rendering operations.
#[derive(Debug)]
pub struct BatchError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BatchError {
    /// Creates a new BatchError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new BatchError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_CONFIG error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfig,
            format!("Invalid configuration: {}", reason.into()),
        )
    }

    /// Creates an INPUT_OPEN_FAILED error.
    pub fn input_open_failed(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::InputOpenFailed,
            format!("Cannot open input file {}: {}", path, source),
            source,
        )
    }

    /// Creates an INPUT_READ_FAILED error.
    pub fn input_read_failed(line: usize, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::InputReadFailed,
            format!("Read failed after line {}: {}", line, source),
            source,
        )
    }

    /// Creates an OUTPUT_OPEN_FAILED error.
    pub fn output_open_failed(path: impl fmt::Display, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputOpenFailed,
            format!("Cannot open output WAV file {}: {}", path, source),
            source,
        )
    }

    /// Creates an OUTPUT_WRITE_FAILED error.
    pub fn output_write_failed(what: &str, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputWriteFailed,
            format!("Failed to {}: {}", what, source),
            source,
        )
    }

    /// Creates an ALLOCATION_FAILED error for a buffer of `samples` samples.
    ///
    /// `samples` is `None` when the count itself does not fit in memory.
    pub fn allocation_failed(samples: Option<usize>) -> Self {
        let message = match samples {
            Some(n) => format!("Memory allocation failed for {} samples", n),
            None => "Memory allocation failed: sample count overflows".to_string(),
        };
        Self::new(ErrorCode::AllocationFailed, message)
    }

    /// Creates a SUMMARY_ENCODE_FAILED error.
    pub fn summary_encode_failed(source: serde_json::Error) -> Self {
        Self::with_source(
            ErrorCode::SummaryEncodeFailed,
            format!("Cannot encode run summary: {}", source),
            source,
        )
    }

    /// Creates an INVALID_FIELD error for a 1-based column.
    pub fn invalid_field(column: usize, text: &str) -> Self {
        Self::new(
            ErrorCode::InvalidField,
            format!("Field {} is not a number: {:?}", column, text),
        )
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using BatchError.
pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidConfig.as_str(), "INVALID_CONFIG");
        assert_eq!(ErrorCode::ConfigLoadFailed.as_str(), "CONFIG_LOAD_FAILED");
        assert_eq!(ErrorCode::InputOpenFailed.as_str(), "INPUT_OPEN_FAILED");
        assert_eq!(ErrorCode::InputReadFailed.as_str(), "INPUT_READ_FAILED");
        assert_eq!(ErrorCode::OutputOpenFailed.as_str(), "OUTPUT_OPEN_FAILED");
        assert_eq!(ErrorCode::OutputWriteFailed.as_str(), "OUTPUT_WRITE_FAILED");
        assert_eq!(ErrorCode::AllocationFailed.as_str(), "ALLOCATION_FAILED");
        assert_eq!(ErrorCode::InvalidField.as_str(), "INVALID_FIELD");
        assert_eq!(ErrorCode::SummaryEncodeFailed.as_str(), "SUMMARY_ENCODE_FAILED");
    }

    #[test]
    fn only_row_errors_are_row_level() {
        assert!(ErrorCode::AllocationFailed.is_row_level());
        assert!(ErrorCode::InvalidField.is_row_level());
        assert!(!ErrorCode::InputOpenFailed.is_row_level());
        assert!(!ErrorCode::OutputWriteFailed.is_row_level());
        assert!(!ErrorCode::InvalidConfig.is_row_level());
        assert!(!ErrorCode::SummaryEncodeFailed.is_row_level());
    }

    #[test]
    fn batch_error_display() {
        let err = BatchError::invalid_field(3, "abc");
        let text = err.to_string();
        assert!(text.contains("INVALID_FIELD"));
        assert!(text.contains("Field 3"));
        assert!(text.contains("Recovery:"));
    }

    #[test]
    fn input_open_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BatchError::input_open_failed("notes.csv", io);
        assert_eq!(err.code, ErrorCode::InputOpenFailed);
        assert!(err.message.contains("notes.csv"));
        assert!(err.source().is_some());
    }

    #[test]
    fn allocation_failed_messages() {
        assert!(BatchError::allocation_failed(Some(12))
            .message
            .contains("12 samples"));
        assert!(BatchError::allocation_failed(None)
            .message
            .contains("overflows"));
    }
}
