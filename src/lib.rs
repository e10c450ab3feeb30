//! batch-tone: render note/rhythm rows to a mono 16-bit WAV file.
//!
//! Each input line holds a frequency followed by alternating tone and
//! silence durations in seconds. Every line becomes one block of samples,
//! and the blocks are appended in order to a single WAV file.
//!
//! # Modules
//!
//! - [`input`]: Row parsing (RowParser, atof-style field reading)
//! - [`generation`]: Segment synthesis and the batch driver
//! - [`audio`]: WAV output (PcmWriter)
//! - [`types`]: Core data types (NoteDescriptor, RhythmPattern, PcmFormat)
//! - [`config`]: Runtime configuration (RenderConfig)
//! - [`error`]: Error types and codes (BatchError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use batch_tone::{config::RenderConfig, generation::render_file};
//!
//! let config = RenderConfig {
//!     output_path: "song.wav".into(),
//!     ..Default::default()
//! };
//! let summary = render_file(Path::new("song.csv"), &config)?;
//! println!("{} samples", summary.samples_written);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod input;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::RenderConfig;
pub use error::{BatchError, ErrorCode, Result};
pub use types::{NoteDescriptor, PcmFormat, RhythmPattern, RunSummary, SegmentKind};
