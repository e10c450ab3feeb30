//! Audio output module.
//!
//! Provides WAV file writing for rendered notes.

pub mod wav;

// Re-export commonly used items
pub use wav::{samples_to_duration, wav_spec, PcmWriter};
