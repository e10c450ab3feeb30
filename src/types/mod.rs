//! Core types for batch-tone.
//!
//! This module re-exports all the core data types used by the renderer:
//! - [`NoteDescriptor`]: one input row, a frequency and its rhythm
//! - [`RhythmPattern`]: alternating tone/silence durations
//! - [`PcmFormat`]: output sample rate and tone amplitude
//! - [`RunSummary`]: counters reported after a run

mod format;
mod note;
mod summary;

pub use format::{
    PcmFormat, BITS_PER_SAMPLE, CHANNELS, DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_RATE,
};
pub use note::{NoteDescriptor, RhythmPattern, SegmentKind, DEFAULT_MAX_SEGMENTS};
pub use summary::RunSummary;
