//! Audio generation module.
//!
//! Provides the segment synthesizer and the batch driver that feeds it.

pub mod batch;
pub mod synth;

// Re-export commonly used items
pub use batch::{render_file, render_lines};
pub use synth::{synthesize, total_samples};
