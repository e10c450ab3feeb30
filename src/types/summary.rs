//! RunSummary type reporting what a batch run produced.

use serde::{Deserialize, Serialize};

use crate::audio::samples_to_duration;

/// Counters collected while rendering one input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Lines read from the input, including blank ones.
    pub lines_read: usize,

    /// Rows whose samples were appended to the output.
    pub rows_rendered: usize,

    /// Blank lines that produced no note.
    pub rows_blank: usize,

    /// Rows dropped because of a row-level error.
    pub rows_skipped: usize,

    /// Rendered rows that had more fields than the segment maximum.
    pub rows_truncated: usize,

    /// Total samples written to the output.
    pub samples_written: u64,

    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl RunSummary {
    /// Creates an empty summary for the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            ..Default::default()
        }
    }

    /// Records a rendered row.
    pub fn record_rendered(&mut self, samples: usize, truncated: bool) {
        self.rows_rendered += 1;
        self.samples_written += samples as u64;
        if truncated {
            self.rows_truncated += 1;
        }
    }

    /// Returns the output duration in seconds.
    pub fn duration_sec(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        samples_to_duration(self.samples_written, self.sample_rate)
    }
}
