//! Row parser for note rows.
//!
//! Format, one note per line:
//! `<frequency><d><duration_0><d><duration_1>...`
//!
//! Durations are in seconds and alternate tone, silence, tone, ...
//! Empty fields are skipped, so consecutive delimiters collapse into one.

use crate::config::RenderConfig;
use crate::error::{BatchError, Result};
use crate::types::{NoteDescriptor, RhythmPattern, DEFAULT_MAX_SEGMENTS};

use super::number::{parse_lenient, parse_strict};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// A parsed row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// The note described by the row.
    pub note: NoteDescriptor,
    /// True if fields past the segment maximum were dropped.
    pub truncated: bool,
}

/// Splits lines into note descriptors.
#[derive(Debug, Clone)]
pub struct RowParser {
    delimiter: char,
    max_segments: usize,
    strict: bool,
}

impl RowParser {
    /// Creates a lenient parser with the given delimiter and segment maximum.
    pub fn new(delimiter: char, max_segments: usize) -> Self {
        Self {
            delimiter,
            max_segments,
            strict: false,
        }
    }

    /// Creates a parser from the render configuration.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.delimiter, config.max_segments).strict(config.strict)
    }

    /// Enables or disables strict field parsing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parses one line.
    ///
    /// Returns `Ok(None)` for a line with no fields. In strict mode a
    /// non-numeric field is an `INVALID_FIELD` error; otherwise it reads as 0.
    pub fn parse(&self, line: &str) -> Result<Option<ParsedRow>> {
        let line = strip_line_terminator(line);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let mut fields = line
            .split(self.delimiter)
            .enumerate()
            .filter(|(_, field)| !field.is_empty());

        let Some((column, first)) = fields.next() else {
            return Ok(None);
        };
        let frequency = self.read_field(column, first)?;

        let mut rhythm = RhythmPattern::with_max_segments(self.max_segments);
        let mut truncated = false;
        for (column, field) in fields {
            if rhythm.is_full() {
                truncated = true;
                break;
            }
            rhythm.push(self.read_field(column, field)?);
        }

        Ok(Some(ParsedRow {
            note: NoteDescriptor::new(frequency, rhythm),
            truncated,
        }))
    }

    fn read_field(&self, column: usize, field: &str) -> Result<f64> {
        if self.strict {
            parse_strict(field).ok_or_else(|| BatchError::invalid_field(column + 1, field))
        } else {
            Ok(parse_lenient(field))
        }
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_MAX_SEGMENTS)
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
