//! Batch driver.
//!
//! Reads note rows line by line, renders each one and appends the samples
//! to a single WAV stream. Row-level errors skip the row; anything else
//! stops the run.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, Write};
use std::path::Path;

use crate::audio::PcmWriter;
use crate::config::RenderConfig;
use crate::error::{BatchError, Result};
use crate::input::RowParser;
use crate::types::RunSummary;

use super::synth::synthesize;

/// Renders the rows of `input` into the WAV file named by the config.
///
/// The input is opened before the output, so an unreadable input never
/// creates an output file. The output is finalized even when reading stops
/// early, keeping the samples written so far.
pub fn render_file(input: &Path, config: &RenderConfig) -> Result<RunSummary> {
    let file =
        File::open(input).map_err(|e| BatchError::input_open_failed(input.display(), e))?;
    let reader = BufReader::new(file);

    let mut writer = PcmWriter::create(&config.output_path, &config.format)?;

    let outcome = render_lines(reader, &mut writer, config);
    let finalized = writer.finalize();

    let summary = outcome?;
    finalized?;
    Ok(summary)
}

/// Renders every line of `reader` and appends the samples to `writer`.
pub fn render_lines<R, W>(
    mut reader: R,
    writer: &mut PcmWriter<W>,
    config: &RenderConfig,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write + Seek,
{
    let parser = RowParser::from_config(config);
    let mut summary = RunSummary::new(config.format.sample_rate);
    let mut bytes = Vec::new();

    loop {
        bytes.clear();
        let read = reader
            .read_until(b'\n', &mut bytes)
            .map_err(|e| BatchError::input_read_failed(summary.lines_read, e))?;
        if read == 0 {
            break;
        }
        summary.lines_read += 1;
        let line_no = summary.lines_read;
        let line = String::from_utf8_lossy(&bytes);

        let row = match parser.parse(&line) {
            Ok(Some(row)) => row,
            Ok(None) => {
                summary.rows_blank += 1;
                continue;
            }
            Err(e) => {
                skip_row(&mut summary, line_no, e, config)?;
                continue;
            }
        };

        let samples = match synthesize(&row.note, &config.format) {
            Ok(samples) => samples,
            Err(e) => {
                skip_row(&mut summary, line_no, e, config)?;
                continue;
            }
        };

        if row.truncated && !config.quiet {
            eprintln!(
                "Line {}: more than {} rhythm segments, extra fields ignored",
                line_no,
                row.note.rhythm.max_segments()
            );
        }

        writer.append(&samples)?;
        summary.record_rendered(samples.len(), row.truncated);
    }

    Ok(summary)
}

/// Counts a skipped row, or returns the error if it is not row-level.
fn skip_row(
    summary: &mut RunSummary,
    line_no: usize,
    error: BatchError,
    config: &RenderConfig,
) -> Result<()> {
    if !error.code.is_row_level() {
        return Err(error);
    }
    summary.rows_skipped += 1;
    if !config.quiet {
        eprintln!("{}", skip_message(line_no, &error));
    }
    Ok(())
}

/// Formats the diagnostic printed for a skipped row.
fn skip_message(line_no: usize, error: &BatchError) -> String {
    format!(
        "Line {}: skipped ({}): {}",
        line_no,
        error.code.description(),
        error.message
    )
}
