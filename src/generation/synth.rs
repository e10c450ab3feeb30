//! Segment synthesizer.
//!
//! Renders one note into a contiguous sample buffer. Even rhythm segments are
//! sine tones, odd segments are silence. The sine phase restarts at zero at
//! the start of every tone segment.

use std::f64::consts::PI;

use crate::error::{BatchError, Result};
use crate::types::{NoteDescriptor, PcmFormat, RhythmPattern, SegmentKind};

/// Returns the total sample count of a rhythm pattern.
///
/// Each segment contributes its duration times the sample rate, truncated
/// toward zero. Returns None if the sum overflows `usize`.
pub fn total_samples(rhythm: &RhythmPattern, format: &PcmFormat) -> Option<usize> {
    rhythm
        .durations()
        .iter()
        .try_fold(0usize, |total, &d| total.checked_add(format.samples_for(d)))
}

/// Renders a note into a new sample buffer.
///
/// Fails with `ALLOCATION_FAILED` if the buffer cannot be allocated; no
/// partial buffer is returned.
///
/// # Example
///
/// ```
/// use batch_tone::generation::synthesize;
/// use batch_tone::types::{NoteDescriptor, PcmFormat, RhythmPattern};
///
/// let note = NoteDescriptor::new(440.0, RhythmPattern::from_durations([1.0, 0.5]));
/// let samples = synthesize(&note, &PcmFormat::cd_mono()).unwrap();
/// assert_eq!(samples.len(), 66150);
/// ```
pub fn synthesize(note: &NoteDescriptor, format: &PcmFormat) -> Result<Vec<i16>> {
    let total = total_samples(&note.rhythm, format)
        .ok_or_else(|| BatchError::allocation_failed(None))?;

    let mut buffer: Vec<i16> = Vec::new();
    buffer
        .try_reserve_exact(total)
        .map_err(|_| BatchError::allocation_failed(Some(total)))?;

    for (kind, duration) in note.rhythm.segments() {
        let len = format.samples_for(duration);
        match kind {
            SegmentKind::Tone => fill_tone(&mut buffer, note.frequency, len, format),
            SegmentKind::Silence => fill_silence(&mut buffer, len),
        }
    }

    debug_assert_eq!(buffer.len(), total);
    Ok(buffer)
}

/// Appends `len` samples of a sine tone starting at phase zero.
fn fill_tone(buffer: &mut Vec<i16>, frequency: f64, len: usize, format: &PcmFormat) {
    let amplitude = format.amplitude as f64;
    let rate = format.sample_rate as f64;
    buffer.extend((0..len).map(|n| {
        let phase = 2.0 * PI * frequency * n as f64 / rate;
        (amplitude * phase.sin()).round() as i16
    }));
}

/// Appends `len` zero samples.
fn fill_silence(buffer: &mut Vec<i16>, len: usize) {
    buffer.resize(buffer.len() + len, 0);
}
