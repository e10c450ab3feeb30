//! Note descriptors and rhythm patterns.
//!
//! A note is one frequency played over an alternating tone/silence rhythm.
//! Even positions in the rhythm are tones, odd positions are silences.

/// Default maximum number of rhythm segments per note.
pub const DEFAULT_MAX_SEGMENTS: usize = 100;

/// Kind of a rhythm segment, determined by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Sine tone at the note frequency.
    Tone,
    /// Zero samples.
    Silence,
}

impl SegmentKind {
    /// Returns the kind of the segment at 0-based `index`.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            SegmentKind::Tone
        } else {
            SegmentKind::Silence
        }
    }

    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Tone => "tone",
            SegmentKind::Silence => "silence",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered segment durations in seconds, bounded by a maximum length.
#[derive(Debug, Clone, PartialEq)]
pub struct RhythmPattern {
    durations: Vec<f64>,
    max_segments: usize,
}

impl RhythmPattern {
    /// Creates an empty pattern with the default maximum.
    pub fn new() -> Self {
        Self::with_max_segments(DEFAULT_MAX_SEGMENTS)
    }

    /// Creates an empty pattern holding at most `max_segments` durations.
    pub fn with_max_segments(max_segments: usize) -> Self {
        Self {
            durations: Vec::new(),
            max_segments,
        }
    }

    /// Builds a pattern from durations, keeping at most the default maximum.
    pub fn from_durations(durations: impl IntoIterator<Item = f64>) -> Self {
        let mut pattern = Self::new();
        for duration in durations {
            if !pattern.push(duration) {
                break;
            }
        }
        pattern
    }

    /// Appends a duration.
    ///
    /// Returns false, leaving the pattern unchanged, if it is already full.
    pub fn push(&mut self, duration: f64) -> bool {
        if self.is_full() {
            return false;
        }
        self.durations.push(duration);
        true
    }

    /// Returns true if no more segments can be added.
    pub fn is_full(&self) -> bool {
        self.durations.len() >= self.max_segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns true if the pattern has no segments.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Returns the maximum number of segments.
    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Returns the durations in order.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Iterates over segments with their kind.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentKind, f64)> + '_ {
        self.durations
            .iter()
            .enumerate()
            .map(|(i, &d)| (SegmentKind::from_index(i), d))
    }
}

impl Default for RhythmPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// One input row: a frequency and its rhythm.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDescriptor {
    /// Frequency in Hz. Malformed input may yield zero or negative values.
    pub frequency: f64,
    /// Tone/silence durations.
    pub rhythm: RhythmPattern,
}

impl NoteDescriptor {
    /// Creates a new note descriptor.
    pub fn new(frequency: f64, rhythm: RhythmPattern) -> Self {
        Self { frequency, rhythm }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_kind_alternates() {
        assert_eq!(SegmentKind::from_index(0), SegmentKind::Tone);
        assert_eq!(SegmentKind::from_index(1), SegmentKind::Silence);
        assert_eq!(SegmentKind::from_index(2), SegmentKind::Tone);
        assert_eq!(SegmentKind::from_index(99), SegmentKind::Silence);
        assert_eq!(SegmentKind::Tone.to_string(), "tone");
    }

    #[test]
    fn push_respects_maximum() {
        let mut pattern = RhythmPattern::with_max_segments(2);
        assert!(pattern.push(1.0));
        assert!(pattern.push(0.5));
        assert!(pattern.is_full());
        assert!(!pattern.push(0.25));
        assert_eq!(pattern.durations(), &[1.0, 0.5]);
    }

    #[test]
    fn from_durations_truncates_at_default_maximum() {
        let pattern = RhythmPattern::from_durations((0..150).map(|i| i as f64));
        assert_eq!(pattern.len(), DEFAULT_MAX_SEGMENTS);
        assert_eq!(pattern.durations()[99], 99.0);
    }

    #[test]
    fn segments_carry_kind_and_order() {
        let pattern = RhythmPattern::from_durations([1.0, 0.5, 0.25]);
        let segments: Vec<_> = pattern.segments().collect();
        assert_eq!(
            segments,
            vec![
                (SegmentKind::Tone, 1.0),
                (SegmentKind::Silence, 0.5),
                (SegmentKind::Tone, 0.25),
            ]
        );
    }

    #[test]
    fn default_pattern_is_empty() {
        let pattern = RhythmPattern::default();
        assert!(pattern.is_empty());
        assert_eq!(pattern.max_segments(), DEFAULT_MAX_SEGMENTS);
    }
}
