//! WAV file writer for audio output.
//!
//! Writes mono 16-bit PCM using the hound crate. [`PcmWriter`] is the
//! output stream of a batch run: row buffers are appended to it in order.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{BatchError, Result};
use crate::types::{PcmFormat, BITS_PER_SAMPLE, CHANNELS};

/// Returns the hound spec for a PCM format.
pub fn wav_spec(format: &PcmFormat) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate: format.sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Append-only mono 16-bit WAV stream.
///
/// The header is completed by [`PcmWriter::finalize`]. Dropping the writer
/// without finalizing still completes the header, but errors are lost.
pub struct PcmWriter<W: Write + Seek> {
    writer: WavWriter<W>,
}

impl PcmWriter<BufWriter<File>> {
    /// Creates the WAV file at `path`, truncating any existing file.
    pub fn create(path: &Path, format: &PcmFormat) -> Result<Self> {
        let writer = WavWriter::create(path, wav_spec(format))
            .map_err(|e| BatchError::output_open_failed(path.display(), e))?;
        Ok(Self { writer })
    }
}

impl<W: Write + Seek> PcmWriter<W> {
    /// Creates a writer over any seekable sink.
    pub fn new(inner: W, format: &PcmFormat) -> Result<Self> {
        let writer = WavWriter::new(inner, wav_spec(format))
            .map_err(|e| BatchError::output_write_failed("write WAV header", e))?;
        Ok(Self { writer })
    }

    /// Appends samples to the end of the stream.
    pub fn append(&mut self, samples: &[i16]) -> Result<()> {
        for &sample in samples {
            self.writer
                .write_sample(sample)
                .map_err(|e| BatchError::output_write_failed("write sample", e))?;
        }
        Ok(())
    }

    /// Completes the WAV header and flushes the stream.
    pub fn finalize(self) -> Result<()> {
        self.writer
            .finalize()
            .map_err(|e| BatchError::output_write_failed("finalize WAV file", e))
    }
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: u64, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_writes_mono_16_bit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 16000, -16000, 0];
        let mut writer = PcmWriter::create(&path, &PcmFormat::cd_mono()).unwrap();
        writer.append(&samples).unwrap();
        writer.finalize().unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let read: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn appends_concatenate_without_gaps() {
        let format = PcmFormat::cd_mono();
        let mut buffer = Vec::new();
        {
            let mut writer = PcmWriter::new(std::io::Cursor::new(&mut buffer), &format).unwrap();
            writer.append(&[1, 2, 3]).unwrap();
            writer.append(&[]).unwrap();
            writer.append(&[4, 5]).unwrap();
            writer.finalize().unwrap();
        }

        let reader = hound::WavReader::new(std::io::Cursor::new(buffer)).unwrap();
        let read: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_stream_is_valid_wav() {
        let mut buffer = Vec::new();
        {
            let writer =
                PcmWriter::new(std::io::Cursor::new(&mut buffer), &PcmFormat::cd_mono()).unwrap();
            writer.finalize().unwrap();
        }
        // WAV files start with "RIFF"
        assert_eq!(&buffer[0..4], b"RIFF");
        let reader = hound::WavReader::new(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn create_in_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.wav");
        let err = PcmWriter::create(&path, &PcmFormat::cd_mono()).err().unwrap();
        assert_eq!(err.code, crate::error::ErrorCode::OutputOpenFailed);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(66150, 44100), 1.5);
        assert_eq!(samples_to_duration(0, 44100), 0.0);
    }
}
