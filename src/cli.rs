//! CLI argument parser.
//!
//! One positional argument names the input file. Every other option
//! overrides the matching value of the render configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::RenderConfig;
use crate::error::Result;

/// batch-tone: render note/rhythm rows to a mono 16-bit WAV file
#[derive(Parser, Debug)]
#[command(name = "batch-tone")]
#[command(about = "Render delimited note/rhythm rows to a mono 16-bit WAV file")]
#[command(version)]
pub struct Cli {
    /// Input file: one `frequency,duration,duration,...` row per line
    pub input: PathBuf,

    /// Output WAV file path [default: batch_output.wav]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter [default: ,]
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Output sample rate in Hz [default: 44100]
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Peak tone amplitude, 1-32767 [default: 32760]
    #[arg(long)]
    pub amplitude: Option<i16>,

    /// Maximum rhythm segments per row; extra fields are ignored [default: 100]
    #[arg(long)]
    pub max_segments: Option<usize>,

    /// Skip rows with non-numeric fields instead of reading them as zero
    #[arg(long)]
    pub strict: bool,

    /// JSON config file; command-line options take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress per-row diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON after the confirmation line
    #[arg(long)]
    pub summary_json: bool,
}

impl Cli {
    /// Parses command-line arguments, returning clap's error on failure.
    pub fn try_parse_args() -> std::result::Result<Self, clap::Error> {
        Cli::try_parse()
    }

    /// Builds the effective render configuration.
    ///
    /// Starts from the config file (or defaults), applies command-line
    /// overrides and validates the result.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match self.config {
            Some(ref path) => RenderConfig::from_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.format.sample_rate = sample_rate;
        }
        if let Some(amplitude) = self.amplitude {
            config.format.amplitude = amplitude;
        }
        if let Some(max_segments) = self.max_segments {
            config.max_segments = max_segments;
        }
        config.strict |= self.strict;
        config.quiet |= self.quiet;

        config.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("batch-tone").chain(args.iter().copied()))
    }

    #[test]
    fn input_is_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn defaults_match_render_config() {
        let cli = parse(&["notes.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("notes.csv"));
        assert_eq!(cli.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let cli = parse(&[
            "notes.csv",
            "-o",
            "song.wav",
            "-d",
            ";",
            "--sample-rate",
            "48000",
            "--amplitude",
            "1000",
            "--max-segments",
            "8",
            "--strict",
            "-q",
        ])
        .unwrap();

        let config = cli.render_config().unwrap();
        assert_eq!(config.output_path, PathBuf::from("song.wav"));
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.format.sample_rate, 48000);
        assert_eq!(config.format.amplitude, 1000);
        assert_eq!(config.max_segments, 8);
        assert!(config.strict);
        assert!(config.quiet);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let cli = parse(&["notes.csv", "--sample-rate", "0"]).unwrap();
        assert_eq!(cli.render_config().unwrap_err().code, ErrorCode::InvalidConfig);

        let cli = parse(&["notes.csv", "--max-segments", "0"]).unwrap();
        assert_eq!(cli.render_config().unwrap_err().code, ErrorCode::InvalidConfig);

        assert!(parse(&["notes.csv", "--amplitude", "40000"]).is_err());
    }

    #[test]
    fn command_line_beats_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("render.json");
        fs::write(&path, r#"{"delimiter": "\t", "max_segments": 4}"#).unwrap();

        let cli = parse(&[
            "notes.csv",
            "--config",
            path.to_str().unwrap(),
            "--max-segments",
            "6",
        ])
        .unwrap();

        let config = cli.render_config().unwrap();
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.max_segments, 6);
    }
}
