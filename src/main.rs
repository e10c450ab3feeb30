//! batch-tone: render a delimited note file to `batch_output.wav`.
//!
//! Usage: `batch-tone <input-file> [options]`

use std::path::Path;

use batch_tone::cli::Cli;
use batch_tone::config::RenderConfig;
use batch_tone::error::{BatchError, Result};
use batch_tone::generation::render_file;
use batch_tone::types::RunSummary;

fn main() {
    let code = match Cli::try_parse_args() {
        Ok(cli) => report(run(&cli)),
        Err(e) => {
            // Only fails when stderr is closed; the exit code still tells the caller
            let _ = e.print();
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

/// Exit code for a command-line parse failure.
///
/// Usage errors exit 1; `--help` and `--version` come through the same path
/// and exit 0.
fn exit_code(e: &clap::Error) -> i32 {
    if e.use_stderr() {
        1
    } else {
        0
    }
}

/// Prints a failed run's error and returns the process exit code.
fn report(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.render_config()?;

    if !config.quiet {
        print_header(cli, &config);
    }

    let summary = render_file(&cli.input, &config)?;

    if !config.quiet {
        print_summary(&summary);
    }

    println!("{}", confirmation(&config.output_path));

    if cli.summary_json {
        println!("{}", summary_json(&summary)?);
    }

    Ok(())
}

/// Line printed on stdout after a successful run.
fn confirmation(output: &Path) -> String {
    format!("WAV file '{}' created successfully.", output.display())
}

fn summary_json(summary: &RunSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(BatchError::summary_encode_failed)
}

/// Prints the run parameters to stderr.
fn print_header(cli: &Cli, config: &RenderConfig) {
    eprintln!("=== batch-tone ===");
    eprintln!("Input: {}", cli.input.display());
    eprintln!("Output: {}", config.output_path.display());
    eprintln!(
        "Format: {}Hz mono 16-bit, amplitude {}",
        config.format.sample_rate, config.format.amplitude
    );
    eprintln!(
        "Rows: delimiter {:?}, up to {} segments{}",
        config.delimiter,
        config.max_segments,
        if config.strict { ", strict" } else { "" }
    );
    eprintln!();
}

/// Prints the run summary to stderr.
fn print_summary(summary: &RunSummary) {
    eprintln!("Render complete!");
    eprintln!("  Lines: {}", summary.lines_read);
    eprintln!("  Rows rendered: {}", summary.rows_rendered);
    if summary.rows_skipped > 0 {
        eprintln!("  Rows skipped: {}", summary.rows_skipped);
    }
    if summary.rows_truncated > 0 {
        eprintln!("  Rows truncated: {}", summary.rows_truncated);
    }
    eprintln!("  Samples: {}", summary.samples_written);
    eprintln!("  Audio duration: {:.2}s", summary.duration_sec());
    eprintln!();
}
