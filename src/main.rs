use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chapterize::{run, SummarizerClient};

/// Split a book PDF into per-chapter PDFs with highlights and summaries
#[derive(Parser, Debug)]
#[command(name = "chapterize", version)]
struct Args {
    /// Path to the input PDF
    input: PathBuf,

    /// Summarization server endpoint
    #[arg(long, default_value = "http://localhost:8000")]
    endpoint: String,

    /// Per-call timeout for the summarization server, in seconds
    #[arg(long, default_value_t = 180)]
    timeout_secs: u64,

    /// Maximum characters per summarization input chunk
    #[arg(long, default_value_t = chapterize::DEFAULT_MAX_CHARS)]
    max_input_chars: usize,
}

fn main() -> ExitCode {
    // Exit 1 (not clap's default 2) on a missing/invalid argument
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    match process(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn process(args: &Args) -> Result<bool> {
    let engine = SummarizerClient::with_timeout(
        args.endpoint.clone(),
        Duration::from_secs(args.timeout_secs),
    )
    .max_input_chars(args.max_input_chars);

    let report = run(&args.input, &engine)?;

    if !report.all_succeeded() {
        eprintln!(
            "{} of {} chapters failed:",
            report.failures.len(),
            report.failures.len() + report.written.len()
        );
        for (ordinal, message) in &report.failures {
            eprintln!("  chapter {}: {}", ordinal, message);
        }
    }
    Ok(report.all_succeeded())
}
