//! Command-line front end: one `$odf$` record per encrypted input file.
//!
//! ```sh
//! odf2john secret.odt budget.ods > hashes.txt
//! ```
//!
//! Records go to standard output. Files that cannot be processed are reported
//! on standard error, one line each, and do not stop the remaining files.

use clap::{CommandFactory, Parser};
use odf2john::{ExtractOptions, extract_all};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Status used when no input was given
const USAGE_EXIT: u8 = 255;

/// Extract password hashes from encrypted OpenDocument files for John the Ripper
#[derive(Parser, Debug)]
#[command(name = "odf2john", version, about, long_about = None)]
struct Cli {
    /// OpenOffice / LibreOffice file(s) to process
    #[arg(value_name = "INPUT")]
    input: Vec<PathBuf>,

    /// Enable diagnostic logging. Repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.input.is_empty() {
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(USAGE_EXIT);
    }

    let options = ExtractOptions::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut had_error = false;

    for outcome in extract_all(cli.input.iter().map(PathBuf::as_path), &options) {
        let name = outcome.path.to_string_lossy();
        match outcome.result {
            Ok(record) => {
                if let Err(e) = writeln!(out, "{}", record.to_line(&name)) {
                    tracing::error!("failed to write record: {e}");
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                tracing::debug!(code = e.exit_code(), "rejected {}", name);
                eprintln!("{}: {}", name, e);
                had_error = true;
            },
        }
    }

    if let Err(e) = out.flush() {
        tracing::error!("failed to flush output: {e}");
        return ExitCode::FAILURE;
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
