//! Shared entry point used by both binaries.
//!
//! Parsing, configuration layering (CLI flags over `.jsdupes.toml` over
//! built-in defaults), and exit-code mapping live here so every front end
//! behaves identically.

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::commands::{run_scan, ScanOptions};
use crate::config::Config;
use crate::constants::DEFAULT_THRESHOLD;

/// Runs the scanner with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if the scan itself fails (invalid root, out-of-range
/// threshold, report IO); argument errors are reported and mapped to exit
/// code 1 instead.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run jsdupes with the given arguments, writing output to the specified
/// writer.
///
/// This is the testable version of `run_with_args` that allows output
/// capture.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["jsdupes".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let config = Config::load(&cli.path);
    if cli.verbose && !cli.json {
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Loaded configuration from {}", path.display());
        }
    }

    let threshold = cli
        .threshold
        .or(config.jsdupes.threshold)
        .unwrap_or(DEFAULT_THRESHOLD);
    let mut exclude_folders = config.jsdupes.exclude_folders.unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders);
    let fail_on_duplicates =
        cli.fail_on_duplicates || config.jsdupes.fail_on_duplicates.unwrap_or(false);

    let options = ScanOptions {
        path: cli.path,
        threshold,
        json: cli.json,
        exclude_folders,
        extensions: config.jsdupes.extensions,
        verbose: cli.verbose,
        fail_on_duplicates,
        #[cfg(feature = "html_report")]
        report_dir: cli.report,
        #[cfg(feature = "html_report")]
        open_report: cli.open,
    };

    run_scan(&options, writer)
}
