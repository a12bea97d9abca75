//! Scan command driver: wires configuration, progress reporting, the
//! scanner, and result rendering together.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::dupes::{DuplicateScanner, ScanConfig};
use crate::output;

/// Options for one scan invocation, after CLI flags and the config file have
/// been merged.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root path to scan.
    pub path: PathBuf,
    /// Similarity threshold (0-100).
    pub threshold: u8,
    /// Output raw JSON instead of the console table.
    pub json: bool,
    /// Extra excluded directory names.
    pub exclude_folders: Vec<String>,
    /// Extension override from configuration, if any.
    pub extensions: Option<Vec<String>>,
    /// Diagnostic chatter on stderr.
    pub verbose: bool,
    /// Exit 1 when any pair is reported.
    pub fail_on_duplicates: bool,
    /// Directory to write the HTML report into.
    #[cfg(feature = "html_report")]
    pub report_dir: Option<PathBuf>,
    /// Open the written report in the default browser.
    #[cfg(feature = "html_report")]
    pub open_report: bool,
}

/// Executes a duplicate scan and renders the result.
///
/// Returns the process exit code: 0 on success, 1 when
/// `fail_on_duplicates` is set and pairs were found.
pub fn run_scan<W: Write>(options: &ScanOptions, writer: &mut W) -> Result<i32> {
    let mut config = ScanConfig::default()
        .with_threshold(options.threshold)
        .with_exclude_folders(options.exclude_folders.clone());
    if let Some(extensions) = &options.extensions {
        config = config.with_extensions(extensions.clone());
    }

    let files = crate::walker::collect_source_files(&options.path, &config);
    let file_count = files.len();

    if options.verbose && !options.json {
        eprintln!("[VERBOSE] jsdupes v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        eprintln!(
            "[VERBOSE] Scanning {} files under {}",
            file_count,
            options.path.display()
        );
        eprintln!("[VERBOSE] Extra excludes: {:?}", options.exclude_folders);
    }

    let mut scanner = DuplicateScanner::with_config(config);
    if !options.json {
        let pb = indicatif::ProgressBar::new(file_count as u64);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        pb.set_message("Extracting functions...");
        scanner.progress_bar = Some(Arc::new(pb));
    }

    let result = scanner.scan(&options.path)?;
    if let Some(pb) = &scanner.progress_bar {
        pb.finish_and_clear();
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        output::print_summary(writer, file_count, &result, options.threshold)?;
        if result.pairs.is_empty() {
            output::print_no_duplicates(writer)?;
        } else {
            writeln!(writer)?;
            output::print_pairs_table(writer, &result.pairs)?;
        }
    }

    #[cfg(feature = "html_report")]
    if let Some(report_dir) = &options.report_dir {
        let meta = crate::report::ReportMeta {
            root: options.path.display().to_string(),
            threshold: options.threshold,
            files_scanned: file_count,
        };
        let index_path = crate::report::generate_report(&result, &meta, report_dir)?;
        if !options.json {
            writeln!(writer, "\nHTML report written to {}", index_path.display())?;
        }
        if options.open_report {
            if let Err(err) = open::that(&index_path) {
                eprintln!("[WARN] Could not open report in browser: {err}");
            }
        }
    }

    if options.fail_on_duplicates && !result.pairs.is_empty() {
        return Ok(1);
    }
    Ok(0)
}
