//! Static HTML report generation, gated behind the `html_report` feature.

use anyhow::Result;
use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dupes::ScanResult;
use crate::utils::normalize_display_path;

/// Scan-level metadata shown in the report header and stat cards.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Display form of the scan root.
    pub root: String,
    /// Threshold the scan ran with.
    pub threshold: u8,
    /// Number of files enumerated.
    pub files_scanned: usize,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    generated_at: String,
    version: String,
    root_path: String,
    threshold: u8,
    files_scanned: usize,
    total_units: usize,
    pair_count: usize,
    pairs: Vec<PairView>,
}

/// One pre-formatted pair card.
struct PairView {
    index: usize,
    similarity: String,
    name_a: String,
    location_a: String,
    snippet_a: String,
    name_b: String,
    location_b: String,
    snippet_b: String,
}

/// Generates the HTML report into `output_dir` and returns the path of the
/// written `index.html`.
///
/// The output directory is validated against the current working directory
/// before anything is written.
pub fn generate_report(
    result: &ScanResult,
    meta: &ReportMeta,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_dir = crate::utils::validate_output_path(output_dir)?;
    if !output_dir.exists() {
        fs::create_dir_all(&output_dir)?;
    }

    let pairs = result
        .pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| PairView {
            index: i + 1,
            similarity: format!("{:.2}", pair.similarity),
            name_a: pair.unit_a.name.to_string(),
            location_a: format!(
                "{}:{}",
                normalize_display_path(&pair.unit_a.file),
                pair.unit_a.start_line
            ),
            snippet_a: pair.unit_a.snippet.clone(),
            name_b: pair.unit_b.name.to_string(),
            location_b: format!(
                "{}:{}",
                normalize_display_path(&pair.unit_b.file),
                pair.unit_b.start_line
            ),
            snippet_b: pair.unit_b.snippet.clone(),
        })
        .collect();

    let template = ReportTemplate {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        root_path: meta.root.clone(),
        threshold: meta.threshold,
        files_scanned: meta.files_scanned,
        total_units: result.total_units,
        pair_count: result.pairs.len(),
        pairs,
    };

    let index_path = output_dir.join("index.html");
    fs::write(&index_path, template.render()?)?;
    Ok(index_path)
}
