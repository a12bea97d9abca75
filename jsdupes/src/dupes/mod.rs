//! Duplicate-function detection for JavaScript/TypeScript source trees.
//!
//! The pipeline: locate function-like units with lightweight pattern
//! detection, extract their brace bodies with a string/comment-aware
//! delimiter matcher, normalize bodies into comparison strings, then compare
//! all unit pairs with an edit-distance score (JSX-aware) and report pairs at
//! or above the similarity threshold.

mod errors;
mod jsx;
mod lexer;
mod locator;
mod normalizer;
mod similarity;
mod types;

// Re-exports
pub use errors::ScanError;
pub use jsx::{collect_tags, is_markup_path};
pub use lexer::{extract_body, match_delimiter};
pub use locator::locate_and_extract_units;
pub use normalizer::normalize;
pub use similarity::{edit_distance, similarity};
pub use types::{DuplicatePair, ExtractedUnit, ScanResult, UnitInstance, UnitKind};

use indicatif::ProgressBar;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::constants::{DEFAULT_EXCLUDE_FOLDERS, DEFAULT_EXTENSIONS, DEFAULT_THRESHOLD};

/// Pre-filter: pairs whose normalized lengths differ by more than this
/// percentage of the longer length are never scored.
const MAX_SIZE_DIFF_PERCENT: f64 = 50.0;

/// Scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Minimum similarity percentage for a pair to be reported (inclusive).
    pub threshold: u8,
    /// Directory names to skip during enumeration, in addition to defaults.
    pub exclude_folders: Vec<String>,
    /// File extensions to scan.
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            exclude_folders: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

impl ScanConfig {
    /// Builder-style method to set the similarity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder-style method to set extra excluded directory names.
    #[must_use]
    pub fn with_exclude_folders(mut self, folders: Vec<String>) -> Self {
        self.exclude_folders = folders;
        self
    }

    /// Builder-style method to set the scanned extension list.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// All directory names to prune: built-in defaults plus configured ones.
    #[must_use]
    pub fn all_exclude_folders(&self) -> Vec<String> {
        let mut folders: Vec<String> = DEFAULT_EXCLUDE_FOLDERS
            .iter()
            .map(|f| (*f).to_owned())
            .collect();
        folders.extend(self.exclude_folders.iter().cloned());
        folders
    }
}

/// Main duplicate scanner orchestrator.
///
/// Each `scan` call owns its similarity cache and seen-pair set, so
/// independent scans never share state and may run concurrently.
pub struct DuplicateScanner {
    config: ScanConfig,
    /// Progress bar for tracking extraction progress (shared with the caller)
    pub progress_bar: Option<Arc<ProgressBar>>,
}

impl DuplicateScanner {
    /// Create a new scanner with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
            progress_bar: None,
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            progress_bar: None,
        }
    }

    /// Scans the tree under `root` and reports duplicate pairs.
    ///
    /// Files that cannot be read are logged and skipped; a missing root or an
    /// out-of-range threshold fails before any scanning begins.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        self.validate_threshold()?;
        if !root.exists() {
            return Err(ScanError::InvalidRoot(root.to_path_buf()));
        }

        let files = crate::walker::collect_source_files(root, &self.config);
        if let Some(pb) = &self.progress_bar {
            pb.set_length(files.len() as u64);
            pb.set_position(0);
        }
        let units = self.extract_units_from_paths(&files);
        Ok(self.compare_units(&units))
    }

    /// Scans in-memory sources instead of a directory tree. Used by tests and
    /// embedders that already hold file contents.
    pub fn scan_sources(&self, files: &[(PathBuf, String)]) -> Result<ScanResult, ScanError> {
        self.validate_threshold()?;
        let mut units = Vec::new();
        for (path, source) in files {
            units.extend(locate_and_extract_units(source, path));
        }
        Ok(self.compare_units(&units))
    }

    fn validate_threshold(&self) -> Result<(), ScanError> {
        if self.config.threshold > 100 {
            return Err(ScanError::InvalidThreshold(self.config.threshold));
        }
        Ok(())
    }

    /// Reads and extracts files in parallel; the collect preserves input
    /// order, so the flat unit collection follows the sorted file list.
    fn extract_units_from_paths(&self, paths: &[PathBuf]) -> Vec<ExtractedUnit> {
        use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

        let unit_lists: Vec<Vec<ExtractedUnit>> = paths
            .par_iter()
            .map(|path| {
                let units = match std::fs::read_to_string(path) {
                    Ok(source) => locate_and_extract_units(&source, path),
                    Err(err) => {
                        eprintln!("[WARN] Skipping unreadable file {}: {err}", path.display());
                        Vec::new()
                    }
                };
                if let Some(pb) = &self.progress_bar {
                    pb.inc(1);
                }
                units
            })
            .collect();

        unit_lists.into_iter().flatten().collect()
    }

    /// All-pairs comparison with the size pre-filter, logical-pair dedup,
    /// and a per-invocation similarity cache.
    fn compare_units(&self, units: &[ExtractedUnit]) -> ScanResult {
        let threshold = f64::from(self.config.threshold);
        let mut pairs = Vec::new();
        let mut checked: FxHashSet<String> = FxHashSet::default();
        let mut cache: FxHashMap<(usize, usize), f64> = FxHashMap::default();

        for i in 0..units.len() {
            for j in (i + 1)..units.len() {
                let a = &units[i];
                let b = &units[j];

                // Same name in the same file reads as an intentional overload.
                if a.file == b.file && a.name == b.name {
                    continue;
                }

                let len_a = a.normalized_body.len();
                let len_b = b.normalized_body.len();
                let max_len = len_a.max(len_b);
                if max_len > 0 {
                    let diff_percent = (len_a.abs_diff(len_b) as f64) / (max_len as f64) * 100.0;
                    if diff_percent > MAX_SIZE_DIFF_PERCENT {
                        continue;
                    }
                }

                if !checked.insert(logical_pair_key(a, b)) {
                    continue;
                }

                // Units are unique per (file, start_offset), so the index
                // pair stands in for the file+offset cache key.
                let score = *cache.entry((i, j)).or_insert_with(|| {
                    similarity(&a.normalized_body, &b.normalized_body, &a.tags, &b.tags)
                });

                if score >= threshold {
                    pairs.push(DuplicatePair {
                        unit_a: a.to_instance(),
                        unit_b: b.to_instance(),
                        similarity: (score * 100.0).round() / 100.0,
                    });
                }
            }
        }

        ScanResult {
            pairs,
            total_units: units.len(),
        }
    }
}

impl Default for DuplicateScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-independent identity of a logical pair: the sorted
/// (file, name, file, name) 4-tuple.
fn logical_pair_key(a: &ExtractedUnit, b: &ExtractedUnit) -> String {
    let mut parts = [
        a.file.to_string_lossy().into_owned(),
        a.name.to_string(),
        b.file.to_string_lossy().into_owned(),
        b.name.to_string(),
    ];
    parts.sort_unstable();
    parts.join("|")
}

/// Scans `root` at the given threshold with an otherwise default
/// configuration.
pub fn scan(root: &Path, threshold: u8) -> Result<ScanResult, ScanError> {
    DuplicateScanner::with_config(ScanConfig::default().with_threshold(threshold)).scan(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(files: &[(&str, &str)]) -> Vec<(PathBuf, String)> {
        files
            .iter()
            .map(|(path, text)| (PathBuf::from(path), (*text).to_owned()))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let scanner = DuplicateScanner::new();
        let result = scanner.scan_sources(&[]).unwrap();
        assert_eq!(result.pairs.len(), 0);
        assert_eq!(result.total_units, 0);
    }

    #[test]
    fn test_renamed_duplicate_detected_across_files() {
        let files = sources(&[
            (
                "a.js",
                "function calculateSum(a,b){const result=a+b;return result;}",
            ),
            (
                "b.js",
                "function addNumbers(x,y){const total=x+y;return total;}",
            ),
        ]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(70));
        let result = scanner.scan_sources(&files).unwrap();
        assert_eq!(result.total_units, 2);
        assert_eq!(result.pairs.len(), 1);
        let pair = &result.pairs[0];
        assert_eq!(pair.unit_a.name, "calculateSum");
        assert_eq!(pair.unit_b.name, "addNumbers");
        assert!((pair.similarity - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_file_same_name_never_paired() {
        // Two same-named units at different offsets read as overloads.
        let files = sources(&[(
            "a.js",
            "function pick(a){const r=a+1;return r;}\nclass X {\n  pick(a) {const r=a+1;return r;}\n}\n",
        )]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(10));
        let result = scanner.scan_sources(&files).unwrap();
        assert_eq!(result.total_units, 2);
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn test_same_body_different_names_in_one_file() {
        let files = sources(&[(
            "a.js",
            "function first(a){const r=a*2;return r;}\nfunction second(b){const r=b*2;return r;}\n",
        )]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(50));
        let result = scanner.scan_sources(&files).unwrap();
        assert_eq!(result.total_units, 2);
        assert_eq!(result.pairs.len(), 1);
    }

    #[test]
    fn test_size_difference_prefilter_blocks_pairing() {
        let big_body: String = (0..40)
            .map(|i| format!("const x{i} = compute{i}(a, b);"))
            .collect::<Vec<_>>()
            .join("\n");
        let files = sources(&[
            ("a.js", "function tiny(a){return a;}"),
            ("b.js", &format!("function huge(a, b) {{\n{big_body}\n}}")),
        ]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(0));
        let result = scanner.scan_sources(&files).unwrap();
        assert_eq!(result.total_units, 2);
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn test_threshold_above_100_rejected() {
        let files = sources(&[("a.js", "function f(a){return a;}")]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(101));
        match scanner.scan_sources(&files) {
            Err(ScanError::InvalidThreshold(101)) => {}
            other => panic!("expected InvalidThreshold, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_root_rejected() {
        let scanner = DuplicateScanner::new();
        let missing = PathBuf::from("/definitely/not/a/real/root/jsdupes");
        match scanner.scan(&missing) {
            Err(ScanError::InvalidRoot(path)) => assert_eq!(path, missing),
            other => panic!("expected InvalidRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Bodies normalize to "vv+1;" vs "vv-1;": one substitution in five
        // chars, exactly 80%.
        let files = sources(&[
            ("a.js", "function p(a){return a+1;}"),
            ("b.js", "function q(b){return b-1;}"),
        ]);
        let at_threshold =
            DuplicateScanner::with_config(ScanConfig::default().with_threshold(80));
        let result = at_threshold.scan_sources(&files).unwrap();
        assert_eq!(result.pairs.len(), 1);
        assert!((result.pairs[0].similarity - 80.0).abs() < f64::EPSILON);

        let above_threshold =
            DuplicateScanner::with_config(ScanConfig::default().with_threshold(81));
        let result = above_threshold.scan_sources(&files).unwrap();
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn test_pair_order_follows_input_order() {
        let body = |v: &str| format!("function {v}(a){{const r=a+9;return r;}}");
        let files = sources(&[
            ("a.js", &format!("{}\n{}", body("one"), body("two"))),
            ("b.js", &body("three")),
        ]);
        let scanner = DuplicateScanner::with_config(ScanConfig::default().with_threshold(90));
        let result = scanner.scan_sources(&files).unwrap();
        assert_eq!(result.total_units, 3);
        let names: Vec<(String, String)> = result
            .pairs
            .iter()
            .map(|p| (p.unit_a.name.to_string(), p.unit_b.name.to_string()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("one".to_owned(), "two".to_owned()),
                ("one".to_owned(), "three".to_owned()),
                ("two".to_owned(), "three".to_owned()),
            ]
        );
    }
}
