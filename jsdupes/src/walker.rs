//! Source file enumeration.
//!
//! Walks the scan root with gitignore support, prunes excluded directory
//! names, keeps files with scannable extensions, and returns the paths
//! sorted so downstream output is deterministic.

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use crate::dupes::ScanConfig;

/// Enumerates the source files to scan under `root`.
///
/// Symlinks are not followed. Directory names in the exclusion set are never
/// descended into; `.gitignore` rules apply even outside a git repository.
#[must_use]
pub fn collect_source_files(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let exclude: FxHashSet<String> = config.all_exclude_folders().into_iter().collect();
    let extensions: FxHashSet<String> = config
        .extensions
        .iter()
        .map(|e| e.to_ascii_lowercase())
        .collect();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .follow_links(false)
        .ignore(false)
        .git_ignore(true)
        .parents(false)
        .require_git(false);

    let walker = builder
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.path_is_symlink() {
                return false;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !exclude.contains(name))
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        let Ok(entry) = result else {
            continue;
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let scannable = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase()));
        if scannable {
            files.push(path);
        }
    }

    files.sort_unstable();
    files
}
