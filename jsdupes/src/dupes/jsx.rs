//! JSX component tag collection.
//!
//! Capitalized tag names follow the component-name convention, which is what
//! distinguishes `<Button>` from lowercase HTML tags like `<div>`. Collection
//! runs on the raw body, before normalization erases component identity.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::path::Path;

use crate::constants::{get_jsx_tag_re, MARKUP_EXTENSIONS};

/// Returns true when the file extension marks the file as markup-bearing.
#[must_use]
pub fn is_markup_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

/// Collects the distinct capitalized component names opened in `body`.
///
/// Matches `<Name` where `Name` starts with an uppercase letter and is
/// terminated by whitespace, `/`, or `>`. Lowercase HTML tags and closing
/// tags are ignored; the set is empty for non-markup bodies.
#[must_use]
pub fn collect_tags(body: &str) -> FxHashSet<CompactString> {
    get_jsx_tag_re()
        .captures_iter(body)
        .map(|cap| CompactString::new(&cap[1]))
        .collect()
}
