//! Core types for duplicate detection.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::SNIPPET_LEN;

/// The syntactic form a unit was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Arrow function assigned to a `const`/`let`/`var` binding.
    ArrowAssignment,
    /// Named `function` declaration.
    FunctionDeclaration,
    /// Class or object method.
    Method,
}

impl UnitKind {
    /// Get user-friendly display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ArrowAssignment => "arrow function",
            Self::FunctionDeclaration => "function",
            Self::Method => "method",
        }
    }
}

/// A function-like unit extracted from one source file.
///
/// Owned by the scan for its duration; the source text itself is dropped as
/// soon as extraction finishes. At most one unit exists per
/// `(file, start_offset)` pair.
#[derive(Debug, Clone)]
pub struct ExtractedUnit {
    /// Unit name as written in the source.
    pub name: CompactString,
    /// Source file path.
    pub file: PathBuf,
    /// Byte offset where the detected head starts.
    pub start_offset: usize,
    /// 1-indexed line of `start_offset`.
    pub start_line: usize,
    /// How the unit was detected.
    pub kind: UnitKind,
    /// Raw body text between the braces.
    pub raw_body: String,
    /// Comparison form of the body; a pure function of `raw_body`.
    pub normalized_body: String,
    /// Distinct capitalized JSX component names referenced by the body.
    /// Empty for non-markup bodies.
    pub tags: FxHashSet<CompactString>,
}

impl ExtractedUnit {
    /// Builds the serializable per-side view stored on a reported pair.
    #[must_use]
    pub fn to_instance(&self) -> UnitInstance {
        UnitInstance {
            file: self.file.clone(),
            name: self.name.clone(),
            kind: self.kind,
            start_offset: self.start_offset,
            start_line: self.start_line,
            snippet: truncate_chars(&self.raw_body, SNIPPET_LEN),
        }
    }
}

/// One side of a reported duplicate pair: location metadata plus a short
/// preview of the raw body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInstance {
    /// Source file path.
    pub file: PathBuf,
    /// Unit name.
    pub name: CompactString,
    /// Detection kind.
    pub kind: UnitKind,
    /// Byte offset of the detected head.
    pub start_offset: usize,
    /// 1-indexed start line.
    pub start_line: usize,
    /// Leading slice of the raw body for previews.
    pub snippet: String,
}

/// A pair of units whose similarity reached the scan threshold.
/// Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicatePair {
    /// First unit (earlier in scan order).
    pub unit_a: UnitInstance,
    /// Second unit.
    pub unit_b: UnitInstance,
    /// Similarity percentage, rounded to two decimals.
    pub similarity: f64,
}

/// Terminal output of one scan invocation; immutable and serializable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Reported pairs, in flat-collection iteration order.
    pub pairs: Vec<DuplicatePair>,
    /// Total number of extracted units across all files.
    pub total_units: usize,
}

/// Truncates to at most `max` characters, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_owned(),
        None => text.to_owned(),
    }
}
