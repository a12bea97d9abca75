//! Unit detection: finds function-like constructs in raw source text.
//!
//! Three independent detection passes (arrow assignments, function
//! declarations, method-like heads) run over the same text; their candidates
//! are merged, ordered by start offset, and resolved into extracted units.
//! Detection is pattern-based on purpose: it has to cope with syntactically
//! diverse and possibly invalid input without a full grammar. Expression-
//! bodied arrows (`x => x + 1`) are not extracted.

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use std::path::Path;

use super::jsx;
use super::lexer::{extract_body, match_delimiter};
use super::normalizer::normalize;
use super::types::{ExtractedUnit, UnitKind};
use crate::constants::{
    get_arrow_head_re, get_function_head_re, get_head_token_re, get_method_head_re,
    CONTROL_KEYWORDS, METHOD_LOOKBEHIND,
};
use crate::utils::LineIndex;

/// An ephemeral candidate produced by one detection pass; consumed
/// immediately by body extraction.
#[derive(Debug, Clone)]
struct CandidateUnit {
    name: CompactString,
    kind: UnitKind,
    start_offset: usize,
    body_start: usize,
}

/// Locates every function-like unit in `source` and extracts, normalizes,
/// and tags its body.
///
/// Candidates are processed in ascending start-offset order, so an outer unit
/// always precedes the units nested inside it. At most one unit is produced
/// per start offset; candidates whose body never closes or is blank are
/// dropped silently.
#[must_use]
pub fn locate_and_extract_units(source: &str, file_path: &Path) -> Vec<ExtractedUnit> {
    let mut candidates = Vec::new();
    find_arrow_assignments(source, &mut candidates);
    find_function_declarations(source, &mut candidates);
    find_methods(source, &mut candidates);
    candidates.sort_by_key(|c| c.start_offset);

    let markup_file = jsx::is_markup_path(file_path);
    let line_index = LineIndex::new(source);
    let mut seen_offsets: FxHashSet<usize> = FxHashSet::default();
    let mut units = Vec::new();

    for candidate in candidates {
        let Some(raw_body) = extract_body(source, candidate.body_start) else {
            continue;
        };
        if raw_body.trim().is_empty() {
            continue;
        }
        if !seen_offsets.insert(candidate.start_offset) {
            continue;
        }

        let tags = if markup_file || raw_body.contains('<') {
            jsx::collect_tags(raw_body)
        } else {
            FxHashSet::default()
        };

        units.push(ExtractedUnit {
            name: candidate.name,
            file: file_path.to_path_buf(),
            start_offset: candidate.start_offset,
            start_line: line_index.line_of(candidate.start_offset),
            kind: candidate.kind,
            raw_body: raw_body.to_owned(),
            normalized_body: normalize(raw_body),
            tags,
        });
    }

    units
}

/// Pass 1: `const name = async (params) => {`, optionally with a type
/// annotation on the binding and a return-type annotation before the arrow.
fn find_arrow_assignments(source: &str, out: &mut Vec<CandidateUnit>) {
    for caps in get_arrow_head_re().captures_iter(source) {
        let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let open_paren = head.end() - 1;
        let Some(close_paren) = match_delimiter(source, open_paren, '(', ')') else {
            continue;
        };
        let Some(body_start) = arrow_body_start(source, close_paren) else {
            continue;
        };
        out.push(CandidateUnit {
            name: name.as_str().into(),
            kind: UnitKind::ArrowAssignment,
            start_offset: head.start(),
            body_start,
        });
    }
}

/// Pass 2: `async function name<T>(params)` followed by a brace body.
fn find_function_declarations(source: &str, out: &mut Vec<CandidateUnit>) {
    for caps in get_function_head_re().captures_iter(source) {
        let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let open_paren = head.end() - 1;
        let Some(close_paren) = match_delimiter(source, open_paren, '(', ')') else {
            continue;
        };
        let Some(body_start) = brace_body_start(source, close_paren) else {
            continue;
        };
        out.push(CandidateUnit {
            name: name.as_str().into(),
            kind: UnitKind::FunctionDeclaration,
            start_offset: head.start(),
            body_start,
        });
    }
}

/// Pass 3: `modifier name<T>(params)` at the start of a line, followed by a
/// brace body. Control-flow keywords are never unit names, and a preceding
/// arrow/function head token means the unit is already counted by another
/// pass.
fn find_methods(source: &str, out: &mut Vec<CandidateUnit>) {
    for caps in get_method_head_re().captures_iter(source) {
        let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name_str = name.as_str();
        if CONTROL_KEYWORDS.contains(&name_str) {
            continue;
        }

        let mut window_start = head.start().saturating_sub(METHOD_LOOKBEHIND);
        while !source.is_char_boundary(window_start) {
            window_start += 1;
        }
        if get_head_token_re().is_match(&source[window_start..head.start()]) {
            continue;
        }

        let open_paren = head.end() - 1;
        let Some(close_paren) = match_delimiter(source, open_paren, '(', ')') else {
            continue;
        };
        let Some(body_start) = brace_body_start(source, close_paren) else {
            continue;
        };
        out.push(CandidateUnit {
            name: name_str.into(),
            kind: UnitKind::Method,
            start_offset: head.start(),
            body_start,
        });
    }
}

/// Finds the `{` opening an arrow body after the parameter list, skipping an
/// optional `: ReturnType` annotation before the `=>`.
fn arrow_body_start(source: &str, close_paren: usize) -> Option<usize> {
    let after_start = close_paren + 1;
    let after = source.get(after_start..)?;
    let trimmed = after.trim_start();

    let arrow_rel = if trimmed.starts_with("=>") {
        after.len() - trimmed.len()
    } else if trimmed.starts_with(':') {
        after.find("=>")?
    } else {
        return None;
    };

    let after_arrow = &after[arrow_rel + 2..];
    let body_trimmed = after_arrow.trim_start();
    if body_trimmed.starts_with('{') {
        Some(after_start + arrow_rel + 2 + (after_arrow.len() - body_trimmed.len()))
    } else {
        None
    }
}

/// Finds the `{` opening a brace body after the parameter list, skipping an
/// optional `: ReturnType` annotation.
fn brace_body_start(source: &str, close_paren: usize) -> Option<usize> {
    let after_start = close_paren + 1;
    let after = source.get(after_start..)?;
    let trimmed = after.trim_start();

    if trimmed.starts_with('{') {
        return Some(after_start + (after.len() - trimmed.len()));
    }
    if trimmed.starts_with(':') {
        return Some(after_start + after.find('{')?);
    }
    None
}
