//! Edit-distance similarity scoring with a JSX tag-overlap adjustment.

use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// Multiplier applied when two markup bodies share no component names.
/// Structurally similar markup built from entirely different components is a
/// different template.
const DISJOINT_TAGS_PENALTY: f64 = 0.3;
/// Weight of raw text similarity in the blended markup score.
const TEXT_WEIGHT: f64 = 0.7;
/// Weight of the component-overlap ratio in the blended markup score.
const TAG_WEIGHT: f64 = 0.3;

/// Scores two normalized bodies in `[0, 100]`.
///
/// Byte-identical inputs score 100 before any tag adjustment. Otherwise the
/// base score is `((max_len - edit_distance) / max_len) * 100`, and when both
/// tag sets are non-empty it is adjusted by component overlap: disjoint sets
/// are penalized hard, overlapping sets blend text similarity with the
/// Jaccard overlap ratio at 70/30.
#[must_use]
pub fn similarity(
    norm_a: &str,
    norm_b: &str,
    tags_a: &FxHashSet<CompactString>,
    tags_b: &FxHashSet<CompactString>,
) -> f64 {
    if norm_a == norm_b {
        return 100.0;
    }

    let base = text_similarity(norm_a, norm_b);
    if tags_a.is_empty() || tags_b.is_empty() {
        return base;
    }

    let common = tags_a.intersection(tags_b).count();
    if common == 0 {
        return base * DISJOINT_TAGS_PENALTY;
    }
    let union = tags_a.union(tags_b).count();
    base.mul_add(TEXT_WEIGHT, (common as f64 / union as f64) * 100.0 * TAG_WEIGHT)
}

/// Base percentage similarity of two strings.
fn text_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 100.0;
    }
    let distance = edit_distance_chars(&a, &b);
    ((max_len - distance) as f64 / max_len as f64) * 100.0
}

/// Classic single-character insert/delete/substitute edit distance.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// Row-rolling Levenshtein; `prev`/`curr` are consecutive rows of the
/// `(len(b)+1) x (len(a)+1)` table.
fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr: Vec<usize> = vec![0; a.len() + 1];

    for (i, &bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &ac) in a.iter().enumerate() {
            curr[j + 1] = if ac == bc {
                prev[j]
            } else {
                prev[j].min(prev[j + 1]).min(curr[j]) + 1
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
