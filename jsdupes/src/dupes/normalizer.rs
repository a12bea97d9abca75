//! Body normalization for comparison.
//!
//! Transforms raw body text into a dense comparison string in a fixed order:
//! comments, then string literals, then JSX tag names, then type syntax, then
//! identifiers, then whitespace. Later steps rely on earlier ones having
//! removed their interference (e.g. identifier replacement must not see
//! string contents). Two bodies that differ only in naming, literal wording,
//! comments, or type annotations normalize to identical strings.

use std::borrow::Cow;

use crate::constants::{
    get_as_assertion_re, get_block_comment_re, get_double_quote_re, get_generic_params_re,
    get_interface_block_re, get_jsx_close_name_re, get_jsx_open_name_re, get_line_comment_re,
    get_single_quote_re, get_template_literal_re, get_type_alias_re, get_type_annotation_re,
};

/// Maximum passes for nested generic parameter lists (`Promise<Array<T>>`).
const GENERIC_STRIP_PASSES: usize = 8;

/// Normalizes body text into its canonical comparison form.
///
/// The result contains only structural punctuation, operators, numeric
/// literals, and placeholders: every string literal becomes `""`, every
/// identifier becomes `v`, JSX tag names become a fixed tag token, and type
/// syntax disappears entirely.
#[must_use]
pub fn normalize(body: &str) -> String {
    let text = get_block_comment_re().replace_all(body, "");
    let text = get_line_comment_re().replace_all(&text, "");
    let text = get_template_literal_re().replace_all(&text, "\"\"");
    let text = get_single_quote_re().replace_all(&text, "\"\"");
    let text = get_double_quote_re().replace_all(&text, "\"\"");
    // Markup nesting survives; component identity was collected earlier.
    let text = get_jsx_close_name_re().replace_all(&text, "</T");
    let text = get_jsx_open_name_re().replace_all(&text, "<T");
    let text = strip_generic_params(&text);
    let text = get_interface_block_re().replace_all(&text, "");
    let text = get_type_alias_re().replace_all(&text, "");
    let text = get_as_assertion_re().replace_all(&text, "");
    let text = get_type_annotation_re().replace_all(&text, "");
    let text = replace_identifiers(&text);
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Removes generic parameter lists attached to identifiers, innermost first.
fn strip_generic_params(text: &str) -> String {
    let re = get_generic_params_re();
    let mut current = text.to_owned();
    for _ in 0..GENERIC_STRIP_PASSES {
        match re.replace_all(&current, "$1") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => current = next,
        }
    }
    current
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Replaces every identifier token (not starting with a digit) with `v`,
/// preserving token count and relative positions. Digit-led runs like `123abc`
/// are not identifiers and pass through unchanged.
fn replace_identifiers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev_continues = false;

    while let Some(c) = chars.next() {
        if !prev_continues && is_ident_start(c) {
            while chars.peek().copied().is_some_and(is_ident_continue) {
                chars.next();
            }
            out.push('v');
            prev_continues = false;
        } else {
            prev_continues = is_ident_continue(c);
            out.push(c);
        }
    }

    out
}
