//! Lexical-mode-aware delimiter matching.
//!
//! A single state machine drives both parameter-list parenthesis matching and
//! brace-body extraction. The scanner advances one byte at a time; all
//! characters it dispatches on (quotes, slashes, delimiters) are ASCII, so
//! multi-byte UTF-8 sequences pass through untouched and offsets stay valid.

/// Scanning context for delimiter counting. Delimiters are only counted in
/// [`LexMode::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexMode {
    /// Plain code.
    Normal,
    /// Inside a string literal; the payload is the opening quote byte.
    InString(u8),
    /// Inside a `//` comment, until end of line.
    InLineComment,
    /// Inside a `/* ... */` comment.
    InBlockComment,
}

/// Finds the position of the delimiter closing the one at `open_index`.
///
/// The scan starts just past `open_index` with depth 1 and returns the index
/// where depth reaches zero. Strings (single, double, backtick) and both
/// comment forms are skipped: delimiters inside them do not count. A quote is
/// considered escaped when the immediately preceding character is `\`.
///
/// Returns `None` when the text ends before the delimiter closes. Truncated
/// or malformed input is an expected outcome, not an error; callers drop the
/// candidate and move on.
#[must_use]
pub fn match_delimiter(text: &str, open_index: usize, open: char, close: char) -> Option<usize> {
    debug_assert!(open.is_ascii() && close.is_ascii());
    let bytes = text.as_bytes();
    if open_index >= bytes.len() {
        return None;
    }
    let open = open as u8;
    let close = close as u8;

    let mut depth: usize = 1;
    let mut mode = LexMode::Normal;
    let mut i = open_index + 1;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        match mode {
            LexMode::Normal => {
                if b == b'/' && next == Some(b'/') {
                    mode = LexMode::InLineComment;
                    i += 2;
                    continue;
                }
                if b == b'/' && next == Some(b'*') {
                    mode = LexMode::InBlockComment;
                    i += 2;
                    continue;
                }
                if b == b'"' || b == b'\'' || b == b'`' {
                    mode = LexMode::InString(b);
                    i += 1;
                    continue;
                }
                if b == open {
                    depth += 1;
                } else if b == close {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                i += 1;
            }
            LexMode::InString(quote) => {
                if b == quote && bytes[i - 1] != b'\\' {
                    mode = LexMode::Normal;
                }
                i += 1;
            }
            LexMode::InLineComment => {
                if b == b'\n' {
                    mode = LexMode::Normal;
                }
                i += 1;
            }
            LexMode::InBlockComment => {
                if b == b'*' && next == Some(b'/') {
                    mode = LexMode::Normal;
                    i += 2;
                    continue;
                }
                i += 1;
            }
        }
    }

    None
}

/// Extracts the text strictly between the brace at `open_brace_index` and its
/// matching close brace, or `None` when the body never closes.
#[must_use]
pub fn extract_body(text: &str, open_brace_index: usize) -> Option<&str> {
    let end = match_delimiter(text, open_brace_index, '{', '}')?;
    Some(&text[open_brace_index + 1..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_simple_parens() {
        let text = "f(a, b)";
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(6));
    }

    #[test]
    fn test_match_nested_parens() {
        let text = "f(g(h(x)), y)";
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(12));
    }

    #[test]
    fn test_paren_inside_string_not_counted() {
        let text = r#"f("close ) here", x)"#;
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(19));
        let text = "f('a)b', `c)d`)";
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(14));
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        let text = r#"f("a \" ) b", x)"#;
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(15));
    }

    #[test]
    fn test_paren_inside_comments_not_counted() {
        let text = "f(a, // ) not me\n b)";
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(19));
        let text = "f(a, /* ) ( */ b)";
        assert_eq!(match_delimiter(text, 1, '(', ')'), Some(16));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert_eq!(match_delimiter("f(a, b", 1, '(', ')'), None);
        assert_eq!(match_delimiter("f(\"unterminated )", 1, '(', ')'), None);
        assert_eq!(match_delimiter("", 0, '(', ')'), None);
    }

    #[test]
    fn test_extract_body_nested_braces() {
        let text = "{ if (x) { y(); } }";
        assert_eq!(extract_body(text, 0), Some(" if (x) { y(); } "));
    }

    #[test]
    fn test_extract_body_braces_in_string_and_comment() {
        let text = "{ const s = \"}\"; // }\n return s; }";
        assert_eq!(extract_body(text, 0), Some(" const s = \"}\"; // }\n return s; "));
    }

    #[test]
    fn test_extract_body_unterminated() {
        assert_eq!(extract_body("{ oops", 0), None);
    }

    #[test]
    fn test_matched_region_is_balanced() {
        let text = "( a ( b 'c)' ) /* ) */ d )";
        let end = match_delimiter(text, 0, '(', ')').unwrap();
        assert_eq!(end, text.len() - 1);
        // The enclosed region re-scans to its own final close paren.
        let inner_open = text.find("( b").unwrap();
        let inner_end = match_delimiter(text, inner_open, '(', ')').unwrap();
        assert!(inner_end < end);
    }

    #[test]
    fn test_template_literal_multiline() {
        let text = "{ const t = `line (\n still } string`; }";
        let end = match_delimiter(text, 0, '{', '}').unwrap();
        assert_eq!(end, text.len() - 1);
    }
}
