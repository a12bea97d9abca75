//! Shared constants: default path filters, keyword sets, and the compiled
//! regular expressions used by unit detection and body normalization.

use regex::Regex;
use std::sync::OnceLock;

/// Default minimum similarity percentage for reporting a pair.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// Directory names that are never descended into unless force-included.
pub const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &["node_modules", ".git", "dist", "build"];

/// File extensions considered scannable source files.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Extensions whose files are treated as markup-bearing (JSX) by default.
pub const MARKUP_EXTENSIONS: &[&str] = &["jsx", "tsx"];

/// Control-flow keywords that can never name a method-like unit.
pub const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "with"];

/// How many characters before a method-pattern match are inspected for an
/// arrow/function head that would make the match a double-count.
pub const METHOD_LOOKBEHIND: usize = 20;

/// Truncation length for the raw-body snippet stored on reported pairs.
pub const SNIPPET_LEN: usize = 200;

/// Returns the compiled pattern for arrow functions assigned to a binding:
/// `const name = async (`, with an optional type annotation on the binding.
pub fn get_arrow_head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"\b(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?::[^=\n]*)?=\s*(?:async\s*)?\(",
        )
        .expect("Invalid arrow head regex pattern")
    })
}

/// Returns the compiled pattern for function declarations:
/// `async function name<T>(`.
pub fn get_function_head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\b(?:async\s+)?function\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*(?:<[^>(]*>)?\s*\(")
            .expect("Invalid function head regex pattern")
    })
}

/// Returns the compiled pattern for method-like heads at the start of a line:
/// `public name<T>(`. Modifier keywords are optional and repeatable.
pub fn get_method_head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:(?:public|private|protected|static|async)\s+)*([A-Za-z_$][A-Za-z0-9_$]*)\s*(?:<[^>(]*>)?\s*\(",
        )
        .expect("Invalid method head regex pattern")
    })
}

/// Returns the pattern matching an arrow/function head token right before a
/// method candidate, which marks the candidate as already counted elsewhere.
pub fn get_head_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?:function|const|let|var|=>|=)\s*$")
            .expect("Invalid head token regex pattern")
    })
}

/// Returns the pattern for capitalized JSX component tags (`<Button ...`).
pub fn get_jsx_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"<([A-Z][A-Za-z0-9]*)[\s/>]").expect("Invalid JSX tag regex pattern")
    })
}

/// Returns the block comment pattern (`/* ... */`, may span lines).
pub fn get_block_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("Invalid block comment regex pattern"))
}

/// Returns the line comment pattern (`//` to end of line).
pub fn get_line_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"//[^\n]*").expect("Invalid line comment regex pattern"))
}

/// Returns the template-literal pattern.
pub fn get_template_literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"`[^`]*`").expect("Invalid template literal regex pattern"))
}

/// Returns the single-quoted string pattern.
pub fn get_single_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"'[^']*'").expect("Invalid single quote regex pattern"))
}

/// Returns the double-quoted string pattern.
pub fn get_double_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r#""[^"]*""#).expect("Invalid double quote regex pattern"))
}

/// Returns the pattern for capitalized JSX opening-tag names.
pub fn get_jsx_open_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"<[A-Z][A-Za-z0-9]*").expect("Invalid JSX open regex pattern"))
}

/// Returns the pattern for capitalized JSX closing-tag names.
pub fn get_jsx_close_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"</[A-Z][A-Za-z0-9]*").expect("Invalid JSX close regex pattern"))
}

/// Returns the pattern for a generic parameter list attached to an
/// identifier (`identity<T>`, `Map<string, number>`). The identifier is kept
/// by the replacement; the bracketed list is dropped. The first character
/// after `<` must not be `/` or whitespace so JSX tags and comparison chains
/// are left alone.
pub fn get_generic_params_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)<[^/<>{}\s][^<>{}]*>")
            .expect("Invalid generic params regex pattern")
    })
}

/// Returns the pattern for `as Type` assertions.
pub fn get_as_assertion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\bas\s+[A-Za-z_$][A-Za-z0-9_$.]*(?:\[\])*")
            .expect("Invalid as assertion regex pattern")
    })
}

/// Returns the pattern for standalone `interface Name ... { ... }` blocks.
pub fn get_interface_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?s)\binterface\s+[A-Za-z_$][A-Za-z0-9_$]*[^{]*\{[^{}]*\}")
            .expect("Invalid interface block regex pattern")
    })
}

/// Returns the pattern for `type Name = ...;` aliases.
pub fn get_type_alias_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\btype\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=[^;]*;")
            .expect("Invalid type alias regex pattern")
    })
}

/// Returns the pattern for inline `: Type` annotations. Consumption stops at
/// the next structural character, an opening brace, or end of line, so a
/// return-type annotation never swallows the body that follows it.
pub fn get_type_annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r":[ \t]*[^=,)\]};{\n]+").expect("Invalid type annotation regex pattern")
    })
}
