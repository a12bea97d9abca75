//! jsdupes: near-duplicate function detection for JavaScript and TypeScript.
//!
//! Scans a source tree, extracts function-like units (declarations, arrow
//! assignments, methods) from JS/TS/JSX/TSX text with lightweight pattern
//! detection, normalizes each body into a comparison string, and reports
//! pairs whose edit-distance similarity reaches a threshold. It is
//! deliberately not a parser: detection copes with diverse and even invalid
//! input by tracking string/comment lexical modes and delimiter balance
//! instead of building a grammar.
//!
//! The library surface is in [`dupes`]; the CLI front end lives in
//! [`entry_point`] and [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dupes;
pub mod entry_point;
pub mod output;
#[cfg(feature = "html_report")]
pub mod report;
pub mod utils;
pub mod walker;
