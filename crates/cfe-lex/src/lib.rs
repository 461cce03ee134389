//! cfe-lex - Scanner (Lexical Analyzer)
//!
//! Turns a string of C99-subset source text into a stream of classified
//! [`cfe_core::Token`]s plus a terminal [`ScanStatus`]. See [`scanner`] for
//! the character-level state machine and its fixed dispatch priority.
//!
//! This crate is a pure function of its input: it performs no I/O and
//! writes nothing to stdout/stderr. `cfe-drv` is the layer that writes the
//! interchange file and reports errors to the user.

mod cursor;
mod scanner;
mod vocab;

pub use scanner::{scan, ScanOutcome, ScanStatus};
pub use vocab::{is_keyword, KEYWORDS};

/// Scans `source` and renders the result directly to the interchange text
/// format, alongside the terminal status.
///
/// Convenience wrapper around [`scan`] + [`cfe_core::render_tokens`] for
/// callers (namely the `cfescan` binary) that only want the finished text.
pub fn scan_to_string(source: &str) -> (String, ScanStatus, u32) {
    let outcome = scan(source);
    let rendered = cfe_core::render_tokens(&outcome.tokens);
    (rendered, outcome.status, outcome.line_count)
}
