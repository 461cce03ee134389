//! Parser error type.

use thiserror::Error;

use crate::cursor::View;

/// A fatal syntax error. The parser stops at the first one; it never
/// attempts to recover and keep going.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("[Line {line}] Syntax Error: {message}")]
    AtLine { line: u32, message: String },

    #[error("[End of File] Syntax Error: {message}")]
    AtEof { message: String },
}

impl ParseError {
    /// Builds the error naming `found`'s position, describing what was
    /// expected instead.
    pub fn unexpected(found: &View, expected: impl Into<String>) -> Self {
        let message = format!("expected {}, found {}", expected.into(), found.describe());
        match found.line {
            line if line >= 0 => ParseError::AtLine {
                line: line as u32,
                message,
            },
            _ => ParseError::AtEof { message },
        }
    }
}
