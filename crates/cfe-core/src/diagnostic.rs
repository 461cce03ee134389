//! Minimal diagnostic type shared by the interchange loader and the CLI
//! layer.
//!
//! Deliberately small: this front end only ever needs one severity that
//! matters (warnings on malformed interchange lines), so there is no
//! builder, no diagnostic codes, and no source snippets here.

use std::fmt;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message, optionally tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    /// `None` for diagnostics with no fixed line (e.g. end-of-file).
    pub line: Option<u32>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>, line: Option<u32>) -> Self {
        Diagnostic {
            level: Level::Warning,
            message: message.into(),
            line,
        }
    }

    pub fn error(message: impl Into<String>, line: Option<u32>) -> Self {
        Diagnostic {
            level: Level::Error,
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[Line {}] {}: {}", line, self.level, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}
