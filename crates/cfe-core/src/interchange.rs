//! The token interchange format: `<CLASS, VALUE, LINE>`, one token per line.
//!
//! This is the only thing handed between the scanner and the parser
//! processes. [`render_tokens`] is the write side (owned by the scanner
//! binary); [`load_tokens`] is the read side (owned by the parser binary).
//! Both live here, not in `cfe-lex`/`cfe-par`, because the format itself is
//! a third, independent component shared by both stages.

use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::token::{Token, TokenClass};

/// A single malformed line skipped while loading a token file.
///
/// Carries the 1-based line number *within the token file* (not the
/// original source line embedded in the token, which is exactly what was
/// unparseable) so the caller can report something actionable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchangeWarning {
    pub file_line: usize,
    pub raw: String,
    pub message: String,
}

impl InterchangeWarning {
    /// Converts this warning into the shared diagnostic type, the form
    /// `cfe-drv` actually logs.
    pub fn as_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(self.message.clone(), Some(self.file_line as u32))
    }
}

impl fmt::Display for InterchangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping malformed token line {}: {} ({:?})",
            self.file_line, self.message, self.raw
        )
    }
}

/// Renders tokens into the interchange text format.
///
/// Each token becomes one line framed as `<CLASS, VALUE, LINE>`; the file
/// ends with a single trailing newline.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('<');
        out.push_str(&token.class.to_string());
        out.push_str(", ");
        out.push_str(&token.value);
        out.push_str(", ");
        out.push_str(&token.line.to_string());
        out.push_str(">\n");
    }
    out
}

/// Parses the interchange text format back into tokens.
///
/// Malformed lines (too short, missing two distinct commas, an unknown
/// class spelling, or a non-numeric line field) are skipped and reported
/// as warnings; parsing of subsequent lines continues regardless.
pub fn load_tokens(text: &str) -> (Vec<Token>, Vec<InterchangeWarning>) {
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let file_line = idx + 1;
        let line = raw_line.trim_end_matches('\r');

        match parse_line(line) {
            Ok(token) => tokens.push(token),
            Err(message) => warnings.push(InterchangeWarning {
                file_line,
                raw: line.to_string(),
                message,
            }),
        }
    }

    (tokens, warnings)
}

fn parse_line(line: &str) -> Result<Token, String> {
    if line.len() < 5 {
        return Err("line too short to be a token".to_string());
    }
    if !line.starts_with('<') || !line.ends_with('>') {
        return Err("missing '<' / '>' framing".to_string());
    }

    let inner = &line[1..line.len() - 1];
    let first_comma = inner.find(',').ok_or("missing field separator")?;
    let last_comma = inner.rfind(',').ok_or("missing field separator")?;
    if first_comma == last_comma {
        return Err("fewer than two distinct commas".to_string());
    }

    let class_str = &inner[..first_comma];
    let value = &inner[first_comma + 2..last_comma];
    let line_str = &inner[last_comma + 2..];

    let class: TokenClass = class_str
        .parse()
        .map_err(|_| format!("unknown token class '{}'", class_str))?;
    let line_no: u32 = line_str
        .parse()
        .map_err(|_| format!("unparseable line number '{}'", line_str))?;

    Ok(Token::new(class, value, line_no))
}
