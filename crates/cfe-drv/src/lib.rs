//! cfe-drv - CLI driver for the scanner and parser.
//!
//! `cfescan` and `cfeparse` are two independent binaries that communicate
//! through the `tokens.txt` interchange file on disk — this crate holds the
//! logic they share: configuration loading, logging setup, and the actual
//! prompt/read/scan/parse/print flows, each written against generic
//! `Read`/`Write` so they can be driven from a real terminal or from a test
//! harness without spawning a process.

mod config;
mod error;

pub use config::Config;
pub use error::{DrvError, Result};

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use cfe_lex::ScanStatus;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the global tracing subscriber. Safe to call more than once
/// per process in tests; a second call is a no-op.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
    Ok(())
}

/// Loads configuration from an explicit path, or from the standard search
/// order if `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Repeatedly prompts for whether the source lives in the current
/// directory and then for its name or path, until one opens as a file.
pub fn collect_source_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> std::io::Result<PathBuf> {
    loop {
        write!(output, "Is the source file in the current directory? (y/n): ")?;
        output.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        let in_cwd = answer.trim().eq_ignore_ascii_case("y");

        write!(
            output,
            "{}",
            if in_cwd {
                "Enter the file name: "
            } else {
                "Enter the path to the file: "
            }
        )?;
        output.flush()?;
        let mut candidate = String::new();
        input.read_line(&mut candidate)?;
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }

        let path = PathBuf::from(candidate);
        if path.is_file() {
            return Ok(path);
        }
        writeln!(output, "Could not open '{candidate}'; let's try again.")?;
    }
}

/// Runs the interactive scanner flow end to end: prompts for a source
/// file, scans it, and writes `tokens_path` on success. Returns the
/// process exit code per the scanner CLI's documented behavior.
pub fn run_scanner<R: BufRead, W: Write, E: Write>(
    input: R,
    mut output: W,
    mut err_out: E,
    tokens_path: &Path,
) -> std::io::Result<i32> {
    let path = collect_source_path(input, &mut output)?;
    let source = std::fs::read_to_string(&path)?;

    if source.trim().is_empty() {
        writeln!(err_out, "Error: '{}' is empty; nothing to scan.", path.display())?;
        return Ok(1);
    }

    let (rendered, status, line_count) = cfe_lex::scan_to_string(&source);
    tracing::info!(line_count, "scanned {}", path.display());

    match status {
        ScanStatus::Ok => {
            std::fs::write(tokens_path, rendered)?;
            writeln!(
                output,
                "Scanned {} line(s); wrote {}.",
                line_count,
                tokens_path.display()
            )?;
            Ok(0)
        }
        ScanStatus::UnexpectedCharacter { ch, line } => {
            writeln!(err_out, "Error: unexpected character '{ch}' at line {line}.")?;
            Ok(1)
        }
        ScanStatus::UnterminatedBlockComment => {
            writeln!(err_out, "Error: unterminated block comment.")?;
            Ok(1)
        }
    }
}

/// Runs the parser flow end to end: reads `tokens_path`, parses it, and
/// prints the tree or the diagnostic. Returns the process exit code per
/// the parser CLI's documented behavior.
pub fn run_parser<W: Write, E: Write>(mut output: W, mut err_out: E, tokens_path: &Path) -> std::io::Result<i32> {
    let text = match std::fs::read_to_string(tokens_path) {
        Ok(text) => text,
        Err(_) => {
            writeln!(err_out, "Error: could not open '{}'.", tokens_path.display())?;
            return Ok(1);
        }
    };

    if text.trim().is_empty() {
        writeln!(err_out, "Error: '{}' is empty; nothing to parse.", tokens_path.display())?;
        return Ok(1);
    }

    let (tokens, warnings) = cfe_core::load_tokens(&text);
    for warning in &warnings {
        tracing::warn!("{}", warning.as_diagnostic());
    }

    match cfe_par::parse(tokens) {
        Ok(tree) => {
            writeln!(output, "Program is syntactically valid.")?;
            write!(output, "{}", cfe_par::render_tree(&tree))?;
            Ok(0)
        }
        Err(err) => {
            writeln!(err_out, "{err}")?;
            writeln!(err_out, "Program has one or more syntax errors.")?;
            Ok(1)
        }
    }
}
