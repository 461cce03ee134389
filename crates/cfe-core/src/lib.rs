//! cfe-core - Shared Types for the C99-Subset Front End
//!
//! This crate holds the types that `cfe-lex` and `cfe-par` both need: the
//! `Token`/`TokenClass` vocabulary, the on-disk interchange format that
//! decouples the scanner from the parser, and a small `Diagnostic` type used
//! for the interchange format's non-fatal warning channel.
//!
//! Nothing in this crate performs I/O or logging on its own; `cfe-drv` owns
//! presentation (see its module docs).

mod diagnostic;
mod interchange;
mod token;

pub use diagnostic::{Diagnostic, Level};
pub use interchange::{load_tokens, render_tokens, InterchangeWarning};
pub use token::{Token, TokenClass};
