//! Error type for the `cfe-drv` binaries.

use thiserror::Error;

/// Errors the scanner and parser binaries can raise outside of the
/// lexical/syntactic fatals their respective crates already report.
#[derive(Error, Debug)]
pub enum DrvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DrvError>;
