//! `json2ukya` — command-line front-end logic.
//!
//! The binary entry point stays thin; reading the input, parsing it, and
//! translating it all happen here so the behavior is testable without a
//! process boundary.

use crate::error::TranslateError;
use crate::translate::translate;
use serde_json::Value;
use std::io::{self, Read};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Json(serde_json::Error),
    Translate(TranslateError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(e) if e.kind() == io::ErrorKind::NotFound => {
                write!(f, "File not found.")
            }
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Json(e) => write!(f, "JSON syntax error: {e}"),
            CliError::Translate(e) => write!(f, "Translation error: {e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<TranslateError> for CliError {
    fn from(e: TranslateError) -> Self {
        CliError::Translate(e)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Reads the document at `path` (`-` for stdin), translates it, and
/// returns the UKYA text.
pub fn run(path: &str) -> Result<String, CliError> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    convert(&text)
}

/// Translates a JSON document string to UKYA text.
pub fn convert(json: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(translate(&doc)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
