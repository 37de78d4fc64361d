//! Errors raised while scanning a source file or rendering its handlers.
//!
//! Only the conditions that must abort generation live here. Declarations
//! without annotations and malformed field tags are not errors: they are
//! skipped (and logged) by the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal generation error.
#[derive(Debug, Error)]
pub enum GenError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid Rust.
    #[error("failed to parse input source: {0}")]
    Parse(#[from] syn::Error),

    /// A method carries the API marker but its payload cannot be decoded.
    #[error("invalid API annotation on method `{method}`: {reason}")]
    Annotation { method: String, reason: String },

    /// No parameter struct could be matched to an annotated method.
    #[error("no parameter struct found for method `{method}` (action `{action}`)")]
    UnknownParams { method: String, action: String },

    /// A template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// The rendered output is not valid Rust. Indicates a bad template or
    /// an identifier the casing helpers could not sanitize.
    #[error("generated code does not parse: {0}")]
    GeneratedSyntax(String),

    /// The configuration file could not be read or decoded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
