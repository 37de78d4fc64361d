//! # Generator Module
//!
//! Turns scanned metadata into Rust source: one validator per parameter
//! struct and, per API container, one handler per route plus a dispatch
//! function.
//!
//! ## Architecture
//!
//! ```text
//! ScannedFile → Askama templates → text → syn + prettyplease → output file
//! ```
//!
//! Rendering is a pure function of the scanned metadata, so running the
//! generator twice on unchanged input produces byte-identical output.
//!
//! ## Generated Structure
//!
//! ```rust,ignore
//! // Code generated by apigen from api.rs. DO NOT EDIT.
//!
//! use super::*;
//! use apigen::runtime::{ApiError, Envelope, Request, ResponseWriter, StatusCode};
//!
//! pub fn validate_create_params(r: &Request) -> Result<CreateParams, ApiError> { ... }
//!
//! impl MyApi {
//!     pub fn user_create(&self, w: &mut ResponseWriter, r: &Request) { ... }
//!     pub fn serve_http(&self, w: &mut ResponseWriter, r: &Request) { ... }
//! }
//! ```
//!
//! The output is meant to be declared as a child module of the scanned one
//! (`mod api_handlers;`), hence the default `use super::*;`.
//!
//! ## Validation order
//!
//! Each tagged field is read once and checked in a fixed order:
//!
//! 1. **required** rejects an empty value before anything else runs
//! 2. **default** substitutes a value for an empty one
//! 3. **enum** checks membership, so a default is checked too
//! 4. **max** / **min** check the length in characters of a non-empty value
//!
//! ## Templates
//!
//! Templates live in the `templates/` directory:
//!
//! - `header.rs.txt` - `use` block
//! - `validator.rs.txt` - parameter struct validator
//! - `handler.rs.txt` - route handler
//! - `dispatch.rs.txt` - `serve_http` routing table
//! - `container.rs.txt` - `impl` block wrapping handlers and dispatch

mod format;
mod templates;

pub use format::{check_syntax, format_source};
pub use templates::*;

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::scan::{scan_source, ScannedFile};
use std::fs;
use std::path::Path;
use tracing::info;

/// First line of every generated file.
pub fn banner(source_name: &str) -> String {
    format!("// Code generated by apigen from {source_name}. DO NOT EDIT.\n")
}

/// Render the generated code without banner or formatting.
///
/// Validators come first in source order, then one `impl` block per
/// container with routes. Containers without routes emit nothing.
pub fn render(scanned: &ScannedFile, config: &GeneratorConfig) -> Result<String, GenError> {
    let mut out = render_header(config)?;
    for params in &scanned.param_structs {
        out.push_str(&render_validator(params)?);
        out.push('\n');
    }
    for container in scanned.containers.iter().filter(|c| !c.routes.is_empty()) {
        info!(
            container = %container.name,
            routes = container.routes.len(),
            "writing dispatch table"
        );
        out.push_str(&render_container(container, config)?);
        out.push('\n');
    }
    Ok(out)
}

/// Produce the complete generated file for already scanned metadata.
pub fn generate(
    scanned: &ScannedFile,
    source_name: &str,
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let code = render(scanned, config)?;
    let body = if config.format {
        format_source(&code)?
    } else {
        check_syntax(&code)?;
        code
    };
    Ok(format!("{}\n{body}", banner(source_name)))
}

/// Scan `source` and produce the generated file.
pub fn generate_source(
    source: &str,
    source_name: &str,
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let scanned = scan_source(source, config)?;
    generate(&scanned, source_name, config)
}

/// Name used in the banner for a file at `path`.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Generate handlers for the file at `input` without writing them.
pub fn generate_path(input: &Path, config: &GeneratorConfig) -> Result<String, GenError> {
    let source = fs::read_to_string(input).map_err(|e| GenError::io(input, e))?;
    generate_source(&source, &source_name(input), config)
}

/// Generate handlers for the file at `input` and write them to `output`.
///
/// Nothing is written when scanning or rendering fails. Returns the
/// generated text.
pub fn generate_file(
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<String, GenError> {
    let generated = generate_path(input, config)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
    }
    fs::write(output, &generated).map_err(|e| GenError::io(output, e))?;
    info!(input = %input.display(), output = %output.display(), "generated handlers");
    Ok(generated)
}
