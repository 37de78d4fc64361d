//! # Annotation Scanner
//!
//! Recovers endpoint metadata from annotated Rust source.
//!
//! ```text
//! source ─ syn::parse_file ─> declarations ─ scan_file ─> ScannedFile
//! ```
//!
//! Three kinds of declarations matter:
//!
//! - **API containers**: structs whose name contains `api` (any case). Their
//!   inherent methods become routes of one dispatch table.
//! - **Parameter structs**: structs whose name ends with `Params`. Fields
//!   documented with `/// apivalidator:<tag>` get validation rules (see
//!   [`parse_tag`]).
//! - **Endpoints**: methods documented with
//!   `/// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}`.
//!
//! ```rust,ignore
//! pub struct MyApi;
//!
//! #[derive(Default)]
//! pub struct CreateParams {
//!     /// apivalidator:required,min=3
//!     pub login: String,
//! }
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     pub fn create(&self, params: CreateParams) -> Result<User, ApiError> { todo!() }
//! }
//! ```
//!
//! Everything else is skipped. A malformed endpoint payload aborts the scan.

mod scanner;
mod tags;
mod types;

pub use scanner::{is_api_name, is_params_name, scan_file, scan_source};
pub use tags::{extract_tag, parse_tag, ParsedTag};
pub use types::{
    split_url, ApiContainer, FieldRule, ParamStruct, RouteAnnotation, RouteMeta, ScannedFile,
    TaggedField,
};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use std::path::Path;

/// Read and scan a source file.
pub fn scan_path(path: &Path, config: &GeneratorConfig) -> Result<ScannedFile, GenError> {
    let source = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    scan_source(&source, config)
}
