//! # apigen
//!
//! **apigen** generates HTTP request handling code from annotated Rust
//! source. Business logic stays in plain methods; the generator writes the
//! validation, authentication and dispatch around them.
//!
//! ## Overview
//!
//! Two kinds of annotation drive generation:
//!
//! - **Field tags** on parameter struct fields, a small comma separated
//!   rule language read from doc comments:
//!   `/// apivalidator:required,min=3,max=16`
//! - **Endpoint annotations** on methods of API types, a JSON payload:
//!   `/// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}`
//!
//! For every parameter struct the generator writes a validator that reads
//! the struct's fields from the request's query parameters. For every
//! annotated method it writes a handler that checks the auth header, runs
//! the validator, calls the method and writes a JSON envelope. Each API type
//! gets a `serve_http` method dispatching on the exact URL path.
//!
//! ## Architecture
//!
//! - **[`scan`]** - parses the input with `syn` and recovers field rules and routes
//! - **[`generator`]** - renders validators, handlers and dispatch tables with Askama
//! - **[`runtime`]** - request, response and error types the generated code uses
//! - **[`linter`]** - reports annotations that produce dead or always-failing code
//! - **[`config`]** - markers, auth credential and import paths
//! - **[`cli`]** - the `apigen` binary
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(apigen)
//!     participant Scan as scan::scan_source
//!     participant Gen as generator::render
//!     participant Fmt as generator::format_source
//!     participant FS as File System
//!
//!     CLI->>Scan: scan_path("src/api.rs")
//!     Scan->>Scan: collect parameter structs and routes
//!     Scan->>Scan: resolve each route's parameter struct
//!     Scan-->>CLI: ScannedFile
//!     CLI->>Gen: render(&scanned, &config)
//!     Gen->>Gen: header, validators, impl blocks
//!     Gen->>Fmt: format_source(code)
//!     Fmt-->>CLI: formatted code
//!     CLI->>FS: write api_handlers.rs
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // src/api.rs
//! use apigen::runtime::ApiError;
//!
//! pub struct MyApi;
//!
//! #[derive(Default)]
//! pub struct CreateParams {
//!     /// apivalidator:required,min=3
//!     pub login: String,
//!     /// apivalidator:enum=user|admin,default=user
//!     pub status: String,
//! }
//!
//! impl MyApi {
//!     /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
//!     pub fn create(&self, params: CreateParams) -> Result<u64, ApiError> {
//!         Ok(42)
//!     }
//! }
//!
//! mod api_handlers;
//! ```
//!
//! ```bash
//! apigen generate src/api.rs src/api/api_handlers.rs
//! ```
//!
//! The generated `MyApi::serve_http(&self, &mut ResponseWriter, &Request)`
//! answers `/user/create?login=bob` carrying `X-Auth: 100500` with
//! `{"error":"","response":42}`.

pub mod casing;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod runtime;
pub mod scan;

pub use config::GeneratorConfig;
pub use error::GenError;
pub use generator::{generate, generate_file, generate_source};
pub use scan::{scan_path, scan_source, ScannedFile};
