//! # CLI Module
//!
//! Command-line interface of the `apigen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Scan an annotated source file and write the generated handlers:
//!
//! ```bash
//! apigen generate src/api.rs src/api/api_handlers.rs
//! ```
//!
//! Options:
//! - `--config <FILE>` - TOML configuration (default: `apigen.toml` beside the input)
//! - `--auth-token <TOKEN>` - credential checked by auth-protected handlers
//! - `--runtime-path <PATH>` - module the generated code imports runtime types from
//! - `--module-path <PATH>` - module holding the scanned declarations
//! - `--no-format` - skip pretty-printing
//! - `--dry-run` - print to stdout instead of writing
//!
//! ### `lint`
//!
//! Report annotations that generate dead or always-failing code:
//!
//! ```bash
//! apigen lint src/api.rs --fail-on-error
//! ```
//!
//! ### `inspect`
//!
//! Print the scanned model as JSON:
//!
//! ```bash
//! apigen inspect src/api.rs
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use apigen::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run_cli(cli)?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands, ConfigArgs};
