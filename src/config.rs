//! # Generator Configuration
//!
//! Settings that shape the generated code: the annotation markers the
//! scanner looks for, the credential auth-protected handlers check, and the
//! paths the generated file imports from.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`GeneratorConfig::default`])
//! 2. A TOML file: `--config <FILE>`, or `apigen.toml` next to the input
//! 3. Environment variables (`APIGEN_AUTH_TOKEN`)
//! 4. Command-line flags
//!
//! ## Example
//!
//! ```toml
//! auth_token = "s3cret"
//! runtime_path = "crate::http_runtime"
//! format = true
//! ```

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up next to the input when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "apigen.toml";

/// Code generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Doc-comment prefix marking a method as an endpoint.
    pub api_marker: String,
    /// Doc-comment prefix carrying a field's validation tag.
    pub validator_marker: String,
    /// Header checked by auth-protected handlers.
    pub auth_header: String,
    /// Credential the auth header must carry.
    pub auth_token: String,
    /// Module providing `Request`, `ResponseWriter`, `ApiError`, `Envelope`
    /// and `StatusCode` to the generated code.
    pub runtime_path: String,
    /// Module holding the scanned declarations, relative to the generated file.
    pub module_path: String,
    /// Pretty-print the output.
    pub format: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            api_marker: "apigen:api".to_string(),
            validator_marker: "apivalidator:".to_string(),
            auth_header: "X-Auth".to_string(),
            auth_token: "100500".to_string(),
            runtime_path: "apigen::runtime".to_string(),
            module_path: "super".to_string(),
            format: true,
        }
    }
}

impl GeneratorConfig {
    /// Decode a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GenError> {
        toml::from_str(content).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Read and decode a TOML file.
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        Self::from_toml_str(&content)
            .map_err(|e| GenError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolve the configuration for `input`: the explicit file if given,
    /// otherwise `apigen.toml` beside the input when it exists, otherwise the
    /// defaults. Environment overrides are applied last.
    pub fn discover(input: &Path, explicit: Option<&Path>) -> Result<Self, GenError> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let beside = input
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .join(CONFIG_FILE_NAME);
                beside.is_file().then_some(beside)
            }
        };
        let config = match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load(&path)?
            }
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply `APIGEN_AUTH_TOKEN` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = env::var("APIGEN_AUTH_TOKEN") {
            if !token.is_empty() {
                self.auth_token = token;
            }
        }
        self
    }
}
