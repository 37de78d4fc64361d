use crate::config::GeneratorConfig;
use crate::generator::{generate_file, generate_path};
use crate::linter::{has_errors, lint_path, print_lint_issues};
use crate::scan::scan_path;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for apigen
///
/// Generates request validators, handlers and dispatch tables from
/// annotated Rust source.
#[derive(Debug, Parser)]
#[command(name = "apigen", version)]
#[command(about = "Annotation-driven HTTP handler generator", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that scan a file
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Configuration file (default: apigen.toml beside the input, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available apigen commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate validators, handlers and dispatch tables
    Generate {
        /// Annotated Rust source file
        input: PathBuf,

        /// File to write the generated code to
        output: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Credential auth-protected handlers require
        #[arg(long, env = "APIGEN_AUTH_TOKEN")]
        auth_token: Option<String>,

        /// Module the generated code imports runtime types from
        #[arg(long)]
        runtime_path: Option<String>,

        /// Module holding the scanned declarations, relative to the output
        #[arg(long)]
        module_path: Option<String>,

        /// Skip pretty-printing (the output is still syntax-checked)
        #[arg(long, default_value_t = false)]
        no_format: bool,

        /// Print the generated code instead of writing it
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Report suspicious annotations
    Lint {
        /// Annotated Rust source file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Exit with an error if any error-level issue is found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,
    },
    /// Print the scanned containers, routes and validators as JSON
    Inspect {
        /// Annotated Rust source file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl ConfigArgs {
    fn resolve(&self, input: &Path) -> anyhow::Result<GeneratorConfig> {
        GeneratorConfig::discover(input, self.config.as_deref())
            .with_context(|| format!("Failed to load configuration for {}", input.display()))
    }
}

/// Execute the CLI command
///
/// # Errors
///
/// Returns an error if scanning, rendering or writing fails, or if `lint
/// --fail-on-error` finds error-level issues.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            auth_token,
            runtime_path,
            module_path,
            no_format,
            dry_run,
        } => {
            let mut config = config.resolve(&input)?;
            if let Some(token) = auth_token.filter(|t| !t.is_empty()) {
                config.auth_token = token;
            }
            if let Some(path) = runtime_path {
                config.runtime_path = path;
            }
            if let Some(path) = module_path {
                config.module_path = path;
            }
            if no_format {
                config.format = false;
            }

            if dry_run {
                let generated = generate_path(&input, &config)
                    .with_context(|| format!("Failed to generate from {}", input.display()))?;
                print!("{generated}");
            } else {
                generate_file(&input, &output, &config)
                    .with_context(|| format!("Failed to generate from {}", input.display()))?;
                println!("✅ Generated {}", output.display());
            }
            Ok(())
        }
        Commands::Lint {
            input,
            config,
            fail_on_error,
        } => {
            let config = config.resolve(&input)?;
            let issues = lint_path(&input, &config)
                .with_context(|| format!("Failed to lint {}", input.display()))?;
            info!(issues = issues.len(), "lint finished");
            print_lint_issues(&issues);
            if fail_on_error && has_errors(&issues) {
                bail!("lint found errors in {}", input.display());
            }
            Ok(())
        }
        Commands::Inspect { input, config } => {
            let config = config.resolve(&input)?;
            let scanned = scan_path(&input, &config)
                .with_context(|| format!("Failed to scan {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&scanned)?);
            Ok(())
        }
    }
}
