#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI commands

use crate::cli::{run_cli, Cli, Commands};
use clap::Parser;
use std::fs;

const SOURCE: &str = r#"
pub struct MyApi;

#[derive(Default)]
pub struct CreateParams {
    /// apivalidator:required
    pub login: String,
}

impl MyApi {
    /// apigen:api {"url": "/user/create", "auth": true}
    pub fn create(&self, params: CreateParams) -> Result<String, ApiError> {
        Ok(params.login)
    }
}
"#;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "apigen",
        "generate",
        "api.rs",
        "api_handlers.rs",
        "--auth-token",
        "s3cret",
        "--no-format",
        "--dry-run",
        "--verbose",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Generate {
            input,
            output,
            auth_token,
            no_format,
            dry_run,
            config,
            runtime_path,
            module_path,
        } => {
            assert_eq!(input.to_string_lossy(), "api.rs");
            assert_eq!(output.to_string_lossy(), "api_handlers.rs");
            assert_eq!(auth_token.as_deref(), Some("s3cret"));
            assert!(no_format);
            assert!(dry_run);
            assert!(config.config.is_none());
            assert!(runtime_path.is_none());
            assert!(module_path.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_requires_output() {
    assert!(Cli::try_parse_from(["apigen", "generate", "api.rs"]).is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "apigen",
        "lint",
        "api.rs",
        "--config",
        "custom.toml",
        "--fail-on-error",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            input,
            config,
            fail_on_error,
        } => {
            assert_eq!(input.to_string_lossy(), "api.rs");
            assert_eq!(config.config.unwrap().to_string_lossy(), "custom.toml");
            assert!(fail_on_error);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_inspect_command_parses() {
    let cli = Cli::try_parse_from(["apigen", "inspect", "api.rs"]).unwrap();
    assert!(matches!(cli.command, Commands::Inspect { .. }));
    assert!(!cli.verbose);
}

#[test]
fn test_run_generate_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.rs");
    let output = dir.path().join("out").join("api_handlers.rs");
    fs::write(&input, SOURCE).unwrap();

    let cli = Cli::try_parse_from([
        "apigen",
        "generate",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--runtime-path",
        "crate::rt",
    ])
    .unwrap();
    run_cli(cli).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("// Code generated by apigen from api.rs. DO NOT EDIT.\n"));
    assert!(text.contains("use crate::rt::{"));
    assert!(text.contains("pub fn user_create(&self"));
}

#[test]
fn test_run_generate_reads_config_beside_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.rs");
    let output = dir.path().join("api_handlers.rs");
    fs::write(&input, SOURCE).unwrap();
    fs::write(dir.path().join("apigen.toml"), "auth_header = \"X-Token\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "apigen",
        "generate",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
    ])
    .unwrap();
    run_cli(cli).unwrap();

    assert!(fs::read_to_string(&output)
        .unwrap()
        .contains("r.header(\"X-Token\")"));
}

#[test]
fn test_run_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.rs");
    let output = dir.path().join("api_handlers.rs");
    fs::write(&input, SOURCE).unwrap();

    let cli = Cli::try_parse_from([
        "apigen",
        "generate",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--dry-run",
    ])
    .unwrap();
    run_cli(cli).unwrap();
    assert!(!output.exists());
}

#[test]
fn test_run_lint_fail_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.rs");
    fs::write(
        &input,
        "pub struct SetParams {\n    /// apivalidator:enum=a|b,default=c\n    pub mode: String,\n}\n",
    )
    .unwrap();

    let lenient = Cli::try_parse_from(["apigen", "lint", input.to_str().unwrap()]).unwrap();
    assert!(run_cli(lenient).is_ok());

    let strict =
        Cli::try_parse_from(["apigen", "lint", input.to_str().unwrap(), "--fail-on-error"])
            .unwrap();
    assert!(run_cli(strict).is_err());
}

#[test]
fn test_run_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.rs");
    let cli = Cli::try_parse_from(["apigen", "inspect", input.to_str().unwrap()]).unwrap();
    let err = run_cli(cli).unwrap_err();
    assert!(format!("{err:#}").contains("missing.rs"));
}
