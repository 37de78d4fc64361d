//! # Annotation Linter
//!
//! Reports annotations that generate valid but suspicious code. Nothing
//! here blocks generation; the generator emits exactly what the annotations
//! say, dead code included.
//!
//! ## Checks Performed
//!
//! 1. **required_with_default** - a required field's default can never apply
//! 2. **default_not_in_enum** - the default is rejected by the field's own enum
//! 3. **min_exceeds_max** - no non-empty value can pass both limits
//! 4. **invalid_limit** - a `min`/`max` value that is not a number was dropped
//! 5. **ignored_tag_token** - unknown tag keys were dropped
//! 6. **unsupported_field_type** - tagged field is not a `String`
//! 7. **duplicate_route** - a URL is registered twice; the second arm is unreachable
//! 8. **short_url** - URL has fewer than two segments
//! 9. **non_api_container** - endpoints on a type whose name lacks `api`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apigen::linter::{lint_path, print_lint_issues};
//!
//! let issues = lint_path(Path::new("src/api.rs"), &GeneratorConfig::default())?;
//! print_lint_issues(&issues);
//! ```

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::scan::{is_api_name, scan_path, scan_source, ApiContainer, ParamStruct, ScannedFile};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Generated code will reject requests it was meant to accept
    Error,
    /// Generated code contains dead or unreachable parts
    Warning,
    /// Annotation content was ignored
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in annotated source
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "struct:CreateParams.login", "route:MyApi /user/create")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "duplicate_route")
    pub kind: String,
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint the annotations of a source file
pub fn lint_path(path: &Path, config: &GeneratorConfig) -> Result<Vec<LintIssue>, GenError> {
    Ok(lint_scanned(&scan_path(path, config)?))
}

/// Lint the annotations of source text
pub fn lint_source(source: &str, config: &GeneratorConfig) -> Result<Vec<LintIssue>, GenError> {
    Ok(lint_scanned(&scan_source(source, config)?))
}

/// Lint already scanned metadata
pub fn lint_scanned(scanned: &ScannedFile) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    for params in &scanned.param_structs {
        lint_param_struct(&mut issues, params);
    }
    for container in &scanned.containers {
        lint_container(&mut issues, container);
    }
    issues
}

fn lint_param_struct(issues: &mut Vec<LintIssue>, params: &ParamStruct) {
    for field in &params.fields {
        let rule = &field.rule;
        let location = format!("struct:{}.{}", params.name, rule.field_name);

        if rule.has_dead_default() {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "required_with_default",
                    format!(
                        "`{}` is required, so its default is never applied",
                        rule.param_name
                    ),
                )
                .with_suggestion("Drop either `required` or `default`"),
            );
        }

        if let Some(default) = &rule.default_value {
            if !rule.enum_values.is_empty() && !rule.enum_values.contains(default) {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Error,
                        "default_not_in_enum",
                        format!(
                            "default `{default}` is not one of [{}]; requests omitting `{}` are always rejected",
                            rule.enum_values.join(", "),
                            rule.param_name
                        ),
                    )
                    .with_suggestion("Add the default to the enum"),
                );
            }
        }

        if let (Some(min), Some(max)) = (rule.min, rule.max) {
            if min > max {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "min_exceeds_max",
                    format!("min={min} exceeds max={max}; only an empty value can pass"),
                ));
            }
        }

        for token in &field.ignored {
            let issue = if token.starts_with("min=") || token.starts_with("max=") {
                LintIssue::new(
                    &location,
                    LintSeverity::Info,
                    "invalid_limit",
                    format!("`{token}` is not a length; the limit is ignored"),
                )
            } else {
                LintIssue::new(
                    &location,
                    LintSeverity::Info,
                    "ignored_tag_token",
                    format!("tag token `{token}` was ignored"),
                )
            };
            issues.push(issue);
        }

        if !field.is_string {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "unsupported_field_type",
                    "validated fields are read as `String`",
                )
                .with_suggestion("Declare the field as `String`"),
            );
        }
    }
}

fn lint_container(issues: &mut Vec<LintIssue>, container: &ApiContainer) {
    if !container.routes.is_empty() && !is_api_name(&container.name) {
        issues.push(LintIssue::new(
            format!("type:{}", container.name),
            LintSeverity::Warning,
            "non_api_container",
            format!(
                "`{}` has endpoints but its name does not contain `api`",
                container.name
            ),
        ));
    }

    let mut seen = HashSet::new();
    for route in &container.routes {
        let location = format!("route:{} {}", container.name, route.url);
        if !seen.insert(route.url.as_str()) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Warning,
                "duplicate_route",
                format!(
                    "`{}` is registered more than once; `{}` is unreachable",
                    route.url, route.method
                ),
            ));
        }
        if route.entity.is_empty() || route.action.is_empty() {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Warning,
                "short_url",
                "URL has fewer than two segments; the handler is named after the method",
            ));
        }
    }
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, title) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{title}");
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}

/// Whether any issue is an error
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}
