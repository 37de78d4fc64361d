//! Field tag grammar.
//!
//! A tag is a comma separated list of directives:
//!
//! ```text
//! required,paramname=full_name,enum=user|moderator|admin,default=user,min=3,max=32
//! ```
//!
//! Parsing is permissive. Unknown keys, tokens without `=`, empty defaults
//! and limits that are not non-negative integers are dropped, leaving the field without that
//! constraint. Dropped tokens are returned so the linter can report them.

use super::types::FieldRule;
use tracing::debug;

/// Result of parsing one field tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub rule: FieldRule,
    /// Tokens that did not contribute to `rule`.
    pub ignored: Vec<String>,
}

/// Parse the tag attached to `field_name`.
pub fn parse_tag(field_name: &str, tag: &str) -> ParsedTag {
    let mut rule = FieldRule::new(field_name);
    let mut ignored = Vec::new();

    for token in tag.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token == "required" {
            rule.required = true;
            continue;
        }
        let Some((key, value)) = token.split_once('=') else {
            debug!(field = field_name, token, "ignoring tag token without value");
            ignored.push(token.to_string());
            continue;
        };
        match key {
            "default" if value.is_empty() => {
                debug!(field = field_name, token, "ignoring empty default");
                ignored.push(token.to_string());
            }
            "default" => rule.default_value = Some(value.to_string()),
            "enum" => rule.enum_values = value.split('|').map(str::to_string).collect(),
            "paramname" => rule.param_name = value.to_string(),
            "min" | "max" => match value.parse::<usize>() {
                Ok(limit) => {
                    let limit = (limit > 0).then_some(limit);
                    if key == "min" {
                        rule.min = limit;
                    } else {
                        rule.max = limit;
                    }
                }
                Err(_) => {
                    debug!(field = field_name, token, "ignoring unparsable limit");
                    ignored.push(token.to_string());
                }
            },
            _ => {
                debug!(field = field_name, key, "ignoring unknown tag key");
                ignored.push(token.to_string());
            }
        }
    }

    ParsedTag { rule, ignored }
}

/// Return the tag carried by a doc line, if the line starts with `marker`.
///
/// The tag may be written bare (`apivalidator:required`) or quoted
/// (`apivalidator:"required"`).
pub fn extract_tag<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.trim().strip_prefix(marker)?.trim();
    let unquoted = rest
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .unwrap_or(rest);
    Some(unquoted)
}
