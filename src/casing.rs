//! Identifier derivation for generated code.

use convert_case::{Case, Casing};
use std::collections::HashSet;

/// Convert arbitrary text (struct names, URL segments) into a snake_case
/// Rust identifier.
///
/// Characters that cannot appear in an identifier become `_`, runs of `_`
/// collapse, and a leading digit gets a `_` prefix.
pub fn snake_ident(s: &str) -> String {
    let cased = s.to_case(Case::Snake);
    let mut out = String::with_capacity(cased.len());
    for c in cased.chars() {
        let c = if c.is_ascii_alphanumeric() { c } else { '_' };
        if c == '_' && (out.is_empty() || out.ends_with('_')) {
            continue;
        }
        out.push(c.to_ascii_lowercase());
    }
    while out.ends_with('_') {
        out.pop();
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Name of the validator generated for a parameter struct,
/// e.g. `CreateParams` becomes `validate_create_params`.
pub fn validator_ident(struct_name: &str) -> String {
    format!("validate_{}", snake_ident(struct_name))
}

/// Name of the handler generated for a route, e.g. `user_create` for
/// `/user/create`. Routes without entity and action fall back to the
/// business method's name.
pub fn handler_ident(entity: &str, action: &str, method: &str) -> String {
    let base = snake_ident(&format!("{entity}_{action}"));
    if entity.is_empty() || action.is_empty() || base.is_empty() {
        format!("handle_{}", snake_ident(method))
    } else {
        base
    }
}

/// Return `name`, or `name_N` for the first N that is not in `seen`, and
/// record the result.
pub fn unique_ident(seen: &mut HashSet<String>, name: &str) -> String {
    if seen.insert(name.to_string()) {
        return name.to_string();
    }
    let mut counter = 1;
    loop {
        let candidate = format!("{name}_{counter}");
        if seen.insert(candidate.clone()) {
            tracing::warn!(name, candidate = %candidate, "duplicate handler name");
            return candidate;
        }
        counter += 1;
    }
}

/// Quote `s` as a Rust string literal.
pub fn str_literal(s: &str) -> String {
    format!("{s:?}")
}
