use crate::error::GenError;

/// Parse generated code and pretty-print it.
///
/// Comments are not preserved. A parse failure means the generator emitted
/// invalid Rust and is reported as [`GenError::GeneratedSyntax`].
pub fn format_source(code: &str) -> Result<String, GenError> {
    let file = check_syntax(code)?;
    Ok(prettyplease::unparse(&file))
}

/// Verify that `code` is a syntactically valid Rust file.
pub fn check_syntax(code: &str) -> Result<syn::File, GenError> {
    syn::parse_file(code).map_err(|e| GenError::GeneratedSyntax(e.to_string()))
}
