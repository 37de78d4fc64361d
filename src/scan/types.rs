use serde::{Deserialize, Serialize};

/// Validation directives for one tagged struct field.
///
/// Built once by [`crate::scan::parse_tag`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// Field identifier exactly as written in the source.
    pub field_name: String,
    /// Query parameter the value is read from.
    pub param_name: String,
    pub required: bool,
    /// Substituted when the parameter is absent or empty.
    pub default_value: Option<String>,
    /// Allowed values, in tag order. Empty means unconstrained.
    pub enum_values: Vec<String>,
    /// Minimum length in characters. Zero or unparsable limits are unset.
    pub min: Option<usize>,
    /// Maximum length in characters. Zero or unparsable limits are unset.
    pub max: Option<usize>,
}

impl FieldRule {
    /// A rule with no constraints, keyed by the lower-cased field name
    /// (raw identifiers lose their `r#`).
    pub fn new(field_name: &str) -> Self {
        FieldRule {
            field_name: field_name.to_string(),
            param_name: field_name.trim_start_matches("r#").to_lowercase(),
            required: false,
            default_value: None,
            enum_values: Vec::new(),
            min: None,
            max: None,
        }
    }

    /// True when the field is both mandatory and defaulted. The default
    /// can never be applied because the required check rejects first.
    pub fn has_dead_default(&self) -> bool {
        self.required && self.default_value.is_some()
    }
}

/// A struct field that carried the validator marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedField {
    pub rule: FieldRule,
    /// Tag tokens the grammar did not understand, kept for the linter.
    pub ignored: Vec<String>,
    /// Whether the field is declared as `String`.
    pub is_string: bool,
}

/// A struct whose name marks it as the decoded input of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamStruct {
    /// Struct identifier, e.g. `CreateParams`.
    pub name: String,
    /// `name` without the `Params` suffix, e.g. `Create`.
    pub method_name: String,
    /// Identifier of the generated validator function.
    pub validator: String,
    pub fields: Vec<TaggedField>,
    /// The struct has fields without tags (or positional fields); the
    /// validator fills them from `Default`.
    pub has_untagged_fields: bool,
}

impl ParamStruct {
    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.fields.iter().map(|f| &f.rule)
    }
}

/// Decoded payload of a method annotation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteAnnotation {
    pub url: String,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub method: String,
}

/// One generated endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    pub url: String,
    pub requires_auth: bool,
    pub http_method: String,
    /// First non-empty URL segment, empty when the URL has fewer than two.
    pub entity: String,
    /// Second non-empty URL segment, empty when the URL has fewer than two.
    pub action: String,
    /// The annotated business method the handler calls.
    pub method: String,
    /// Parameter struct the handler decodes before calling `method`.
    pub params: String,
    /// Validator producing `params`.
    pub validator: String,
    /// The business method borrows its parameter struct.
    pub params_by_ref: bool,
}

impl RouteMeta {
    pub fn new(annotation: RouteAnnotation, method: &str) -> Self {
        let (entity, action) = split_url(&annotation.url);
        RouteMeta {
            url: annotation.url,
            requires_auth: annotation.auth,
            http_method: annotation.method,
            entity,
            action,
            method: method.to_string(),
            params: String::new(),
            validator: String::new(),
            params_by_ref: false,
        }
    }
}

/// Routes grouped under one dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiContainer {
    pub name: String,
    pub routes: Vec<RouteMeta>,
    /// Every inherent method already declared on the type, annotated or
    /// not. Generated handlers must not reuse these names.
    pub methods: Vec<String>,
}

impl ApiContainer {
    pub fn new(name: impl Into<String>) -> Self {
        ApiContainer {
            name: name.into(),
            routes: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// Everything the scanner recovered from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    /// Parameter structs in source order.
    pub param_structs: Vec<ParamStruct>,
    /// API containers in order of first appearance.
    pub containers: Vec<ApiContainer>,
}

impl ScannedFile {
    pub fn param_struct(&self, name: &str) -> Option<&ParamStruct> {
        self.param_structs.iter().find(|p| p.name == name)
    }

    pub fn container(&self, name: &str) -> Option<&ApiContainer> {
        self.containers.iter().find(|c| c.name == name)
    }

    /// Parameter structs referenced by the routes of `container`, each once,
    /// in route order.
    pub fn validators_for(&self, container: &ApiContainer) -> Vec<&ParamStruct> {
        let mut out: Vec<&ParamStruct> = Vec::new();
        for route in &container.routes {
            if out.iter().any(|p| p.name == route.params) {
                continue;
            }
            if let Some(params) = self.param_struct(&route.params) {
                out.push(params);
            }
        }
        out
    }
}

/// Split a route URL into its entity and action segments.
///
/// Empty segments are skipped. URLs with fewer than two segments yield two
/// empty strings.
pub fn split_url(url: &str) -> (String, String) {
    let mut parts = url.split('/').filter(|s| !s.is_empty());
    match (parts.next(), parts.next()) {
        (Some(entity), Some(action)) => (entity.to_string(), action.to_string()),
        _ => (String::new(), String::new()),
    }
}
