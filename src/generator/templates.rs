use askama::Template;

use crate::casing::{handler_ident, str_literal, unique_ident};
use crate::config::GeneratorConfig;
use crate::scan::{ApiContainer, FieldRule, ParamStruct, RouteMeta};
use std::collections::HashSet;

/// Template data for the `use` block at the top of the generated file.
#[derive(Template)]
#[template(path = "header.rs.txt", escape = "none")]
pub struct HeaderTemplateData {
    /// Module holding the scanned declarations (e.g. `super`)
    pub module_path: String,
    /// Module providing the runtime types
    pub runtime_path: String,
}

/// Checks generated for one tagged field, in emission order
/// required, default, enum, max, min.
///
/// Literals are pre-quoted Rust string literals.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    /// Field identifier
    pub field: String,
    /// Local variable holding the parameter value
    pub local: String,
    /// `let` binding pattern (`mut` only when a default is assigned)
    pub binding: String,
    /// Struct literal entry (`login` or `r: r_value`)
    pub initializer: String,
    pub param_literal: String,
    pub required: bool,
    pub required_message: String,
    pub has_default: bool,
    pub default_literal: String,
    pub has_enum: bool,
    /// Comma separated enum literals, e.g. `"user", "admin"`
    pub enum_literals: String,
    pub enum_message: String,
    pub has_max: bool,
    pub max: usize,
    pub max_message: String,
    pub has_min: bool,
    pub min: usize,
    pub min_message: String,
}

impl FieldCheck {
    pub fn from_rule(rule: &FieldRule) -> Self {
        let param = &rule.param_name;
        let field = rule.field_name.clone();
        // `r` is the validator's request argument.
        let local = if field == "r" {
            "r_value".to_string()
        } else {
            field.clone()
        };
        let initializer = if local == field {
            field.clone()
        } else {
            format!("{field}: {local}")
        };
        let binding = if rule.default_value.is_some() {
            format!("mut {local}")
        } else {
            local.clone()
        };
        let enum_literals = rule
            .enum_values
            .iter()
            .map(|v| str_literal(v))
            .collect::<Vec<_>>()
            .join(", ");

        FieldCheck {
            local,
            binding,
            initializer,
            param_literal: str_literal(param),
            required: rule.required,
            required_message: str_literal(&format!("{param} must not be empty")),
            has_default: rule.default_value.is_some(),
            default_literal: str_literal(rule.default_value.as_deref().unwrap_or_default()),
            has_enum: !rule.enum_values.is_empty(),
            enum_literals,
            enum_message: str_literal(&format!(
                "{param} must be one of [{}]",
                rule.enum_values.join(", ")
            )),
            has_max: rule.max.is_some(),
            max: rule.max.unwrap_or_default(),
            max_message: str_literal(&format!(
                "{param} must be <={}",
                rule.max.unwrap_or_default()
            )),
            has_min: rule.min.is_some(),
            min: rule.min.unwrap_or_default(),
            min_message: str_literal(&format!(
                "{param} must be >={}",
                rule.min.unwrap_or_default()
            )),
            field,
        }
    }
}

/// Template data for one parameter struct validator
#[derive(Template)]
#[template(path = "validator.rs.txt", escape = "none")]
pub struct ValidatorTemplateData {
    /// Validator function name
    pub validator: String,
    /// Parameter struct the validator returns
    pub struct_name: String,
    pub checks: Vec<FieldCheck>,
    /// Fill untagged fields with `..Default::default()`
    pub fill_default: bool,
}

impl ValidatorTemplateData {
    pub fn new(params: &ParamStruct) -> Self {
        ValidatorTemplateData {
            validator: params.validator.clone(),
            struct_name: params.name.clone(),
            checks: params.rules().map(FieldCheck::from_rule).collect(),
            fill_default: params.has_untagged_fields,
        }
    }
}

/// Template data for one route handler
#[derive(Template)]
#[template(path = "handler.rs.txt", escape = "none")]
pub struct HandlerTemplateData {
    /// Handler method name
    pub handler: String,
    pub requires_auth: bool,
    pub auth_header: String,
    pub auth_token: String,
    pub validator: String,
    /// Business method the handler calls
    pub method: String,
    /// `params` or `&params`
    pub params_arg: String,
}

impl HandlerTemplateData {
    pub fn new(route: &RouteMeta, handler: &str, config: &GeneratorConfig) -> Self {
        HandlerTemplateData {
            handler: handler.to_string(),
            requires_auth: route.requires_auth,
            auth_header: str_literal(&config.auth_header),
            auth_token: str_literal(&config.auth_token),
            validator: route.validator.clone(),
            method: route.method.clone(),
            params_arg: if route.params_by_ref {
                "&params".to_string()
            } else {
                "params".to_string()
            },
        }
    }
}

/// One `match` arm of a dispatch function
#[derive(Debug, Clone)]
pub struct DispatchArm {
    pub url_literal: String,
    pub handler: String,
}

/// Template data for a container's `serve_http` dispatch function
#[derive(Template)]
#[template(path = "dispatch.rs.txt", escape = "none")]
pub struct DispatchTemplateData {
    /// Arms in route order; duplicate URLs are kept
    pub arms: Vec<DispatchArm>,
}

/// Template data for a container's `impl` block
#[derive(Template)]
#[template(path = "container.rs.txt", escape = "none")]
pub struct ContainerTemplateData {
    pub name: String,
    /// Rendered handlers
    pub handlers: Vec<String>,
    /// Rendered dispatch function
    pub dispatch: String,
}

/// Render the `use` block.
pub fn render_header(config: &GeneratorConfig) -> Result<String, askama::Error> {
    HeaderTemplateData {
        module_path: config.module_path.clone(),
        runtime_path: config.runtime_path.clone(),
    }
    .render()
}

/// Render the validator of one parameter struct.
pub fn render_validator(params: &ParamStruct) -> Result<String, askama::Error> {
    ValidatorTemplateData::new(params).render()
}

/// Handler names for each route of `container`, in route order.
///
/// Names derive from the URL's entity and action; collisions (with each
/// other, methods already declared on the type, or `serve_http`) get a
/// numeric suffix.
pub fn handler_names(container: &ApiContainer) -> Vec<String> {
    let mut seen: HashSet<String> = container
        .routes
        .iter()
        .map(|r| r.method.clone())
        .chain(container.methods.iter().cloned())
        .collect();
    seen.insert("serve_http".to_string());
    container
        .routes
        .iter()
        .map(|route| {
            let base = handler_ident(&route.entity, &route.action, &route.method);
            unique_ident(&mut seen, &base)
        })
        .collect()
}

/// Render the `impl` block of one container: a handler per route followed
/// by the dispatch function.
pub fn render_container(
    container: &ApiContainer,
    config: &GeneratorConfig,
) -> Result<String, askama::Error> {
    let names = handler_names(container);
    let handlers = container
        .routes
        .iter()
        .zip(&names)
        .map(|(route, name)| HandlerTemplateData::new(route, name, config).render())
        .collect::<Result<Vec<_>, _>>()?;
    let arms = container
        .routes
        .iter()
        .zip(&names)
        .map(|(route, name)| DispatchArm {
            url_literal: str_literal(&route.url),
            handler: name.clone(),
        })
        .collect();
    let dispatch = DispatchTemplateData { arms }.render()?;
    ContainerTemplateData {
        name: container.name.clone(),
        handlers,
        dispatch,
    }
    .render()
}
