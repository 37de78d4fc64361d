use super::tags::{extract_tag, parse_tag};
use super::types::{
    ApiContainer, ParamStruct, RouteAnnotation, RouteMeta, ScannedFile, TaggedField,
};
use crate::casing::validator_ident;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use std::collections::HashMap;
use syn::{Attribute, Expr, ExprLit, Fields, FnArg, ImplItem, Item, Lit, Meta, Type};
use tracing::{debug, info, warn};

/// Suffix identifying parameter structs.
const PARAMS_MARKER: &str = "Params";

/// Parse `source` and scan its top-level declarations.
pub fn scan_source(source: &str, config: &GeneratorConfig) -> Result<ScannedFile, GenError> {
    let file = syn::parse_file(source)?;
    scan_file(&file, config)
}

/// Scan a parsed file.
///
/// Structs and inherent impl blocks are visited in source order. Routes are
/// attached to their parameter structs once every struct has been seen, so a
/// method may precede the struct it takes.
pub fn scan_file(file: &syn::File, config: &GeneratorConfig) -> Result<ScannedFile, GenError> {
    let mut scanned = ScannedFile::default();
    let mut param_types: Vec<Vec<ParamArg>> = Vec::new();
    let mut inherent: HashMap<String, Vec<String>> = HashMap::new();

    for item in &file.items {
        match item {
            Item::Struct(item) => scan_struct(item, config, &mut scanned),
            Item::Impl(item) => {
                scan_impl(item, config, &mut scanned, &mut param_types, &mut inherent)?
            }
            Item::Fn(item) => {
                if has_marker(&item.attrs, &config.api_marker) {
                    warn!(
                        function = %item.sig.ident,
                        "skipping annotated free function, endpoints must be methods"
                    );
                }
            }
            _ => {}
        }
    }

    resolve_params(&mut scanned, &param_types)?;
    for container in &mut scanned.containers {
        container.methods = inherent.remove(&container.name).unwrap_or_default();
    }
    Ok(scanned)
}

/// Whether a type name marks an API container.
pub fn is_api_name(name: &str) -> bool {
    name.to_lowercase().contains("api")
}

/// Whether a type name marks a parameter struct: it ends with `Params`
/// and has something before it.
pub fn is_params_name(name: &str) -> bool {
    name.len() > PARAMS_MARKER.len() && name.ends_with(PARAMS_MARKER)
}

fn scan_struct(item: &syn::ItemStruct, config: &GeneratorConfig, scanned: &mut ScannedFile) {
    let name = item.ident.to_string();
    let is_api = is_api_name(&name);
    if is_api {
        container_index(&mut scanned.containers, &name);
    }
    if !is_params_name(&name) {
        if !is_api {
            debug!(name = %name, "skipping struct, neither API nor parameters");
        }
        return;
    }

    info!(name = %name, "creating validator");
    let mut fields = Vec::new();
    let mut has_untagged_fields = false;
    match &item.fields {
        Fields::Named(named) => {
            for field in &named.named {
                let Some(ident) = &field.ident else { continue };
                let tag = doc_lines(&field.attrs)
                    .iter()
                    .find_map(|line| extract_tag(line, &config.validator_marker).map(str::to_string));
                match tag {
                    Some(tag) => {
                        let parsed = parse_tag(&ident.to_string(), &tag);
                        fields.push(TaggedField {
                            rule: parsed.rule,
                            ignored: parsed.ignored,
                            is_string: is_string_type(&field.ty),
                        });
                    }
                    None => {
                        debug!(name = %name, field = %ident, "field has no validator tag");
                        has_untagged_fields = true;
                    }
                }
            }
        }
        Fields::Unnamed(unnamed) => has_untagged_fields = !unnamed.unnamed.is_empty(),
        Fields::Unit => {}
    }

    let method_name = name.strip_suffix(PARAMS_MARKER).unwrap_or(&name).to_string();
    scanned.param_structs.push(ParamStruct {
        validator: validator_ident(&name),
        method_name,
        name,
        fields,
        has_untagged_fields,
    });
}

fn scan_impl(
    item: &syn::ItemImpl,
    config: &GeneratorConfig,
    scanned: &mut ScannedFile,
    param_types: &mut Vec<Vec<ParamArg>>,
    inherent: &mut HashMap<String, Vec<String>>,
) -> Result<(), GenError> {
    if item.trait_.is_some() {
        return Ok(());
    }
    let Some(self_name) = type_name(&item.self_ty) else {
        return Ok(());
    };

    for impl_item in &item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let method_name = method.sig.ident.to_string();
        inherent
            .entry(self_name.clone())
            .or_default()
            .push(method_name.clone());
        let Some(payload) = annotation_payload(&method.attrs, &config.api_marker, &method_name)?
        else {
            debug!(method = %method_name, "skipping method without API annotation");
            continue;
        };
        let annotation: RouteAnnotation =
            serde_json::from_str(&payload).map_err(|e| GenError::Annotation {
                method: method_name.clone(),
                reason: e.to_string(),
            })?;
        let mut route = RouteMeta::new(annotation, &method_name);
        let arg = first_arg(&method.sig);
        route.params_by_ref = arg.by_ref;

        if !is_api_name(&self_name) {
            warn!(
                container = %self_name,
                method = %method_name,
                "annotated method on a type whose name does not contain `api`"
            );
        }
        info!(
            container = %self_name,
            entity = %route.entity,
            action = %route.action,
            "creating handler"
        );

        let index = container_index(&mut scanned.containers, &self_name);
        if param_types.len() <= index {
            param_types.resize_with(index + 1, Vec::new);
        }
        param_types[index].push(arg);
        scanned.containers[index].routes.push(route);
    }
    Ok(())
}

/// Attach each route to its parameter struct: the type of the method's
/// argument when it names one, otherwise the struct registered for the
/// route's action.
fn resolve_params(
    scanned: &mut ScannedFile,
    param_types: &[Vec<ParamArg>],
) -> Result<(), GenError> {
    let ScannedFile {
        param_structs,
        containers,
    } = scanned;

    let mut by_action: HashMap<String, &ParamStruct> = HashMap::new();
    for params in param_structs.iter() {
        by_action
            .entry(params.method_name.to_lowercase())
            .or_insert(params);
    }

    for (index, container) in containers.iter_mut().enumerate() {
        for (slot, route) in container.routes.iter_mut().enumerate() {
            let declared = param_types
                .get(index)
                .and_then(|types| types.get(slot))
                .and_then(|arg| arg.type_name.as_deref())
                .and_then(|ty| param_structs.iter().find(|p| p.name == ty));
            let params = declared
                .or_else(|| by_action.get(&route.action.to_lowercase()).copied())
                .ok_or_else(|| GenError::UnknownParams {
                    method: route.method.clone(),
                    action: route.action.clone(),
                })?;
            route.params = params.name.clone();
            route.validator = params.validator.clone();
        }
    }
    Ok(())
}

fn container_index(containers: &mut Vec<ApiContainer>, name: &str) -> usize {
    if let Some(index) = containers.iter().position(|c| c.name == name) {
        return index;
    }
    debug!(name, "opening API container");
    containers.push(ApiContainer::new(name));
    containers.len() - 1
}

/// Doc comment lines, one per `///` line, without the leading space.
fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|doc| doc.lines().map(|l| l.trim().to_string()).collect::<Vec<_>>())
        .collect()
}

fn marker_rest<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('{'))
        .then_some(rest)
}

fn has_marker(attrs: &[Attribute], marker: &str) -> bool {
    doc_lines(attrs)
        .iter()
        .any(|line| marker_rest(line, marker).is_some())
}

/// JSON payload of the first doc line carrying `marker`. A marker line
/// without a payload is an error.
fn annotation_payload(
    attrs: &[Attribute],
    marker: &str,
    method: &str,
) -> Result<Option<String>, GenError> {
    for line in doc_lines(attrs) {
        let Some(rest) = marker_rest(&line, marker) else {
            continue;
        };
        return match rest.find('{') {
            Some(start) => Ok(Some(rest[start..].trim().to_string())),
            None => Err(GenError::Annotation {
                method: method.to_string(),
                reason: "missing JSON payload".to_string(),
            }),
        };
    }
    Ok(None)
}

fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(p) if p.qself.is_none() => {
            p.path.segments.last().map(|s| s.ident.to_string())
        }
        Type::Reference(r) => type_name(&r.elem),
        Type::Paren(p) => type_name(&p.elem),
        _ => None,
    }
}

/// First non-receiver argument of an endpoint method.
#[derive(Debug, Default)]
struct ParamArg {
    type_name: Option<String>,
    by_ref: bool,
}

fn first_arg(sig: &syn::Signature) -> ParamArg {
    sig.inputs
        .iter()
        .find_map(|arg| match arg {
            FnArg::Typed(pat) => Some(ParamArg {
                type_name: type_name(&pat.ty),
                by_ref: matches!(*pat.ty, Type::Reference(_)),
            }),
            FnArg::Receiver(_) => None,
        })
        .unwrap_or_default()
}

fn is_string_type(ty: &Type) -> bool {
    match ty {
        Type::Path(p) if p.qself.is_none() => p
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == "String" && s.arguments.is_none()),
        _ => false,
    }
}
