//! # Parameter Style Resolution
//!
//! Decides style, explode and collection format of a parameter from its
//! location and the shape of its model.
//!
//! | model      | style                                   | collection format         |
//! |------------|-----------------------------------------|---------------------------|
//! | scalar     | location default                        | absent                    |
//! | collection | explicit (if valid here) or default     | `multi` if exploded, else `csv` |
//! | free-form  | explicit (if valid here) or default     | absent                    |
//!
//! Location defaults are `form` for query and cookie, `simple` for path and
//! header. Cookies only ever resolve to `form`.

use crate::service::{
    CollectionFormat, ContentSpecification, ModelSpecification, ParameterSpecification,
    ParameterStyle, ParameterType, SimpleParameterSpecification,
};

/// Input of a [`ParameterSpecificationProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpecificationContext {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    pub in_: ParameterType,
    /// Simple branch as declared by plugins.
    pub simple: SimpleParameterSpecification,
    /// Content branch as declared by plugins.
    pub content: Option<ContentSpecification>,
}

/// Computes the resolved specification of a parameter.
pub trait ParameterSpecificationProvider {
    /// Resolves the specification for one parameter.
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification;
}

/// Shared decision table. `valid` lists explicit styles the location keeps
/// for non-scalar models.
fn resolve_simple(
    declared: &SimpleParameterSpecification,
    default_style: ParameterStyle,
    valid: &[ParameterStyle],
) -> SimpleParameterSpecification {
    let is_scalar = matches!(declared.model, Some(ModelSpecification::Scalar(_)));
    let style = match declared.style {
        Some(style) if !is_scalar && valid.contains(&style) => style,
        _ => default_style,
    };
    let mut resolved = SimpleParameterSpecification {
        style: Some(style),
        explode: declared.explode,
        ..declared.clone()
    };
    resolved.collection_format = match &declared.model {
        Some(ModelSpecification::Collection(_)) => Some(if resolved.null_safe_is_explode() {
            CollectionFormat::Multi
        } else {
            CollectionFormat::Csv
        }),
        _ => None,
    };
    resolved
}

fn with_content(
    simple: SimpleParameterSpecification,
    context: &ParameterSpecificationContext,
) -> ParameterSpecification {
    ParameterSpecification {
        query: Some(simple),
        content: context.content.clone(),
    }
}

/// Query string parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParameterSpecificationProvider;

impl ParameterSpecificationProvider for QueryParameterSpecificationProvider {
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification {
        let simple = resolve_simple(
            &context.simple,
            ParameterStyle::Form,
            &[
                ParameterStyle::Form,
                ParameterStyle::SpaceDelimited,
                ParameterStyle::PipeDelimited,
                ParameterStyle::DeepObject,
            ],
        );
        with_content(simple, context)
    }
}

/// Cookie parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieParameterSpecificationProvider;

impl ParameterSpecificationProvider for CookieParameterSpecificationProvider {
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification {
        let simple = resolve_simple(&context.simple, ParameterStyle::Form, &[]);
        with_content(simple, context)
    }
}

/// Path parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathParameterSpecificationProvider;

impl ParameterSpecificationProvider for PathParameterSpecificationProvider {
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification {
        let simple = resolve_simple(
            &context.simple,
            ParameterStyle::Simple,
            &[
                ParameterStyle::Simple,
                ParameterStyle::Matrix,
                ParameterStyle::Label,
            ],
        );
        with_content(simple, context)
    }
}

/// Header parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderParameterSpecificationProvider;

impl ParameterSpecificationProvider for HeaderParameterSpecificationProvider {
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification {
        let simple = resolve_simple(&context.simple, ParameterStyle::Simple, &[]);
        with_content(simple, context)
    }
}

/// Dispatches on the parameter location.
///
/// Body, form and form-data parameters are serialized by media type, so
/// both branches pass through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct RootParameterSpecificationProvider;

impl ParameterSpecificationProvider for RootParameterSpecificationProvider {
    fn create(&self, context: &ParameterSpecificationContext) -> ParameterSpecification {
        match context.in_ {
            ParameterType::Query => QueryParameterSpecificationProvider.create(context),
            ParameterType::Cookie => CookieParameterSpecificationProvider.create(context),
            ParameterType::Path => PathParameterSpecificationProvider.create(context),
            ParameterType::Header => HeaderParameterSpecificationProvider.create(context),
            ParameterType::Body | ParameterType::Form | ParameterType::FormData => {
                ParameterSpecification {
                    query: Some(context.simple.clone()),
                    content: context.content.clone(),
                }
            }
        }
    }
}
