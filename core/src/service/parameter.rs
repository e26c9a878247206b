#![deny(missing_docs)]

//! # Request Parameters
//!
//! Location, serialization style and the two specification branches
//! ("simple" for URL/header/cookie serialization, "content" for media type
//! governed serialization) of a request parameter.

use crate::service::{Example, ModelSpecification, Representation, VendorExtension};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Where a parameter travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// URL query string.
    Query,
    /// HTTP header.
    Header,
    /// URL path segment.
    Path,
    /// Cookie.
    Cookie,
    /// `application/x-www-form-urlencoded` field.
    Form,
    /// Multipart form field.
    FormData,
    /// Request body.
    Body,
}

impl ParameterType {
    /// The `in` value used by the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Query => "query",
            ParameterType::Header => "header",
            ParameterType::Path => "path",
            ParameterType::Cookie => "cookie",
            ParameterType::Form => "form",
            ParameterType::FormData => "formData",
            ParameterType::Body => "body",
        }
    }

    /// Whether the parameter contributes to the request body rather than
    /// the parameter list.
    pub fn is_body(&self) -> bool {
        matches!(
            self,
            ParameterType::Body | ParameterType::Form | ParameterType::FormData
        )
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter serialization style of the service model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterStyle {
    /// Let the location decide.
    #[default]
    Default,
    /// `simple`
    Simple,
    /// `matrix`
    Matrix,
    /// `label`
    Label,
    /// `form`
    Form,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

impl ParameterStyle {
    /// Name as written in OpenAPI documents.
    pub fn value(&self) -> &'static str {
        match self {
            ParameterStyle::Default => "default",
            ParameterStyle::Simple => "simple",
            ParameterStyle::Matrix => "matrix",
            ParameterStyle::Label => "label",
            ParameterStyle::Form => "form",
            ParameterStyle::SpaceDelimited => "spaceDelimited",
            ParameterStyle::PipeDelimited => "pipeDelimited",
            ParameterStyle::DeepObject => "deepObject",
        }
    }
}

/// Resolved array encoding for collection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFormat {
    /// Comma separated.
    Csv,
    /// Space separated.
    Ssv,
    /// Tab separated.
    Tsv,
    /// Pipe separated.
    Pipes,
    /// Repeated key.
    Multi,
}

/// The "simple" branch: URL/header/cookie serialization rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleParameterSpecification {
    /// Value shape.
    pub model: Option<ModelSpecification>,
    /// Serialization style.
    pub style: Option<ParameterStyle>,
    /// Explode flag as declared; `None` means "use the style default".
    pub explode: Option<bool>,
    /// Allow reserved characters.
    pub allow_reserved: Option<bool>,
    /// Allow empty values.
    pub allow_empty_value: Option<bool>,
    /// Resolved collection format.
    pub collection_format: Option<CollectionFormat>,
    /// Default value.
    pub default_value: Option<String>,
}

impl SimpleParameterSpecification {
    /// Explode as it behaves on the wire: the declared value, or the
    /// OpenAPI default for the style (`true` for `form`, otherwise `false`).
    pub fn null_safe_is_explode(&self) -> bool {
        match self.explode {
            Some(explode) => explode,
            None => matches!(self.style, Some(ParameterStyle::Form)),
        }
    }
}

/// The "content" branch: media type governed serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentSpecification {
    /// Representations keyed by media type, in declaration order.
    pub representations: Vec<Representation>,
    /// Declared example payload.
    pub examples: Vec<Example>,
}

/// Both serialization branches of a parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterSpecification {
    /// URL/header/cookie serialization.
    pub query: Option<SimpleParameterSpecification>,
    /// Media type serialization; takes precedence on the wire when present.
    pub content: Option<ContentSpecification>,
}

/// A finished request parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParameter {
    /// Name.
    pub name: String,
    /// Location.
    pub in_: ParameterType,
    /// Description.
    pub description: Option<String>,
    /// Whether required.
    pub required: Option<bool>,
    /// Whether deprecated.
    pub deprecated: Option<bool>,
    /// Hidden from documentation.
    pub hidden: bool,
    /// Resolved specification.
    pub parameter_specification: ParameterSpecification,
    /// Examples.
    pub examples: Vec<Example>,
    /// Sort precedence.
    pub order: i32,
    /// Vendor extensions.
    pub extensions: Vec<VendorExtension>,
}

impl RequestParameter {
    /// Output ordering: (order, name, location).
    pub fn precedence(&self, other: &Self) -> Ordering {
        (self.order, self.name.as_str(), self.in_).cmp(&(
            other.order,
            other.name.as_str(),
            other.in_,
        ))
    }
}
