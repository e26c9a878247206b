#![deny(missing_docs)]

//! # Handler Metadata
//!
//! The input contract: fully described request handlers as produced by an
//! external scanner, loadable from YAML or JSON.

use crate::error::AppResult;
use crate::service::{
    Example, HttpMethod, ModelSpecification, ParameterStyle, ParameterType, Representation,
    Response, SecurityReference, VendorExtension,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A declared request parameter before plugins and style resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Name.
    pub name: String,
    /// Location.
    #[serde(rename = "in")]
    pub in_: ParameterType,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether required.
    #[serde(default)]
    pub required: Option<bool>,
    /// Whether deprecated.
    #[serde(default)]
    pub deprecated: Option<bool>,
    /// Hidden from documentation.
    #[serde(default)]
    pub hidden: bool,
    /// Value shape; `None` means free-form.
    #[serde(default)]
    pub model: Option<ModelSpecification>,
    /// Declared style.
    #[serde(default)]
    pub style: Option<ParameterStyle>,
    /// Declared explode flag.
    #[serde(default)]
    pub explode: Option<bool>,
    /// Allow reserved characters.
    #[serde(default)]
    pub allow_reserved: Option<bool>,
    /// Allow empty values.
    #[serde(default)]
    pub allow_empty_value: Option<bool>,
    /// Default value.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Media type governed serialization; present only when declared.
    #[serde(default)]
    pub content: Option<Vec<Representation>>,
    /// Examples.
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Sort precedence.
    #[serde(default)]
    pub order: i32,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}

impl ParameterDescriptor {
    /// Creates a descriptor with the given name, location and model.
    pub fn new(
        name: impl Into<String>,
        in_: ParameterType,
        model: Option<ModelSpecification>,
    ) -> Self {
        Self {
            name: name.into(),
            in_,
            description: None,
            required: None,
            deprecated: None,
            hidden: false,
            model,
            style: None,
            explode: None,
            allow_reserved: None,
            allow_empty_value: None,
            default_value: None,
            content: None,
            examples: Vec::new(),
            order: 0,
            extensions: Vec::new(),
        }
    }
}

/// A request handler with everything needed to document it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestHandler {
    /// Handler (method) name, e.g. `findPets`.
    pub name: String,
    /// Owning resource (controller) name, e.g. `PetController`.
    pub resource: String,
    /// URL patterns the handler is mapped to.
    pub patterns: Vec<String>,
    /// HTTP methods; empty means every documented method.
    #[serde(default)]
    pub methods: Vec<HttpMethod>,
    /// Summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Explicit tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// Declared responses.
    #[serde(default)]
    pub responses: Vec<Response>,
    /// Consumed media types.
    #[serde(default)]
    pub consumes: Vec<String>,
    /// Produced media types.
    #[serde(default)]
    pub produces: Vec<String>,
    /// Whether deprecated.
    #[serde(default)]
    pub deprecated: Option<bool>,
    /// Hidden from documentation.
    #[serde(default)]
    pub hidden: bool,
    /// Display position.
    #[serde(default)]
    pub position: i32,
    /// Security references.
    #[serde(default)]
    pub security_references: Vec<SecurityReference>,
    /// Vendor extensions.
    #[serde(default)]
    pub vendor_extensions: Vec<VendorExtension>,
}

impl RequestHandler {
    /// Methods the handler is documented for. An unrestricted handler is
    /// documented for every method the output format can express.
    pub fn documented_methods(&self) -> Vec<HttpMethod> {
        if self.methods.is_empty() {
            vec![
                HttpMethod::Get,
                HttpMethod::Head,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Patch,
                HttpMethod::Delete,
                HttpMethod::Options,
                HttpMethod::Trace,
            ]
        } else {
            self.methods.clone()
        }
    }
}

/// A set of handlers loaded from a file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiSource {
    /// Handlers in declaration order.
    #[serde(default)]
    pub handlers: Vec<RequestHandler>,
}

impl ApiSource {
    /// Parses a YAML document (JSON is accepted as a YAML subset).
    pub fn from_yaml_str(input: &str) -> AppResult<Self> {
        crate::from_yaml_str(input)
    }

    /// Reads and parses a source file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
