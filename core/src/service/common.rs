//! Cross-cutting service model values: vendor extensions, examples, tags,
//! servers and external documentation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A vendor specific extension attached to a service model element.
///
/// Names are published with an `x-` prefix; the prefix is added when
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorExtension {
    /// Extension name, with or without the `x-` prefix.
    pub name: String,
    /// Arbitrary JSON value.
    pub value: JsonValue,
}

impl VendorExtension {
    /// Creates an extension.
    pub fn new(name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named example payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Key under which the example is published.
    pub id: String,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Inline value.
    #[serde(default)]
    pub value: Option<JsonValue>,
    /// URL of an external value.
    #[serde(default)]
    pub external_value: Option<String>,
    /// Media type the example applies to.
    #[serde(default)]
    pub media_type: Option<String>,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}

/// A tag with its description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Display order hint.
    #[serde(default)]
    pub order: i32,
    /// Vendor extensions.
    #[serde(default)]
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Tag {
    /// Creates a tag.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            order: 0,
            vendor_extensions: Vec::new(),
        }
    }
}

/// A server variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    /// Variable name as used in the server URL template.
    pub name: String,
    /// Allowed values; `None` means unrestricted.
    #[serde(default)]
    pub allowed_values: Option<Vec<String>>,
    /// Default value.
    #[serde(default)]
    pub default_value: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}

/// A server the API is reachable at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL, possibly templated.
    pub url: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Template variables; `None` when the URL has none declared.
    #[serde(default)]
    pub variables: Option<Vec<ServerVariable>>,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}

impl Server {
    /// Creates a server with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            variables: None,
            extensions: Vec::new(),
        }
    }
}

/// A link to external documentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    /// Target URL.
    pub url: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}
