#![deny(missing_docs)]

//! # Operations
//!
//! Operations, responses and their payload representations.

use crate::service::{
    Example, ModelSpecification, ParameterStyle, RequestParameter, SecurityReference,
    VendorExtension,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// HTTP methods known to the service model.
///
/// `Connect` exists for completeness of handler metadata; the output
/// document cannot express it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// HEAD
    Head,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// TRACE
    Trace,
    /// CONNECT
    Connect,
}

impl HttpMethod {
    /// Upper case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header sent with a response or an encoded multipart property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether required.
    #[serde(default)]
    pub required: Option<bool>,
    /// Value shape.
    #[serde(default)]
    pub model: Option<ModelSpecification>,
    /// Serialization style.
    #[serde(default)]
    pub style: Option<ParameterStyle>,
    /// Explode flag.
    #[serde(default)]
    pub explode: Option<bool>,
}

/// Encoding of a single property inside a multipart or form body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoding {
    /// The property this encoding applies to.
    pub property_ref: String,
    /// Content type of the property.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Serialization style.
    #[serde(default)]
    pub style: Option<ParameterStyle>,
    /// Explode flag.
    #[serde(default)]
    pub explode: Option<bool>,
    /// Allow reserved characters.
    #[serde(default)]
    pub allow_reserved: Option<bool>,
    /// Additional part headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Vendor extensions.
    #[serde(default)]
    pub extensions: Vec<VendorExtension>,
}

/// A payload in one media type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    /// Media type, e.g. `application/json`.
    pub media_type: String,
    /// Payload shape.
    #[serde(default)]
    pub model: Option<ModelSpecification>,
    /// Per-property encodings.
    #[serde(default)]
    pub encodings: Vec<Encoding>,
}

/// A response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Status code, e.g. `"200"`.
    pub code: String,
    /// Whether this is the `default` response.
    #[serde(default)]
    pub is_default: bool,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Response headers.
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Payload representations.
    #[serde(default)]
    pub representations: Vec<Representation>,
    /// Examples.
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Vendor extensions.
    #[serde(default)]
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Response {
    /// Creates a response with a code and description.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_default: false,
            description: Some(description.into()),
            headers: Vec::new(),
            representations: Vec::new(),
            examples: Vec::new(),
            vendor_extensions: Vec::new(),
        }
    }

    /// Key under which the response is published.
    pub fn response_key(&self) -> &str {
        if self.is_default {
            "default"
        } else {
            &self.code
        }
    }
}

/// The request body assembled from body, form and form-data parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestBody {
    /// Description.
    pub description: Option<String>,
    /// Whether required.
    pub required: Option<bool>,
    /// Payload representations.
    pub representations: Vec<Representation>,
    /// Vendor extensions.
    pub extensions: Vec<VendorExtension>,
}

/// A finished operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// HTTP method.
    pub method: HttpMethod,
    /// Summary.
    pub summary: Option<String>,
    /// Notes (description).
    pub notes: Option<String>,
    /// Unique operation id.
    pub unique_id: Option<String>,
    /// Display position.
    pub position: i32,
    /// Produced media types.
    pub produces: BTreeSet<String>,
    /// Consumed media types.
    pub consumes: BTreeSet<String>,
    /// Tags.
    pub tags: BTreeSet<String>,
    /// Security references.
    pub security_references: Vec<SecurityReference>,
    /// Non-body parameters, in precedence order.
    pub request_parameters: Vec<RequestParameter>,
    /// Request body.
    pub body: Option<RequestBody>,
    /// Responses, ordered by response key.
    pub responses: Vec<Response>,
    /// Whether deprecated.
    pub deprecated: Option<bool>,
    /// Vendor extensions.
    pub vendor_extensions: Vec<VendorExtension>,
}
