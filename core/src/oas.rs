//! # OpenAPI Output Document
//!
//! A serde model of the OpenAPI 3.0 document this crate emits. Schema
//! objects are utoipa's; everything else is modelled here so that absent
//! fields stay absent and large subtrees can be shared through `Arc`.

pub mod document;
pub mod paths;
pub mod security;
pub mod styles;

pub use document::{
    Components, Contact, ExternalDocumentation, Info, License, OpenApi, Server, ServerVariable,
    Tag, OPENAPI_VERSION,
};
pub use paths::{
    ApiResponse, Encoding, Example, Header, MediaType, Operation, Parameter, PathItem, Paths,
    RequestBody,
};
pub use security::{
    OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme, SecuritySchemeIn,
    SecuritySchemeType,
};
pub use styles::{EncodingStyle, HeaderStyle, ParameterIn, ParameterStyle};

/// Specification extensions (`x-` keys) of an object.
pub type Extensions = indexmap::IndexMap<String, serde_json::Value>;
