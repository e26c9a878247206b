//! # Service Model
//!
//! The framework-neutral description of an API that builder plugins
//! compose and the mappers translate into an output document.

pub mod common;
pub mod documentation;
pub mod model;
pub mod operation;
pub mod parameter;

pub use common::{Example, ExternalDocumentation, Server, ServerVariable, Tag, VendorExtension};
pub use documentation::{
    ApiDescription, ApiInfo, ApiKeyLocation, ApiListing, AuthorizationScope, Contact,
    Documentation, OAuthFlow, OAuthFlowKind, ResourceListing, SecurityReference, SecurityScheme,
};
pub use model::{
    CollectionSpecification, CollectionType, CompoundModelSpecification, MapSpecification,
    ModelKey, ModelSpecification, PropertySpecification, ScalarType,
};
pub use operation::{
    Encoding, Header, HttpMethod, Operation, Representation, RequestBody, Response,
};
pub use parameter::{
    CollectionFormat, ContentSpecification, ParameterSpecification, ParameterStyle,
    ParameterType, RequestParameter, SimpleParameterSpecification,
};
