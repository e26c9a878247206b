#![deny(missing_docs)]

//! # Docket Core
//!
//! Plugin pipeline that assembles a service model from request handler
//! metadata and maps it to an OpenAPI 3.0 document.

/// Drafts that plugins fill in.
pub mod builders;

/// Configuration properties.
pub mod config;

/// Per-group configuration.
pub mod docket;

/// Shared error types.
pub mod error;

/// Plugin orchestration.
pub mod manager;

/// Service model to OpenAPI mapping.
pub mod mappers;

/// OpenAPI 3.0 document model.
pub mod oas;

/// Built-in plugins.
pub mod readers;

/// Extension registry.
pub mod registry;

/// Documentation assembly.
pub mod scanners;

/// Service model.
pub mod service;

/// Plugin contracts and contexts.
pub mod spi;

/// Per-request document filters.
pub mod transform;

pub use config::{DocketProperties, DocsProperties};
pub use docket::Docket;
pub use error::{AppError, AppResult};
pub use manager::DocumentationPluginsManager;
pub use mappers::{ServiceModelToOpenApiMapper, StyleEnumMapper};
pub use oas::OpenApi;
pub use registry::{Extension, Plugins};
pub use scanners::{DocumentationCache, DocumentationPluginsBootstrapper};
pub use spi::{ApiSource, DocumentationType, RequestHandler};
pub use transform::{OpenApiDocumentService, RequestContext, TransformationFilters};

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Parses a YAML (or JSON) document whose enum variants are written as
/// single-key maps, such as `model: {scalar: integer}`.
pub fn from_yaml_str<T: DeserializeOwned>(input: &str) -> AppResult<T> {
    let deserializer = serde_yaml::Deserializer::from_str(input);
    Ok(serde_yaml::with::singleton_map_recursive::deserialize(
        deserializer,
    )?)
}

/// Runs the built-in plugins over `source` for every docket the properties
/// describe, and returns a service over the mapped documents.
pub fn document_service(
    source: ApiSource,
    properties: DocsProperties,
) -> AppResult<OpenApiDocumentService> {
    let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
    let cache = DocumentationPluginsBootstrapper::new(manager, source.handlers)
        .bootstrap(properties.into_dockets()?)?;
    OpenApiDocumentService::new(&cache, TransformationFilters::builtin())
}
