//! # Mappers
//!
//! Translation of the service model into the output document: style enum
//! mapping, schema mapping and the per-entity document mapper.

pub mod openapi;
pub mod schema;
pub mod style;

pub use openapi::{merge_into, ServiceModelToOpenApiMapper};
pub use schema::SchemaMapper;
pub use style::StyleEnumMapper;
