#![deny(missing_docs)]

//! # Plugin SPI
//!
//! Documentation types, the extension point contracts and the per-unit
//! build contexts that plugins read from and write into.

pub mod contexts;
pub mod documentation_type;
pub mod handler;
pub mod model_names;
pub mod plugins;

pub use contexts::{
    ApiListingContext, DocumentationContext, ModelRegistrationContext, OperationContext,
    ParameterContext, PathContext, ResponseContext,
};
pub use documentation_type::DocumentationType;
pub use handler::{ApiSource, ParameterDescriptor, RequestHandler};
pub use model_names::ModelNamesRegistry;
pub use plugins::{
    ApiListingBuilderPlugin, ApiListingScannerPlugin, DefaultsProviderPlugin, ExtensionKind,
    ModelNamesRegistryFactoryPlugin, OperationBuilderPlugin, ParameterBuilderPlugin, PathDecorator,
    Plugin, ResponseBuilderPlugin,
};
