//! # Built-in Readers
//!
//! The plugins every table starts with. They copy handler metadata and
//! docket configuration into the drafts; user plugins registered after them
//! can override anything they write.

pub mod defaults;
pub mod listing;
pub mod operation;
pub mod parameter;
pub mod paths;
pub mod response;

pub use defaults::{default_response_messages, DefaultConfiguration, DefaultModelNamesRegistryFactory};
pub use listing::{ApiListingMediaTypeReader, ApiListingTagsReader};
pub use operation::{
    DefaultResponseMessagesReader, OperationDeprecatedReader, OperationExtensionsReader,
    OperationMediaTypeReader, OperationSecurityReader, OperationSummaryReader, OperationTagsReader,
};
pub use parameter::{ParameterDescriptorReader, PathParameterRequiredReader};
pub use paths::{PathMappingDecorator, PathSanitizer};
pub use response::ResponseDescriptionReader;

use crate::registry::Extension;
use std::sync::Arc;

/// Built-in extensions in registration order.
pub fn builtin_extensions() -> Vec<Extension> {
    vec![
        Extension::DefaultsProvider(Arc::new(DefaultConfiguration)),
        Extension::ParameterBuilder(Arc::new(ParameterDescriptorReader)),
        Extension::ParameterBuilder(Arc::new(PathParameterRequiredReader)),
        Extension::ResponseBuilder(Arc::new(ResponseDescriptionReader)),
        Extension::OperationBuilder(Arc::new(OperationSummaryReader)),
        Extension::OperationBuilder(Arc::new(OperationTagsReader)),
        Extension::OperationBuilder(Arc::new(OperationMediaTypeReader)),
        Extension::OperationBuilder(Arc::new(OperationDeprecatedReader)),
        Extension::OperationBuilder(Arc::new(OperationSecurityReader)),
        Extension::OperationBuilder(Arc::new(OperationExtensionsReader)),
        Extension::OperationBuilder(Arc::new(DefaultResponseMessagesReader)),
        Extension::ApiListingBuilder(Arc::new(ApiListingMediaTypeReader)),
        Extension::ApiListingBuilder(Arc::new(ApiListingTagsReader)),
        Extension::PathDecorator(Arc::new(PathSanitizer)),
        Extension::PathDecorator(Arc::new(PathMappingDecorator)),
        Extension::ModelNamesRegistryFactory(Arc::new(DefaultModelNamesRegistryFactory)),
    ]
}
