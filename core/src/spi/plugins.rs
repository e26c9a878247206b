//! # Extension Points
//!
//! One trait per extension point kind. Each has a single contract method
//! and inherits `supports` from [`Plugin`].

use crate::builders::DocumentationContextBuilder;
use crate::service::ApiDescription;
use crate::spi::{
    ApiListingContext, DocumentationContext, DocumentationType, ModelNamesRegistry,
    ModelRegistrationContext, OperationContext, ParameterContext, PathContext, ResponseContext,
};
use std::fmt;

/// Extension point kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtensionKind {
    /// Writes into operation drafts.
    OperationBuilder,
    /// Writes into parameter drafts.
    ParameterBuilder,
    /// Writes into response drafts.
    ResponseBuilder,
    /// Writes into API listing drafts.
    ApiListingBuilder,
    /// Rewrites documented paths.
    PathDecorator,
    /// Contributes API descriptions not backed by handlers.
    ListingScanner,
    /// Seeds documentation context drafts.
    DefaultsProvider,
    /// Creates the model names registry of a group.
    ModelNamesRegistryFactory,
}

impl ExtensionKind {
    /// Every kind.
    pub const ALL: [ExtensionKind; 8] = [
        ExtensionKind::OperationBuilder,
        ExtensionKind::ParameterBuilder,
        ExtensionKind::ResponseBuilder,
        ExtensionKind::ApiListingBuilder,
        ExtensionKind::PathDecorator,
        ExtensionKind::ListingScanner,
        ExtensionKind::DefaultsProvider,
        ExtensionKind::ModelNamesRegistryFactory,
    ];
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Shared predicate: whether the plugin takes part in runs for a
/// documentation type.
pub trait Plugin: Send + Sync {
    /// Eligibility for a run.
    fn supports(&self, documentation_type: DocumentationType) -> bool;

    /// Name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Writes into an operation draft.
pub trait OperationBuilderPlugin: Plugin {
    /// Mutates the operation draft.
    fn apply(&self, context: &mut OperationContext<'_>);
}

/// Writes into a parameter draft.
pub trait ParameterBuilderPlugin: Plugin {
    /// Mutates the parameter draft.
    fn apply(&self, context: &mut ParameterContext<'_>);
}

/// Writes into a response draft.
pub trait ResponseBuilderPlugin: Plugin {
    /// Mutates the response draft.
    fn apply(&self, context: &mut ResponseContext<'_>);
}

/// Writes into an API listing draft.
pub trait ApiListingBuilderPlugin: Plugin {
    /// Mutates the listing draft.
    fn apply(&self, context: &mut ApiListingContext<'_>);
}

/// Rewrites a documented path.
pub trait PathDecorator: Plugin {
    /// Returns the decorated path.
    fn decorate(&self, context: &PathContext<'_>, path: String) -> String;
}

/// Contributes API descriptions that no handler backs.
pub trait ApiListingScannerPlugin: Plugin {
    /// Additional descriptions for the group.
    fn apply(&self, context: &DocumentationContext) -> Vec<ApiDescription>;
}

/// Seeds a documentation context draft before the docket configures it.
pub trait DefaultsProviderPlugin: Plugin {
    /// Mutates the draft.
    fn apply(&self, builder: &mut DocumentationContextBuilder);
}

/// Creates the model names registry of a group.
pub trait ModelNamesRegistryFactoryPlugin: Plugin {
    /// Names every model of the group.
    fn create(&self, context: &ModelRegistrationContext<'_>) -> ModelNamesRegistry;
}
