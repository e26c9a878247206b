//! # Extension Registry
//!
//! A statically constructed table from extension kind to an ordered list of
//! plugins. The table is built once through [`PluginsBuilder`] and never
//! changes afterwards.

use crate::readers;
use crate::spi::{
    ApiListingBuilderPlugin, ApiListingScannerPlugin, DefaultsProviderPlugin, DocumentationType,
    ExtensionKind, ModelNamesRegistryFactoryPlugin, OperationBuilderPlugin, ParameterBuilderPlugin,
    PathDecorator, Plugin, ResponseBuilderPlugin,
};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Ordered plugins of one kind.
pub struct PluginRegistry<P: ?Sized> {
    plugins: Vec<Arc<P>>,
}

impl<P: ?Sized> Default for PluginRegistry<P> {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }
}

impl<P: ?Sized + Plugin> PluginRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plugin. Registering the same instance twice is ignored so
    /// no plugin runs twice for one context.
    pub fn register(&mut self, plugin: Arc<P>) {
        if self
            .plugins
            .iter()
            .any(|p| std::ptr::addr_eq(Arc::as_ptr(p), Arc::as_ptr(&plugin)))
        {
            warn!(plugin = plugin.name(), "Ignoring duplicate plugin registration");
            return;
        }
        self.plugins.push(plugin);
    }

    /// Plugins supporting `documentation_type`, in registration order.
    pub fn plugins_for(
        &self,
        documentation_type: DocumentationType,
    ) -> impl Iterator<Item = &Arc<P>> + '_ {
        self.plugins
            .iter()
            .filter(move |p| p.supports(documentation_type))
    }

    /// First supporting plugin, or `default` when none does.
    pub fn plugin_or_default_for(
        &self,
        documentation_type: DocumentationType,
        default: Arc<P>,
    ) -> Arc<P> {
        self.plugins_for(documentation_type)
            .next()
            .cloned()
            .unwrap_or(default)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl<P: ?Sized + Plugin> fmt::Debug for PluginRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}

/// A plugin tagged with its extension kind.
#[derive(Clone)]
pub enum Extension {
    /// Operation builder.
    OperationBuilder(Arc<dyn OperationBuilderPlugin>),
    /// Parameter builder.
    ParameterBuilder(Arc<dyn ParameterBuilderPlugin>),
    /// Response builder.
    ResponseBuilder(Arc<dyn ResponseBuilderPlugin>),
    /// API listing builder.
    ApiListingBuilder(Arc<dyn ApiListingBuilderPlugin>),
    /// Path decorator.
    PathDecorator(Arc<dyn PathDecorator>),
    /// Listing scanner.
    ListingScanner(Arc<dyn ApiListingScannerPlugin>),
    /// Defaults provider.
    DefaultsProvider(Arc<dyn DefaultsProviderPlugin>),
    /// Model names registry factory.
    ModelNamesRegistryFactory(Arc<dyn ModelNamesRegistryFactoryPlugin>),
}

impl Extension {
    /// Kind of the wrapped plugin.
    pub fn kind(&self) -> ExtensionKind {
        match self {
            Extension::OperationBuilder(_) => ExtensionKind::OperationBuilder,
            Extension::ParameterBuilder(_) => ExtensionKind::ParameterBuilder,
            Extension::ResponseBuilder(_) => ExtensionKind::ResponseBuilder,
            Extension::ApiListingBuilder(_) => ExtensionKind::ApiListingBuilder,
            Extension::PathDecorator(_) => ExtensionKind::PathDecorator,
            Extension::ListingScanner(_) => ExtensionKind::ListingScanner,
            Extension::DefaultsProvider(_) => ExtensionKind::DefaultsProvider,
            Extension::ModelNamesRegistryFactory(_) => ExtensionKind::ModelNamesRegistryFactory,
        }
    }

    /// Name of the wrapped plugin.
    pub fn name(&self) -> &str {
        match self {
            Extension::OperationBuilder(p) => p.name(),
            Extension::ParameterBuilder(p) => p.name(),
            Extension::ResponseBuilder(p) => p.name(),
            Extension::ApiListingBuilder(p) => p.name(),
            Extension::PathDecorator(p) => p.name(),
            Extension::ListingScanner(p) => p.name(),
            Extension::DefaultsProvider(p) => p.name(),
            Extension::ModelNamesRegistryFactory(p) => p.name(),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.name())
    }
}

/// The full extension table.
#[derive(Debug, Default)]
pub struct Plugins {
    operation_builders: PluginRegistry<dyn OperationBuilderPlugin>,
    parameter_builders: PluginRegistry<dyn ParameterBuilderPlugin>,
    response_builders: PluginRegistry<dyn ResponseBuilderPlugin>,
    api_listing_builders: PluginRegistry<dyn ApiListingBuilderPlugin>,
    path_decorators: PluginRegistry<dyn PathDecorator>,
    listing_scanners: PluginRegistry<dyn ApiListingScannerPlugin>,
    defaults_providers: PluginRegistry<dyn DefaultsProviderPlugin>,
    model_names_registry_factories: PluginRegistry<dyn ModelNamesRegistryFactoryPlugin>,
}

impl Plugins {
    /// Starts an empty table.
    pub fn builder() -> PluginsBuilder {
        PluginsBuilder::default()
    }

    /// A table holding only the built-in readers.
    pub fn builtin() -> Self {
        PluginsBuilder::default().with_builtins().build()
    }

    /// Eligible extensions of a kind, in registration order. A kind with no
    /// registrations yields an empty list.
    pub fn lookup(
        &self,
        kind: ExtensionKind,
        documentation_type: DocumentationType,
    ) -> Vec<Extension> {
        let t = documentation_type;
        match kind {
            ExtensionKind::OperationBuilder => self
                .operation_builders
                .plugins_for(t)
                .cloned()
                .map(Extension::OperationBuilder)
                .collect(),
            ExtensionKind::ParameterBuilder => self
                .parameter_builders
                .plugins_for(t)
                .cloned()
                .map(Extension::ParameterBuilder)
                .collect(),
            ExtensionKind::ResponseBuilder => self
                .response_builders
                .plugins_for(t)
                .cloned()
                .map(Extension::ResponseBuilder)
                .collect(),
            ExtensionKind::ApiListingBuilder => self
                .api_listing_builders
                .plugins_for(t)
                .cloned()
                .map(Extension::ApiListingBuilder)
                .collect(),
            ExtensionKind::PathDecorator => self
                .path_decorators
                .plugins_for(t)
                .cloned()
                .map(Extension::PathDecorator)
                .collect(),
            ExtensionKind::ListingScanner => self
                .listing_scanners
                .plugins_for(t)
                .cloned()
                .map(Extension::ListingScanner)
                .collect(),
            ExtensionKind::DefaultsProvider => self
                .defaults_providers
                .plugins_for(t)
                .cloned()
                .map(Extension::DefaultsProvider)
                .collect(),
            ExtensionKind::ModelNamesRegistryFactory => self
                .model_names_registry_factories
                .plugins_for(t)
                .cloned()
                .map(Extension::ModelNamesRegistryFactory)
                .collect(),
        }
    }

    /// Operation builders.
    pub fn operation_builders(&self) -> &PluginRegistry<dyn OperationBuilderPlugin> {
        &self.operation_builders
    }

    /// Parameter builders.
    pub fn parameter_builders(&self) -> &PluginRegistry<dyn ParameterBuilderPlugin> {
        &self.parameter_builders
    }

    /// Response builders.
    pub fn response_builders(&self) -> &PluginRegistry<dyn ResponseBuilderPlugin> {
        &self.response_builders
    }

    /// API listing builders.
    pub fn api_listing_builders(&self) -> &PluginRegistry<dyn ApiListingBuilderPlugin> {
        &self.api_listing_builders
    }

    /// Path decorators.
    pub fn path_decorators(&self) -> &PluginRegistry<dyn PathDecorator> {
        &self.path_decorators
    }

    /// Listing scanners.
    pub fn listing_scanners(&self) -> &PluginRegistry<dyn ApiListingScannerPlugin> {
        &self.listing_scanners
    }

    /// Defaults providers.
    pub fn defaults_providers(&self) -> &PluginRegistry<dyn DefaultsProviderPlugin> {
        &self.defaults_providers
    }

    /// Model names registry factories.
    pub fn model_names_registry_factories(
        &self,
    ) -> &PluginRegistry<dyn ModelNamesRegistryFactoryPlugin> {
        &self.model_names_registry_factories
    }
}

/// Builds a [`Plugins`] table.
#[derive(Debug, Default)]
pub struct PluginsBuilder {
    plugins: Plugins,
}

impl PluginsBuilder {
    /// Appends an extension under its kind.
    pub fn register(mut self, extension: Extension) -> Self {
        let p = &mut self.plugins;
        match extension {
            Extension::OperationBuilder(e) => p.operation_builders.register(e),
            Extension::ParameterBuilder(e) => p.parameter_builders.register(e),
            Extension::ResponseBuilder(e) => p.response_builders.register(e),
            Extension::ApiListingBuilder(e) => p.api_listing_builders.register(e),
            Extension::PathDecorator(e) => p.path_decorators.register(e),
            Extension::ListingScanner(e) => p.listing_scanners.register(e),
            Extension::DefaultsProvider(e) => p.defaults_providers.register(e),
            Extension::ModelNamesRegistryFactory(e) => {
                p.model_names_registry_factories.register(e)
            }
        }
        self
    }

    /// Appends every extension in order.
    pub fn register_all(self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        extensions.into_iter().fold(self, PluginsBuilder::register)
    }

    /// Appends the built-in readers.
    pub fn with_builtins(self) -> Self {
        self.register_all(readers::builtin_extensions())
    }

    /// Freezes the table.
    pub fn build(self) -> Plugins {
        self.plugins
    }
}
