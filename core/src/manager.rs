//! # Pipeline Orchestrator
//!
//! Runs the eligible plugins of a kind over a context, strictly in
//! registration order, then finalises the context's draft.

use crate::builders::DocumentationContextBuilder;
use crate::docket::Docket;
use crate::error::{AppError, AppResult};
use crate::readers::DefaultModelNamesRegistryFactory;
use crate::registry::Plugins;
use crate::service::{ApiDescription, ApiListing, Operation, RequestParameter, Response};
use crate::spi::{
    ApiListingContext, DocumentationContext, DocumentationType, ModelNamesRegistry,
    ModelNamesRegistryFactoryPlugin, ModelRegistrationContext, OperationContext, ParameterContext,
    PathContext, ResponseContext,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Dispatches plugins for every extension kind.
#[derive(Debug, Clone)]
pub struct DocumentationPluginsManager {
    plugins: Arc<Plugins>,
}

impl DocumentationPluginsManager {
    /// Creates a manager over a frozen plugin table.
    pub fn new(plugins: Arc<Plugins>) -> Self {
        Self { plugins }
    }

    /// The plugin table.
    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    /// Validates the configured dockets.
    ///
    /// Duplicate group names fail the whole set, naming every duplicate.
    /// No dockets at all yields one default OAS 3.0 docket.
    pub fn documentation_plugins(&self, dockets: Vec<Docket>) -> AppResult<Vec<Docket>> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for docket in &dockets {
            *counts.entry(docket.get_group_name()).or_default() += 1;
        }
        let duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name.to_string())
            .collect();
        if !duplicates.is_empty() {
            return Err(AppError::DuplicateGroups(duplicates));
        }
        if dockets.is_empty() {
            debug!("No dockets configured, using the default docket");
            return Ok(vec![Docket::new(DocumentationType::Oas30)]);
        }
        Ok(dockets)
    }

    /// Runs operation builders and finalises the operation.
    pub fn operation(&self, mut context: OperationContext<'_>) -> Operation {
        for plugin in self
            .plugins
            .operation_builders()
            .plugins_for(context.documentation_type())
        {
            debug!(plugin = plugin.name(), path = context.path(), "Applying operation plugin");
            plugin.apply(&mut context);
        }
        context.into_builder().build()
    }

    /// Runs parameter builders and finalises the parameter.
    pub fn parameter(&self, mut context: ParameterContext<'_>) -> RequestParameter {
        for plugin in self
            .plugins
            .parameter_builders()
            .plugins_for(context.documentation_type())
        {
            plugin.apply(&mut context);
        }
        context.into_builder().build()
    }

    /// Runs response builders and finalises the response.
    pub fn response(&self, mut context: ResponseContext<'_>) -> Response {
        for plugin in self
            .plugins
            .response_builders()
            .plugins_for(context.documentation_type())
        {
            plugin.apply(&mut context);
        }
        context.into_builder().build()
    }

    /// Runs API listing builders and finalises the listing.
    pub fn api_listing(&self, mut context: ApiListingContext<'_>) -> ApiListing {
        for plugin in self
            .plugins
            .api_listing_builders()
            .plugins_for(context.documentation_type())
        {
            debug!(plugin = plugin.name(), resource = context.resource(), "Applying listing plugin");
            plugin.apply(&mut context);
        }
        context.into_builder().build()
    }

    /// A context draft seeded by every defaults provider.
    pub fn create_context_builder(
        &self,
        documentation_type: DocumentationType,
    ) -> DocumentationContextBuilder {
        let mut builder = DocumentationContextBuilder::new(documentation_type);
        self.apply_defaults(documentation_type, &mut builder);
        builder
    }

    /// Runs the defaults providers over a draft.
    pub fn apply_defaults(
        &self,
        documentation_type: DocumentationType,
        builder: &mut DocumentationContextBuilder,
    ) {
        for plugin in self
            .plugins
            .defaults_providers()
            .plugins_for(documentation_type)
        {
            plugin.apply(builder);
        }
    }

    /// All path decorators folded in registration order.
    pub fn decorator<'a>(&'a self, context: PathContext<'a>) -> impl Fn(String) -> String + 'a {
        move |path| {
            self.plugins
                .path_decorators()
                .plugins_for(context.documentation_type())
                .fold(path, |decorated, plugin| plugin.decorate(&context, decorated))
        }
    }

    /// Descriptions contributed by listing scanners.
    pub fn additional_listings(&self, context: &DocumentationContext) -> Vec<ApiDescription> {
        self.plugins
            .listing_scanners()
            .plugins_for(context.documentation_type)
            .flat_map(|plugin| plugin.apply(context))
            .collect()
    }

    /// Names models using the first supporting factory, or the default one.
    pub fn model_names_registry(&self, context: &ModelRegistrationContext<'_>) -> ModelNamesRegistry {
        let default: Arc<dyn ModelNamesRegistryFactoryPlugin> =
            Arc::new(DefaultModelNamesRegistryFactory);
        self.plugins
            .model_names_registry_factories()
            .plugin_or_default_for(context.documentation_type, default)
            .create(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Extension;
    use crate::service::HttpMethod;
    use crate::spi::{OperationBuilderPlugin, Plugin, RequestHandler};

    struct Summary(&'static str);

    impl Plugin for Summary {
        fn supports(&self, _documentation_type: DocumentationType) -> bool {
            true
        }
    }

    impl OperationBuilderPlugin for Summary {
        fn apply(&self, context: &mut OperationContext<'_>) {
            context.operation_builder().summary(Some(self.0.to_string()));
        }
    }

    struct Notes;

    impl Plugin for Notes {
        fn supports(&self, _documentation_type: DocumentationType) -> bool {
            true
        }
    }

    impl OperationBuilderPlugin for Notes {
        fn apply(&self, context: &mut OperationContext<'_>) {
            context.operation_builder().notes(Some("notes".into()));
        }
    }

    fn manager(extensions: Vec<Extension>) -> DocumentationPluginsManager {
        DocumentationPluginsManager::new(Arc::new(
            Plugins::builder().register_all(extensions).build(),
        ))
    }

    fn handler() -> RequestHandler {
        crate::from_yaml_str("name: h\nresource: R\npatterns: [\"/h\"]").unwrap()
    }

    fn run(manager: &DocumentationPluginsManager) -> Operation {
        let ctx = DocumentationContextBuilder::new(DocumentationType::Oas30)
            .build()
            .unwrap();
        let handler = handler();
        manager.operation(OperationContext::new(&ctx, &handler, "/h", HttpMethod::Get))
    }

    #[test]
    fn test_last_write_wins_between_plugins() {
        let first = manager(vec![
            Extension::OperationBuilder(Arc::new(Summary("a"))),
            Extension::OperationBuilder(Arc::new(Summary("b"))),
        ]);
        let second = manager(vec![
            Extension::OperationBuilder(Arc::new(Summary("b"))),
            Extension::OperationBuilder(Arc::new(Summary("a"))),
        ]);
        assert_eq!(run(&first).summary.as_deref(), Some("b"));
        assert_eq!(run(&second).summary.as_deref(), Some("a"));
    }

    #[test]
    fn test_disjoint_writers_commute() {
        let first = manager(vec![
            Extension::OperationBuilder(Arc::new(Summary("s"))),
            Extension::OperationBuilder(Arc::new(Notes)),
        ]);
        let second = manager(vec![
            Extension::OperationBuilder(Arc::new(Notes)),
            Extension::OperationBuilder(Arc::new(Summary("s"))),
        ]);
        assert_eq!(run(&first), run(&second));
    }

    #[test]
    fn test_no_dockets_yield_default() {
        let dockets = manager(vec![]).documentation_plugins(vec![]).unwrap();
        assert_eq!(dockets.len(), 1);
        assert_eq!(dockets[0].documentation_type(), DocumentationType::Oas30);
        assert_eq!(dockets[0].get_group_name(), "default");
    }

    #[test]
    fn test_duplicate_groups_are_fatal() {
        let err = manager(vec![])
            .documentation_plugins(vec![
                Docket::default().group_name("a"),
                Docket::default().group_name("b"),
                Docket::default().group_name("a"),
                Docket::default(),
                Docket::default(),
            ])
            .unwrap_err();
        match err {
            AppError::DuplicateGroups(groups) => assert_eq!(groups, vec!["a", "default"]),
            other => panic!("unexpected error: {other}"),
        }
    }
}
