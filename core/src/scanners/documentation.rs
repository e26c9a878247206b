//! Assembles the `Documentation` of one group from its context.

use crate::error::{AppError, AppResult};
use crate::manager::DocumentationPluginsManager;
use crate::scanners::{collect_models, ApiOperationReader, OperationNameGenerator};
use crate::service::{
    ApiDescription, ApiListing, CompoundModelSpecification, Documentation, ModelKey,
    ResourceListing, Tag,
};
use crate::spi::{
    ApiListingContext, DocumentationContext, ModelRegistrationContext, PathContext,
    RequestHandler,
};
use heck::ToKebabCase;
use indexmap::IndexMap;
use tracing::debug;

/// Listing key of descriptions contributed by listing scanner plugins.
pub const ADDITIONAL_LISTING: &str = "additional";

/// Scans the handlers of one group into its documentation.
#[derive(Debug, Clone)]
pub struct ApiDocumentationScanner {
    manager: DocumentationPluginsManager,
    operations: ApiOperationReader,
}

impl ApiDocumentationScanner {
    /// Creates a scanner over a manager.
    pub fn new(manager: DocumentationPluginsManager) -> Self {
        Self {
            operations: ApiOperationReader::new(manager.clone()),
            manager,
        }
    }

    /// Builds the documentation of the group described by `context`.
    pub fn scan(&self, context: &DocumentationContext) -> AppResult<Documentation> {
        let mut names = OperationNameGenerator::new();
        let mut listings: IndexMap<String, Vec<ApiListing>> = IndexMap::new();

        for (resource, handlers) in group_by_resource(context)? {
            debug!(group = %context.group_name, resource, "Scanning resource");
            let apis = self.descriptions(context, &handlers, &mut names);
            let listing = self.listing(context, resource, handlers, apis);
            listings
                .entry(resource.to_kebab_case())
                .or_default()
                .push(listing);
        }

        let additional: Vec<ApiDescription> = self
            .manager
            .additional_listings(context)
            .into_iter()
            .map(|mut description| {
                let decorate = self.manager.decorator(PathContext {
                    documentation: context,
                    handler: None,
                });
                description.path = decorate(description.path);
                description
            })
            .collect();
        if !additional.is_empty() {
            let listing = self.listing(context, ADDITIONAL_LISTING, Vec::new(), additional);
            listings
                .entry(ADDITIONAL_LISTING.to_string())
                .or_default()
                .push(listing);
        }
        listings.sort_keys();

        let model_keys: Vec<&ModelKey> = listings
            .values()
            .flatten()
            .flat_map(|listing| listing.models.keys())
            .collect();
        let model_names_registry = self.manager.model_names_registry(&ModelRegistrationContext {
            documentation_type: context.documentation_type,
            group_name: &context.group_name,
            keys: model_keys,
        });

        let tags = merge_tags(&context.tags, listings.values().flatten());
        Ok(Documentation {
            group_name: context.group_name.clone(),
            base_path: None,
            resource_listing: Some(ResourceListing {
                api_version: context.api_info.as_ref().map(|info| info.version.clone()),
                info: context.api_info.clone(),
                security_schemes: context.security_schemes.clone(),
            }),
            api_listings: Some(listings),
            tags: Some(tags),
            servers: context.servers.clone(),
            external_documentation: context.external_documentation.clone(),
            host: context.host.clone(),
            schemes: context.protocols.clone(),
            produces: context.produces.clone(),
            consumes: context.consumes.clone(),
            vendor_extensions: context.vendor_extensions.clone(),
            model_names_registry,
        })
    }

    /// One description per decorated path; handlers sharing a path share
    /// the description.
    fn descriptions(
        &self,
        context: &DocumentationContext,
        handlers: &[&RequestHandler],
        names: &mut OperationNameGenerator,
    ) -> Vec<ApiDescription> {
        let mut descriptions: IndexMap<String, ApiDescription> = IndexMap::new();
        for handler in handlers {
            let decorate = self.manager.decorator(PathContext {
                documentation: context,
                handler: Some(*handler),
            });
            for pattern in handler.patterns.iter().filter(|p| context.selects(p)) {
                let operations = self.operations.read(context, handler, pattern, names);
                let path = decorate(pattern.clone());
                descriptions
                    .entry(path.clone())
                    .or_insert_with(|| ApiDescription {
                        group_name: Some(context.group_name.clone()),
                        path,
                        description: None,
                        operations: Vec::new(),
                        hidden: false,
                    })
                    .operations
                    .extend(operations);
            }
        }
        descriptions.into_values().collect()
    }

    fn listing(
        &self,
        context: &DocumentationContext,
        resource: &str,
        handlers: Vec<&RequestHandler>,
        apis: Vec<ApiDescription>,
    ) -> ApiListing {
        let models: IndexMap<ModelKey, CompoundModelSpecification> =
            collect_models(apis.iter().flat_map(|api| &api.operations));
        let position = handlers.iter().map(|h| h.position).min().unwrap_or(0);
        let mut listing_context = ApiListingContext::new(context, resource, handlers);
        listing_context
            .api_listing_builder()
            .api_version(context.api_info.as_ref().map(|info| info.version.clone()))
            .resource_path(format!("/{}", resource.to_kebab_case()))
            .description(Some(resource.to_string()))
            .host(context.host.clone())
            .protocols(context.protocols.iter().cloned())
            .security_references(context.security_references.clone())
            .apis(apis)
            .models(models)
            .position(position);
        self.manager.api_listing(listing_context)
    }
}

/// Visible handlers with at least one selected pattern, grouped by
/// resource in first-seen order.
fn group_by_resource(
    context: &DocumentationContext,
) -> AppResult<IndexMap<&str, Vec<&RequestHandler>>> {
    let mut groups: IndexMap<&str, Vec<&RequestHandler>> = IndexMap::new();
    for handler in &context.handlers {
        if handler.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(AppError::Config(format!(
                "Handler '{}' declares an empty path pattern",
                handler.name
            )));
        }
        if handler.hidden || !handler.patterns.iter().any(|p| context.selects(p)) {
            continue;
        }
        groups.entry(handler.resource.as_str()).or_default().push(handler);
    }
    Ok(groups)
}

/// Docket tags first, then the tags the listings use that the docket did
/// not describe, sorted by name.
fn merge_tags<'a>(configured: &[Tag], listings: impl Iterator<Item = &'a ApiListing>) -> Vec<Tag> {
    let mut tags: IndexMap<String, Tag> = configured
        .iter()
        .map(|tag| (tag.name.clone(), tag.clone()))
        .collect();
    for tag in listings.flat_map(|listing| &listing.tags) {
        tags.entry(tag.name.clone()).or_insert_with(|| tag.clone());
    }
    let mut tags: Vec<Tag> = tags.into_values().collect();
    tags.sort_by(|a, b| a.name.cmp(&b.name));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Extension, Plugins};
    use crate::service::HttpMethod;
    use crate::spi::{ApiListingScannerPlugin, DocumentationType, Plugin};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    const HANDLERS: &str = r#"
handlers:
  - name: findPets
    resource: PetController
    patterns: ["/pets"]
    methods: [GET]
  - name: addPet
    resource: PetController
    patterns: ["/pets"]
    methods: [POST]
  - name: getPet
    resource: PetController
    patterns: ["/pets/{id:\\d+}"]
    methods: [GET]
  - name: getOrder
    resource: StoreController
    patterns: ["/store/orders/{id}"]
    methods: [GET]
  - name: internal
    resource: AdminController
    patterns: ["/admin"]
    hidden: true
"#;

    fn context(selector: Option<&str>) -> DocumentationContext {
        let source = crate::spi::ApiSource::from_yaml_str(HANDLERS).unwrap();
        let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
        let mut builder = manager.create_context_builder(DocumentationType::Oas30);
        builder
            .handlers(source.handlers)
            .path_selector(selector.map(str::to_string));
        builder.build().unwrap()
    }

    fn scanner(plugins: Plugins) -> ApiDocumentationScanner {
        ApiDocumentationScanner::new(DocumentationPluginsManager::new(Arc::new(plugins)))
    }

    #[test]
    fn test_handlers_grouped_into_listings_by_resource() {
        let documentation = scanner(Plugins::builtin()).scan(&context(None)).unwrap();
        let listings = documentation.api_listings.as_ref().unwrap();
        let keys: Vec<_> = listings.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["pet-controller", "store-controller"]);

        let pets = &listings["pet-controller"][0];
        let paths: Vec<_> = pets.apis.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, vec!["/pets", "/pets/{id}"]);
        let methods: Vec<_> = pets.apis[0].operations.iter().map(|o| o.method).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
        assert_eq!(pets.resource_path, "/pet-controller");
    }

    #[test]
    fn test_path_selector_filters_handlers() {
        let documentation = scanner(Plugins::builtin())
            .scan(&context(Some("^/store/.*")))
            .unwrap();
        let keys: Vec<_> = documentation
            .api_listings
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["store-controller".to_string()]);
    }

    #[test]
    fn test_tags_and_resource_listing_are_populated() {
        let documentation = scanner(Plugins::builtin()).scan(&context(None)).unwrap();
        let tags: Vec<_> = documentation
            .tags
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(tags, vec!["pet-controller", "store-controller"]);
        let resource_listing = documentation.resource_listing.unwrap();
        assert_eq!(resource_listing.info.unwrap().title, "Api Documentation");
        assert_eq!(resource_listing.security_schemes, None);
    }

    #[derive(Debug)]
    struct HealthScanner;

    impl Plugin for HealthScanner {
        fn supports(&self, _documentation_type: DocumentationType) -> bool {
            true
        }
    }

    impl ApiListingScannerPlugin for HealthScanner {
        fn apply(&self, context: &DocumentationContext) -> Vec<ApiDescription> {
            vec![ApiDescription {
                group_name: Some(context.group_name.clone()),
                path: "//health".into(),
                description: Some("Health check".into()),
                operations: vec![],
                hidden: false,
            }]
        }
    }

    #[test]
    fn test_additional_listings_are_decorated_and_kept_apart() {
        let plugins = Plugins::builder()
            .with_builtins()
            .register(Extension::ListingScanner(Arc::new(HealthScanner)))
            .build();
        let documentation = scanner(plugins).scan(&context(None)).unwrap();
        let listings = documentation.api_listings.unwrap();
        let additional = &listings[ADDITIONAL_LISTING][0];
        assert_eq!(additional.apis[0].path, "/health");
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let mut ctx = context(None);
        ctx.handlers[0].patterns.push(String::new());
        let result = scanner(Plugins::builtin()).scan(&ctx);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
