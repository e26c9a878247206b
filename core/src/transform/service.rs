//! Serves the mapped document of a group, filtered per request.

use crate::builders::DEFAULT_GROUP_NAME;
use crate::error::{AppError, AppResult};
use crate::mappers::ServiceModelToOpenApiMapper;
use crate::oas::OpenApi;
use crate::scanners::DocumentationCache;
use crate::spi::DocumentationType;
use crate::transform::{RequestContext, TransformationFilters};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::debug;

/// Maps every cached group once, then hands out filtered views.
#[derive(Debug, Clone)]
pub struct OpenApiDocumentService {
    specifications: IndexMap<String, Arc<OpenApi>>,
    filters: TransformationFilters,
}

impl OpenApiDocumentService {
    /// Maps the documentation of every group in `cache`.
    pub fn new(cache: &DocumentationCache, filters: TransformationFilters) -> AppResult<Self> {
        let mapper = ServiceModelToOpenApiMapper::new();
        let specifications: IndexMap<String, Arc<OpenApi>> = cache
            .all()
            .map(|documentation| {
                mapper
                    .map_documentation(documentation)
                    .map(|spec| (documentation.group_name.clone(), Arc::new(spec)))
            })
            .collect::<AppResult<_>>()?;
        Ok(Self {
            specifications,
            filters,
        })
    }

    /// Names of the served groups.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.specifications.keys().map(String::as_str)
    }

    /// The unfiltered document of a group.
    pub fn raw(&self, group: Option<&str>) -> AppResult<Arc<OpenApi>> {
        let group = group.unwrap_or(DEFAULT_GROUP_NAME);
        self.specifications
            .get(group)
            .cloned()
            .ok_or_else(|| AppError::UnknownGroup(group.to_string()))
    }

    /// The document of a group as the request should see it. `None` means
    /// the default group.
    pub fn specification(
        &self,
        group: Option<&str>,
        request: Option<&dyn RequestContext>,
    ) -> AppResult<Arc<OpenApi>> {
        let specification = self.raw(group)?;
        debug!(group = group.unwrap_or(DEFAULT_GROUP_NAME), "Serving specification");
        Ok(self
            .filters
            .apply(DocumentationType::Oas30, specification, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docket::Docket;
    use crate::manager::DocumentationPluginsManager;
    use crate::registry::Plugins;
    use crate::scanners::DocumentationPluginsBootstrapper;
    use crate::spi::ApiSource;
    use std::collections::HashMap;

    fn service() -> OpenApiDocumentService {
        let source = ApiSource::from_yaml_str(
            "handlers:\n  - name: listPets\n    resource: PetController\n    patterns: [\"/pets\"]\n    methods: [GET]\n",
        )
        .unwrap();
        let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
        let cache = DocumentationPluginsBootstrapper::new(manager, source.handlers)
            .bootstrap(vec![Docket::new(DocumentationType::Oas30)])
            .unwrap();
        OpenApiDocumentService::new(&cache, TransformationFilters::builtin()).unwrap()
    }

    #[test]
    fn test_default_group_is_served() {
        let service = service();
        let spec = service.specification(None, None).unwrap();
        assert!(spec.paths.as_ref().unwrap().items.contains_key("/pets"));
        assert_eq!(service.groups().collect::<Vec<_>>(), vec![DEFAULT_GROUP_NAME]);
    }

    #[test]
    fn test_unknown_group_is_an_error() {
        let result = service().specification(Some("missing"), None);
        assert!(matches!(result, Err(AppError::UnknownGroup(g)) if g == "missing"));
    }

    #[test]
    fn test_prefix_applies_per_request_only() {
        let service = service();
        let request = HashMap::from([("X-Forwarded-Prefix".to_string(), "/gw".to_string())]);
        let prefixed = service.specification(None, Some(&request as &dyn RequestContext)).unwrap();
        assert!(prefixed.paths.as_ref().unwrap().items.contains_key("/gw/pets"));

        let plain = service.specification(None, None).unwrap();
        assert!(Arc::ptr_eq(&plain, &service.raw(None).unwrap()));
        assert!(plain.paths.as_ref().unwrap().items.contains_key("/pets"));
    }
}
