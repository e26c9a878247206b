//! Runs the whole pipeline over a set of dockets.

use crate::docket::Docket;
use crate::error::AppResult;
use crate::manager::DocumentationPluginsManager;
use crate::scanners::{ApiDocumentationScanner, DocumentationCache};
use crate::spi::{DocumentationContext, RequestHandler};
use tracing::{debug, info};

/// Builds a context per enabled docket and scans it into the cache.
///
/// Either every group is generated or none is: the first failure aborts the
/// run and nothing is returned.
#[derive(Debug, Clone)]
pub struct DocumentationPluginsBootstrapper {
    manager: DocumentationPluginsManager,
    scanner: ApiDocumentationScanner,
    handlers: Vec<RequestHandler>,
}

impl DocumentationPluginsBootstrapper {
    /// Creates a bootstrapper documenting `handlers`.
    pub fn new(manager: DocumentationPluginsManager, handlers: Vec<RequestHandler>) -> Self {
        Self {
            scanner: ApiDocumentationScanner::new(manager.clone()),
            manager,
            handlers,
        }
    }

    /// The context of one docket: defaults first, then the docket.
    pub fn build_context(&self, docket: &Docket) -> AppResult<DocumentationContext> {
        let mut builder = self
            .manager
            .create_context_builder(docket.documentation_type());
        builder.handlers(self.handlers.iter().cloned());
        docket.configure(&mut builder);
        builder.build()
    }

    /// Generates the documentation of every enabled docket.
    pub fn bootstrap(&self, dockets: Vec<Docket>) -> AppResult<DocumentationCache> {
        let dockets = self.manager.documentation_plugins(dockets)?;
        let mut cache = DocumentationCache::new();
        for docket in dockets.iter().filter(|d| d.is_enabled()) {
            debug!(group = docket.get_group_name(), "Building documentation context");
            let context = self.build_context(docket)?;
            let documentation = self.scanner.scan(&context)?;
            info!(
                group = %documentation.group_name,
                listings = documentation.listings().count(),
                "Generated documentation"
            );
            cache.add(documentation);
        }
        Ok(cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::registry::Plugins;
    use crate::spi::{ApiSource, DocumentationType};
    use std::sync::Arc;

    fn bootstrapper() -> DocumentationPluginsBootstrapper {
        let source = ApiSource::from_yaml_str(
            "handlers:\n  - name: findPets\n    resource: PetController\n    patterns: [\"/pets\"]\n",
        )
        .unwrap();
        let manager = DocumentationPluginsManager::new(Arc::new(Plugins::builtin()));
        DocumentationPluginsBootstrapper::new(manager, source.handlers)
    }

    #[test]
    fn test_no_dockets_generate_the_default_group() {
        let cache = bootstrapper().bootstrap(vec![]).unwrap();
        assert_eq!(cache.groups().collect::<Vec<_>>(), vec!["default"]);
    }

    #[test]
    fn test_disabled_dockets_are_skipped() {
        let cache = bootstrapper()
            .bootstrap(vec![
                Docket::new(DocumentationType::Oas30).group_name("public"),
                Docket::new(DocumentationType::Oas30)
                    .group_name("internal")
                    .enable(false),
            ])
            .unwrap();
        assert_eq!(cache.groups().collect::<Vec<_>>(), vec!["public"]);
    }

    #[test]
    fn test_one_failing_docket_aborts_the_run() {
        let result = bootstrapper().bootstrap(vec![
            Docket::new(DocumentationType::Oas30).group_name("ok"),
            Docket::new(DocumentationType::Oas30)
                .group_name("broken")
                .paths("("),
        ]);
        assert!(matches!(result, Err(AppError::InvalidPattern(_))));
    }

    #[test]
    fn test_duplicate_groups_fail_before_generation() {
        let result = bootstrapper().bootstrap(vec![
            Docket::new(DocumentationType::Oas30),
            Docket::new(DocumentationType::Swagger2),
        ]);
        match result {
            Err(AppError::DuplicateGroups(groups)) => assert_eq!(groups, vec!["default"]),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
