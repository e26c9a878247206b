//! The ordered filter chain.

use crate::oas::OpenApi;
use crate::spi::DocumentationType;
use crate::transform::{
    BasePathAndHostnameFilter, ForwardedPrefixFilter, OpenApiTransformationContext,
    OpenApiTransformationFilter, RequestContext,
};
use std::fmt;
use std::sync::Arc;

/// Filters in registration order.
#[derive(Clone, Default)]
pub struct TransformationFilters {
    filters: Vec<Arc<dyn OpenApiTransformationFilter>>,
}

impl TransformationFilters {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The prefix filter followed by the hostname filter.
    pub fn builtin() -> Self {
        Self::new()
            .register(Arc::new(ForwardedPrefixFilter))
            .register(Arc::new(BasePathAndHostnameFilter))
    }

    /// Appends a filter.
    pub fn register(mut self, filter: Arc<dyn OpenApiTransformationFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter is registered.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every supporting filter, each seeing the previous one's output.
    pub fn apply(
        &self,
        documentation_type: DocumentationType,
        specification: Arc<OpenApi>,
        request: Option<&dyn RequestContext>,
    ) -> Arc<OpenApi> {
        self.filters
            .iter()
            .filter(|filter| filter.supports(documentation_type))
            .fold(specification, |current, filter| {
                filter.transform(&OpenApiTransformationContext::new(current, request))
            })
    }
}

impl fmt::Debug for TransformationFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.filters.iter().map(|filter| filter.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_request_passes_document_through() {
        let original = Arc::new(OpenApi::new());
        let result = TransformationFilters::builtin().apply(
            DocumentationType::Oas30,
            Arc::clone(&original),
            None,
        );
        assert!(Arc::ptr_eq(&result, &original));
    }

    #[test]
    fn test_unsupported_type_skips_filters() {
        let original = Arc::new(OpenApi::new());
        let request = HashMap::from([("Host".to_string(), "example.com".to_string())]);
        let result = TransformationFilters::builtin().apply(
            DocumentationType::Swagger2,
            Arc::clone(&original),
            Some(&request as &dyn RequestContext),
        );
        assert!(Arc::ptr_eq(&result, &original));
    }
}
