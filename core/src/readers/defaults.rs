//! Built-in defaults: the default info block and response messages, and the
//! default model naming strategy.

use crate::builders::DocumentationContextBuilder;
use crate::service::{ApiInfo, HttpMethod, Response};
use crate::spi::{
    DefaultsProviderPlugin, DocumentationType, ModelNamesRegistry,
    ModelNamesRegistryFactoryPlugin, ModelRegistrationContext, Plugin,
};
use http::StatusCode;
use indexmap::IndexMap;
use std::collections::HashSet;

fn responses(codes: &[StatusCode]) -> Vec<Response> {
    codes
        .iter()
        .map(|code| {
            Response::new(
                code.as_str(),
                code.canonical_reason().unwrap_or_default(),
            )
        })
        .collect()
}

/// Default responses documented per method.
pub fn default_response_messages() -> IndexMap<HttpMethod, Vec<Response>> {
    use StatusCode as S;
    let read = responses(&[S::OK, S::UNAUTHORIZED, S::FORBIDDEN, S::NOT_FOUND]);
    let write = responses(&[S::CREATED, S::UNAUTHORIZED, S::FORBIDDEN, S::NOT_FOUND]);
    let other = responses(&[S::NO_CONTENT, S::UNAUTHORIZED, S::FORBIDDEN]);
    IndexMap::from([
        (HttpMethod::Get, read),
        (HttpMethod::Put, write.clone()),
        (HttpMethod::Post, write),
        (HttpMethod::Delete, other.clone()),
        (HttpMethod::Patch, other.clone()),
        (HttpMethod::Trace, other.clone()),
        (HttpMethod::Options, other.clone()),
        (HttpMethod::Head, other),
    ])
}

/// Seeds every context with the default info block and responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConfiguration;

impl Plugin for DefaultConfiguration {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl DefaultsProviderPlugin for DefaultConfiguration {
    fn apply(&self, builder: &mut DocumentationContextBuilder) {
        builder.api_info(ApiInfo::default());
        for (method, responses) in default_response_messages() {
            builder.default_responses(method, responses);
        }
    }
}

/// Names models by simple name, suffixing `_1`, `_2`, ... when two keys
/// share a simple name.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultModelNamesRegistryFactory;

impl Plugin for DefaultModelNamesRegistryFactory {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ModelNamesRegistryFactoryPlugin for DefaultModelNamesRegistryFactory {
    fn create(&self, context: &ModelRegistrationContext<'_>) -> ModelNamesRegistry {
        let mut names = IndexMap::new();
        let mut taken = HashSet::new();
        for key in &context.keys {
            if names.contains_key(*key) {
                continue;
            }
            let mut name = key.name.clone();
            let mut suffix = 1;
            while taken.contains(&name) {
                name = format!("{}_{}", key.name, suffix);
                suffix += 1;
            }
            taken.insert(name.clone());
            names.insert((*key).clone(), name);
        }
        ModelNamesRegistry::new(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ModelKey;

    #[test]
    fn test_clashing_simple_names_are_suffixed() {
        let a = ModelKey::qualified("pets", "Category");
        let b = ModelKey::qualified("store", "Category");
        let c = ModelKey::new("Pet");
        let registry = DefaultModelNamesRegistryFactory.create(&ModelRegistrationContext {
            documentation_type: DocumentationType::Oas30,
            group_name: "default",
            keys: vec![&a, &b, &c, &a],
        });
        assert_eq!(registry.name_for(&a), "Category");
        assert_eq!(registry.name_for(&b), "Category_1");
        assert_eq!(registry.name_for(&c), "Pet");
    }

    #[test]
    fn test_defaults_cover_every_expressible_method() {
        let defaults = default_response_messages();
        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults[&HttpMethod::Get][0].description.as_deref(), Some("OK"));
        assert_eq!(defaults[&HttpMethod::Post][0].code, "201");
    }
}
