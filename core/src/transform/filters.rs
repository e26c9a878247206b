//! Built-in filters.

use crate::oas::{OpenApi, Paths, Server};
use crate::spi::{DocumentationType, Plugin};
use crate::transform::OpenApiTransformationContext;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the path prefix a gateway strips before forwarding.
pub const X_FORWARDED_PREFIX: &str = "X-Forwarded-Prefix";
/// Header carrying the original scheme.
pub const X_FORWARDED_PROTO: &str = "X-Forwarded-Proto";
/// Header carrying the original host.
pub const X_FORWARDED_HOST: &str = "X-Forwarded-Host";
/// Host header.
pub const HOST: &str = "Host";

/// Rewrites a document for one request.
///
/// Filters never mutate the incoming document. A filter with nothing to do
/// returns the input `Arc` itself; one that changes something returns a new
/// document sharing every untouched subtree.
pub trait OpenApiTransformationFilter: Plugin {
    /// The document to hand on.
    fn transform(&self, context: &OpenApiTransformationContext<'_>) -> Arc<OpenApi>;
}

/// Prefixes every path with the request's `X-Forwarded-Prefix`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardedPrefixFilter;

impl Plugin for ForwardedPrefixFilter {
    fn supports(&self, documentation_type: DocumentationType) -> bool {
        documentation_type == DocumentationType::Oas30
    }
}

impl OpenApiTransformationFilter for ForwardedPrefixFilter {
    fn transform(&self, context: &OpenApiTransformationContext<'_>) -> Arc<OpenApi> {
        let specification = &context.specification;
        let (Some(prefix), Some(paths)) = (
            context.header(X_FORWARDED_PREFIX).and_then(normalize_prefix),
            specification.paths.as_ref(),
        ) else {
            return Arc::clone(specification);
        };
        debug!(prefix = %prefix, "Prefixing documented paths");
        let prefixed = Paths {
            items: paths
                .items
                .iter()
                .map(|(path, item)| (format!("{}{}", prefix, path), Arc::clone(item)))
                .collect(),
            extensions: paths.extensions.clone(),
        };
        Arc::new(OpenApi {
            paths: Some(Arc::new(prefixed)),
            ..OpenApi::clone(specification)
        })
    }
}

/// `/gw/` and `gw` become `/gw`; an empty or root prefix is no prefix.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Adds a server inferred from the request when the document declares none.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasePathAndHostnameFilter;

impl Plugin for BasePathAndHostnameFilter {
    fn supports(&self, documentation_type: DocumentationType) -> bool {
        documentation_type == DocumentationType::Oas30
    }
}

impl OpenApiTransformationFilter for BasePathAndHostnameFilter {
    fn transform(&self, context: &OpenApiTransformationContext<'_>) -> Arc<OpenApi> {
        let specification = &context.specification;
        if specification
            .servers
            .as_ref()
            .is_some_and(|servers| !servers.is_empty())
        {
            return Arc::clone(specification);
        }
        let Some(host) = context
            .header(X_FORWARDED_HOST)
            .or_else(|| context.header(HOST))
            .and_then(|h| h.split(',').next())
            .map(str::trim)
            .filter(|h| !h.is_empty())
        else {
            return Arc::clone(specification);
        };
        let scheme = context
            .header(X_FORWARDED_PROTO)
            .and_then(|p| p.split(',').next())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or("http");

        match Url::parse(&format!("{}://{}", scheme, host)) {
            Ok(url) => {
                let server = Server {
                    url: url.as_str().trim_end_matches('/').to_string(),
                    description: Some("Inferred Url".into()),
                    ..Default::default()
                };
                Arc::new(OpenApi {
                    servers: Some(vec![server]),
                    ..OpenApi::clone(specification)
                })
            }
            Err(e) => {
                warn!(host, scheme, error = %e, "Cannot infer server url from request");
                Arc::clone(specification)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::PathItem;
    use crate::transform::RequestContext;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    fn document() -> Arc<OpenApi> {
        let mut items = BTreeMap::new();
        items.insert(
            "/a".to_string(),
            Arc::new(PathItem {
                summary: Some("X".into()),
                ..Default::default()
            }),
        );
        items.insert(
            "/b".to_string(),
            Arc::new(PathItem {
                summary: Some("Y".into()),
                ..Default::default()
            }),
        );
        let mut extensions = BTreeMap::new();
        extensions.insert("x-paths".to_string(), json!("kept"));
        Arc::new(OpenApi {
            paths: Some(Arc::new(Paths { items, extensions })),
            ..OpenApi::new()
        })
    }

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefix_rewrites_every_path() {
        let original = document();
        let request = headers(&[("X-Forwarded-Prefix", "/gw")]);
        let context = OpenApiTransformationContext::new(
            Arc::clone(&original),
            Some(&request as &dyn RequestContext),
        );
        let transformed = ForwardedPrefixFilter.transform(&context);

        let paths = transformed.paths.as_ref().unwrap();
        let keys: Vec<_> = paths.items.keys().cloned().collect();
        assert_eq!(keys, vec!["/gw/a", "/gw/b"]);
        assert_eq!(paths.items["/gw/a"].summary.as_deref(), Some("X"));
        assert!(Arc::ptr_eq(
            &paths.items["/gw/b"],
            &original.paths.as_ref().unwrap().items["/b"]
        ));
        assert_eq!(paths.extensions["x-paths"], json!("kept"));
        assert_eq!(transformed.openapi, original.openapi);
        assert_eq!(transformed.components, original.components);

        let untouched: Vec<_> = original.paths.as_ref().unwrap().items.keys().cloned().collect();
        assert_eq!(untouched, vec!["/a", "/b"]);
    }

    #[test]
    fn test_no_prefix_returns_the_same_document() {
        let original = document();
        let request = headers(&[("Host", "example.com")]);
        for candidate in [None, Some(&request as &dyn RequestContext)] {
            let context = OpenApiTransformationContext::new(Arc::clone(&original), candidate);
            assert!(Arc::ptr_eq(&ForwardedPrefixFilter.transform(&context), &original));
        }
    }

    #[test]
    fn test_root_prefix_is_no_prefix() {
        assert_eq!(normalize_prefix("/"), None);
        assert_eq!(normalize_prefix("gw/"), Some("/gw".to_string()));
    }

    #[test]
    fn test_server_inferred_from_forwarded_headers() {
        let original = document();
        let request = headers(&[("X-Forwarded-Proto", "https"), ("X-Forwarded-Host", "api.example.com")]);
        let context = OpenApiTransformationContext::new(
            Arc::clone(&original),
            Some(&request as &dyn RequestContext),
        );
        let transformed = BasePathAndHostnameFilter.transform(&context);
        let servers = transformed.servers.as_ref().unwrap();
        assert_eq!(servers[0].url, "https://api.example.com");
        assert!(Arc::ptr_eq(
            transformed.paths.as_ref().unwrap(),
            original.paths.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_declared_servers_are_kept() {
        let original = Arc::new(OpenApi {
            servers: Some(vec![Server {
                url: "https://declared".into(),
                ..Default::default()
            }]),
            ..OpenApi::new()
        });
        let request = headers(&[("Host", "example.com")]);
        let context = OpenApiTransformationContext::new(
            Arc::clone(&original),
            Some(&request as &dyn RequestContext),
        );
        assert!(Arc::ptr_eq(
            &BasePathAndHostnameFilter.transform(&context),
            &original
        ));
    }
}
