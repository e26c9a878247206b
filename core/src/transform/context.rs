//! Per-request input of the transformation filters.

use crate::oas::OpenApi;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The inbound request as filters see it: header lookup only.
pub trait RequestContext {
    /// First value of a header, matched case-insensitively.
    fn header(&self, name: &str) -> Option<&str>;
}

impl RequestContext for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl RequestContext for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A document on its way through the filter chain.
#[derive(Clone)]
pub struct OpenApiTransformationContext<'a> {
    /// The document, possibly shared with the cache.
    pub specification: Arc<OpenApi>,
    /// The request being answered, when there is one.
    pub request: Option<&'a dyn RequestContext>,
}

impl<'a> OpenApiTransformationContext<'a> {
    /// Creates a context.
    pub fn new(specification: Arc<OpenApi>, request: Option<&'a dyn RequestContext>) -> Self {
        Self {
            specification,
            request,
        }
    }

    /// A header of the request, if there is a request and it has one.
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.request.and_then(|request| request.header(name))
    }

    /// The same request with another document.
    pub fn with_specification(&self, specification: Arc<OpenApi>) -> Self {
        Self {
            specification,
            request: self.request,
        }
    }
}

impl fmt::Debug for OpenApiTransformationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenApiTransformationContext")
            .field("specification", &self.specification)
            .field("has_request", &self.request.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_lookup_ignores_case() {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-forwarded-prefix", http::HeaderValue::from_static("/gw"));
        assert_eq!(headers.header("X-Forwarded-Prefix"), Some("/gw"));
        assert_eq!(headers.header("Host"), None);
    }

    #[test]
    fn test_map_lookup_ignores_case() {
        let headers = HashMap::from([("Host".to_string(), "example.com".to_string())]);
        assert_eq!(headers.header("host"), Some("example.com"));
    }
}
