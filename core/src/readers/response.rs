//! Response readers.

use crate::spi::{DocumentationType, Plugin, ResponseBuilderPlugin, ResponseContext};
use http::StatusCode;

/// Fills a missing description with the reason phrase of the status code.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseDescriptionReader;

impl Plugin for ResponseDescriptionReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ResponseBuilderPlugin for ResponseDescriptionReader {
    fn apply(&self, context: &mut ResponseContext<'_>) {
        let builder = context.response_builder();
        if builder.current_description().is_some_and(|d| !d.is_empty()) {
            return;
        }
        let reason = StatusCode::from_bytes(builder.current_code().as_bytes())
            .ok()
            .and_then(|code| code.canonical_reason());
        if let Some(reason) = reason {
            builder.description(Some(reason.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::DocumentationContextBuilder;
    use crate::service::{HttpMethod, Response};
    use crate::spi::RequestHandler;

    fn describe(mut declared: Response) -> Option<String> {
        let docs = DocumentationContextBuilder::new(DocumentationType::Oas30)
            .build()
            .unwrap();
        let handler: RequestHandler =
            crate::from_yaml_str("name: get\nresource: R\npatterns: [\"/\"]").unwrap();
        declared.description = declared.description.filter(|d| d != "-");
        let mut ctx = ResponseContext::new(&declared, &docs, &handler, HttpMethod::Get);
        ResponseDescriptionReader.apply(&mut ctx);
        ctx.into_builder().build().description
    }

    #[test]
    fn test_missing_description_uses_reason_phrase() {
        assert_eq!(describe(Response::new("404", "-")).as_deref(), Some("Not Found"));
        assert_eq!(describe(Response::new("418", "")).as_deref(), Some("I'm a teapot"));
    }

    #[test]
    fn test_existing_description_is_kept() {
        assert_eq!(describe(Response::new("200", "Pets")).as_deref(), Some("Pets"));
    }

    #[test]
    fn test_unknown_code_left_alone() {
        assert_eq!(describe(Response::new("2XX", "-")), None);
    }
}
