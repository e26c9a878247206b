//! Operation readers: copy handler metadata into the operation draft.

use crate::service::Response;
use crate::spi::{DocumentationType, OperationBuilderPlugin, OperationContext, Plugin};
use heck::ToKebabCase;
use std::collections::BTreeSet;

/// Summary, notes and position.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationSummaryReader;

impl Plugin for OperationSummaryReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationSummaryReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let handler = context.handler();
        let summary = handler.summary.clone().or_else(|| Some(handler.name.clone()));
        context
            .operation_builder()
            .summary(summary)
            .notes(handler.notes.clone())
            .position(handler.position);
    }
}

/// Explicit tags, or the resource name in kebab case.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationTagsReader;

impl Plugin for OperationTagsReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationTagsReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let handler = context.handler();
        let tags: BTreeSet<String> = if handler.tags.is_empty() {
            BTreeSet::from([handler.resource.to_kebab_case()])
        } else {
            handler.tags.iter().cloned().collect()
        };
        context.operation_builder().tags(tags);
    }
}

/// Consumed and produced media types; the handler's own, else the docket's.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationMediaTypeReader;

impl Plugin for OperationMediaTypeReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationMediaTypeReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let handler = context.handler();
        let docs = context.documentation_context();
        let pick = |own: &[String], fallback: &BTreeSet<String>| -> BTreeSet<String> {
            if own.is_empty() {
                fallback.clone()
            } else {
                own.iter().map(|m| m.trim().to_string()).collect()
            }
        };
        let consumes = pick(&handler.consumes, &docs.consumes);
        let produces = pick(&handler.produces, &docs.produces);
        context
            .operation_builder()
            .consumes(consumes)
            .produces(produces);
    }
}

/// Deprecation flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationDeprecatedReader;

impl Plugin for OperationDeprecatedReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationDeprecatedReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let deprecated = context.handler().deprecated;
        context.operation_builder().deprecated(deprecated);
    }
}

/// Security references; the handler's own, else the docket's.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationSecurityReader;

impl Plugin for OperationSecurityReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationSecurityReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let references = if context.handler().security_references.is_empty() {
            context.documentation_context().security_references.clone()
        } else {
            context.handler().security_references.clone()
        };
        context.operation_builder().security_references(references);
    }
}

/// Vendor extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperationExtensionsReader;

impl Plugin for OperationExtensionsReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for OperationExtensionsReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let extensions = context.handler().vendor_extensions.clone();
        context.operation_builder().vendor_extensions(extensions);
    }
}

/// Global responses of the docket for the operation's method. Responses
/// the handler declares win on equal code.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultResponseMessagesReader;

impl Plugin for DefaultResponseMessagesReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl OperationBuilderPlugin for DefaultResponseMessagesReader {
    fn apply(&self, context: &mut OperationContext<'_>) {
        let Some(globals) = context
            .documentation_context()
            .global_responses
            .get(&context.method())
        else {
            return;
        };
        let builder = context.operation_builder();
        let declared: BTreeSet<String> = builder.response_codes().map(str::to_string).collect();
        let missing: Vec<Response> = globals
            .iter()
            .filter(|r| !declared.contains(r.response_key()))
            .cloned()
            .collect();
        builder.responses(missing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::DocumentationContextBuilder;
    use crate::service::HttpMethod;
    use crate::spi::{DocumentationContext, RequestHandler};

    fn handler(yaml: &str) -> RequestHandler {
        crate::from_yaml_str(yaml).unwrap()
    }

    fn docs() -> DocumentationContext {
        let mut builder = DocumentationContextBuilder::new(DocumentationType::Oas30);
        builder
            .global_responses(
                HttpMethod::Get,
                vec![Response::new("200", "OK"), Response::new("404", "Not Found")],
            )
            .produces(["application/xml".to_string()]);
        builder.build().unwrap()
    }

    #[test]
    fn test_tags_default_to_kebab_resource() {
        let docs = docs();
        let h = handler("name: list\nresource: PetStoreController\npatterns: [\"/p\"]");
        let mut ctx = OperationContext::new(&docs, &h, "/p", HttpMethod::Get);
        OperationTagsReader.apply(&mut ctx);
        let op = ctx.into_builder().build();
        assert_eq!(
            op.tags.into_iter().collect::<Vec<_>>(),
            vec!["pet-store-controller"]
        );
    }

    #[test]
    fn test_media_types_fall_back_to_docket() {
        let docs = docs();
        let h = handler("name: list\nresource: R\npatterns: [\"/p\"]\nconsumes: [\" application/json \"]");
        let mut ctx = OperationContext::new(&docs, &h, "/p", HttpMethod::Get);
        OperationMediaTypeReader.apply(&mut ctx);
        let op = ctx.into_builder().build();
        assert!(op.consumes.contains("application/json"));
        assert!(op.produces.contains("application/xml"));
    }

    #[test]
    fn test_declared_responses_win_over_globals() {
        let docs = docs();
        let h = handler("name: list\nresource: R\npatterns: [\"/p\"]");
        let mut ctx = OperationContext::new(&docs, &h, "/p", HttpMethod::Get);
        ctx.operation_builder()
            .responses([Response::new("404", "No such pet")]);
        DefaultResponseMessagesReader.apply(&mut ctx);
        let op = ctx.into_builder().build();
        let described: Vec<_> = op
            .responses
            .iter()
            .map(|r| r.description.clone().unwrap_or_default())
            .collect();
        assert_eq!(described, vec!["OK", "No such pet"]);
    }

    #[test]
    fn test_summary_falls_back_to_handler_name() {
        let docs = docs();
        let h = handler("name: findPets\nresource: R\npatterns: [\"/p\"]");
        let mut ctx = OperationContext::new(&docs, &h, "/p", HttpMethod::Get);
        OperationSummaryReader.apply(&mut ctx);
        assert_eq!(ctx.into_builder().build().summary.as_deref(), Some("findPets"));
    }
}
