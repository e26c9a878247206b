//! Builds the operations of one handler pattern: parameters first, then the
//! request body and responses, then the operation plugins.

use crate::manager::DocumentationPluginsManager;
use crate::scanners::OperationNameGenerator;
use crate::service::{
    CompoundModelSpecification, Encoding, HttpMethod, ModelKey, ModelSpecification, Operation,
    ParameterType, PropertySpecification, Representation, RequestBody, RequestParameter,
    ScalarType,
};
use crate::spi::{
    DocumentationContext, OperationContext, ParameterContext, RequestHandler, ResponseContext,
};
use heck::ToUpperCamelCase;
use tracing::debug;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";
const APPLICATION_JSON: &str = "application/json";

/// Reads the operations of handlers.
#[derive(Debug, Clone)]
pub struct ApiOperationReader {
    manager: DocumentationPluginsManager,
}

impl ApiOperationReader {
    /// Creates a reader over a manager.
    pub fn new(manager: DocumentationPluginsManager) -> Self {
        Self { manager }
    }

    /// One operation per documented method of the handler.
    pub fn read(
        &self,
        documentation: &DocumentationContext,
        handler: &RequestHandler,
        pattern: &str,
        names: &mut OperationNameGenerator,
    ) -> Vec<Operation> {
        handler
            .documented_methods()
            .into_iter()
            .map(|method| self.operation(documentation, handler, pattern, method, names))
            .collect()
    }

    fn operation(
        &self,
        documentation: &DocumentationContext,
        handler: &RequestHandler,
        pattern: &str,
        method: HttpMethod,
        names: &mut OperationNameGenerator,
    ) -> Operation {
        debug!(handler = %handler.name, %method, pattern, "Reading operation");
        let parameters: Vec<RequestParameter> = documentation
            .global_parameters
            .iter()
            .chain(&handler.parameters)
            .map(|descriptor| {
                self.manager.parameter(ParameterContext::new(
                    descriptor,
                    documentation,
                    handler,
                    pattern,
                ))
            })
            .collect();
        let responses: Vec<_> = handler
            .responses
            .iter()
            .map(|declared| {
                self.manager
                    .response(ResponseContext::new(declared, documentation, handler, method))
            })
            .collect();
        let consumes: Vec<String> = if handler.consumes.is_empty() {
            documentation.consumes.iter().cloned().collect()
        } else {
            handler.consumes.clone()
        };
        let body = request_body(handler, &parameters, &consumes);

        let mut context = OperationContext::new(documentation, handler, pattern, method);
        context
            .operation_builder()
            .unique_id(names.next(&handler.name, method))
            .request_parameters(parameters)
            .body(body)
            .responses(responses);
        self.manager.operation(context)
    }
}

/// Merges body, form and form-data parameters into one request body.
///
/// A body parameter contributes its content representations, or its model
/// under every consumed media type. Form fields become the properties of a
/// compound model named after the handler.
pub fn request_body(
    handler: &RequestHandler,
    parameters: &[RequestParameter],
    consumes: &[String],
) -> Option<RequestBody> {
    let visible: Vec<&RequestParameter> = parameters
        .iter()
        .filter(|p| p.in_.is_body() && !p.hidden)
        .collect();
    if visible.is_empty() {
        return None;
    }

    let mut body = RequestBody {
        required: visible
            .iter()
            .any(|p| p.required == Some(true))
            .then_some(true),
        ..Default::default()
    };

    for parameter in visible.iter().filter(|p| p.in_ == ParameterType::Body) {
        body.description = body.description.or_else(|| parameter.description.clone());
        body.extensions.extend(parameter.extensions.iter().cloned());
        let spec = &parameter.parameter_specification;
        match &spec.content {
            Some(content) => body
                .representations
                .extend(content.representations.iter().cloned()),
            None => {
                let model = spec.query.as_ref().and_then(|q| q.model.clone());
                let media_types: Vec<&str> = if consumes.is_empty() {
                    vec![APPLICATION_JSON]
                } else {
                    consumes.iter().map(String::as_str).collect()
                };
                body.representations
                    .extend(media_types.into_iter().map(|media_type| Representation {
                        media_type: media_type.to_string(),
                        model: model.clone(),
                        encodings: Vec::new(),
                    }));
            }
        }
    }

    let fields: Vec<&RequestParameter> = visible
        .iter()
        .copied()
        .filter(|p| matches!(p.in_, ParameterType::Form | ParameterType::FormData))
        .collect();
    if !fields.is_empty() {
        let media_type = if fields.iter().any(|p| p.in_ == ParameterType::FormData) {
            MULTIPART_FORM_DATA
        } else {
            FORM_URLENCODED
        };
        body.representations.push(form_representation(handler, media_type, &fields));
    }

    Some(body)
}

fn form_representation(
    handler: &RequestHandler,
    media_type: &str,
    fields: &[&RequestParameter],
) -> Representation {
    let properties = fields
        .iter()
        .map(|p| PropertySpecification {
            name: p.name.clone(),
            model: p
                .parameter_specification
                .query
                .as_ref()
                .and_then(|q| q.model.clone())
                .unwrap_or(ModelSpecification::Scalar(ScalarType::String)),
            description: p.description.clone(),
            required: p.required == Some(true),
            example: None,
        })
        .collect();
    let encodings = fields.iter().filter_map(|p| field_encoding(p)).collect();
    let key = ModelKey::qualified(
        handler.resource.clone(),
        format!("{}Form", handler.name.to_upper_camel_case()),
    );
    Representation {
        media_type: media_type.to_string(),
        model: Some(ModelSpecification::Compound(CompoundModelSpecification {
            key,
            properties,
            description: None,
            extensions: Vec::new(),
        })),
        encodings,
    }
}

/// Encoding of a form field, present only when the field declares
/// something beyond the defaults.
fn field_encoding(parameter: &RequestParameter) -> Option<Encoding> {
    let spec = &parameter.parameter_specification;
    let content_type = spec
        .content
        .as_ref()
        .and_then(|c| c.representations.first())
        .map(|r| r.media_type.clone());
    let simple = spec.query.as_ref();
    let style = simple.and_then(|q| q.style);
    let explode = simple.and_then(|q| q.explode);
    let allow_reserved = simple.and_then(|q| q.allow_reserved);
    if content_type.is_none() && style.is_none() && explode.is_none() && allow_reserved.is_none() {
        return None;
    }
    Some(Encoding {
        property_ref: parameter.name.clone(),
        content_type,
        style,
        explode,
        allow_reserved,
        headers: Vec::new(),
        extensions: parameter.extensions.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::RequestParameterBuilder;
    use crate::service::ParameterStyle;

    fn handler() -> RequestHandler {
        crate::from_yaml_str("name: addPet\nresource: PetController\npatterns: [\"/pets\"]").unwrap()
    }

    fn parameter(name: &str, in_: ParameterType, required: Option<bool>) -> RequestParameter {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name(name)
            .in_(in_)
            .required(required)
            .query(|q| {
                q.model(Some(ModelSpecification::scalar(ScalarType::String)));
            });
        builder.build()
    }

    #[test]
    fn test_no_body_parameters_means_no_body() {
        let params = vec![parameter("q", ParameterType::Query, None)];
        assert_eq!(request_body(&handler(), &params, &[]), None);
    }

    #[test]
    fn test_body_model_repeated_per_consumed_media_type() {
        let params = vec![parameter("pet", ParameterType::Body, Some(true))];
        let consumes = vec!["application/json".to_string(), "application/xml".to_string()];
        let body = request_body(&handler(), &params, &consumes).unwrap();
        assert_eq!(body.required, Some(true));
        let media: Vec<_> = body.representations.iter().map(|r| r.media_type.as_str()).collect();
        assert_eq!(media, vec!["application/json", "application/xml"]);
    }

    #[test]
    fn test_form_fields_merge_into_one_model() {
        let mut file = RequestParameterBuilder::new();
        file.name("file")
            .in_(ParameterType::FormData)
            .query(|q| {
                q.model(Some(ModelSpecification::scalar(ScalarType::Binary)))
                    .style(Some(ParameterStyle::Form));
            });
        let params = vec![parameter("name", ParameterType::FormData, Some(true)), file.build()];
        let body = request_body(&handler(), &params, &[]).unwrap();
        assert_eq!(body.representations.len(), 1);
        let representation = &body.representations[0];
        assert_eq!(representation.media_type, MULTIPART_FORM_DATA);
        match &representation.model {
            Some(ModelSpecification::Compound(c)) => {
                assert_eq!(c.key, ModelKey::qualified("PetController", "AddPetForm"));
                assert_eq!(c.properties.len(), 2);
                assert!(c.properties[0].required);
            }
            other => panic!("unexpected model {other:?}"),
        }
        assert_eq!(representation.encodings.len(), 1);
        assert_eq!(representation.encodings[0].property_ref, "file");
    }
}
