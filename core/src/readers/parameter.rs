//! Parameter readers.

use crate::service::{ParameterType, Representation};
use crate::spi::{DocumentationType, ParameterBuilderPlugin, ParameterContext, Plugin};

/// Copies the declared parameter into the draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterDescriptorReader;

impl Plugin for ParameterDescriptorReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ParameterBuilderPlugin for ParameterDescriptorReader {
    fn apply(&self, context: &mut ParameterContext<'_>) {
        let d = context.descriptor();
        let builder = context.request_parameter_builder();
        builder
            .name(d.name.clone())
            .in_(d.in_)
            .description(d.description.clone())
            .required(d.required)
            .deprecated(d.deprecated)
            .hidden(d.hidden)
            .order(d.order)
            .examples(d.examples.clone())
            .extensions(d.extensions.clone())
            .query(|q| {
                q.model(d.model.clone())
                    .style(d.style)
                    .explode(d.explode)
                    .allow_reserved(d.allow_reserved)
                    .allow_empty_value(d.allow_empty_value)
                    .default_value(d.default_value.clone());
            });
        if let Some(representations) = &d.content {
            builder.content(|c| {
                for representation in representations {
                    c.representation(Representation::clone(representation));
                }
                c.examples(d.examples.clone());
            });
        }
    }
}

/// Path parameters are always required.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathParameterRequiredReader;

impl Plugin for PathParameterRequiredReader {
    fn supports(&self, _documentation_type: DocumentationType) -> bool {
        true
    }
}

impl ParameterBuilderPlugin for PathParameterRequiredReader {
    fn apply(&self, context: &mut ParameterContext<'_>) {
        let builder = context.request_parameter_builder();
        if builder.location() == Some(ParameterType::Path) {
            builder.required(Some(true));
        }
    }
}
