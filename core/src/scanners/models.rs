//! Collects the compound models reachable from operations.

use crate::service::{
    CompoundModelSpecification, Header, ModelKey, ModelSpecification, Operation, Representation,
};
use indexmap::IndexMap;

fn visit_model(model: &ModelSpecification, models: &mut IndexMap<ModelKey, CompoundModelSpecification>) {
    model.visit_compounds(&mut |compound| {
        models
            .entry(compound.key.clone())
            .or_insert_with(|| compound.clone());
    });
}

fn visit_representations(
    representations: &[Representation],
    models: &mut IndexMap<ModelKey, CompoundModelSpecification>,
) {
    for representation in representations {
        if let Some(model) = &representation.model {
            visit_model(model, models);
        }
        for encoding in &representation.encodings {
            visit_headers(&encoding.headers, models);
        }
    }
}

fn visit_headers(headers: &[Header], models: &mut IndexMap<ModelKey, CompoundModelSpecification>) {
    for header in headers {
        if let Some(model) = &header.model {
            visit_model(model, models);
        }
    }
}

/// Every compound model used by the operations, first occurrence wins.
pub fn collect_models<'a>(
    operations: impl IntoIterator<Item = &'a Operation>,
) -> IndexMap<ModelKey, CompoundModelSpecification> {
    let mut models = IndexMap::new();
    for operation in operations {
        for parameter in &operation.request_parameters {
            let spec = &parameter.parameter_specification;
            if let Some(model) = spec.query.as_ref().and_then(|q| q.model.as_ref()) {
                visit_model(model, &mut models);
            }
            if let Some(content) = &spec.content {
                visit_representations(&content.representations, &mut models);
            }
        }
        if let Some(body) = &operation.body {
            visit_representations(&body.representations, &mut models);
        }
        for response in &operation.responses {
            visit_representations(&response.representations, &mut models);
            visit_headers(&response.headers, &mut models);
        }
    }
    models
}
