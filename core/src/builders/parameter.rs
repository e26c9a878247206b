//! # Parameter Drafts
//!
//! Draft builders for request parameters. `build()` runs the style
//! resolver, so every finished parameter carries a resolved specification.

use crate::builders::specification::{
    ParameterSpecificationContext, ParameterSpecificationProvider,
    RootParameterSpecificationProvider,
};
use crate::service::{
    CollectionFormat, ContentSpecification, Example, ModelSpecification, ParameterStyle,
    ParameterType, Representation, RequestParameter, SimpleParameterSpecification,
    VendorExtension,
};

/// Draft of the simple (URL/header/cookie) branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleParameterSpecificationBuilder {
    model: Option<ModelSpecification>,
    style: Option<ParameterStyle>,
    explode: Option<bool>,
    allow_reserved: Option<bool>,
    allow_empty_value: Option<bool>,
    collection_format: Option<CollectionFormat>,
    default_value: Option<String>,
}

impl SimpleParameterSpecificationBuilder {
    /// Sets the value model.
    pub fn model(&mut self, model: Option<ModelSpecification>) -> &mut Self {
        self.model = model;
        self
    }

    /// Sets the style.
    pub fn style(&mut self, style: Option<ParameterStyle>) -> &mut Self {
        self.style = style;
        self
    }

    /// Sets the explode flag.
    pub fn explode(&mut self, explode: Option<bool>) -> &mut Self {
        self.explode = explode;
        self
    }

    /// Sets allow-reserved.
    pub fn allow_reserved(&mut self, allow_reserved: Option<bool>) -> &mut Self {
        self.allow_reserved = allow_reserved;
        self
    }

    /// Sets allow-empty-value.
    pub fn allow_empty_value(&mut self, allow_empty_value: Option<bool>) -> &mut Self {
        self.allow_empty_value = allow_empty_value;
        self
    }

    /// Sets the collection format. The resolver recomputes it on build.
    pub fn collection_format(&mut self, format: Option<CollectionFormat>) -> &mut Self {
        self.collection_format = format;
        self
    }

    /// Sets the default value.
    pub fn default_value(&mut self, default_value: Option<String>) -> &mut Self {
        self.default_value = default_value;
        self
    }

    /// Finalises the draft.
    pub fn build(&self) -> SimpleParameterSpecification {
        SimpleParameterSpecification {
            model: self.model.clone(),
            style: self.style,
            explode: self.explode,
            allow_reserved: self.allow_reserved,
            allow_empty_value: self.allow_empty_value,
            collection_format: self.collection_format,
            default_value: self.default_value.clone(),
        }
    }
}

/// Draft of the content (media type) branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentSpecificationBuilder {
    representations: Vec<Representation>,
    examples: Vec<Example>,
}

impl ContentSpecificationBuilder {
    /// Adds or replaces the representation for its media type.
    pub fn representation(&mut self, representation: Representation) -> &mut Self {
        match self
            .representations
            .iter_mut()
            .find(|r| r.media_type == representation.media_type)
        {
            Some(existing) => *existing = representation,
            None => self.representations.push(representation),
        }
        self
    }

    /// Replaces the examples.
    pub fn examples(&mut self, examples: Vec<Example>) -> &mut Self {
        self.examples = examples;
        self
    }

    /// Finalises the draft.
    pub fn build(&self) -> ContentSpecification {
        ContentSpecification {
            representations: self.representations.clone(),
            examples: self.examples.clone(),
        }
    }
}

/// Draft of a [`RequestParameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParameterBuilder {
    name: Option<String>,
    in_: Option<ParameterType>,
    description: Option<String>,
    required: Option<bool>,
    deprecated: Option<bool>,
    hidden: Option<bool>,
    order: Option<i32>,
    examples: Option<Vec<Example>>,
    extensions: Vec<VendorExtension>,
    simple: SimpleParameterSpecificationBuilder,
    content: Option<ContentSpecificationBuilder>,
}

impl RequestParameterBuilder {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the location.
    pub fn in_(&mut self, in_: ParameterType) -> &mut Self {
        self.in_ = Some(in_);
        self
    }

    /// Sets the description.
    pub fn description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Sets required.
    pub fn required(&mut self, required: Option<bool>) -> &mut Self {
        self.required = required;
        self
    }

    /// Sets deprecated.
    pub fn deprecated(&mut self, deprecated: Option<bool>) -> &mut Self {
        self.deprecated = deprecated;
        self
    }

    /// Sets hidden.
    pub fn hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = Some(hidden);
        self
    }

    /// Sets the sort precedence.
    pub fn order(&mut self, order: i32) -> &mut Self {
        self.order = Some(order);
        self
    }

    /// Replaces the examples.
    pub fn examples(&mut self, examples: Vec<Example>) -> &mut Self {
        self.examples = Some(examples);
        self
    }

    /// Appends vendor extensions.
    pub fn extensions(&mut self, extensions: impl IntoIterator<Item = VendorExtension>) -> &mut Self {
        self.extensions.extend(extensions);
        self
    }

    /// Edits the simple branch.
    pub fn query(&mut self, edit: impl FnOnce(&mut SimpleParameterSpecificationBuilder)) -> &mut Self {
        edit(&mut self.simple);
        self
    }

    /// Edits the content branch, creating it when absent.
    pub fn content(&mut self, edit: impl FnOnce(&mut ContentSpecificationBuilder)) -> &mut Self {
        edit(self.content.get_or_insert_with(Default::default));
        self
    }

    /// Current location, if set.
    pub fn location(&self) -> Option<ParameterType> {
        self.in_
    }

    /// Current required flag, if set.
    pub fn is_required(&self) -> Option<bool> {
        self.required
    }

    /// Finalises the draft and resolves its serialization rules.
    pub fn build(&self) -> RequestParameter {
        let in_ = self.in_.unwrap_or(ParameterType::Query);
        let name = self.name.clone().unwrap_or_default();
        let context = ParameterSpecificationContext {
            name: name.clone(),
            in_,
            simple: self.simple.build(),
            content: self.content.as_ref().map(ContentSpecificationBuilder::build),
        };
        RequestParameter {
            name,
            in_,
            description: self.description.clone(),
            required: self.required,
            deprecated: self.deprecated,
            hidden: self.hidden.unwrap_or(false),
            parameter_specification: RootParameterSpecificationProvider.create(&context),
            examples: self.examples.clone().unwrap_or_default(),
            order: self.order.unwrap_or(0),
            extensions: self.extensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ScalarType;

    #[test]
    fn test_build_resolves_style() {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name("ids")
            .in_(ParameterType::Query)
            .query(|q| {
                q.model(Some(ModelSpecification::list_of(ModelSpecification::scalar(
                    ScalarType::Long,
                ))));
            });
        let param = builder.build();
        let simple = param.parameter_specification.query.unwrap();
        assert_eq!(simple.style, Some(ParameterStyle::Form));
        assert_eq!(simple.collection_format, Some(CollectionFormat::Multi));
    }

    #[test]
    fn test_last_write_wins() {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name("a")
            .description(Some("first".into()))
            .description(Some("second".into()));
        assert_eq!(builder.build().description.as_deref(), Some("second"));
    }

    #[test]
    fn test_content_replaces_representation_by_media_type() {
        let mut builder = RequestParameterBuilder::new();
        builder.name("filter").content(|c| {
            c.representation(Representation {
                media_type: "application/json".into(),
                model: None,
                encodings: vec![],
            })
            .representation(Representation {
                media_type: "application/json".into(),
                model: Some(ModelSpecification::scalar(ScalarType::Object)),
                encodings: vec![],
            });
        });
        let content = builder.build().parameter_specification.content.unwrap();
        assert_eq!(content.representations.len(), 1);
        assert!(content.representations[0].model.is_some());
    }
}
