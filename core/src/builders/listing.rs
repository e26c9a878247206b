//! # API Listing Draft

use crate::service::{
    ApiDescription, ApiListing, CompoundModelSpecification, ModelKey, SecurityReference, Tag,
};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Draft of an [`ApiListing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiListingBuilder {
    api_version: Option<String>,
    base_path: Option<String>,
    resource_path: Option<String>,
    description: Option<String>,
    produces: BTreeSet<String>,
    consumes: BTreeSet<String>,
    host: Option<String>,
    protocols: BTreeSet<String>,
    security_references: Vec<SecurityReference>,
    apis: Vec<ApiDescription>,
    models: IndexMap<ModelKey, CompoundModelSpecification>,
    tag_names: BTreeSet<String>,
    available_tags: Vec<Tag>,
    position: Option<i32>,
}

impl ApiListingBuilder {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    pub fn api_version(&mut self, api_version: Option<String>) -> &mut Self {
        self.api_version = api_version;
        self
    }

    /// Sets the base path.
    pub fn base_path(&mut self, base_path: Option<String>) -> &mut Self {
        self.base_path = base_path;
        self
    }

    /// Sets the resource path.
    pub fn resource_path(&mut self, resource_path: impl Into<String>) -> &mut Self {
        self.resource_path = Some(resource_path.into());
        self
    }

    /// Sets the description.
    pub fn description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Adds produced media types.
    pub fn produces(&mut self, media_types: impl IntoIterator<Item = String>) -> &mut Self {
        self.produces.extend(media_types);
        self
    }

    /// Adds consumed media types.
    pub fn consumes(&mut self, media_types: impl IntoIterator<Item = String>) -> &mut Self {
        self.consumes.extend(media_types);
        self
    }

    /// Sets the host.
    pub fn host(&mut self, host: Option<String>) -> &mut Self {
        self.host = host;
        self
    }

    /// Adds protocols.
    pub fn protocols(&mut self, protocols: impl IntoIterator<Item = String>) -> &mut Self {
        self.protocols.extend(protocols);
        self
    }

    /// Replaces the security references.
    pub fn security_references(&mut self, references: Vec<SecurityReference>) -> &mut Self {
        self.security_references = references;
        self
    }

    /// Replaces the API descriptions.
    pub fn apis(&mut self, apis: Vec<ApiDescription>) -> &mut Self {
        self.apis = apis;
        self
    }

    /// API descriptions set so far.
    pub fn current_apis(&self) -> &[ApiDescription] {
        &self.apis
    }

    /// Adds models, replacing any with the same key.
    pub fn models(
        &mut self,
        models: impl IntoIterator<Item = (ModelKey, CompoundModelSpecification)>,
    ) -> &mut Self {
        self.models.extend(models);
        self
    }

    /// Adds tag names.
    pub fn tag_names(&mut self, names: impl IntoIterator<Item = String>) -> &mut Self {
        self.tag_names.extend(names);
        self
    }

    /// Tags whose descriptions are used for matching tag names.
    pub fn available_tags(&mut self, tags: Vec<Tag>) -> &mut Self {
        self.available_tags = tags;
        self
    }

    /// Sets the position.
    pub fn position(&mut self, position: i32) -> &mut Self {
        self.position = Some(position);
        self
    }

    /// Finalises the draft. Tag names are resolved against the available
    /// tags; APIs are ordered by path.
    pub fn build(&self) -> ApiListing {
        let tags = self
            .tag_names
            .iter()
            .map(|name| {
                self.available_tags
                    .iter()
                    .find(|t| &t.name == name)
                    .cloned()
                    .unwrap_or_else(|| Tag {
                        name: name.clone(),
                        description: None,
                        order: 0,
                        vendor_extensions: Vec::new(),
                    })
            })
            .collect();
        let mut apis = self.apis.clone();
        apis.sort_by(|a, b| a.path.cmp(&b.path));
        ApiListing {
            api_version: self.api_version.clone(),
            base_path: self.base_path.clone(),
            resource_path: self.resource_path.clone().unwrap_or_else(|| "/".into()),
            description: self.description.clone(),
            produces: self.produces.clone(),
            consumes: self.consumes.clone(),
            host: self.host.clone(),
            protocols: self.protocols.clone(),
            security_references: self.security_references.clone(),
            apis,
            models: self.models.clone(),
            tags,
            position: self.position.unwrap_or(0),
        }
    }
}
