//! # Documentation Context Draft
//!
//! Collects docket configuration and defaults before a group is scanned.

use crate::error::AppResult;
use crate::service::{
    ApiInfo, ExternalDocumentation, HttpMethod, Response, SecurityReference, SecurityScheme,
    Server, Tag, VendorExtension,
};
use crate::spi::{DocumentationContext, DocumentationType, ParameterDescriptor, RequestHandler};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::BTreeSet;

/// Name used when a docket declares no group.
pub const DEFAULT_GROUP_NAME: &str = "default";

/// Draft of a [`DocumentationContext`].
#[derive(Debug, Clone)]
pub struct DocumentationContextBuilder {
    documentation_type: DocumentationType,
    group_name: Option<String>,
    handlers: Vec<RequestHandler>,
    api_info: Option<ApiInfo>,
    path_selector: Option<String>,
    path_mapping: Option<String>,
    servers: Option<Vec<Server>>,
    tags: Vec<Tag>,
    default_responses: IndexMap<HttpMethod, Vec<Response>>,
    global_responses: IndexMap<HttpMethod, Vec<Response>>,
    apply_default_responses: bool,
    global_parameters: Vec<ParameterDescriptor>,
    security_schemes: Option<Vec<SecurityScheme>>,
    security_references: Vec<SecurityReference>,
    produces: BTreeSet<String>,
    consumes: BTreeSet<String>,
    protocols: BTreeSet<String>,
    host: Option<String>,
    external_documentation: Option<ExternalDocumentation>,
    vendor_extensions: Vec<VendorExtension>,
}

impl DocumentationContextBuilder {
    /// Creates a draft for a documentation type.
    pub fn new(documentation_type: DocumentationType) -> Self {
        Self {
            documentation_type,
            group_name: None,
            handlers: Vec::new(),
            api_info: None,
            path_selector: None,
            path_mapping: None,
            servers: None,
            tags: Vec::new(),
            default_responses: IndexMap::new(),
            global_responses: IndexMap::new(),
            apply_default_responses: true,
            global_parameters: Vec::new(),
            security_schemes: None,
            security_references: Vec::new(),
            produces: BTreeSet::new(),
            consumes: BTreeSet::new(),
            protocols: BTreeSet::new(),
            host: None,
            external_documentation: None,
            vendor_extensions: Vec::new(),
        }
    }

    /// Documentation type of the draft.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation_type
    }

    /// Sets the group name.
    pub fn group_name(&mut self, group_name: Option<String>) -> &mut Self {
        self.group_name = group_name;
        self
    }

    /// Appends handlers.
    pub fn handlers(&mut self, handlers: impl IntoIterator<Item = RequestHandler>) -> &mut Self {
        self.handlers.extend(handlers);
        self
    }

    /// Sets the info block.
    pub fn api_info(&mut self, api_info: ApiInfo) -> &mut Self {
        self.api_info = Some(api_info);
        self
    }

    /// Sets the path selector regex.
    pub fn path_selector(&mut self, pattern: Option<String>) -> &mut Self {
        self.path_selector = pattern;
        self
    }

    /// Sets the path mapping prefix.
    pub fn path_mapping(&mut self, path_mapping: Option<String>) -> &mut Self {
        self.path_mapping = path_mapping;
        self
    }

    /// Sets the servers.
    pub fn servers(&mut self, servers: Option<Vec<Server>>) -> &mut Self {
        self.servers = servers;
        self
    }

    /// Adds tags, replacing any with the same name.
    pub fn tags(&mut self, tags: impl IntoIterator<Item = Tag>) -> &mut Self {
        for tag in tags {
            match self.tags.iter_mut().find(|t| t.name == tag.name) {
                Some(existing) => *existing = tag,
                None => self.tags.push(tag),
            }
        }
        self
    }

    /// Sets the built-in responses for a method.
    pub fn default_responses(&mut self, method: HttpMethod, responses: Vec<Response>) -> &mut Self {
        self.default_responses.insert(method, responses);
        self
    }

    /// Sets configured global responses for a method.
    pub fn global_responses(&mut self, method: HttpMethod, responses: Vec<Response>) -> &mut Self {
        self.global_responses.insert(method, responses);
        self
    }

    /// Whether built-in responses are combined with global responses.
    pub fn apply_default_responses(&mut self, apply: bool) -> &mut Self {
        self.apply_default_responses = apply;
        self
    }

    /// Appends parameters added to every handler.
    pub fn global_parameters(
        &mut self,
        parameters: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> &mut Self {
        self.global_parameters.extend(parameters);
        self
    }

    /// Sets the security schemes.
    pub fn security_schemes(&mut self, schemes: Option<Vec<SecurityScheme>>) -> &mut Self {
        self.security_schemes = schemes;
        self
    }

    /// Replaces the security references.
    pub fn security_references(&mut self, references: Vec<SecurityReference>) -> &mut Self {
        self.security_references = references;
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

    /// Adds protocols.
    pub fn protocols(&mut self, protocols: impl IntoIterator<Item = String>) -> &mut Self {
        self.protocols.extend(protocols);
        self
    }

    /// Sets the host.
    pub fn host(&mut self, host: Option<String>) -> &mut Self {
        self.host = host;
        self
    }

    /// Sets the external documentation.
    pub fn external_documentation(&mut self, docs: Option<ExternalDocumentation>) -> &mut Self {
        self.external_documentation = docs;
        self
    }

    /// Appends vendor extensions.
    pub fn vendor_extensions(
        &mut self,
        extensions: impl IntoIterator<Item = VendorExtension>,
    ) -> &mut Self {
        self.vendor_extensions.extend(extensions);
        self
    }

    /// Configured global responses merged over the defaults, configured
    /// entries winning on equal code.
    fn combined_responses(&self) -> IndexMap<HttpMethod, Vec<Response>> {
        let mut combined = if self.apply_default_responses {
            self.default_responses.clone()
        } else {
            IndexMap::new()
        };
        for (method, responses) in &self.global_responses {
            let entry = combined.entry(*method).or_default();
            for response in responses {
                match entry.iter_mut().find(|r| r.code == response.code) {
                    Some(existing) => *existing = response.clone(),
                    None => entry.push(response.clone()),
                }
            }
        }
        combined
    }

    /// Finalises the draft, compiling the path selector.
    pub fn build(&self) -> AppResult<DocumentationContext> {
        let path_selector = self
            .path_selector
            .as_deref()
            .map(Regex::new)
            .transpose()?;
        Ok(DocumentationContext {
            documentation_type: self.documentation_type,
            group_name: self
                .group_name
                .clone()
                .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string()),
            handlers: self.handlers.clone(),
            api_info: self.api_info.clone(),
            path_selector,
            path_mapping: self.path_mapping.clone(),
            servers: self.servers.clone(),
            tags: self.tags.clone(),
            global_responses: self.combined_responses(),
            global_parameters: self.global_parameters.clone(),
            security_schemes: self.security_schemes.clone(),
            security_references: self.security_references.clone(),
            produces: self.produces.clone(),
            consumes: self.consumes.clone(),
            protocols: self.protocols.clone(),
            host: self.host.clone(),
            external_documentation: self.external_documentation.clone(),
            vendor_extensions: self.vendor_extensions.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_group_defaults_to_default() {
        let ctx = DocumentationContextBuilder::new(DocumentationType::Oas30)
            .build()
            .unwrap();
        assert_eq!(ctx.group_name, DEFAULT_GROUP_NAME);
    }

    #[test]
    fn test_invalid_path_selector_is_reported() {
        let mut builder = DocumentationContextBuilder::new(DocumentationType::Oas30);
        builder.path_selector(Some("(".into()));
        assert!(matches!(builder.build(), Err(AppError::InvalidPattern(_))));
    }

    #[test]
    fn test_global_responses_override_defaults_by_code() {
        let mut builder = DocumentationContextBuilder::new(DocumentationType::Oas30);
        builder
            .default_responses(
                HttpMethod::Get,
                vec![Response::new("200", "OK"), Response::new("404", "Not Found")],
            )
            .global_responses(
                HttpMethod::Get,
                vec![
                    Response::new("404", "No such pet"),
                    Response::new("500", "Boom"),
                ],
            );
        let ctx = builder.build().unwrap();
        let get: Vec<_> = ctx.global_responses[&HttpMethod::Get]
            .iter()
            .map(|r| (r.code.as_str(), r.description.clone().unwrap_or_default()))
            .collect();
        assert_eq!(
            get,
            vec![
                ("200", "OK".to_string()),
                ("404", "No such pet".to_string()),
                ("500", "Boom".to_string())
            ]
        );
    }

    #[test]
    fn test_defaults_skipped_when_disabled() {
        let mut builder = DocumentationContextBuilder::new(DocumentationType::Oas30);
        builder
            .default_responses(HttpMethod::Get, vec![Response::new("200", "OK")])
            .apply_default_responses(false);
        let ctx = builder.build().unwrap();
        assert!(ctx.global_responses.is_empty());
    }
}
