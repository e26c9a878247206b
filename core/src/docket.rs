#![deny(missing_docs)]

//! # Docket
//!
//! The top-level configuration of one documentation group. A docket seeds
//! a [`DocumentationContextBuilder`] after the defaults providers ran, so
//! anything it sets overrides the defaults.

use crate::builders::{DocumentationContextBuilder, DEFAULT_GROUP_NAME};
use crate::service::{
    ApiInfo, ExternalDocumentation, HttpMethod, Response, SecurityReference, SecurityScheme,
    Server, Tag, VendorExtension,
};
use crate::spi::{DocumentationType, ParameterDescriptor};
use indexmap::IndexMap;

/// Configuration of one documentation group.
#[derive(Debug, Clone, PartialEq)]
pub struct Docket {
    documentation_type: DocumentationType,
    group_name: Option<String>,
    enabled: bool,
    api_info: Option<ApiInfo>,
    path_selector: Option<String>,
    path_mapping: Option<String>,
    servers: Option<Vec<Server>>,
    tags: Vec<Tag>,
    global_responses: IndexMap<HttpMethod, Vec<Response>>,
    use_default_responses: bool,
    global_parameters: Vec<ParameterDescriptor>,
    security_schemes: Option<Vec<SecurityScheme>>,
    security_references: Vec<SecurityReference>,
    produces: Vec<String>,
    consumes: Vec<String>,
    protocols: Vec<String>,
    host: Option<String>,
    external_documentation: Option<ExternalDocumentation>,
    vendor_extensions: Vec<VendorExtension>,
}

impl Docket {
    /// Creates a docket for a documentation type.
    pub fn new(documentation_type: DocumentationType) -> Self {
        Self {
            documentation_type,
            group_name: None,
            enabled: true,
            api_info: None,
            path_selector: None,
            path_mapping: None,
            servers: None,
            tags: Vec::new(),
            global_responses: IndexMap::new(),
            use_default_responses: true,
            global_parameters: Vec::new(),
            security_schemes: None,
            security_references: Vec::new(),
            produces: Vec::new(),
            consumes: Vec::new(),
            protocols: Vec::new(),
            host: None,
            external_documentation: None,
            vendor_extensions: Vec::new(),
        }
    }

    /// Sets the group name.
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = Some(group_name.into());
        self
    }

    /// Enables or disables the docket.
    pub fn enable(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the info block.
    pub fn api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = Some(api_info);
        self
    }

    /// Documents only paths matching `pattern`.
    pub fn paths(mut self, pattern: impl Into<String>) -> Self {
        self.path_selector = Some(pattern.into());
        self
    }

    /// Prepends `mapping` to every documented path.
    pub fn path_mapping(mut self, mapping: impl Into<String>) -> Self {
        self.path_mapping = Some(mapping.into());
        self
    }

    /// Sets the servers.
    pub fn servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = Some(servers);
        self
    }

    /// Adds tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Sets global responses for a method.
    pub fn global_responses(mut self, method: HttpMethod, responses: Vec<Response>) -> Self {
        self.global_responses.insert(method, responses);
        self
    }

    /// Whether built-in responses are documented.
    pub fn use_default_responses(mut self, apply: bool) -> Self {
        self.use_default_responses = apply;
        self
    }

    /// Adds parameters documented on every operation.
    pub fn global_request_parameters(
        mut self,
        parameters: impl IntoIterator<Item = ParameterDescriptor>,
    ) -> Self {
        self.global_parameters.extend(parameters);
        self
    }

    /// Sets the security schemes.
    pub fn security_schemes(mut self, schemes: Vec<SecurityScheme>) -> Self {
        self.security_schemes = Some(schemes);
        self
    }

    /// Sets the security references applied to operations without their own.
    pub fn security_references(mut self, references: Vec<SecurityReference>) -> Self {
        self.security_references = references;
        self
    }

    /// Adds produced media types.
    pub fn produces(mut self, media_types: impl IntoIterator<Item = String>) -> Self {
        self.produces.extend(media_types);
        self
    }

    /// Adds consumed media types.
    pub fn consumes(mut self, media_types: impl IntoIterator<Item = String>) -> Self {
        self.consumes.extend(media_types);
        self
    }

    /// Adds protocols.
    pub fn protocols(mut self, protocols: impl IntoIterator<Item = String>) -> Self {
        self.protocols.extend(protocols);
        self
    }

    /// Sets the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the external documentation.
    pub fn external_docs(mut self, docs: ExternalDocumentation) -> Self {
        self.external_documentation = Some(docs);
        self
    }

    /// Adds vendor extensions.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = VendorExtension>) -> Self {
        self.vendor_extensions.extend(extensions);
        self
    }

    /// Documentation type.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation_type
    }

    /// Group name, `"default"` when none was set.
    pub fn get_group_name(&self) -> &str {
        self.group_name.as_deref().unwrap_or(DEFAULT_GROUP_NAME)
    }

    /// Parameters added to every operation of the group.
    pub fn get_global_request_parameters(&self) -> &[ParameterDescriptor] {
        &self.global_parameters
    }

    /// Whether the docket is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Writes the docket configuration into a context draft.
    pub fn configure(&self, builder: &mut DocumentationContextBuilder) {
        builder
            .group_name(self.group_name.clone())
            .path_selector(self.path_selector.clone())
            .path_mapping(self.path_mapping.clone())
            .tags(self.tags.clone())
            .apply_default_responses(self.use_default_responses)
            .global_parameters(self.global_parameters.clone())
            .security_references(self.security_references.clone())
            .produces(self.produces.clone())
            .consumes(self.consumes.clone())
            .protocols(self.protocols.clone())
            .vendor_extensions(self.vendor_extensions.clone());
        if let Some(info) = &self.api_info {
            builder.api_info(info.clone());
        }
        if self.servers.is_some() {
            builder.servers(self.servers.clone());
        }
        if self.security_schemes.is_some() {
            builder.security_schemes(self.security_schemes.clone());
        }
        if self.host.is_some() {
            builder.host(self.host.clone());
        }
        if self.external_documentation.is_some() {
            builder.external_documentation(self.external_documentation.clone());
        }
        for (method, responses) in &self.global_responses {
            builder.global_responses(*method, responses.clone());
        }
    }
}

impl Default for Docket {
    fn default() -> Self {
        Docket::new(DocumentationType::Oas30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_group_reports_default() {
        assert_eq!(Docket::default().get_group_name(), "default");
        assert_eq!(Docket::default().group_name("v2").get_group_name(), "v2");
    }

    #[test]
    fn test_configure_overrides_defaults() {
        let mut builder = DocumentationContextBuilder::new(DocumentationType::Oas30);
        builder.api_info(ApiInfo::default());
        let mut info = ApiInfo::default();
        info.title = "Petstore".into();
        Docket::default()
            .group_name("pets")
            .api_info(info)
            .paths("^/pets.*")
            .configure(&mut builder);
        let ctx = builder.build().unwrap();
        assert_eq!(ctx.group_name, "pets");
        assert_eq!(ctx.api_info.clone().map(|i| i.title), Some("Petstore".to_string()));
        assert!(ctx.selects("/pets/1"));
        assert!(!ctx.selects("/stores"));
    }
}
