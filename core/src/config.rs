#![deny(missing_docs)]

//! # Configuration
//!
//! The property tree read from YAML and its conversion into dockets.
//!
//! ```yaml
//! enabled: true
//! default:
//!   title: Petstore
//!   version: "2.0"
//! groups:
//!   - group: store
//!     paths: "^/store/.*"
//! parameters:
//!   - name: X-Request-Id
//!     in: header
//! ```

use crate::docket::Docket;
use crate::error::{AppError, AppResult};
use crate::service::{
    ApiInfo, Contact, ExternalDocumentation, HttpMethod, ModelSpecification, ParameterType,
    Response, ScalarType, SecurityReference, SecurityScheme, Server, Tag, VendorExtension,
};
use crate::spi::{DocumentationType, ParameterDescriptor};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsProperties {
    /// Master switch. When off, a single disabled default docket is produced.
    pub enabled: bool,
    /// The docket of the default group.
    pub default: Option<DocketProperties>,
    /// Named groups.
    pub groups: Vec<DocketProperties>,
    /// Parameters added to every group.
    pub parameters: Vec<ParameterDescriptor>,
}

impl Default for DocsProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            default: None,
            groups: Vec::new(),
            parameters: Vec::new(),
        }
    }
}

/// Properties of one docket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocketProperties {
    /// Selects the plugins that run for this docket.
    pub document_type: DocumentationType,
    /// Disabled groups are left out.
    pub enable: bool,
    /// Group name. The default docket falls back to `default`.
    pub group: Option<String>,
    /// API title.
    pub title: Option<String>,
    /// API version.
    pub version: Option<String>,
    /// API description.
    pub description: Option<String>,
    /// Contact name.
    pub contact_name: Option<String>,
    /// Contact URL.
    pub contact_url: Option<String>,
    /// Contact e-mail.
    pub contact_email: Option<String>,
    /// License name.
    pub license: Option<String>,
    /// License URL.
    pub license_url: Option<String>,
    /// Terms of service URL.
    pub terms_of_service_url: Option<String>,
    /// Regex selecting the documented paths.
    pub paths: Option<String>,
    /// Prepended to every documented path.
    pub path_mapping: Option<String>,
    /// Servers; inferred per request when absent.
    pub servers: Option<Vec<Server>>,
    /// Tags described up front.
    pub tags: Vec<Tag>,
    /// Security schemes.
    pub security_schemes: Option<Vec<SecurityScheme>>,
    /// Applied to operations that declare none.
    pub security_references: Vec<SecurityReference>,
    /// Whether the built-in per-method responses are documented.
    pub use_default_responses: bool,
    /// Responses added to every operation of a method.
    pub responses: IndexMap<HttpMethod, Vec<Response>>,
    /// Host.
    pub host: Option<String>,
    /// Default produced media types.
    pub produces: Vec<String>,
    /// Default consumed media types.
    pub consumes: Vec<String>,
    /// Protocols.
    pub protocols: Vec<String>,
    /// External documentation.
    pub external_docs: Option<ExternalDocumentation>,
    /// Vendor extensions of the document.
    pub extensions: Vec<VendorExtension>,
    /// Parameters added to this group only, after the global ones.
    pub parameters: Vec<ParameterDescriptor>,
}

impl Default for DocketProperties {
    fn default() -> Self {
        Self {
            document_type: DocumentationType::Oas30,
            enable: true,
            group: None,
            title: None,
            version: None,
            description: None,
            contact_name: None,
            contact_url: None,
            contact_email: None,
            license: None,
            license_url: None,
            terms_of_service_url: None,
            paths: None,
            path_mapping: None,
            servers: None,
            tags: Vec::new(),
            security_schemes: None,
            security_references: Vec::new(),
            use_default_responses: true,
            responses: IndexMap::new(),
            host: None,
            produces: Vec::new(),
            consumes: Vec::new(),
            protocols: Vec::new(),
            external_docs: None,
            extensions: Vec::new(),
            parameters: Vec::new(),
        }
    }
}

impl DocsProperties {
    /// Parses a YAML (or JSON) document.
    pub fn from_yaml_str(input: &str) -> AppResult<Self> {
        crate::from_yaml_str(input)
    }

    /// Reads and parses a configuration file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Converts the properties into dockets.
    ///
    /// The default docket comes first, then every enabled group. Without
    /// groups, a default docket is produced even when none is configured.
    pub fn into_dockets(self) -> AppResult<Vec<Docket>> {
        if !self.enabled {
            debug!("Documentation disabled by configuration");
            return Ok(vec![Docket::new(DocumentationType::Oas30).enable(false)]);
        }
        let default = match self.default {
            Some(default) => Some(default),
            None if self.groups.is_empty() => Some(DocketProperties::default()),
            None => None,
        };
        let mut dockets = Vec::new();
        if let Some(default) = default {
            dockets.push(default.into_docket(&self.parameters));
        }
        for group in self.groups {
            let name = group.group.clone().unwrap_or_default();
            if name.is_empty() {
                return Err(AppError::Config(
                    "Every entry of 'groups' needs a group name".into(),
                ));
            }
            if !group.enable {
                debug!(group = %name, "Skipping disabled group");
                continue;
            }
            dockets.push(group.into_docket(&self.parameters));
        }
        Ok(dockets)
    }
}

impl DocketProperties {
    fn api_info(&self) -> Option<ApiInfo> {
        let any = [
            &self.title,
            &self.version,
            &self.description,
            &self.contact_name,
            &self.contact_url,
            &self.contact_email,
            &self.license,
            &self.license_url,
            &self.terms_of_service_url,
        ]
        .iter()
        .any(|field| field.is_some());
        if !any {
            return None;
        }
        let defaults = ApiInfo::default();
        let contact = Contact {
            name: self.contact_name.clone(),
            url: self.contact_url.clone(),
            email: self.contact_email.clone(),
        };
        Some(ApiInfo {
            title: self.title.clone().unwrap_or(defaults.title),
            description: self.description.clone().or(defaults.description),
            version: self.version.clone().unwrap_or(defaults.version),
            terms_of_service_url: self
                .terms_of_service_url
                .clone()
                .or(defaults.terms_of_service_url),
            contact: Some(contact),
            license: self.license.clone().or(defaults.license),
            license_url: self.license_url.clone().or(defaults.license_url),
            vendor_extensions: Vec::new(),
        })
    }

    fn into_docket(self, global_parameters: &[ParameterDescriptor]) -> Docket {
        let api_info = self.api_info();
        let parameters: Vec<_> = global_parameters
            .iter()
            .chain(&self.parameters)
            .map(configured_parameter)
            .collect();
        let mut docket = Docket::new(self.document_type)
            .enable(self.enable)
            .tags(self.tags)
            .use_default_responses(self.use_default_responses)
            .global_request_parameters(parameters)
            .security_references(self.security_references)
            .produces(self.produces)
            .consumes(self.consumes)
            .protocols(self.protocols)
            .extensions(self.extensions);
        if let Some(group) = self.group {
            docket = docket.group_name(group);
        }
        if let Some(info) = api_info {
            docket = docket.api_info(info);
        }
        if let Some(paths) = self.paths {
            docket = docket.paths(paths);
        }
        if let Some(mapping) = self.path_mapping {
            docket = docket.path_mapping(mapping);
        }
        if let Some(servers) = self.servers {
            docket = docket.servers(servers);
        }
        if let Some(schemes) = self.security_schemes {
            docket = docket.security_schemes(schemes);
        }
        if let Some(host) = self.host {
            docket = docket.host(host);
        }
        if let Some(docs) = self.external_docs {
            docket = docket.external_docs(docs);
        }
        for (method, responses) in self.responses {
            docket = docket.global_responses(method, responses);
        }
        docket
    }
}

/// Fills what a configured parameter leaves out: a required string that
/// never allows reserved characters. Query parameters also accept empty
/// values. A declared `content` keeps the model absent.
fn configured_parameter(parameter: &ParameterDescriptor) -> ParameterDescriptor {
    let mut parameter = parameter.clone();
    if parameter.model.is_none() && parameter.content.is_none() {
        parameter.model = Some(ModelSpecification::scalar(ScalarType::String));
    }
    parameter.required.get_or_insert(true);
    parameter.allow_reserved.get_or_insert(false);
    if parameter.in_ == ParameterType::Query {
        parameter.allow_empty_value.get_or_insert(true);
    }
    parameter
}
