#![deny(missing_docs)]

//! # Documentation Tree
//!
//! The top of the service model: one `Documentation` per docket group,
//! holding resource listings, API listings and their descriptions.

use crate::service::{
    CompoundModelSpecification, ExternalDocumentation, ModelKey, Operation, Server, Tag,
    VendorExtension,
};
use crate::spi::ModelNamesRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contact details of the API owner.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL.
    #[serde(default)]
    pub url: Option<String>,
    /// E-mail.
    #[serde(default)]
    pub email: Option<String>,
}

impl Contact {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.email.is_none()
    }
}

/// General information about the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// API version.
    pub version: String,
    /// Terms of service URL.
    #[serde(default)]
    pub terms_of_service_url: Option<String>,
    /// Contact.
    #[serde(default)]
    pub contact: Option<Contact>,
    /// License name.
    #[serde(default)]
    pub license: Option<String>,
    /// License URL.
    #[serde(default)]
    pub license_url: Option<String>,
    /// Vendor extensions.
    #[serde(default)]
    pub vendor_extensions: Vec<VendorExtension>,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Api Documentation".into(),
            description: Some("Api Documentation".into()),
            version: "1.0".into(),
            terms_of_service_url: Some("urn:tos".into()),
            contact: Some(Contact::default()),
            license: Some("Apache 2.0".into()),
            license_url: Some("http://www.apache.org/licenses/LICENSE-2.0".into()),
            vendor_extensions: Vec::new(),
        }
    }
}

/// An OAuth scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationScope {
    /// Scope name.
    pub scope: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// A requirement that an operation be secured by a named scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityReference {
    /// Name of the security scheme.
    pub reference: String,
    /// Required scopes.
    #[serde(default)]
    pub scopes: Vec<AuthorizationScope>,
}

/// Where an API key travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyLocation {
    /// Header.
    Header,
    /// Query string.
    Query,
    /// Cookie.
    Cookie,
}

/// Kind of an OAuth 2 flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthFlowKind {
    /// Implicit grant.
    Implicit,
    /// Resource owner password grant.
    Password,
    /// Client credentials grant.
    ClientCredentials,
    /// Authorization code grant.
    AuthorizationCode,
}

/// A single OAuth 2 flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlow {
    /// Grant kind.
    pub kind: OAuthFlowKind,
    /// Authorization endpoint.
    #[serde(default)]
    pub authorization_url: Option<String>,
    /// Token endpoint.
    #[serde(default)]
    pub token_url: Option<String>,
    /// Refresh endpoint.
    #[serde(default)]
    pub refresh_url: Option<String>,
    /// Available scopes.
    #[serde(default)]
    pub scopes: Vec<AuthorizationScope>,
}

/// A security scheme declared by the docket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SecurityScheme {
    /// API key in a header, query parameter or cookie.
    ApiKey {
        /// Scheme name.
        name: String,
        /// Name of the header, query parameter or cookie.
        key_name: String,
        /// Location of the key.
        pass_as: ApiKeyLocation,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Vendor extensions.
        #[serde(default)]
        extensions: Vec<VendorExtension>,
    },
    /// HTTP authentication (basic, bearer, ...).
    Http {
        /// Scheme name.
        name: String,
        /// HTTP auth scheme, e.g. `bearer`.
        scheme: String,
        /// Bearer token format hint.
        #[serde(default)]
        bearer_format: Option<String>,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Vendor extensions.
        #[serde(default)]
        extensions: Vec<VendorExtension>,
    },
    /// OAuth 2.
    #[serde(rename = "oauth2")]
    OAuth2 {
        /// Scheme name.
        name: String,
        /// Supported flows.
        #[serde(default)]
        flows: Vec<OAuthFlow>,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Vendor extensions.
        #[serde(default)]
        extensions: Vec<VendorExtension>,
    },
    /// OpenID Connect discovery.
    OpenIdConnect {
        /// Scheme name.
        name: String,
        /// Discovery URL.
        open_id_connect_url: String,
        /// Description.
        #[serde(default)]
        description: Option<String>,
        /// Vendor extensions.
        #[serde(default)]
        extensions: Vec<VendorExtension>,
    },
}

impl SecurityScheme {
    /// The name the scheme is registered under.
    pub fn name(&self) -> &str {
        match self {
            SecurityScheme::ApiKey { name, .. }
            | SecurityScheme::Http { name, .. }
            | SecurityScheme::OAuth2 { name, .. }
            | SecurityScheme::OpenIdConnect { name, .. } => name,
        }
    }
}

/// One path with its operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescription {
    /// Group the description belongs to.
    pub group_name: Option<String>,
    /// Decorated path.
    pub path: String,
    /// Description.
    pub description: Option<String>,
    /// Operations on this path.
    pub operations: Vec<Operation>,
    /// Hidden from documentation.
    pub hidden: bool,
}

/// All descriptions of one resource (controller).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiListing {
    /// API version.
    pub api_version: Option<String>,
    /// Base path.
    pub base_path: Option<String>,
    /// Resource path, e.g. `/pets`.
    pub resource_path: String,
    /// Description.
    pub description: Option<String>,
    /// Produced media types.
    pub produces: BTreeSet<String>,
    /// Consumed media types.
    pub consumes: BTreeSet<String>,
    /// Host.
    pub host: Option<String>,
    /// Protocols.
    pub protocols: BTreeSet<String>,
    /// Security references applying to every operation.
    pub security_references: Vec<SecurityReference>,
    /// Path descriptions, sorted by path.
    pub apis: Vec<ApiDescription>,
    /// Compound models referenced by the operations.
    pub models: IndexMap<ModelKey, CompoundModelSpecification>,
    /// Tags of this listing.
    pub tags: Vec<Tag>,
    /// Display position.
    pub position: i32,
}

/// Resource-wide information: info block and declared security schemes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceListing {
    /// API version.
    pub api_version: Option<String>,
    /// Info block.
    pub info: Option<ApiInfo>,
    /// Declared security schemes; `None` means "not configured".
    pub security_schemes: Option<Vec<SecurityScheme>>,
}

/// The finished documentation of one docket group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Documentation {
    /// Group name.
    pub group_name: String,
    /// Base path.
    pub base_path: Option<String>,
    /// Listings keyed by resource group name.
    pub api_listings: Option<IndexMap<String, Vec<ApiListing>>>,
    /// Resource listing.
    pub resource_listing: Option<ResourceListing>,
    /// Top level tags.
    pub tags: Option<Vec<Tag>>,
    /// Servers.
    pub servers: Option<Vec<Server>>,
    /// External documentation.
    pub external_documentation: Option<ExternalDocumentation>,
    /// Host.
    pub host: Option<String>,
    /// Schemes.
    pub schemes: BTreeSet<String>,
    /// Produced media types.
    pub produces: BTreeSet<String>,
    /// Consumed media types.
    pub consumes: BTreeSet<String>,
    /// Vendor extensions.
    pub vendor_extensions: Vec<VendorExtension>,
    /// Published names of the group's models.
    pub model_names_registry: ModelNamesRegistry,
}

impl Documentation {
    /// Every API listing, in listing key order.
    pub fn listings(&self) -> impl Iterator<Item = &ApiListing> {
        self.api_listings
            .iter()
            .flat_map(|listings| listings.values())
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_scheme_deserializes_tagged() {
        let yaml = r#"
type: api_key
name: token
key_name: X-Token
pass_as: header
"#;
        let scheme: SecurityScheme = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scheme.name(), "token");
        assert!(matches!(
            scheme,
            SecurityScheme::ApiKey {
                pass_as: ApiKeyLocation::Header,
                ..
            }
        ));
    }

    #[test]
    fn test_default_info_is_populated() {
        let info = ApiInfo::default();
        assert_eq!(info.title, "Api Documentation");
        assert_eq!(info.version, "1.0");
        assert!(info.contact.map(|c| c.is_empty()).unwrap_or(false));
    }
}
