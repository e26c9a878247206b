#![deny(missing_docs)]

//! # Service Model to OpenAPI
//!
//! One mapping function per entity. Absent input maps to absent output;
//! nothing is defaulted on the way. Unordered sources (tags, paths,
//! responses) are emitted in a fixed order so equal inputs always give
//! equal documents.

use crate::error::{AppError, AppResult};
use crate::mappers::schema::with_default;
use crate::mappers::{SchemaMapper, StyleEnumMapper};
use crate::oas;
use crate::service::{
    ApiInfo, ApiKeyLocation, ApiListing, Contact, Documentation, Encoding, Example,
    ExternalDocumentation, Header, HttpMethod, OAuthFlow, OAuthFlowKind, Operation,
    ParameterType, Representation, RequestBody, RequestParameter, Response, SecurityReference,
    SecurityScheme, Server, ServerVariable, Tag, VendorExtension,
};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Prefix every specification extension key carries.
const EXTENSION_PREFIX: &str = "x-";

/// Maps a group's `Documentation` to an OpenAPI 3.0 document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceModelToOpenApiMapper {
    styles: StyleEnumMapper,
}

impl ServiceModelToOpenApiMapper {
    /// Creates a mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the whole documentation of one group.
    pub fn map_documentation(&self, from: &Documentation) -> AppResult<oas::OpenApi> {
        debug!(group = %from.group_name, "Mapping documentation to OpenAPI");
        let mut components = oas::Components::default();
        self.update_components(&mut components, from);

        Ok(oas::OpenApi {
            openapi: oas::OPENAPI_VERSION.to_string(),
            info: from
                .resource_listing
                .as_ref()
                .and_then(|listing| listing.info.as_ref())
                .map(|info| self.map_info(info)),
            external_docs: from
                .external_documentation
                .as_ref()
                .map(|docs| self.map_external_docs(docs)),
            servers: from
                .servers
                .as_ref()
                .map(|servers| servers.iter().map(|s| self.map_server(s)).collect()),
            security: None,
            tags: from.tags.as_ref().map(|tags| self.map_tags(tags)),
            paths: self.map_paths(from)?.map(Arc::new),
            components: Some(Arc::new(components)),
            extensions: self.map_extensions(&from.vendor_extensions),
        })
    }

    /// Merges the group's schemas and security schemes into `components`.
    ///
    /// A source with a value is unioned into the existing map (same key:
    /// the source wins). A source with no value clears the destination.
    pub fn update_components(&self, components: &mut oas::Components, from: &Documentation) {
        let schemas = from.api_listings.as_ref().map(|listings| {
            let schemas = SchemaMapper::new(&from.model_names_registry);
            listings
                .values()
                .flatten()
                .flat_map(|listing| listing.models.values())
                .map(|model| {
                    (
                        from.model_names_registry.name_for(&model.key),
                        schemas.compound(model),
                    )
                })
                .collect::<BTreeMap<_, _>>()
        });
        merge_into(&mut components.schemas, schemas);

        let security_schemes = from
            .resource_listing
            .as_ref()
            .and_then(|listing| listing.security_schemes.as_ref())
            .map(|schemes| {
                schemes
                    .iter()
                    .map(|scheme| (scheme.name().to_string(), self.map_security_scheme(scheme)))
                    .collect::<BTreeMap<_, _>>()
            });
        merge_into(&mut components.security_schemes, security_schemes);
    }

    /// Info block.
    pub fn map_info(&self, from: &ApiInfo) -> oas::Info {
        oas::Info {
            title: from.title.clone(),
            description: from.description.clone(),
            terms_of_service: from.terms_of_service_url.clone(),
            contact: from.contact.as_ref().map(|c| self.map_contact(c)),
            license: self.map_license(from),
            version: from.version.clone(),
            extensions: self.map_extensions(&from.vendor_extensions),
        }
    }

    /// Contact.
    pub fn map_contact(&self, from: &Contact) -> oas::Contact {
        oas::Contact {
            name: from.name.clone(),
            url: from.url.clone(),
            email: from.email.clone(),
            extensions: oas::Extensions::new(),
        }
    }

    /// License; absent unless the info block names one.
    pub fn map_license(&self, from: &ApiInfo) -> Option<oas::License> {
        from.license.as_ref().map(|name| oas::License {
            name: name.clone(),
            url: from.license_url.clone(),
            extensions: oas::Extensions::new(),
        })
    }

    /// Server.
    pub fn map_server(&self, from: &Server) -> oas::Server {
        oas::Server {
            url: from.url.clone(),
            description: from.description.clone(),
            variables: from.variables.as_ref().map(|variables| {
                variables
                    .iter()
                    .map(|v| (v.name.clone(), self.map_server_variable(v)))
                    .collect()
            }),
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Server variable. The output requires a default; an undeclared one
    /// is written as the empty string.
    pub fn map_server_variable(&self, from: &ServerVariable) -> oas::ServerVariable {
        oas::ServerVariable {
            enum_values: from.allowed_values.clone(),
            default: from.default_value.clone().unwrap_or_default(),
            description: from.description.clone(),
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Tags, sorted by name.
    pub fn map_tags(&self, from: &[Tag]) -> Vec<oas::Tag> {
        let mut tags: Vec<oas::Tag> = from.iter().map(|tag| self.map_tag(tag)).collect();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        tags
    }

    /// Tag.
    pub fn map_tag(&self, from: &Tag) -> oas::Tag {
        oas::Tag {
            name: from.name.clone(),
            description: from.description.clone(),
            external_docs: None,
            extensions: self.map_extensions(&from.vendor_extensions),
        }
    }

    /// External documentation.
    pub fn map_external_docs(&self, from: &ExternalDocumentation) -> oas::ExternalDocumentation {
        oas::ExternalDocumentation {
            description: from.description.clone(),
            url: from.url.clone(),
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Paths of every listing. Descriptions sharing a path share a path
    /// item; a later operation on the same method replaces an earlier one.
    pub fn map_paths(&self, from: &Documentation) -> AppResult<Option<oas::Paths>> {
        let Some(listings) = &from.api_listings else {
            return Ok(None);
        };
        let schemas = SchemaMapper::new(&from.model_names_registry);
        let mut items: BTreeMap<String, oas::PathItem> = BTreeMap::new();
        for listing in listings.values().flatten() {
            self.map_listing_paths(listing, &schemas, &mut items)?;
        }
        Ok(Some(oas::Paths {
            items: items
                .into_iter()
                .map(|(path, item)| (path, Arc::new(item)))
                .collect(),
            extensions: BTreeMap::new(),
        }))
    }

    fn map_listing_paths(
        &self,
        listing: &ApiListing,
        schemas: &SchemaMapper<'_>,
        items: &mut BTreeMap<String, oas::PathItem>,
    ) -> AppResult<()> {
        for api in listing.apis.iter().filter(|api| !api.hidden) {
            let item = items.entry(api.path.clone()).or_default();
            if item.description.is_none() {
                item.description = api.description.clone();
            }
            for operation in &api.operations {
                let mapped = self.map_operation(operation, schemas)?;
                *self.operation_slot(item, operation.method)? = Some(mapped);
            }
        }
        Ok(())
    }

    /// The path item field holding operations of `method`.
    ///
    /// `CONNECT` has no slot in the output document and is reported as an
    /// unexpected enum constant.
    pub fn operation_slot<'i>(
        &self,
        item: &'i mut oas::PathItem,
        method: HttpMethod,
    ) -> AppResult<&'i mut Option<oas::Operation>> {
        match method {
            HttpMethod::Get => Ok(&mut item.get),
            HttpMethod::Put => Ok(&mut item.put),
            HttpMethod::Post => Ok(&mut item.post),
            HttpMethod::Delete => Ok(&mut item.delete),
            HttpMethod::Options => Ok(&mut item.options),
            HttpMethod::Head => Ok(&mut item.head),
            HttpMethod::Patch => Ok(&mut item.patch),
            HttpMethod::Trace => Ok(&mut item.trace),
            HttpMethod::Connect => Err(AppError::UnexpectedEnumConstant(format!(
                "HttpMethod::{}",
                method
            ))),
        }
    }

    /// Operation. Parameters keep the operation's (order, name, location)
    /// order; responses are keyed and sorted by code.
    pub fn map_operation(
        &self,
        from: &Operation,
        schemas: &SchemaMapper<'_>,
    ) -> AppResult<oas::Operation> {
        let parameters = from
            .request_parameters
            .iter()
            .map(|p| self.map_parameter(p, schemas))
            .collect::<AppResult<Vec<_>>>()?;
        let mut responses: Vec<&Response> = from.responses.iter().collect();
        responses.sort_by(|a, b| a.response_key().cmp(b.response_key()));
        Ok(oas::Operation {
            tags: non_empty(from.tags.iter().cloned().collect()),
            summary: from.summary.clone(),
            description: from.notes.clone(),
            external_docs: None,
            operation_id: from.unique_id.clone(),
            parameters: non_empty(parameters),
            request_body: from.body.as_ref().map(|b| self.map_request_body(b, schemas)),
            responses: Some(
                responses
                    .into_iter()
                    .map(|r| (r.response_key().to_string(), self.map_response(r, schemas)))
                    .collect(),
            ),
            deprecated: from.deprecated,
            security: non_empty(
                from.security_references
                    .iter()
                    .map(|r| self.map_security_requirement(r))
                    .collect(),
            ),
            servers: None,
            extensions: self.map_extensions(&from.vendor_extensions),
        })
    }

    /// Parameter.
    ///
    /// When the content branch is present it alone describes the wire
    /// format: `content` is written and every simple-branch field
    /// (`schema`, `style`, `explode`, `allowReserved`, `allowEmptyValue`)
    /// is omitted.
    pub fn map_parameter(
        &self,
        from: &RequestParameter,
        schemas: &SchemaMapper<'_>,
    ) -> AppResult<oas::Parameter> {
        let in_ = self.map_parameter_location(from.in_)?;
        let specification = &from.parameter_specification;
        let mut parameter = oas::Parameter {
            name: from.name.clone(),
            in_,
            description: from.description.clone(),
            required: from.required,
            deprecated: from.deprecated,
            allow_empty_value: None,
            style: None,
            explode: None,
            allow_reserved: None,
            schema: None,
            examples: self.map_examples(&from.examples),
            content: None,
            extensions: self.map_extensions(&from.extensions),
        };
        match (&specification.content, &specification.query) {
            (Some(content), _) => {
                parameter.content = Some(self.map_representations(
                    &content.representations,
                    &content.examples,
                    schemas,
                ));
            }
            (None, Some(simple)) => {
                parameter.schema = simple
                    .model
                    .as_ref()
                    .map(|m| with_default(schemas.model(m), simple.default_value.as_deref()));
                parameter.style = self.styles.parameter_style(simple.style);
                parameter.explode = simple.explode;
                parameter.allow_reserved = simple.allow_reserved;
                parameter.allow_empty_value = simple.allow_empty_value;
            }
            (None, None) => {}
        }
        Ok(parameter)
    }

    /// Location of a listed parameter. Body and form locations never reach
    /// the parameter list.
    pub fn map_parameter_location(&self, from: ParameterType) -> AppResult<oas::ParameterIn> {
        match from {
            ParameterType::Query => Ok(oas::ParameterIn::Query),
            ParameterType::Header => Ok(oas::ParameterIn::Header),
            ParameterType::Path => Ok(oas::ParameterIn::Path),
            ParameterType::Cookie => Ok(oas::ParameterIn::Cookie),
            ParameterType::Form | ParameterType::FormData | ParameterType::Body => Err(
                AppError::UnexpectedEnumConstant(format!("ParameterType::{}", from)),
            ),
        }
    }

    /// Request body.
    pub fn map_request_body(
        &self,
        from: &RequestBody,
        schemas: &SchemaMapper<'_>,
    ) -> oas::RequestBody {
        oas::RequestBody {
            description: from.description.clone(),
            content: non_empty_map(self.map_representations(&from.representations, &[], schemas)),
            required: from.required,
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Response.
    pub fn map_response(&self, from: &Response, schemas: &SchemaMapper<'_>) -> oas::ApiResponse {
        oas::ApiResponse {
            description: from.description.clone(),
            headers: non_empty_map(
                from.headers
                    .iter()
                    .map(|h| (h.name.clone(), self.map_header(h, schemas)))
                    .collect(),
            ),
            content: non_empty_map(self.map_representations(
                &from.representations,
                &from.examples,
                schemas,
            )),
            extensions: self.map_extensions(&from.vendor_extensions),
        }
    }

    /// Media types keyed by media type. Examples go to the media type they
    /// name, or to every media type when they name none.
    pub fn map_representations(
        &self,
        from: &[Representation],
        examples: &[Example],
        schemas: &SchemaMapper<'_>,
    ) -> IndexMap<String, oas::MediaType> {
        from.iter()
            .map(|representation| {
                let applicable: Vec<Example> = examples
                    .iter()
                    .filter(|e| {
                        e.media_type
                            .as_deref()
                            .map_or(true, |m| m == representation.media_type)
                    })
                    .cloned()
                    .collect();
                (
                    representation.media_type.clone(),
                    self.map_media_type(representation, &applicable, schemas),
                )
            })
            .collect()
    }

    /// Media type.
    pub fn map_media_type(
        &self,
        from: &Representation,
        examples: &[Example],
        schemas: &SchemaMapper<'_>,
    ) -> oas::MediaType {
        oas::MediaType {
            schema: from.model.as_ref().map(|m| schemas.model(m)),
            examples: self.map_examples(examples),
            encoding: non_empty_map(
                from.encodings
                    .iter()
                    .map(|e| (e.property_ref.clone(), self.map_encoding(e, schemas)))
                    .collect(),
            ),
            extensions: from
                .model
                .as_ref()
                .map(|m| self.map_extensions(m.facet_extensions()))
                .unwrap_or_default(),
        }
    }

    /// Encoding.
    pub fn map_encoding(&self, from: &Encoding, schemas: &SchemaMapper<'_>) -> oas::Encoding {
        oas::Encoding {
            content_type: from.content_type.clone(),
            headers: non_empty_map(
                from.headers
                    .iter()
                    .map(|h| (h.name.clone(), self.map_header(h, schemas)))
                    .collect(),
            ),
            style: self.styles.encoding_style(from.style),
            explode: from.explode,
            allow_reserved: from.allow_reserved,
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Header.
    pub fn map_header(&self, from: &Header, schemas: &SchemaMapper<'_>) -> oas::Header {
        oas::Header {
            description: from.description.clone(),
            required: from.required,
            style: self.styles.header_style(from.style),
            explode: from.explode,
            schema: from.model.as_ref().map(|m| schemas.model(m)),
            extensions: oas::Extensions::new(),
        }
    }

    /// Examples keyed by id; `None` when there are none.
    pub fn map_examples(&self, from: &[Example]) -> Option<IndexMap<String, oas::Example>> {
        non_empty_map(
            from.iter()
                .map(|e| (e.id.clone(), self.map_example(e)))
                .collect(),
        )
    }

    /// Example.
    pub fn map_example(&self, from: &Example) -> oas::Example {
        oas::Example {
            summary: from.summary.clone(),
            description: from.description.clone(),
            value: from.value.clone(),
            external_value: from.external_value.clone(),
            extensions: self.map_extensions(&from.extensions),
        }
    }

    /// Security requirement on one scheme.
    pub fn map_security_requirement(&self, from: &SecurityReference) -> oas::SecurityRequirement {
        oas::SecurityRequirement::new(
            from.reference.clone(),
            from.scopes.iter().map(|s| s.scope.clone()).collect(),
        )
    }

    /// Security scheme.
    pub fn map_security_scheme(&self, from: &SecurityScheme) -> oas::SecurityScheme {
        use oas::SecuritySchemeType as Kind;
        match from {
            SecurityScheme::ApiKey {
                key_name,
                pass_as,
                description,
                extensions,
                ..
            } => oas::SecurityScheme {
                name: Some(key_name.clone()),
                in_: Some(match pass_as {
                    ApiKeyLocation::Header => oas::SecuritySchemeIn::Header,
                    ApiKeyLocation::Query => oas::SecuritySchemeIn::Query,
                    ApiKeyLocation::Cookie => oas::SecuritySchemeIn::Cookie,
                }),
                description: description.clone(),
                extensions: self.map_extensions(extensions),
                ..oas::SecurityScheme::of_type(Kind::ApiKey)
            },
            SecurityScheme::Http {
                scheme,
                bearer_format,
                description,
                extensions,
                ..
            } => oas::SecurityScheme {
                scheme: Some(scheme.clone()),
                bearer_format: bearer_format.clone(),
                description: description.clone(),
                extensions: self.map_extensions(extensions),
                ..oas::SecurityScheme::of_type(Kind::Http)
            },
            SecurityScheme::OAuth2 {
                flows,
                description,
                extensions,
                ..
            } => oas::SecurityScheme {
                flows: Some(self.map_oauth_flows(flows)),
                description: description.clone(),
                extensions: self.map_extensions(extensions),
                ..oas::SecurityScheme::of_type(Kind::OAuth2)
            },
            SecurityScheme::OpenIdConnect {
                open_id_connect_url,
                description,
                extensions,
                ..
            } => oas::SecurityScheme {
                open_id_connect_url: Some(open_id_connect_url.clone()),
                description: description.clone(),
                extensions: self.map_extensions(extensions),
                ..oas::SecurityScheme::of_type(Kind::OpenIdConnect)
            },
        }
    }

    fn map_oauth_flows(&self, from: &[OAuthFlow]) -> oas::OAuthFlows {
        let mut flows = oas::OAuthFlows::default();
        for flow in from {
            let mapped = oas::OAuthFlow {
                authorization_url: flow.authorization_url.clone(),
                token_url: flow.token_url.clone(),
                refresh_url: flow.refresh_url.clone(),
                scopes: flow
                    .scopes
                    .iter()
                    .map(|s| (s.scope.clone(), s.description.clone()))
                    .collect(),
                extensions: oas::Extensions::new(),
            };
            let slot = match flow.kind {
                OAuthFlowKind::Implicit => &mut flows.implicit,
                OAuthFlowKind::Password => &mut flows.password,
                OAuthFlowKind::ClientCredentials => &mut flows.client_credentials,
                OAuthFlowKind::AuthorizationCode => &mut flows.authorization_code,
            };
            *slot = Some(mapped);
        }
        flows
    }

    /// Vendor extensions as `x-` keys.
    pub fn map_extensions(&self, from: &[VendorExtension]) -> oas::Extensions {
        from.iter()
            .map(|extension| {
                let key = if extension.name.starts_with(EXTENSION_PREFIX) {
                    extension.name.clone()
                } else {
                    format!("{}{}", EXTENSION_PREFIX, extension.name)
                };
                (key, extension.value.clone())
            })
            .collect()
    }
}

/// Union `source` into `destination`; no source value clears it.
pub fn merge_into<V>(
    destination: &mut Option<BTreeMap<String, V>>,
    source: Option<BTreeMap<String, V>>,
) {
    match source {
        Some(entries) => destination.get_or_insert_with(BTreeMap::new).extend(entries),
        None => *destination = None,
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

fn non_empty_map<V>(items: IndexMap<String, V>) -> Option<IndexMap<String, V>> {
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::RequestParameterBuilder;
    use crate::service::{
        ApiDescription, CompoundModelSpecification, ModelKey, ModelSpecification, ParameterStyle,
        ResourceListing, ScalarType,
    };
    use crate::spi::ModelNamesRegistry;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn operation(method: HttpMethod, id: &str) -> Operation {
        let mut builder = crate::builders::OperationBuilder::new(method);
        builder.unique_id(id).responses([
            Response::new("404", "Not Found"),
            Response::new("200", "OK"),
        ]);
        builder.build()
    }

    fn documentation(operations: Vec<(&str, Operation)>) -> Documentation {
        let apis = operations
            .into_iter()
            .map(|(path, op)| ApiDescription {
                group_name: None,
                path: path.into(),
                description: None,
                operations: vec![op],
                hidden: false,
            })
            .collect();
        let mut models = IndexMap::new();
        models.insert(
            ModelKey::new("Pet"),
            CompoundModelSpecification {
                key: ModelKey::new("Pet"),
                properties: vec![],
                description: None,
                extensions: vec![],
            },
        );
        let listing = ApiListing {
            api_version: None,
            base_path: None,
            resource_path: "/pets".into(),
            description: None,
            produces: Default::default(),
            consumes: Default::default(),
            host: None,
            protocols: Default::default(),
            security_references: vec![],
            apis,
            models,
            tags: vec![],
            position: 0,
        };
        Documentation {
            group_name: "default".into(),
            api_listings: Some(IndexMap::from([("pets".to_string(), vec![listing])])),
            resource_listing: Some(ResourceListing {
                api_version: None,
                info: Some(ApiInfo::default()),
                security_schemes: None,
            }),
            tags: Some(vec![Tag::new("store", "Store"), Tag::new("pet", "Pets")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_paths_and_responses_are_sorted() {
        let doc = documentation(vec![
            ("/store", operation(HttpMethod::Get, "getStore")),
            ("/pets", operation(HttpMethod::Post, "addPet")),
        ]);
        let api = ServiceModelToOpenApiMapper::new().map_documentation(&doc).unwrap();
        assert_eq!(api.openapi, "3.0.3");
        let paths = api.paths.unwrap();
        let keys: Vec<_> = paths.items.keys().cloned().collect();
        assert_eq!(keys, vec!["/pets", "/store"]);
        let post = paths.items["/pets"].post.as_ref().unwrap();
        let codes: Vec<_> = post.responses.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(codes, vec!["200", "404"]);
        let tags: Vec<_> = api.tags.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(tags, vec!["pet", "store"]);
    }

    #[test]
    fn test_connect_is_an_unexpected_constant() {
        let doc = documentation(vec![("/pets", operation(HttpMethod::Connect, "connect"))]);
        let result = ServiceModelToOpenApiMapper::new().map_documentation(&doc);
        assert!(matches!(result, Err(AppError::UnexpectedEnumConstant(_))));
    }

    #[test]
    fn test_absent_sources_stay_absent() {
        let doc = Documentation {
            group_name: "empty".into(),
            ..Default::default()
        };
        let api = ServiceModelToOpenApiMapper::new().map_documentation(&doc).unwrap();
        assert_eq!(api.info, None);
        assert_eq!(api.paths, None);
        assert_eq!(api.tags, None);
        assert_eq!(api.servers, None);
        let components = api.components.unwrap();
        assert_eq!(components.schemas, None);
        assert_eq!(components.security_schemes, None);
    }

    #[test]
    fn test_components_union_into_existing_entries() {
        let mapper = ServiceModelToOpenApiMapper::new();
        let mut components = oas::Components::default();
        components.schemas = Some(BTreeMap::from([(
            "Existing".to_string(),
            utoipa::openapi::ObjectBuilder::new().build().into(),
        )]));
        mapper.update_components(&mut components, &documentation(vec![]));
        let names: Vec<_> = components.schemas.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["Existing", "Pet"]);

        mapper.update_components(
            &mut components,
            &Documentation {
                group_name: "none".into(),
                ..Default::default()
            },
        );
        assert_eq!(components.schemas, None);
    }

    #[test]
    fn test_content_branch_wins_over_simple_branch() {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name("filter")
            .in_(ParameterType::Query)
            .query(|q| {
                q.model(Some(ModelSpecification::scalar(ScalarType::String)))
                    .style(Some(ParameterStyle::Form))
                    .explode(Some(true));
            })
            .content(|c| {
                c.representation(Representation {
                    media_type: "application/json".into(),
                    model: Some(ModelSpecification::scalar(ScalarType::Object)),
                    encodings: vec![],
                });
            });
        let names = ModelNamesRegistry::default();
        let parameter = ServiceModelToOpenApiMapper::new()
            .map_parameter(&builder.build(), &SchemaMapper::new(&names))
            .unwrap();
        let value = serde_json::to_value(&parameter).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "filter",
                "in": "query",
                "content": { "application/json": { "schema": { "type": "object" } } }
            })
        );
    }

    #[test]
    fn test_simple_branch_maps_style_and_schema() {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name("id")
            .in_(ParameterType::Path)
            .required(Some(true))
            .query(|q| {
                q.model(Some(ModelSpecification::scalar(ScalarType::Long)));
            });
        let names = ModelNamesRegistry::default();
        let parameter = ServiceModelToOpenApiMapper::new()
            .map_parameter(&builder.build(), &SchemaMapper::new(&names))
            .unwrap();
        assert_eq!(parameter.style, Some(oas::ParameterStyle::Simple));
        assert_eq!(parameter.content, None);
        assert!(parameter.schema.is_some());
    }

    #[test]
    fn test_default_value_reaches_the_schema() {
        let mut builder = RequestParameterBuilder::new();
        builder
            .name("limit")
            .in_(ParameterType::Query)
            .query(|q| {
                q.model(Some(ModelSpecification::scalar(ScalarType::Integer)))
                    .default_value(Some("25".into()));
            });
        let names = ModelNamesRegistry::default();
        let parameter = ServiceModelToOpenApiMapper::new()
            .map_parameter(&builder.build(), &SchemaMapper::new(&names))
            .unwrap();
        let value = serde_json::to_value(&parameter).unwrap();
        assert_eq!(
            value["schema"],
            json!({ "type": "integer", "format": "int32", "default": 25 })
        );
    }

    #[test]
    fn test_body_location_is_rejected() {
        let result = ServiceModelToOpenApiMapper::new().map_parameter_location(ParameterType::Body);
        assert!(matches!(result, Err(AppError::UnexpectedEnumConstant(_))));
    }

    #[test]
    fn test_vendor_extensions_are_prefixed_once() {
        let extensions = ServiceModelToOpenApiMapper::new().map_extensions(&[
            VendorExtension::new("x-a", 1),
            VendorExtension::new("b", 2),
        ]);
        let keys: Vec<_> = extensions.keys().cloned().collect();
        assert_eq!(keys, vec!["x-a", "x-b"]);
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let doc = documentation(vec![("/pets", operation(HttpMethod::Get, "findPets"))]);
        let mapper = ServiceModelToOpenApiMapper::new();
        let first = serde_json::to_value(mapper.map_documentation(&doc).unwrap()).unwrap();
        let second = serde_json::to_value(mapper.map_documentation(&doc).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
