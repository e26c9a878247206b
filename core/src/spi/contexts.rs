//! # Build Contexts
//!
//! One context per generation unit. Mutable contexts own their draft
//! exclusively; plugins borrow the context mutably for the duration of one
//! `apply` call.

use crate::builders::{
    ApiListingBuilder, OperationBuilder, RequestParameterBuilder, ResponseBuilder,
};
use crate::service::{
    ApiInfo, ExternalDocumentation, HttpMethod, ModelKey, Response, SecurityReference,
    SecurityScheme, Server, Tag, VendorExtension,
};
use crate::spi::{DocumentationType, ParameterDescriptor, RequestHandler};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::BTreeSet;

/// Immutable configuration of one docket group, shared by every unit of
/// its generation run.
#[derive(Debug, Clone)]
pub struct DocumentationContext {
    /// Documentation type of the run.
    pub documentation_type: DocumentationType,
    /// Group name.
    pub group_name: String,
    /// Handlers to document.
    pub handlers: Vec<RequestHandler>,
    /// Info block.
    pub api_info: Option<ApiInfo>,
    /// Only paths matching this selector are documented.
    pub path_selector: Option<Regex>,
    /// Prefix prepended to every documented path.
    pub path_mapping: Option<String>,
    /// Servers.
    pub servers: Option<Vec<Server>>,
    /// Tags with descriptions.
    pub tags: Vec<Tag>,
    /// Responses added to every operation, per method.
    pub global_responses: IndexMap<HttpMethod, Vec<Response>>,
    /// Parameters added to every operation.
    pub global_parameters: Vec<ParameterDescriptor>,
    /// Security schemes.
    pub security_schemes: Option<Vec<SecurityScheme>>,
    /// Security references applied to every operation without its own.
    pub security_references: Vec<SecurityReference>,
    /// Produced media types.
    pub produces: BTreeSet<String>,
    /// Consumed media types.
    pub consumes: BTreeSet<String>,
    /// Protocols.
    pub protocols: BTreeSet<String>,
    /// Host.
    pub host: Option<String>,
    /// External documentation.
    pub external_documentation: Option<ExternalDocumentation>,
    /// Vendor extensions.
    pub vendor_extensions: Vec<VendorExtension>,
}

impl DocumentationContext {
    /// Whether a handler pattern is documented by this group.
    pub fn selects(&self, path: &str) -> bool {
        self.path_selector
            .as_ref()
            .map(|selector| selector.is_match(path))
            .unwrap_or(true)
    }
}

/// Context of one operation (handler, pattern, method).
#[derive(Debug)]
pub struct OperationContext<'a> {
    builder: OperationBuilder,
    documentation: &'a DocumentationContext,
    handler: &'a RequestHandler,
    path: &'a str,
    method: HttpMethod,
}

impl<'a> OperationContext<'a> {
    /// Creates the context with a fresh draft.
    pub fn new(
        documentation: &'a DocumentationContext,
        handler: &'a RequestHandler,
        path: &'a str,
        method: HttpMethod,
    ) -> Self {
        Self {
            builder: OperationBuilder::new(method),
            documentation,
            handler,
            path,
            method,
        }
    }

    /// The draft.
    pub fn operation_builder(&mut self) -> &mut OperationBuilder {
        &mut self.builder
    }

    /// Documentation type of the run.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation.documentation_type
    }

    /// Group configuration.
    pub fn documentation_context(&self) -> &'a DocumentationContext {
        self.documentation
    }

    /// The handler.
    pub fn handler(&self) -> &'a RequestHandler {
        self.handler
    }

    /// The undecorated path.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// The method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Gives up the draft.
    pub fn into_builder(self) -> OperationBuilder {
        self.builder
    }
}

/// Context of one parameter.
#[derive(Debug)]
pub struct ParameterContext<'a> {
    builder: RequestParameterBuilder,
    descriptor: &'a ParameterDescriptor,
    documentation: &'a DocumentationContext,
    handler: &'a RequestHandler,
    path: &'a str,
}

impl<'a> ParameterContext<'a> {
    /// Creates the context with a fresh draft.
    pub fn new(
        descriptor: &'a ParameterDescriptor,
        documentation: &'a DocumentationContext,
        handler: &'a RequestHandler,
        path: &'a str,
    ) -> Self {
        Self {
            builder: RequestParameterBuilder::new(),
            descriptor,
            documentation,
            handler,
            path,
        }
    }

    /// The draft.
    pub fn request_parameter_builder(&mut self) -> &mut RequestParameterBuilder {
        &mut self.builder
    }

    /// Documentation type of the run.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation.documentation_type
    }

    /// The declared parameter.
    pub fn descriptor(&self) -> &'a ParameterDescriptor {
        self.descriptor
    }

    /// Group configuration.
    pub fn documentation_context(&self) -> &'a DocumentationContext {
        self.documentation
    }

    /// The owning handler.
    pub fn handler(&self) -> &'a RequestHandler {
        self.handler
    }

    /// The undecorated path of the operation.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Gives up the draft.
    pub fn into_builder(self) -> RequestParameterBuilder {
        self.builder
    }
}

/// Context of one response.
#[derive(Debug)]
pub struct ResponseContext<'a> {
    builder: ResponseBuilder,
    documentation: &'a DocumentationContext,
    handler: &'a RequestHandler,
    method: HttpMethod,
}

impl<'a> ResponseContext<'a> {
    /// Creates the context seeded from a declared response.
    pub fn new(
        declared: &Response,
        documentation: &'a DocumentationContext,
        handler: &'a RequestHandler,
        method: HttpMethod,
    ) -> Self {
        Self {
            builder: ResponseBuilder::copy_of(declared),
            documentation,
            handler,
            method,
        }
    }

    /// The draft.
    pub fn response_builder(&mut self) -> &mut ResponseBuilder {
        &mut self.builder
    }

    /// Documentation type of the run.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation.documentation_type
    }

    /// Group configuration.
    pub fn documentation_context(&self) -> &'a DocumentationContext {
        self.documentation
    }

    /// The owning handler.
    pub fn handler(&self) -> &'a RequestHandler {
        self.handler
    }

    /// The method of the owning operation.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Gives up the draft.
    pub fn into_builder(self) -> ResponseBuilder {
        self.builder
    }
}

/// Context of one API listing (one resource).
#[derive(Debug)]
pub struct ApiListingContext<'a> {
    builder: ApiListingBuilder,
    documentation: &'a DocumentationContext,
    resource: &'a str,
    handlers: Vec<&'a RequestHandler>,
}

impl<'a> ApiListingContext<'a> {
    /// Creates the context with a fresh draft.
    pub fn new(
        documentation: &'a DocumentationContext,
        resource: &'a str,
        handlers: Vec<&'a RequestHandler>,
    ) -> Self {
        Self {
            builder: ApiListingBuilder::new(),
            documentation,
            resource,
            handlers,
        }
    }

    /// The draft.
    pub fn api_listing_builder(&mut self) -> &mut ApiListingBuilder {
        &mut self.builder
    }

    /// Documentation type of the run.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation.documentation_type
    }

    /// Group configuration.
    pub fn documentation_context(&self) -> &'a DocumentationContext {
        self.documentation
    }

    /// Resource group name.
    pub fn resource(&self) -> &'a str {
        self.resource
    }

    /// Handlers of the resource.
    pub fn handlers(&self) -> &[&'a RequestHandler] {
        &self.handlers
    }

    /// Gives up the draft.
    pub fn into_builder(self) -> ApiListingBuilder {
        self.builder
    }
}

/// Read-only context for path decoration.
#[derive(Debug, Clone, Copy)]
pub struct PathContext<'a> {
    /// Group configuration.
    pub documentation: &'a DocumentationContext,
    /// The handler whose path is decorated, when there is one.
    pub handler: Option<&'a RequestHandler>,
}

impl PathContext<'_> {
    /// Documentation type of the run.
    pub fn documentation_type(&self) -> DocumentationType {
        self.documentation.documentation_type
    }
}

/// Input for naming the models of one group.
#[derive(Debug, Clone)]
pub struct ModelRegistrationContext<'a> {
    /// Documentation type of the run.
    pub documentation_type: DocumentationType,
    /// Group name.
    pub group_name: &'a str,
    /// Keys of every model to name, in discovery order.
    pub keys: Vec<&'a ModelKey>,
}
