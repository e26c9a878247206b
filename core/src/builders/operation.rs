//! # Operation and Response Drafts

use crate::service::{
    Example, Header, HttpMethod, Operation, Representation, RequestBody, RequestParameter,
    Response, SecurityReference, VendorExtension,
};
use std::collections::BTreeSet;

/// Draft of a [`Response`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBuilder {
    code: String,
    is_default: Option<bool>,
    description: Option<String>,
    headers: Vec<Header>,
    representations: Vec<Representation>,
    examples: Option<Vec<Example>>,
    vendor_extensions: Vec<VendorExtension>,
}

impl ResponseBuilder {
    /// Creates a draft for a status code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_default: None,
            description: None,
            headers: Vec::new(),
            representations: Vec::new(),
            examples: None,
            vendor_extensions: Vec::new(),
        }
    }

    /// Seeds the draft from a declared response.
    pub fn copy_of(response: &Response) -> Self {
        Self {
            code: response.code.clone(),
            is_default: Some(response.is_default),
            description: response.description.clone(),
            headers: response.headers.clone(),
            representations: response.representations.clone(),
            examples: Some(response.examples.clone()),
            vendor_extensions: response.vendor_extensions.clone(),
        }
    }

    /// Sets the status code.
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = code.into();
        self
    }

    /// Marks this as the `default` response.
    pub fn is_default(&mut self, is_default: bool) -> &mut Self {
        self.is_default = Some(is_default);
        self
    }

    /// Sets the description.
    pub fn description(&mut self, description: Option<String>) -> &mut Self {
        self.description = description;
        self
    }

    /// Current description.
    pub fn current_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current code.
    pub fn current_code(&self) -> &str {
        &self.code
    }

    /// Adds or replaces a header by name.
    pub fn header(&mut self, header: Header) -> &mut Self {
        match self.headers.iter_mut().find(|h| h.name == header.name) {
            Some(existing) => *existing = header,
            None => self.headers.push(header),
        }
        self
    }

    /// Adds or replaces a representation by media type.
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
        self.examples = Some(examples);
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

    /// Finalises the draft.
    pub fn build(&self) -> Response {
        Response {
            code: self.code.clone(),
            is_default: self.is_default.unwrap_or(false),
            description: self.description.clone(),
            headers: self.headers.clone(),
            representations: self.representations.clone(),
            examples: self.examples.clone().unwrap_or_default(),
            vendor_extensions: self.vendor_extensions.clone(),
        }
    }
}

/// Draft of an [`Operation`].
#[derive(Debug, Clone, PartialEq)]
pub struct OperationBuilder {
    method: HttpMethod,
    summary: Option<String>,
    notes: Option<String>,
    unique_id: Option<String>,
    position: Option<i32>,
    produces: Option<BTreeSet<String>>,
    consumes: Option<BTreeSet<String>>,
    tags: Option<BTreeSet<String>>,
    security_references: Option<Vec<SecurityReference>>,
    request_parameters: Vec<RequestParameter>,
    body: Option<RequestBody>,
    responses: Vec<Response>,
    deprecated: Option<bool>,
    vendor_extensions: Vec<VendorExtension>,
}

impl OperationBuilder {
    /// Creates a draft for a method.
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            summary: None,
            notes: None,
            unique_id: None,
            position: None,
            produces: None,
            consumes: None,
            tags: None,
            security_references: None,
            request_parameters: Vec::new(),
            body: None,
            responses: Vec::new(),
            deprecated: None,
            vendor_extensions: Vec::new(),
        }
    }

    /// Sets the method.
    pub fn method(&mut self, method: HttpMethod) -> &mut Self {
        self.method = method;
        self
    }

    /// Sets the summary.
    pub fn summary(&mut self, summary: Option<String>) -> &mut Self {
        self.summary = summary;
        self
    }

    /// Sets the notes.
    pub fn notes(&mut self, notes: Option<String>) -> &mut Self {
        self.notes = notes;
        self
    }

    /// Sets the unique operation id.
    pub fn unique_id(&mut self, unique_id: impl Into<String>) -> &mut Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Sets the position.
    pub fn position(&mut self, position: i32) -> &mut Self {
        self.position = Some(position);
        self
    }

    /// Replaces the produced media types.
    pub fn produces(&mut self, produces: BTreeSet<String>) -> &mut Self {
        self.produces = Some(produces);
        self
    }

    /// Replaces the consumed media types.
    pub fn consumes(&mut self, consumes: BTreeSet<String>) -> &mut Self {
        self.consumes = Some(consumes);
        self
    }

    /// Replaces the tags.
    pub fn tags(&mut self, tags: BTreeSet<String>) -> &mut Self {
        self.tags = Some(tags);
        self
    }

    /// Current tags, if any were set.
    pub fn current_tags(&self) -> Option<&BTreeSet<String>> {
        self.tags.as_ref()
    }

    /// Replaces the security references.
    pub fn security_references(&mut self, references: Vec<SecurityReference>) -> &mut Self {
        self.security_references = Some(references);
        self
    }

    /// Adds parameters, replacing any with the same name and location.
    pub fn request_parameters(
        &mut self,
        parameters: impl IntoIterator<Item = RequestParameter>,
    ) -> &mut Self {
        for parameter in parameters {
            match self
                .request_parameters
                .iter_mut()
                .find(|p| p.name == parameter.name && p.in_ == parameter.in_)
            {
                Some(existing) => *existing = parameter,
                None => self.request_parameters.push(parameter),
            }
        }
        self
    }

    /// Sets the request body.
    pub fn body(&mut self, body: Option<RequestBody>) -> &mut Self {
        self.body = body;
        self
    }

    /// Adds responses, replacing any with the same response key.
    pub fn responses(&mut self, responses: impl IntoIterator<Item = Response>) -> &mut Self {
        for response in responses {
            match self
                .responses
                .iter_mut()
                .find(|r| r.response_key() == response.response_key())
            {
                Some(existing) => *existing = response,
                None => self.responses.push(response),
            }
        }
        self
    }

    /// Response codes declared so far.
    pub fn response_codes(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(Response::response_key)
    }

    /// Sets deprecated.
    pub fn deprecated(&mut self, deprecated: Option<bool>) -> &mut Self {
        self.deprecated = deprecated;
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

    /// Finalises the draft. Hidden and body parameters are dropped from the
    /// parameter list, the rest ordered by precedence; responses are ordered
    /// by response key.
    pub fn build(&self) -> Operation {
        let mut request_parameters: Vec<RequestParameter> = self
            .request_parameters
            .iter()
            .filter(|p| !p.hidden && !p.in_.is_body())
            .cloned()
            .collect();
        request_parameters.sort_by(|a, b| a.precedence(b));

        let mut responses = self.responses.clone();
        responses.sort_by(|a, b| a.response_key().cmp(b.response_key()));

        Operation {
            method: self.method,
            summary: self.summary.clone(),
            notes: self.notes.clone(),
            unique_id: self.unique_id.clone(),
            position: self.position.unwrap_or(0),
            produces: self.produces.clone().unwrap_or_default(),
            consumes: self.consumes.clone().unwrap_or_default(),
            tags: self.tags.clone().unwrap_or_default(),
            security_references: self.security_references.clone().unwrap_or_default(),
            request_parameters,
            body: self.body.clone(),
            responses,
            deprecated: self.deprecated,
            vendor_extensions: self.vendor_extensions.clone(),
        }
    }
}
