//! # Draft Builders
//!
//! All-optional drafts that plugins mutate through their contexts, plus the
//! parameter style resolver invoked when a parameter draft is finalised.

pub mod documentation;
pub mod listing;
pub mod operation;
pub mod parameter;
pub mod specification;

pub use documentation::{DocumentationContextBuilder, DEFAULT_GROUP_NAME};
pub use listing::ApiListingBuilder;
pub use operation::{OperationBuilder, ResponseBuilder};
pub use parameter::{
    ContentSpecificationBuilder, RequestParameterBuilder, SimpleParameterSpecificationBuilder,
};
pub use specification::{
    CookieParameterSpecificationProvider, HeaderParameterSpecificationProvider,
    ParameterSpecificationContext, ParameterSpecificationProvider,
    PathParameterSpecificationProvider, QueryParameterSpecificationProvider,
    RootParameterSpecificationProvider,
};
